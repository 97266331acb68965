use crate::domain::ports::{HttpRequest, HttpTransportBox, SessionProvider};
use crate::domain::session::{SessionRequest, SessionResponse};
use crate::error::{PosError, Result};
use crate::settings::{ApiKey, Credentials, Settings};
use async_trait::async_trait;
use tracing::{debug, error, info, warn};

pub const API_KEY_HEADER: &str = "x-api-key";

/// Exchanges payment-SDK setup tokens for session data.
///
/// Every call is a single POST: no retry, no caching, no deduplication of
/// concurrent calls. Dropping the returned future cancels the request.
pub struct SessionAuthenticator {
    transport: HttpTransportBox,
    endpoint: String,
    merchant_account: String,
    api_key: ApiKey,
    log_bodies: bool,
}

impl SessionAuthenticator {
    pub fn new(
        transport: HttpTransportBox,
        endpoint: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            merchant_account: credentials.merchant_account,
            api_key: credentials.api_key,
            log_bodies: false,
        }
    }

    /// Fails when the settings carry no merchant account or API key.
    pub fn from_settings(settings: &Settings, transport: HttpTransportBox) -> Result<Self> {
        let credentials = settings.credentials()?;
        Ok(Self::new(transport, settings.auth_endpoint.as_str(), credentials)
            .with_body_logging(settings.log_bodies))
    }

    /// Log full request and response bodies at debug level.
    pub fn with_body_logging(mut self, enabled: bool) -> Self {
        self.log_bodies = enabled;
        self
    }

    /// Returns the `sdkData` of the session opened for `setup_token`.
    ///
    /// A successful response without `sdkData` yields an empty string.
    pub async fn authenticate(&self, setup_token: &str) -> Result<String> {
        let body = serde_json::to_string(&SessionRequest {
            merchant_account: &self.merchant_account,
            setup_token,
        })?;

        if self.log_bodies {
            debug!(endpoint = %self.endpoint, body = %body, "Sending session request");
        } else {
            debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending session request");
        }

        let request = HttpRequest::json(self.endpoint.as_str(), body)
            .header(API_KEY_HEADER, self.api_key.expose());

        let response = self.transport.post(request).await.inspect_err(|e| {
            error!(endpoint = %self.endpoint, error = %e, "Session request failed");
        })?;

        let status = response.status;
        let success = response.is_success();
        let body = match response.body {
            Some(body) if success => body,
            body => {
                if self.log_bodies {
                    warn!(
                        status,
                        body = body.as_deref().unwrap_or_default(),
                        "Session request rejected"
                    );
                } else {
                    warn!(status, "Session request rejected");
                }
                return Err(PosError::HttpStatus { code: status });
            }
        };

        if self.log_bodies {
            debug!(status, body = %body, "Received session response");
        } else {
            debug!(status, bytes = body.len(), "Received session response");
        }

        let session: SessionResponse = serde_json::from_str(&body)?;
        match session.sdk_data {
            Some(sdk_data) => {
                info!(status, "Session established");
                Ok(sdk_data)
            }
            None => {
                warn!(
                    status,
                    "Session response carried no sdkData, continuing with an empty value"
                );
                Ok(String::new())
            }
        }
    }
}

#[async_trait]
impl SessionProvider for SessionAuthenticator {
    async fn session_data(&self, setup_token: &str) -> Result<String> {
        self.authenticate(setup_token).await
    }
}
