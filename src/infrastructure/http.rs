use crate::domain::ports::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::{PosError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// `HttpTransport` backed by a shared `reqwest::Client`.
///
/// The client's connection pool is reused across calls. No timeout is set
/// beyond reqwest's defaults. Dropping an in-flight `post` future aborts the
/// underlying request.
#[derive(Default, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|e| PosError::Transport(Box::new(e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| PosError::Transport(Box::new(e)))?;

        Ok(HttpResponse {
            status,
            body: (!text.is_empty()).then_some(text),
        })
    }
}
