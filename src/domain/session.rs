use serde::{Deserialize, Serialize};

/// Body POSTed to the session endpoint.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest<'a> {
    pub merchant_account: &'a str,
    pub setup_token: &'a str,
}

/// The part of the session endpoint's reply the SDK needs.
///
/// Any other field the backend returns is ignored.
#[derive(Debug, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub sdk_data: Option<String>,
}
