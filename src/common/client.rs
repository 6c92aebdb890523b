use crate::common::BithumbError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

const USER_AGENT: &str = concat!("bithumb-global-rs/", env!("CARGO_PKG_VERSION"));

/// Builds the session shared by every call of one client (connection reuse only).
/// Timeouts are applied per request, so none is set here.
pub fn create_http_client() -> Result<reqwest::Client, BithumbError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(USER_AGENT)
        .build()?)
}
