use crate::common::BithumbError;
use crate::types::Params;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// The two HTTP shapes the exchange needs: a signed JSON POST and a public GET.
///
/// Implemented for `reqwest::Client`; tests substitute a scripted transport.
/// Implementations must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &Params,
        timeout: Duration,
    ) -> Result<Value, BithumbError>;

    async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, BithumbError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn post_json(
        &self,
        url: &str,
        body: &Params,
        timeout: Duration,
    ) -> Result<Value, BithumbError> {
        let response = self.post(url).json(body).timeout(timeout).send().await?;
        read_json(response).await
    }

    async fn get_json(&self, url: &str, timeout: Duration) -> Result<Value, BithumbError> {
        let response = self.get(url).timeout(timeout).send().await?;
        read_json(response).await
    }
}

// Error envelopes may arrive with a non-2xx status, so the body wins when it parses.
async fn read_json(response: reqwest::Response) -> Result<Value, BithumbError> {
    let status = response.status();
    let body = response.text().await?;

    match serde_json::from_str::<Value>(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => Err(BithumbError::HttpStatus {
            status: status.as_u16(),
            body,
        }),
        Err(e) => Err(BithumbError::ParseError(e)),
    }
}
