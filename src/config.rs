use crate::common::{BithumbError, Result};
use crate::signer::Credentials;
use std::time::Duration;

pub const BITHUMB_API_BASE: &str = "https://global-openapi.bithumb.pro";

const ENV_API_KEY: &str = "BITHUMB_API_KEY";
const ENV_SECRET_KEY: &str = "BITHUMB_SECRET_KEY";
const ENV_BASE_URL: &str = "BITHUMB_BASE_URL";

/// Client settings. Defaults match the exchange: 15 s for actions, 5 s for depth.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub depth_timeout: Duration,
    /// Upper bound on `openOrders` pages fetched by one pagination run.
    pub max_open_order_pages: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BITHUMB_API_BASE.to_string(),
            timeout: Duration::from_secs(15),
            depth_timeout: Duration::from_secs(5),
            max_open_order_pages: 200,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_depth_timeout(mut self, timeout: Duration) -> Self {
        self.depth_timeout = timeout;
        self
    }

    /// At least one page is always fetched.
    pub fn with_max_open_order_pages(mut self, pages: u32) -> Self {
        self.max_open_order_pages = pages.max(1);
        self
    }

    /// Default config with `BITHUMB_BASE_URL` applied when set.
    pub fn from_env() -> Self {
        load_dotenv();
        match std::env::var(ENV_BASE_URL) {
            Ok(url) if !url.is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }
}

/// Loads `.env` from the current or project directory. Call before reading env vars (e.g. in tests).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Reads `BITHUMB_API_KEY` and `BITHUMB_SECRET_KEY` (after loading `.env`).
pub fn credentials_from_env() -> Result<Credentials> {
    load_dotenv();
    let api_key = std::env::var(ENV_API_KEY)
        .map_err(|_| BithumbError::MissingCredentials(ENV_API_KEY.to_string()))?;
    let secret = std::env::var(ENV_SECRET_KEY)
        .map_err(|_| BithumbError::MissingCredentials(ENV_SECRET_KEY.to_string()))?;
    Ok(Credentials::new(api_key, secret))
}
