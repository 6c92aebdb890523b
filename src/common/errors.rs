pub type Result<T> = std::result::Result<T, BithumbError>;

#[derive(thiserror::Error, Debug)]
pub enum BithumbError {
    /// The exchange answered with a non-zero status code.
    #[error("[{code}] {msg}")]
    Api { code: String, msg: String },

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    #[error("Open orders pagination exceeded {0} pages")]
    PaginationLimit(u32),
}

impl BithumbError {
    pub fn is_api_error(&self) -> bool {
        matches!(self, BithumbError::Api { .. })
    }

    /// Exchange status code, for domain errors only.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            BithumbError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Failures below the envelope: connection, timeout, status or malformed body.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            BithumbError::HttpError(_) | BithumbError::HttpStatus { .. } | BithumbError::ParseError(_)
        )
    }
}
