use thiserror::Error;

/// Main error type for Perx API operations
#[derive(Debug, Error)]
pub enum PerxError {
    /// Credentials or token were not accepted (401 on an auth-sensitive call)
    #[error("unauthorized")]
    Unauthorized,

    /// Client-side argument validation failed, no request was sent
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Error returned by a Perx API endpoint
    #[error("Perx API error {status}: {body}")]
    Api { status: u16, body: String },

    /// Request was accepted at the HTTP level but rejected in the payload
    #[error("request rejected: {code}: {description}")]
    Rejected { code: String, description: String },

    /// HTTP transport error (status 450 and above)
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl PerxError {
    /// Create a bad-request error for an argument that failed validation
    pub fn bad_request(message: impl Into<String>) -> Self {
        PerxError::BadRequest(message.into())
    }

    /// Check if this error is an unauthorized error
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, PerxError::Unauthorized)
    }

    /// Check if this error was raised before any network I/O happened
    pub fn is_bad_request(&self) -> bool {
        matches!(self, PerxError::BadRequest(_))
    }

    /// Check if this error is a not found error (404)
    pub fn is_not_found(&self) -> bool {
        matches!(self, PerxError::Api { status: 404, .. })
    }

    /// Get the HTTP status code if this error carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PerxError::Api { status, .. } => Some(*status),
            PerxError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for Perx operations
pub type Result<T> = std::result::Result<T, PerxError>;
