use reqwest::{Client, ClientBuilder};
use std::str::FromStr;

/// Default requested token lifetime in seconds
pub const DEFAULT_TOKEN_DURATION_SECONDS: u64 = 3600;

/// Create the default HTTP client for Perx API requests.
///
/// No overall request timeout is set; callers that need deadlines can
/// install their own [`reqwest::Client`] on the service.
pub fn create_rest_client() -> Client {
    ClientBuilder::new()
        .user_agent(concat!("perx-rs/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
}

/// Which side of the HTTP exchange gets logged at debug level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DebugMode {
    /// Log outgoing requests
    Request,
    /// Log incoming responses
    Response,
    /// Log both sides
    All,
    /// Log nothing
    #[default]
    None,
}

impl DebugMode {
    /// Whether outgoing requests are logged in this mode
    pub fn logs_requests(self) -> bool {
        matches!(self, DebugMode::Request | DebugMode::All)
    }

    /// Whether incoming responses are logged in this mode
    pub fn logs_responses(self) -> bool {
        matches!(self, DebugMode::Response | DebugMode::All)
    }
}

impl FromStr for DebugMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "request" => Ok(DebugMode::Request),
            "response" => Ok(DebugMode::Response),
            "all" => Ok(DebugMode::All),
            "none" => Ok(DebugMode::None),
            other => Err(format!("unknown debug mode: {}", other)),
        }
    }
}

/// Configuration for the Perx API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Perx API, e.g. `https://api.perxtech.io`
    pub base_url: String,
    /// OAuth2 client id
    pub client_id: String,
    /// OAuth2 client secret
    pub client_secret: String,
    /// Requested lifetime for user-scoped tokens, in seconds
    pub token_duration_seconds: u64,
    /// Debug logging mode
    pub debug: DebugMode,
}

impl Config {
    /// Create a new configuration with the given base URL and credentials
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Config {
            base_url: base_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_duration_seconds: DEFAULT_TOKEN_DURATION_SECONDS,
            debug: DebugMode::None,
        }
    }

    /// Set the requested user-token lifetime
    pub fn with_token_duration(mut self, seconds: u64) -> Self {
        self.token_duration_seconds = seconds;
        self
    }

    /// Set the debug logging mode
    pub fn with_debug(mut self, debug: DebugMode) -> Self {
        self.debug = debug;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new("https://api.perx.test", "id", "secret");
        assert_eq!(config.base_url, "https://api.perx.test");
        assert_eq!(config.token_duration_seconds, DEFAULT_TOKEN_DURATION_SECONDS);
        assert_eq!(config.debug, DebugMode::None);
    }

    #[test]
    fn test_config_builders() {
        let config = Config::new("https://api.perx.test", "id", "secret")
            .with_token_duration(300)
            .with_debug(DebugMode::All);
        assert_eq!(config.token_duration_seconds, 300);
        assert_eq!(config.debug, DebugMode::All);
    }

    #[test]
    fn test_debug_mode_sides() {
        assert!(DebugMode::Request.logs_requests());
        assert!(!DebugMode::Request.logs_responses());
        assert!(DebugMode::Response.logs_responses());
        assert!(DebugMode::All.logs_requests() && DebugMode::All.logs_responses());
        assert!(!DebugMode::None.logs_requests() && !DebugMode::None.logs_responses());
    }

    #[test]
    fn test_debug_mode_from_str() {
        assert_eq!("request".parse::<DebugMode>().unwrap(), DebugMode::Request);
        assert_eq!("all".parse::<DebugMode>().unwrap(), DebugMode::All);
        assert!("verbose".parse::<DebugMode>().is_err());
    }
}
