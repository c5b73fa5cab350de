use serde::{Deserialize, Serialize};

/// Token represents an OAuth2 bearer token issued by the Perx API.
/// User-scoped tokens carry a scope, application tokens do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// Access token for API requests
    #[serde(rename = "access_token")]
    pub access_token: String,

    /// Token type (usually "bearer")
    #[serde(rename = "token_type")]
    pub token_type: String,

    /// Token lifetime in seconds
    #[serde(rename = "expires_in")]
    pub expires_in: u64,

    /// Scope of the token; `user_account` for user-scoped tokens,
    /// absent for application tokens
    #[serde(rename = "scope", skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl Token {
    /// Check whether the token type is "bearer" in any capitalization
    pub fn is_bearer(&self) -> bool {
        self.token_type.eq_ignore_ascii_case("bearer")
    }

    /// Check whether this token is scoped to a user account
    pub fn is_user_scoped(&self) -> bool {
        self.scope.is_some()
    }
}

/// Wire body for `POST /v4/oauth/token`
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

impl<'a> TokenRequest<'a> {
    /// Body for an application-scoped token
    pub fn application(client_id: &'a str, client_secret: &'a str) -> Self {
        TokenRequest {
            client_id,
            client_secret,
            grant_type: "client_credentials",
            scope: None,
            expires_in: None,
        }
    }

    /// Body for a token scoped to one external user identifier
    pub fn user(
        client_id: &'a str,
        client_secret: &'a str,
        user_identifier: &str,
        expires_in: u64,
    ) -> Self {
        TokenRequest {
            client_id,
            client_secret,
            grant_type: "client_credentials",
            scope: Some(format!("user_account(identifier:{})", user_identifier)),
            expires_in: Some(expires_in),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_deserialization() {
        let json = r#"{
            "access_token": "token-abc",
            "token_type": "Bearer",
            "expires_in": 300,
            "scope": "user_account"
        }"#;

        let token: Token = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "token-abc");
        assert!(token.is_bearer());
        assert!(token.is_user_scoped());
        assert_eq!(token.expires_in, 300);
    }

    #[test]
    fn test_application_token_has_no_scope() {
        let json = r#"{"access_token": "t", "token_type": "bearer", "expires_in": 3600}"#;
        let token: Token = serde_json::from_str(json).unwrap();
        assert!(token.is_bearer());
        assert!(!token.is_user_scoped());
    }

    #[test]
    fn test_user_request_scope_format() {
        let request = TokenRequest::user("cid", "secret", "user-123", 300);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["grant_type"], "client_credentials");
        assert_eq!(json["scope"], "user_account(identifier:user-123)");
        assert_eq!(json["expires_in"], 300);
    }

    #[test]
    fn test_application_request_omits_scope() {
        let request = TokenRequest::application("cid", "secret");
        let json = serde_json::to_value(&request).unwrap();

        let object = json.as_object().unwrap();
        assert!(!object.contains_key("scope"));
        assert!(!object.contains_key("expires_in"));
        assert_eq!(json["client_id"], "cid");
    }
}
