//! Authentication strategies for REST APIs.
//!
//! A strategy only says *how* a credential is applied to a request. Where
//! the credential comes from (environment variable fallback chain, config
//! file, explicit value) is decided by the client configuration.

use serde::{Deserialize, Serialize};

/// Default header used for bearer tokens.
pub const DEFAULT_AUTH_HEADER: &str = "Authorization";

/// Authentication strategy for an API.
///
/// ## Examples
///
/// ```
/// use cloudsdk_define::AuthStrategy;
///
/// // Azure Resource Manager: `Authorization: Bearer <token>`
/// let azure = AuthStrategy::BearerToken { header: None };
/// assert_eq!(azure.header_name(), Some("Authorization"));
///
/// // Key in a custom header
/// let keyed = AuthStrategy::ApiKey { header: "X-Api-Key".to_string() };
/// assert_eq!(keyed.header_name(), Some("X-Api-Key"));
///
/// // XClarity uses HTTP Basic
/// assert_eq!(AuthStrategy::Basic.header_name(), Some("Authorization"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuthStrategy {
    /// No authentication required.
    #[default]
    None,

    /// Bearer token: `<header>: Bearer <token>`.
    BearerToken {
        /// Optional header name override (default `Authorization`).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        header: Option<String>,
    },

    /// Raw key in a custom header: `<header>: <key>`.
    ApiKey {
        /// Header name (e.g., "X-Api-Key").
        header: String,
    },

    /// HTTP Basic authentication (`Authorization: Basic <base64(user:pass)>`).
    Basic,
}

impl AuthStrategy {
    /// Returns `true` when no credential is applied.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the header the credential is written to.
    pub fn header_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::BearerToken { header } => Some(header.as_deref().unwrap_or(DEFAULT_AUTH_HEADER)),
            Self::ApiKey { header } => Some(header.as_str()),
            Self::Basic => Some(DEFAULT_AUTH_HEADER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert!(AuthStrategy::default().is_none());
        assert_eq!(AuthStrategy::None.header_name(), None);
    }

    #[test]
    fn bearer_header_override() {
        let auth = AuthStrategy::BearerToken {
            header: Some("X-Auth-Token".to_string()),
        };
        assert_eq!(auth.header_name(), Some("X-Auth-Token"));
    }

    #[test]
    fn serde_uses_tagged_representation() {
        let auth = AuthStrategy::ApiKey {
            header: "X-Api-Key".to_string(),
        };
        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(json, serde_json::json!({"type": "api_key", "header": "X-Api-Key"}));

        let parsed: AuthStrategy = serde_json::from_value(serde_json::json!({"type": "basic"})).unwrap();
        assert_eq!(parsed, AuthStrategy::Basic);

        let bearer: AuthStrategy =
            serde_json::from_value(serde_json::json!({"type": "bearer_token"})).unwrap();
        assert_eq!(bearer, AuthStrategy::BearerToken { header: None });
    }
}
