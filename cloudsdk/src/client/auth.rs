//! Credential resolution.
//!
//! A credential is either set on the builder or looked up at send time from
//! an ordered list of environment variables; the first one that is set and
//! non-empty wins.

use std::fmt;

use cloudsdk_define::AuthStrategy;
use reqwest::RequestBuilder;
use reqwest::header::{HeaderName, HeaderValue};

use crate::error::AuthError;

/// How a client authenticates, plus where its secrets come from.
#[derive(Clone, Default)]
pub(crate) struct Credentials {
    pub(crate) api: String,
    pub(crate) strategy: AuthStrategy,
    pub(crate) secret: Option<String>,
    pub(crate) username: Option<String>,
    pub(crate) env_secret: Vec<String>,
    pub(crate) env_username: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api", &self.api)
            .field("strategy", &self.strategy)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("username", &self.username)
            .field("env_secret", &self.env_secret)
            .field("env_username", &self.env_username)
            .finish()
    }
}

impl Credentials {
    /// Applies the credential to a request.
    pub(crate) fn apply(&self, request: RequestBuilder) -> Result<RequestBuilder, AuthError> {
        match &self.strategy {
            AuthStrategy::None => Ok(request),
            AuthStrategy::BearerToken { .. } | AuthStrategy::ApiKey { .. } => {
                let header = self.strategy.header_name().unwrap_or("Authorization");
                let secret = self.resolve_secret()?;
                let value = match self.strategy {
                    AuthStrategy::BearerToken { .. } => format!("Bearer {secret}"),
                    _ => secret,
                };
                let name = HeaderName::try_from(header).map_err(|_| invalid(header))?;
                let mut value = HeaderValue::try_from(value).map_err(|_| invalid(header))?;
                value.set_sensitive(true);
                Ok(request.header(name, value))
            }
            AuthStrategy::Basic => {
                let username = self.resolve_username()?;
                let password = self.resolve_secret()?;
                Ok(request.basic_auth(username, Some(password)))
            }
        }
    }

    fn resolve_secret(&self) -> Result<String, AuthError> {
        if let Some(secret) = &self.secret {
            return Ok(secret.clone());
        }
        first_env(&self.env_secret).ok_or_else(|| AuthError::MissingCredential {
            api: self.api.clone(),
            env_vars: self.env_secret.clone(),
        })
    }

    fn resolve_username(&self) -> Result<String, AuthError> {
        if let Some(username) = &self.username {
            return Ok(username.clone());
        }
        let vars: Vec<String> = self.env_username.iter().cloned().collect();
        first_env(&vars).ok_or_else(|| AuthError::MissingCredential {
            api: self.api.clone(),
            env_vars: vars,
        })
    }
}

fn first_env(vars: &[String]) -> Option<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

fn invalid(header: &str) -> AuthError {
    AuthError::InvalidCredential {
        header: header.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bearer(secret: Option<&str>, env: &[&str]) -> Credentials {
        Credentials {
            api: "Test".to_string(),
            strategy: AuthStrategy::BearerToken { header: None },
            secret: secret.map(str::to_string),
            env_secret: env.iter().map(|s| s.to_string()).collect(),
            ..Credentials::default()
        }
    }

    fn header_of(credentials: &Credentials, name: &str) -> Option<String> {
        let request = credentials
            .apply(reqwest::Client::new().get("http://localhost/"))
            .ok()?
            .build()
            .ok()?;
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[test]
    fn test_explicit_bearer() {
        let credentials = bearer(Some("tok"), &[]);
        assert_eq!(header_of(&credentials, "authorization").as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn test_env_fallback_chain() {
        // SAFETY: test-only env manipulation with names unique to this test
        unsafe {
            std::env::remove_var("CLOUDSDK_TEST_PRIMARY_TOKEN");
            std::env::set_var("CLOUDSDK_TEST_SECONDARY_TOKEN", "from-env");
        }
        let credentials = bearer(
            None,
            &["CLOUDSDK_TEST_PRIMARY_TOKEN", "CLOUDSDK_TEST_SECONDARY_TOKEN"],
        );
        assert_eq!(header_of(&credentials, "authorization").as_deref(), Some("Bearer from-env"));
        unsafe {
            std::env::remove_var("CLOUDSDK_TEST_SECONDARY_TOKEN");
        }
    }

    #[test]
    fn test_missing_credential() {
        let credentials = bearer(None, &["CLOUDSDK_TEST_NEVER_SET_TOKEN"]);
        let err = credentials
            .apply(reqwest::Client::new().get("http://localhost/"))
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredential { .. }));
    }

    #[test]
    fn test_api_key_header() {
        let credentials = Credentials {
            strategy: AuthStrategy::ApiKey {
                header: "X-Api-Key".to_string(),
            },
            secret: Some("k1".to_string()),
            ..Credentials::default()
        };
        assert_eq!(header_of(&credentials, "x-api-key").as_deref(), Some("k1"));
    }

    #[test]
    fn test_basic_auth() {
        let credentials = Credentials {
            strategy: AuthStrategy::Basic,
            username: Some("USERID".to_string()),
            secret: Some("PASSW0RD".to_string()),
            ..Credentials::default()
        };
        let value = header_of(&credentials, "authorization").unwrap();
        assert!(value.starts_with("Basic "));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", bearer(Some("very-secret"), &[]));
        assert!(!rendered.contains("very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
