//! Client configuration.
//!
//! Configuration is optional: every field has a default and the API
//! definition supplies the base URL, auth strategy and credential variables.
//! A file (YAML or TOML, by extension) and a few environment variables can
//! override them.
//!
//! ```yaml
//! base_url: https://iaas.eu-frankfurt-1.oraclecloud.com
//! timeout_secs: 60
//! retry:
//!   max_retries: 5
//! headers:
//!   opc-request-id: batch-42
//! auth:
//!   strategy:
//!     type: bearer_token
//!   credential_env: [OCI_TOKEN]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use cloudsdk_define::AuthStrategy;
use serde::{Deserialize, Serialize};

use crate::client::DEFAULT_TIMEOUT_SECS;
use crate::error::ConfigError;
use crate::retry::RetryPolicy;

/// Overrides the base URL.
pub const ENV_BASE_URL: &str = "CLOUDSDK_BASE_URL";
/// Overrides the timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "CLOUDSDK_TIMEOUT_SECS";
/// Overrides the retry count.
pub const ENV_MAX_RETRIES: &str = "CLOUDSDK_MAX_RETRIES";

/// Settings applied on top of an API definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL; the definition's default when absent.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry policy.
    pub retry: RetryPolicy,
    /// `User-Agent` override.
    pub user_agent: Option<String>,
    /// Extra default headers.
    pub headers: BTreeMap<String, String>,
    /// Authentication overrides.
    pub auth: AuthConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            retry: RetryPolicy::default(),
            user_agent: None,
            headers: BTreeMap::new(),
            auth: AuthConfig::default(),
        }
    }
}

/// Authentication overrides. Secrets themselves are never stored in the
/// file, only the names of the variables holding them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Strategy; the definition's when absent.
    pub strategy: Option<AuthStrategy>,
    /// Variables consulted in order for the secret.
    pub credential_env: Vec<String>,
    /// Variable holding the Basic-auth username.
    pub username_env: Option<String>,
}

impl ClientConfig {
    /// Loads configuration from a `.yaml`/`.yml` or `.toml` file.
    ///
    /// ## Errors
    ///
    /// Returns an error if the file cannot be read, has another extension
    /// or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Ok(serde_yaml::from_str(&text)?),
            Some("toml") => Ok(toml::from_str(&text)?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Applies `CLOUDSDK_BASE_URL`, `CLOUDSDK_TIMEOUT_SECS` and
    /// `CLOUDSDK_MAX_RETRIES` from the process environment.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] for a non-numeric timeout or
    /// retry count.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// ## Errors
    ///
    /// As [`with_env_overrides`](Self::with_env_overrides).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(url);
        }
        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = parse_env(ENV_TIMEOUT_SECS, value)?;
        }
        if let Some(value) = lookup(ENV_MAX_RETRIES) {
            self.retry.max_retries = parse_env(ENV_MAX_RETRIES, value)?;
        }
        Ok(self)
    }
}

fn parse_env<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { var, value })
}
