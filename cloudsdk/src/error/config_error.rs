//! Client configuration and request construction errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors in client configuration or in building a request.
///
/// These occur before anything is sent and usually indicate a caller
/// mistake, such as a missing path parameter or a malformed base URL.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot carry a path (e.g. `mailto:`).
    #[error("Base URL cannot be a base: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },

    /// A path parameter required by the template was not supplied.
    #[error("Missing the required parameter '{param}' for {template}")]
    MissingPathParam {
        /// Parameter name.
        param: String,
        /// The path template.
        template: String,
    },

    /// A path parameter was supplied but is empty.
    #[error("Path parameter '{param}' must not be empty")]
    EmptyPathParam {
        /// Parameter name.
        param: String,
    },

    /// A path parameter is (or, for a multi-segment parameter, contains) a
    /// `.` or `..` segment, which URL normalization would resolve away.
    #[error("Path parameter '{param}' must not contain the dot segment {value:?}")]
    DotSegmentPathParam {
        /// Parameter name.
        param: String,
        /// The full value supplied.
        value: String,
    },

        /// Path template contains invalid parameter syntax.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the path template error.
        message: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadFile {
        /// File path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The YAML configuration could not be parsed.
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The TOML configuration could not be parsed.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration file extension is not recognized.
    #[error("Unsupported config format for {}: expected .yaml, .yml or .toml", .path.display())]
    UnsupportedFormat {
        /// File path.
        path: PathBuf,
    },

    /// An environment override holds an unusable value.
    #[error("Invalid value {value:?} for environment variable {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// The value found.
        value: String,
    },
}

impl ConfigError {
    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_missing_path_param() {
        let err = ConfigError::MissingPathParam {
            param: "vcnId".to_string(),
            template: "/20160918/vcns/{vcnId}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing the required parameter 'vcnId' for /20160918/vcns/{vcnId}"
        );
    }

    #[test]
    fn test_invalid_path_template() {
        let err = ConfigError::invalid_path("unclosed brace in /nodes/{uuid");
        assert!(err.to_string().contains("Invalid path template"));
    }

    #[test]
    fn test_unsupported_format() {
        let err = ConfigError::UnsupportedFormat {
            path: PathBuf::from("client.ini"),
        };
        assert!(err.to_string().contains("client.ini"));
    }
}
