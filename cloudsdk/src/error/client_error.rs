//! Transport failures: no usable HTTP response was obtained.

use thiserror::Error;

/// A request that never produced a complete response.
///
/// A response whose status is outside the operation's expected set is an
/// [`OperationError`](super::OperationError), not a `ClientError`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build the HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// No response arrived within the client timeout.
    #[error("{operation} timed out after {after_ms}ms")]
    Timeout { operation: String, after_ms: u64 },

    /// The server could not be reached.
    #[error("{operation} could not connect: {source}")]
    Connect {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request could not be sent (redirect loop, malformed request, TLS).
    #[error("{operation} failed to send: {source}")]
    Send {
        operation: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was cut off while being read.
    #[error("{operation} failed while reading the response body: {source}")]
    Body {
        operation: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ClientError {
    /// Sorts a send-side `reqwest` error into timeout, connect or send.
    pub fn sending(operation: &str, err: reqwest::Error, timeout_ms: u64) -> Self {
        let operation = operation.to_string();
        if err.is_timeout() {
            Self::Timeout {
                operation,
                after_ms: timeout_ms,
            }
        } else if err.is_connect() {
            Self::Connect { operation, source: err }
        } else {
            Self::Send { operation, source: err }
        }
    }

    /// Sorts an error raised while streaming the body.
    pub fn reading(operation: &str, err: reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                operation: operation.to_string(),
                after_ms: timeout_ms,
            }
        } else {
            Self::Body {
                operation: operation.to_string(),
                source: err,
            }
        }
    }

    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connect { .. } | Self::Body { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_names_operation() {
        let err = ClientError::Timeout {
            operation: "GetVcn".to_string(),
            after_ms: 5000,
        };
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "GetVcn timed out after 5000ms");
    }

    #[tokio::test]
    async fn test_connect_failure_is_retryable() {
        // nothing listens on the discard port
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:9/nodes")
            .send()
            .await
            .unwrap_err();
        let err = ClientError::sending("ListNodes", err, 30_000);
        assert!(matches!(err, ClientError::Connect { .. }));
        assert!(err.is_retryable());
    }
}
