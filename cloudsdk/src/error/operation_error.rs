//! Unexpected HTTP status from an operation.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Longest body excerpt included in the error message.
const MAX_BODY_EXCERPT: usize = 200;

/// The server answered, but with a status outside the operation's expected
/// set.
///
/// Carries enough of the exchange to diagnose the failure: the request
/// summary, the response status, headers and raw body, and the body parsed
/// as JSON when possible. Use [`error_model`](Self::error_model) to decode
/// the body into the API's typed error model.
#[derive(Debug, Clone)]
pub struct OperationError {
    /// Operation id, e.g. `get_vcn`.
    pub operation: String,
    /// HTTP method of the request.
    pub method: String,
    /// Full request URL.
    pub url: String,
    /// Response status code.
    pub status: u16,
    /// Response headers.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub body: String,
    /// Response body parsed as JSON, when it is JSON.
    pub parsed: Option<Value>,
}

impl OperationError {
    /// Decodes the error body into a typed error model.
    ///
    /// Returns `None` when the body is not JSON or does not fit `E`.
    pub fn error_model<E: DeserializeOwned>(&self) -> Option<E> {
        self.parsed
            .as_ref()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Returns the first response header with this name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Best-effort error message from the body.
    ///
    /// Looks for a `message` string at the top level or one level down (the
    /// Azure `{"error": {"code", "message"}}` shape), falling back to the
    /// raw body.
    pub fn message(&self) -> Option<String> {
        if let Some(parsed) = &self.parsed {
            if let Some(message) = find_message(parsed) {
                return Some(message.to_string());
            }
        }
        let trimmed = self.body.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.chars().take(MAX_BODY_EXCERPT).collect())
    }

    /// Returns `true` for statuses worth retrying: 408, 429 and 5xx.
    pub fn is_retryable(&self) -> bool {
        self.status == 408 || self.status == 429 || self.status >= 500
    }

    /// Returns `true` for 401 and 403.
    pub fn is_auth_failure(&self) -> bool {
        self.status == 401 || self.status == 403
    }

    /// Parses a `Retry-After` header given in seconds.
    pub fn retry_after_secs(&self) -> Option<u64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse().ok())
    }

}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed: {} {} returned HTTP {}",
            self.operation, self.method, self.url, self.status
        )?;
        if let Some(message) = self.message() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for OperationError {}

fn find_message(value: &Value) -> Option<&str> {
    let object = value.as_object()?;
    for key in ["message", "Message"] {
        if let Some(message) = object.get(key).and_then(Value::as_str) {
            return Some(message);
        }
    }
    object
        .values()
        .filter(|nested| nested.is_object())
        .find_map(|nested| {
            let nested = nested.as_object()?;
            ["message", "Message"]
                .iter()
                .find_map(|key| nested.get(*key).and_then(Value::as_str))
        })
}
