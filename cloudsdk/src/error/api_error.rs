//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, ModelError, OperationError, ValidationError};
use thiserror::Error;

/// Top-level error type for all resource-client operations.
///
/// Aggregates every error category while keeping them distinguishable: a
/// request body that breaks a model constraint is [`ApiError::Validation`]
/// and never reaches the network, a transport failure is
/// [`ApiError::Client`], an unexpected status is [`ApiError::Operation`],
/// and a response body that does not decode into the expected model is
/// [`ApiError::Deserialize`].
///
/// ## Examples
///
/// ```rust,ignore
/// use cloudsdk::ApiError;
///
/// match client.get_vcn("ocid1.vcn.oc1..aaaa").await {
///     Ok(vcn) => println!("{}", vcn.id),
///     Err(ApiError::Operation(e)) if e.status == 404 => println!("no such VCN"),
///     Err(e) => return Err(e.into()),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport errors (network, timeout, connection failures).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The server returned a status outside the expected set.
    #[error(transparent)]
    Operation(#[from] OperationError),

    /// A request model violates its constraints.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential resolution errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client configuration or request construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The response body does not match the expected model.
    #[error("Failed to deserialize response of {operation}: {source}")]
    Deserialize {
        /// Operation id.
        operation: String,
        /// Underlying decoding error.
        source: serde_json::Error,
    },
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(e) => Self::Validation(e),
            ModelError::Deserialize(source) => Self::Deserialize {
                operation: "request body".to_string(),
                source,
            },
        }
    }
}

impl ApiError {
    /// Returns `true` if repeating the request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            Self::Operation(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Returns the HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Operation(e) => Some(e.status),
            _ => None,
        }
    }
}
