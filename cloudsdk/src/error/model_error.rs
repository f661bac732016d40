//! Errors from building a model out of wire data.

use thiserror::Error;

use super::ValidationError;

/// Failure to turn a wire hash into a model (or a model back into one).
///
/// Constraint violations and decoding failures are kept apart: a
/// [`ModelError::Validation`] means the data is well-formed JSON that breaks a
/// declared rule, a [`ModelError::Deserialize`] means it could not be decoded
/// into the Rust type at all.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A declared constraint is violated.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The data could not be (de)serialized.
    #[error("deserialization failed: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl ModelError {
    /// Returns the constraint violation, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Deserialize(_) => None,
        }
    }
}
