//! Layered error types for the SDK runtime.
//!
//! - [`ApiError`] - top-level error returned by every resource-client operation
//! - [`ValidationError`] - a model value violates its declared constraints
//! - [`ModelError`] - building a model from wire data failed (validation vs. decoding)
//! - [`ClientError`] - transport failures (network, timeout, connection)
//! - [`OperationError`] - the server answered with a status outside the expected set
//! - [`AuthError`] - credentials could not be resolved or applied
//! - [`ConfigError`] - invalid client configuration or request construction

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod model_error;
mod operation_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use model_error::ModelError;
pub use operation_error::OperationError;
pub use validation_error::ValidationError;
