//! Shared runtime for the cloud-management API clients.
//!
//! The `cloudsdk` crate carries everything the per-API models and resource
//! clients have in common:
//!
//! - **Models**: the [`Model`] trait builds typed records from wire hashes,
//!   validating them against declarative [`FieldSpec`] metadata first
//! - **Validation**: one generic validator for enum, pattern, length, range
//!   and item-count constraints, recursing into nested models
//! - **Transport**: [`ApiClient`] renders [`RequestParts`], applies
//!   credentials, retries transient failures and checks expected statuses
//! - **Layered errors**: validation, transport, operation and decoding
//!   failures stay distinguishable in [`ApiError`]
//! - **Configuration**: [`ClientConfig`] from YAML/TOML files and the
//!   environment
//!
//! ## Example
//!
//! ```rust,ignore
//! use cloudsdk::{ApiClient, RequestParts};
//! use cloudsdk_define::RestMethod;
//!
//! let client = ApiClient::for_api(&define_xclarity_api())?.build()?;
//! let parts = RequestParts::new("get_node", RestMethod::Get, "/nodes/0123456789ABCDEF0123456789ABCDEF");
//! let node: Node = client.send(parts).await?.into_body();
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod nullable;
pub mod path;
pub mod request;
pub mod response;
pub mod retry;
pub mod validate;

// Re-exports for convenience
pub use client::{ApiClient, ApiClientBuilder};
pub use cloudsdk_define::{FieldKind, FieldSpec};
pub use config::ClientConfig;
pub use error::{
    ApiError, AuthError, ClientError, ConfigError, ModelError, OperationError, ValidationError,
};
pub use model::Model;
pub use path::PathTemplate;
pub use request::RequestParts;
pub use response::HttpResponse;
pub use retry::RetryPolicy;
