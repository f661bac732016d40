//! HTTP transport.
//!
//! [`ApiClient`] executes [`RequestParts`](crate::RequestParts) with
//! credentials, retries and tracing. Resource clients hold one and call
//! [`ApiClient::send`] for every operation.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use cloudsdk::{ApiClient, ClientConfig};
//!
//! let config = ClientConfig::from_file("cloudsdk.yaml")?.with_env_overrides()?;
//! let client = ApiClient::from_config(&define_oci_core_api(), &config)?;
//! ```

mod auth;
mod executor;

pub use executor::{ApiClient, ApiClientBuilder, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
