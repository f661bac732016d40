//! cloudsdk Definition Library
//!
//! This crate provides the declarative primitives the cloudsdk runtime and
//! models are written against. Nothing here performs I/O.
//!
//! ## Core Types
//!
//! ### REST API Types
//!
//! - [`RestApi`] - A complete REST API definition with base URL, auth, and endpoints
//! - [`Endpoint`] - A single API operation with method, path template, and status set
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`AuthStrategy`] - How a credential is applied (Bearer, API Key, Basic, None)
//! - [`ApiResponse`] - Response body definitions (JSON model or empty)
//! - [`Schema`] - Reference to a model type by name
//!
//! ### Model Metadata
//!
//! - [`FieldSpec`] - One attribute: name, wire key, kind, flags, constraints
//! - [`FieldKind`] - The JSON kind of an attribute (including nested models)
//! - [`Constraint`] - Enum, pattern, length, range and item-count rules
//!
//! ## Examples
//!
//! ```
//! use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};
//!
//! let api = RestApi {
//!     name: "XClarity".to_string(),
//!     description: "Lenovo XClarity Administrator REST API".to_string(),
//!     base_url: "https://xclarity.example.com".to_string(),
//!     docs_url: None,
//!     auth: AuthStrategy::Basic,
//!     env_auth: vec!["XCLARITY_PASSWORD".to_string()],
//!     env_username: Some("XCLARITY_USERNAME".to_string()),
//!     headers: vec![],
//!     query: vec![],
//!     endpoints: vec![
//!         Endpoint::new("ListNodes", RestMethod::Get, "/nodes", ApiResponse::json_type("NodeList"))
//!             .with_description("List managed nodes"),
//!     ],
//!     module_path: Some("xclarity".to_string()),
//! };
//!
//! assert_eq!(api.endpoints.len(), 1);
//! assert!(api.validate().is_ok());
//! ```

pub mod auth;
pub mod error;
pub mod model;
pub mod path;
pub mod prelude;
pub mod response;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use auth::AuthStrategy;
pub use error::DefinitionError;
pub use model::{Constraint, FieldKind, FieldSpec, FieldsFn};
pub use response::ApiResponse;
pub use schema::{Schema, SchemaObject};
pub use types::{Endpoint, RestApi, RestMethod};
