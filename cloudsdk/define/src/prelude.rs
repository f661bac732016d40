//! Convenient re-exports for writing API definitions and models.
//!
//! ```
//! use cloudsdk_define::prelude::*;
//!
//! const FIELDS: &[FieldSpec] = &[FieldSpec::new("name", "name", FieldKind::String).required()];
//! let endpoint = Endpoint::new("ListNodes", RestMethod::Get, "/nodes", ApiResponse::json_type("NodeList"));
//!
//! assert!(FIELDS[0].required);
//! assert_eq!(endpoint.method, RestMethod::Get);
//! ```

pub use crate::auth::AuthStrategy;
pub use crate::error::DefinitionError;
pub use crate::model::{Constraint, FieldKind, FieldSpec, FieldsFn};
pub use crate::response::ApiResponse;
pub use crate::schema::{Schema, SchemaObject};
pub use crate::types::{Endpoint, RestApi, RestMethod};
