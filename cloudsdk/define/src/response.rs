//! What an endpoint answers with.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::Schema;

/// The body an endpoint returns on an expected status.
///
/// ```
/// use cloudsdk_define::ApiResponse;
///
/// let get = ApiResponse::json_type("GuestDiagnosticSettingsResource");
/// assert_eq!(get.schema().map(|s| s.type_name.as_str()), Some("GuestDiagnosticSettingsResource"));
///
/// // deletes answer 200 or 204 without a body
/// assert!(ApiResponse::Empty.schema().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiResponse {
    /// A JSON document decoded into the named model.
    Json(Schema),
    /// No body, or one the client discards.
    Empty,
}

impl ApiResponse {
    pub fn json_type(type_name: impl Into<String>) -> Self {
        Self::Json(Schema::new(type_name))
    }

    pub fn schema(&self) -> Option<&Schema> {
        match self {
            Self::Json(schema) => Some(schema),
            Self::Empty => None,
        }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(schema) if schema.is_list() => write!(f, "{schema} (collection)"),
            Self::Json(schema) => write!(f, "{schema}"),
            Self::Empty => f.write_str("no body"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_model() {
        assert_eq!(ApiResponse::json_type("Vcn").to_string(), "Vcn");
        assert_eq!(ApiResponse::json_type("NodeList").to_string(), "NodeList (collection)");
        assert_eq!(ApiResponse::Empty.to_string(), "no body");
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(ApiResponse::json_type("OciError")).unwrap();
        assert_eq!(json, serde_json::json!({"json": "OciError"}));
        let empty: ApiResponse = serde_json::from_str("\"empty\"").unwrap();
        assert_eq!(empty, ApiResponse::Empty);
    }
}
