//! Model references used by endpoint definitions.

use std::fmt::{self, Debug};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Bound shared by every request and response model: it converts to and from
/// a wire hash and can move between async tasks.
///
/// Blanket-implemented, so a plain `#[derive(Serialize, Deserialize)]` record
/// qualifies:
///
/// ```
/// use serde::{Deserialize, Serialize};
/// use cloudsdk_define::SchemaObject;
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct MoTag {
///     #[serde(rename = "Key")]
///     key: String,
/// }
///
/// fn assert_model<T: SchemaObject>() {}
/// assert_model::<MoTag>();
/// ```
pub trait SchemaObject: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static {}

impl<T> SchemaObject for T where T: Serialize + DeserializeOwned + Debug + Clone + Send + Sync + 'static
{}

/// Names the model carried by a request or response body.
///
/// The name is the schema name a model reports as `Model::NAME`, so the
/// model registry can resolve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub type_name: String,
}

impl Schema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    /// Collection envelopes (`GuestDiagnosticSettingsList`, `NodeList`) are
    /// named with a `List` suffix.
    pub fn is_list(&self) -> bool {
        self.type_name.ends_with("List")
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_name() {
        let schema = Schema::new("Vcn");
        assert_eq!(serde_json::to_string(&schema).unwrap(), "\"Vcn\"");
        let parsed: Schema = serde_json::from_str("\"NodeList\"").unwrap();
        assert!(parsed.is_list());
        assert!(!schema.is_list());
    }
}
