//! Serde helpers for nullable attributes.
//!
//! A nullable attribute has three wire states: absent, `null`, or a value.
//! It is held as `Option<Option<T>>` so all three survive a round trip:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct Policy {
//!     #[serde(
//!         rename = "Parent",
//!         default,
//!         skip_serializing_if = "Option::is_none",
//!         with = "cloudsdk::nullable"
//!     )]
//!     parent: Option<Option<String>>,
//! }
//!
//! let absent: Policy = serde_json::from_str("{}").unwrap();
//! assert_eq!(absent.parent, None);
//! assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
//!
//! let null: Policy = serde_json::from_str(r#"{"Parent": null}"#).unwrap();
//! assert_eq!(null.parent, Some(None));
//! assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"Parent":null}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Reads a present key: `null` becomes `Some(None)`. Absent keys are left to
/// `#[serde(default)]`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Writes `Some(None)` as `null`. Pair with
/// `skip_serializing_if = "Option::is_none"` to keep absent keys absent.
pub fn serialize<T, S>(value: &Option<Option<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(Some(inner)) => serializer.serialize_some(inner),
        Some(None) | None => serializer.serialize_none(),
    }
}
