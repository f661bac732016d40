//! The [`Model`] trait shared by every API data type.
//!
//! A model is a serde struct whose rename tags are its attribute map and
//! whose [`FieldSpec`] list carries the declarative constraints. Building a
//! model from wire data validates the raw value first, so constraint
//! violations surface as [`ValidationError`]s naming the wire key, and only
//! then decodes it, so type mismatches surface as deserialization errors.
//!
//! ## Examples
//!
//! ```
//! use cloudsdk::Model;
//! use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Tag {
//!     #[serde(rename = "Key")]
//!     key: String,
//! }
//!
//! impl Model for Tag {
//!     const NAME: &'static str = "Tag";
//!
//!     fn fields() -> &'static [FieldSpec] {
//!         const F: &[FieldSpec] = &[FieldSpec::new("key", "Key", FieldKind::String)
//!             .required()
//!             .with(&[Constraint::Length { min: Some(1), max: Some(8) }])];
//!         F
//!     }
//! }
//!
//! let tag = Tag::from_json(r#"{"Key": "env"}"#).unwrap();
//! assert_eq!(tag.key, "env");
//! assert!(Tag::from_json(r#"{"Key": "much-too-long"}"#).is_err());
//! ```

use cloudsdk_define::model::{find_field, FieldSpec};
use cloudsdk_define::schema::SchemaObject;
use serde_json::Value;

use crate::error::{ModelError, ValidationError};
use crate::validate::{collect_violations, validate_field_value, validate_value};

/// A data-transfer record for one JSON schema.
pub trait Model: SchemaObject + Clone {
    /// Schema name, e.g. `KubernetesSysConfigPolicy`.
    const NAME: &'static str;

    /// Attribute metadata: wire keys, kinds and constraints.
    fn fields() -> &'static [FieldSpec];

    /// Builds the model from a wire hash.
    ///
    /// ## Errors
    ///
    /// [`ModelError::Validation`] when the value breaks a declared
    /// constraint, [`ModelError::Deserialize`] when it cannot be decoded.
    fn from_value(value: Value) -> Result<Self, ModelError> {
        validate_value(Self::NAME, Self::fields(), &value)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Builds the model from a JSON document.
    ///
    /// ## Errors
    ///
    /// As [`from_value`](Self::from_value); malformed JSON is a
    /// deserialization error.
    fn from_json(json: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Serializes the model to its wire hash.
    ///
    /// ## Errors
    ///
    /// Returns [`ModelError::Deserialize`] if serde cannot represent a value.
    fn to_value(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the model to compact JSON.
    ///
    /// ## Errors
    ///
    /// As [`to_value`](Self::to_value).
    fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the model to indented JSON.
    ///
    /// ## Errors
    ///
    /// As [`to_value`](Self::to_value).
    fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the current state against every constraint.
    ///
    /// ## Errors
    ///
    /// Returns the first violation.
    fn validate(&self) -> Result<(), ModelError> {
        let value = self.to_value()?;
        validate_value(Self::NAME, Self::fields(), &value)?;
        Ok(())
    }

    /// Lists every violation as a message, empty when the model is valid.
    fn list_invalid_properties(&self) -> Vec<String> {
        match self.to_value() {
            Ok(value) => collect_violations(Self::NAME, Self::fields(), &value)
                .iter()
                .map(ToString::to_string)
                .collect(),
            Err(e) => vec![e.to_string()],
        }
    }

    /// Returns `true` when no constraint is violated.
    fn is_valid(&self) -> bool {
        self.list_invalid_properties().is_empty()
    }

    /// Applies a mutation and keeps it only if the result is valid.
    ///
    /// On failure the model is left unchanged.
    ///
    /// ## Errors
    ///
    /// Returns the first violation of the mutated copy.
    fn update<F>(&mut self, mutate: F) -> Result<(), ModelError>
    where
        F: FnOnce(&mut Self),
    {
        let mut candidate = self.clone();
        mutate(&mut candidate);
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }

    /// Validates a candidate value for the attribute with this wire key.
    ///
    /// ## Errors
    ///
    /// [`ValidationError::UnknownField`] when no attribute has the key,
    /// otherwise the first violation of the value.
    fn validate_field(wire: &str, value: &Value) -> Result<(), ValidationError> {
        let field = find_field(Self::fields(), wire).ok_or_else(|| ValidationError::UnknownField {
            model: Self::NAME.to_string(),
            field: wire.to_string(),
        })?;
        validate_field_value(field, value)
    }
}

#[cfg(test)]
mod tests {
    use cloudsdk_define::model::{Constraint, FieldKind};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Node {
        #[serde(rename = "uuid")]
        uuid: String,
        #[serde(rename = "slots", skip_serializing_if = "Option::is_none")]
        slots: Option<u32>,
    }

    impl Model for Node {
        const NAME: &'static str = "Node";

        fn fields() -> &'static [FieldSpec] {
            const F: &[FieldSpec] = &[
                FieldSpec::new("uuid", "uuid", FieldKind::String)
                    .required()
                    .with(&[Constraint::Pattern("^[0-9A-F]{32}$")]),
                FieldSpec::new("slots", "slots", FieldKind::Integer)
                    .with(&[Constraint::Range { min: Some(1.0), max: Some(14.0) }]),
            ];
            F
        }
    }

    const UUID: &str = "0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_from_value_round_trip() {
        let wire = json!({"uuid": UUID, "slots": 2});
        let node = Node::from_value(wire.clone()).unwrap();
        assert_eq!(node.to_value().unwrap(), wire);
    }

    #[test]
    fn test_validation_precedes_decoding() {
        let err = Node::from_value(json!({"uuid": "nope"})).unwrap_err();
        assert!(matches!(err, ModelError::Validation(ValidationError::PatternMismatch { .. })));
    }

    #[test]
    fn test_decoding_error_is_distinct() {
        let err = Node::from_json("{\"uuid\": ").unwrap_err();
        assert!(matches!(err, ModelError::Deserialize(_)));

        // a whole float satisfies the integer rule but serde will not decode it as u32
        let err = Node::from_value(json!({"uuid": UUID, "slots": 3.0})).unwrap_err();
        assert!(matches!(err, ModelError::Deserialize(_)));
    }

    #[test]
    fn test_update_commits_only_valid_changes() {
        let mut node = Node::from_value(json!({"uuid": UUID})).unwrap();
        node.update(|n| n.slots = Some(4)).unwrap();
        assert_eq!(node.slots, Some(4));

        let err = node.update(|n| n.slots = Some(40)).unwrap_err();
        assert!(matches!(err, ModelError::Validation(ValidationError::OutOfRange { .. })));
        assert_eq!(node.slots, Some(4));
    }

    #[test]
    fn test_list_invalid_properties() {
        let node = Node {
            uuid: "x".to_string(),
            slots: Some(0),
        };
        let problems = node.list_invalid_properties();
        assert_eq!(problems.len(), 2);
        assert!(!node.is_valid());
    }

    #[test]
    fn test_validate_field() {
        assert!(Node::validate_field("slots", &json!(14)).is_ok());
        assert!(Node::validate_field("slots", &json!(15)).is_err());
        let err = Node::validate_field("bay", &json!(1)).unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { .. }));
    }
}
