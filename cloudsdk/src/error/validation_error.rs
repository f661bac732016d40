//! Model constraint violations.

use thiserror::Error;

/// A model value violates one of its declared constraints.
///
/// Every variant that concerns a field carries its path: the wire key,
/// prefixed with the parent keys for nested models (`properties.sinks`),
/// and suffixed with the index or map key for collection elements
/// (`DnsServers[3]`). Validation errors are local and deterministic, so they
/// are never retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The input for a model is not a JSON object.
    #[error("{model} must be built from a JSON object, got {actual}")]
    NotAnObject {
        /// Model name.
        model: String,
        /// JSON type that was supplied instead.
        actual: &'static str,
    },

    /// A required field is missing or `null`.
    #[error("invalid value for \"{field}\", it cannot be nil")]
    Required {
        /// Field path.
        field: String,
    },

    /// `null` was supplied for an optional field that is not nullable.
    #[error("invalid value for \"{field}\", it cannot be null")]
    NotNullable {
        /// Field path.
        field: String,
    },

    /// The JSON type does not match the field kind.
    #[error("invalid value for \"{field}\", expected {expected}, got {actual}")]
    WrongType {
        /// Field path.
        field: String,
        /// Expected kind.
        expected: String,
        /// JSON type that was supplied.
        actual: &'static str,
    },

    /// A date-time string is not RFC 3339.
    #[error("invalid value for \"{field}\", {value:?} is not an RFC 3339 date-time")]
    InvalidDateTime {
        /// Field path.
        field: String,
        /// Offending value.
        value: String,
    },

    /// The value is outside a closed enum set.
    #[error("invalid value for \"{field}\", {value:?} must be one of {}", format_allowed(.allowed))]
    InvalidEnum {
        /// Field path.
        field: String,
        /// Offending value.
        value: String,
        /// Allowed values.
        allowed: Vec<String>,
    },

    /// A string does not match the required pattern.
    #[error("invalid value for \"{field}\", {value:?} must conform to the pattern /{pattern}/")]
    PatternMismatch {
        /// Field path.
        field: String,
        /// Offending value.
        value: String,
        /// The regular expression.
        pattern: String,
    },

    /// A declared pattern is not a valid regular expression.
    #[error("pattern /{pattern}/ for \"{field}\" does not compile: {message}")]
    InvalidPattern {
        /// Field path.
        field: String,
        /// The regular expression.
        pattern: String,
        /// Compiler message.
        message: String,
    },

    /// String length outside the allowed bounds.
    #[error("invalid value for \"{field}\", length {len} is outside {}", format_bounds(*.min, *.max))]
    Length {
        /// Field path.
        field: String,
        /// Length in characters.
        len: usize,
        /// Minimum length.
        min: Option<usize>,
        /// Maximum length.
        max: Option<usize>,
    },

    /// Number outside the allowed range.
    #[error("invalid value for \"{field}\", {value} must be {constraint}")]
    OutOfRange {
        /// Field path.
        field: String,
        /// Offending value.
        value: f64,
        /// Human-readable bound, e.g. `value 1..=14`.
        constraint: String,
    },

    /// Array item count outside the allowed bounds.
    #[error("invalid value for \"{field}\", number of items {count} is outside {}", format_bounds(*.min, *.max))]
    ItemCount {
        /// Field path.
        field: String,
        /// Number of items supplied.
        count: usize,
        /// Minimum count.
        min: Option<usize>,
        /// Maximum count.
        max: Option<usize>,
    },

    /// Array items must be distinct.
    #[error("invalid value for \"{field}\", items must be unique")]
    DuplicateItems {
        /// Field path.
        field: String,
    },

    /// No field with this wire key exists on the model.
    #[error("{model} has no attribute with wire key \"{field}\"")]
    UnknownField {
        /// Model name.
        model: String,
        /// Wire key that was looked up.
        field: String,
    },
}

impl ValidationError {
    /// Returns the path of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::NotAnObject { .. } => None,
            Self::Required { field }
            | Self::NotNullable { field }
            | Self::WrongType { field, .. }
            | Self::InvalidDateTime { field, .. }
            | Self::InvalidEnum { field, .. }
            | Self::PatternMismatch { field, .. }
            | Self::InvalidPattern { field, .. }
            | Self::Length { field, .. }
            | Self::OutOfRange { field, .. }
            | Self::ItemCount { field, .. }
            | Self::DuplicateItems { field }
            | Self::UnknownField { field, .. } => Some(field),
        }
    }
}

fn format_allowed(allowed: &[String]) -> String {
    if allowed.len() > 8 {
        format!("{} values ({}, ...)", allowed.len(), allowed[..4].join(", "))
    } else {
        format!("[{}]", allowed.join(", "))
    }
}

fn format_bounds(min: Option<usize>, max: Option<usize>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("{min}..={max}"),
        (Some(min), None) => format!("{min}.."),
        (None, Some(max)) => format!("..={max}"),
        (None, None) => "..".to_string(),
    }
}
