//! Declarative model metadata.
//!
//! Every model describes its attributes with a static slice of
//! [`FieldSpec`]s: the attribute name, its wire key, the JSON kind it holds,
//! whether it is required or nullable, and the constraints its value must
//! satisfy. One generic validator walks these descriptions, so individual
//! models carry no hand-written validation code.
//!
//! ## Examples
//!
//! ```
//! use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
//!
//! const TAG_FIELDS: &[FieldSpec] = &[
//!     FieldSpec::new("key", "Key", FieldKind::String)
//!         .required()
//!         .with(&[Constraint::Length { min: Some(1), max: Some(128) }]),
//!     FieldSpec::new("value", "Value", FieldKind::String).nullable(),
//! ];
//!
//! assert_eq!(TAG_FIELDS[0].wire, "Key");
//! assert!(TAG_FIELDS[0].required);
//! assert!(TAG_FIELDS[1].nullable);
//! ```

use std::fmt;

/// Returns the field list of a model. Used for nested and `allOf` fields so
/// that models can refer to each other without const-evaluation cycles.
pub type FieldsFn = fn() -> &'static [FieldSpec];

/// A declarative constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// The value must be one of the listed strings (closed enum set).
    OneOf(&'static [&'static str]),
    /// The string must match the regular expression.
    Pattern(&'static str),
    /// String length bounds in characters, inclusive.
    Length {
        /// Minimum length.
        min: Option<usize>,
        /// Maximum length.
        max: Option<usize>,
    },
    /// Numeric bounds, inclusive.
    Range {
        /// Minimum value.
        min: Option<f64>,
        /// Maximum value.
        max: Option<f64>,
    },
    /// Numeric bounds, exclusive.
    ExclusiveRange {
        /// Lower bound (value must be greater).
        min: Option<f64>,
        /// Upper bound (value must be smaller).
        max: Option<f64>,
    },
    /// Array item count bounds, inclusive.
    Items {
        /// Minimum number of items.
        min: Option<usize>,
        /// Maximum number of items.
        max: Option<usize>,
    },
    /// Array items must be pairwise distinct.
    UniqueItems,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneOf(values) if values.len() > 6 => {
                write!(f, "one of {} values ({}, ...)", values.len(), values[..3].join(", "))
            }
            Self::OneOf(values) => write!(f, "one of [{}]", values.join(", ")),
            Self::Pattern(pattern) => write!(f, "matches /{pattern}/"),
            Self::Length { min, max } => write_bounds(f, "length", *min, *max, "..="),
            Self::Range { min, max } => write_bounds(f, "value", *min, *max, "..="),
            Self::ExclusiveRange { min, max } => write_bounds(f, "value", *min, *max, "<..<"),
            Self::Items { min, max } => write_bounds(f, "items", *min, *max, "..="),
            Self::UniqueItems => write!(f, "unique items"),
        }
    }
}

fn write_bounds<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    min: Option<T>,
    max: Option<T>,
    sep: &str,
) -> fmt::Result {
    match (min, max) {
        (Some(min), Some(max)) => write!(f, "{label} {min}{sep}{max}"),
        (Some(min), None) => write!(f, "{label} >= {min}"),
        (None, Some(max)) => write!(f, "{label} <= {max}"),
        (None, None) => write!(f, "{label} unbounded"),
    }
}

/// The JSON kind an attribute holds on the wire.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// JSON string.
    String,
    /// JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// JSON boolean.
    Boolean,
    /// RFC 3339 timestamp string.
    DateTime,
    /// String restricted to a closed set, declared with [`Constraint::OneOf`].
    Enum,
    /// Free-form JSON object.
    Object,
    /// Any JSON value.
    Any,
    /// A nested model stored under this field's wire key.
    Model(&'static str, FieldsFn),
    /// Fields of another model merged into this one (`allOf` composition).
    ///
    /// The wire key is unused; the nested fields are read from the same
    /// JSON object as the enclosing model.
    AllOf(&'static str, FieldsFn),
    /// JSON array whose items are of the given kind.
    Array(&'static FieldKind),
    /// JSON object whose values are of the given kind.
    Map(&'static FieldKind),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Integer => write!(f, "Integer"),
            Self::Number => write!(f, "Float"),
            Self::Boolean => write!(f, "Boolean"),
            Self::DateTime => write!(f, "DateTime"),
            Self::Enum => write!(f, "Enum"),
            Self::Object => write!(f, "Object"),
            Self::Any => write!(f, "Any"),
            Self::Model(name, _) => write!(f, "{name}"),
            Self::AllOf(name, _) => write!(f, "allOf {name}"),
            Self::Array(inner) => write!(f, "Array<{inner}>"),
            Self::Map(inner) => write!(f, "Hash<String, {inner}>"),
        }
    }
}

/// Metadata for one model attribute.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Rust attribute name (snake_case).
    pub attribute: &'static str,
    /// Key used on the wire.
    pub wire: &'static str,
    /// JSON kind of the value.
    pub kind: FieldKind,
    /// The field must be present and non-null.
    pub required: bool,
    /// An explicit `null` is accepted.
    pub nullable: bool,
    /// Value filled in when the key is absent on the wire.
    pub default: Option<&'static str>,
    /// Constraints checked in declaration order.
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    /// Creates an optional, non-nullable field without constraints.
    pub const fn new(attribute: &'static str, wire: &'static str, kind: FieldKind) -> Self {
        Self {
            attribute,
            wire,
            kind,
            required: false,
            nullable: false,
            default: None,
            constraints: &[],
        }
    }

    /// Creates an `allOf` pseudo-field merging another model's fields.
    pub const fn all_of(attribute: &'static str, name: &'static str, fields: FieldsFn) -> Self {
        Self::new(attribute, "", FieldKind::AllOf(name, fields))
    }

    /// Marks the field as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as nullable.
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Records the value deserialization fills in when the key is absent.
    /// A required field with a default may be omitted on the wire.
    pub const fn defaults_to(mut self, value: &'static str) -> Self {
        self.default = Some(value);
        self
    }

    /// Attaches constraints.
    pub const fn with(mut self, constraints: &'static [Constraint]) -> Self {
        self.constraints = constraints;
        self
    }
}

/// Flattens `allOf` pseudo-fields into the plain attribute list.
///
/// ## Examples
///
/// ```
/// use cloudsdk_define::model::{flatten_fields, FieldKind, FieldSpec};
///
/// fn base() -> &'static [FieldSpec] {
///     const BASE: &[FieldSpec] = &[FieldSpec::new("moid", "Moid", FieldKind::String)];
///     BASE
/// }
///
/// const FIELDS: &[FieldSpec] = &[
///     FieldSpec::all_of("base", "MoBaseMo", base),
///     FieldSpec::new("name", "Name", FieldKind::String),
/// ];
///
/// let wire: Vec<_> = flatten_fields(FIELDS).iter().map(|f| f.wire).collect();
/// assert_eq!(wire, vec!["Moid", "Name"]);
/// ```
pub fn flatten_fields(fields: &'static [FieldSpec]) -> Vec<&'static FieldSpec> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        match field.kind {
            FieldKind::AllOf(_, nested) => out.extend(flatten_fields(nested())),
            _ => out.push(field),
        }
    }
    out
}

/// Finds a field by wire key, looking through `allOf` parts.
pub fn find_field(fields: &'static [FieldSpec], wire: &str) -> Option<&'static FieldSpec> {
    flatten_fields(fields).into_iter().find(|f| f.wire == wire)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["Small", "Large"];

    fn inner_fields() -> &'static [FieldSpec] {
        const INNER: &[FieldSpec] = &[
            FieldSpec::new("class_id", "ClassId", FieldKind::String).required(),
            FieldSpec::new("moid", "Moid", FieldKind::String),
        ];
        INNER
    }

    const OUTER: &[FieldSpec] = &[
        FieldSpec::all_of("base", "Base", inner_fields),
        FieldSpec::new("size", "Size", FieldKind::Enum).with(&[Constraint::OneOf(SIZES)]),
        FieldSpec::new("servers", "Servers", FieldKind::Array(&FieldKind::String))
            .with(&[Constraint::Items { min: None, max: Some(3) }]),
    ];

    #[test]
    fn builder_flags() {
        let field = FieldSpec::new("a", "A", FieldKind::Integer).required().nullable();
        assert!(field.required);
        assert!(field.nullable);
        assert!(field.constraints.is_empty());
        assert!(field.default.is_none());

        let class_id = FieldSpec::new("class_id", "ClassId", FieldKind::String)
            .required()
            .defaults_to("mo.MoRef");
        assert_eq!(class_id.default, Some("mo.MoRef"));
    }

    #[test]
    fn flatten_expands_all_of() {
        let flat = flatten_fields(OUTER);
        let wire: Vec<_> = flat.iter().map(|f| f.wire).collect();
        assert_eq!(wire, vec!["ClassId", "Moid", "Size", "Servers"]);
    }

    #[test]
    fn find_field_looks_through_all_of() {
        assert!(find_field(OUTER, "ClassId").is_some_and(|f| f.required));
        assert!(find_field(OUTER, "Servers").is_some());
        assert!(find_field(OUTER, "Missing").is_none());
    }

    #[test]
    fn constraint_display() {
        assert_eq!(Constraint::OneOf(SIZES).to_string(), "one of [Small, Large]");
        assert_eq!(
            Constraint::Items { min: None, max: Some(3) }.to_string(),
            "items <= 3"
        );
        assert_eq!(
            Constraint::Range { min: Some(1.0), max: Some(14.0) }.to_string(),
            "value 1..=14"
        );
        assert_eq!(Constraint::Pattern("^a$").to_string(), "matches /^a$/");
    }

    #[test]
    fn large_enum_display_is_abbreviated() {
        const MANY: &[&str] = &["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(Constraint::OneOf(MANY).to_string(), "one of 7 values (a, b, c, ...)");
    }

    #[test]
    fn kind_display() {
        assert_eq!(FieldKind::Array(&FieldKind::String).to_string(), "Array<String>");
        assert_eq!(FieldKind::Map(&FieldKind::Integer).to_string(), "Hash<String, Integer>");
        assert_eq!(FieldKind::Model("MoTag", inner_fields).to_string(), "MoTag");
    }
}
