//! Generic constraint validator.
//!
//! Walks a model's [`FieldSpec`] list against a wire value. The rules apply
//! in a fixed order per field:
//!
//! 1. a required field that is missing (and has no default) or `null` fails
//!    with `Required`
//! 2. `null` on an optional field that is not nullable fails with `NotNullable`
//! 3. the JSON type must match the field kind (`WrongType`, `InvalidDateTime`)
//! 4. constraints are checked in declaration order
//!
//! Arrays check `Items`/`UniqueItems` on the array itself and every other
//! constraint on each element. Elements of arrays and maps get their own
//! path (`key[i]`, `key.k`) and nested models recurse with a dotted prefix.
//! Wire keys that no field describes are ignored.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ValidationError;

static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Validates `value` against a model's fields, returning the first violation.
///
/// ## Errors
///
/// Returns the first [`ValidationError`] in field declaration order.
///
/// ## Examples
///
/// ```
/// use cloudsdk::validate::validate_value;
/// use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
/// use serde_json::json;
///
/// const FIELDS: &[FieldSpec] = &[FieldSpec::new("servers", "Servers", FieldKind::Array(&FieldKind::String))
///     .with(&[Constraint::Items { min: None, max: Some(3) }])];
///
/// assert!(validate_value("Policy", FIELDS, &json!({"Servers": ["a"]})).is_ok());
/// assert!(validate_value("Policy", FIELDS, &json!({"Servers": ["a", "b", "c", "d"]})).is_err());
/// ```
pub fn validate_value(
    model: &str,
    fields: &'static [FieldSpec],
    value: &Value,
) -> Result<(), ValidationError> {
    match collect_violations(model, fields, value).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Collects every violation of a model's fields, in declaration order.
pub fn collect_violations(
    model: &str,
    fields: &'static [FieldSpec],
    value: &Value,
) -> Vec<ValidationError> {
    let mut out = Vec::new();
    match value.as_object() {
        Some(object) => check_object(fields, object, "", &mut out),
        None => out.push(ValidationError::NotAnObject {
            model: model.to_string(),
            actual: json_type(value),
        }),
    }
    out
}

/// Validates one candidate value for a single field.
///
/// The path reported in errors is the field's wire key.
///
/// ## Errors
///
/// Returns the first violation, including `Required`/`NotNullable` for
/// `null`.
pub fn validate_field_value(field: &FieldSpec, value: &Value) -> Result<(), ValidationError> {
    let mut out = Vec::new();
    check_present(field, value, field.wire, &mut out);
    match out.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn check_object(
    fields: &'static [FieldSpec],
    object: &Map<String, Value>,
    prefix: &str,
    out: &mut Vec<ValidationError>,
) {
    for field in fields {
        if let FieldKind::AllOf(_, nested) = field.kind {
            check_object(nested(), object, prefix, out);
            continue;
        }
        let path = join_path(prefix, field.wire);
        match object.get(field.wire) {
            None if field.required && field.default.is_none() => out.push(ValidationError::Required { field: path }),
            None => {}
            Some(value) => check_present(field, value, &path, out),
        }
    }
}

fn check_present(field: &FieldSpec, value: &Value, path: &str, out: &mut Vec<ValidationError>) {
    if value.is_null() {
        if field.required {
            out.push(ValidationError::Required {
                field: path.to_string(),
            });
        } else if !field.nullable {
            out.push(ValidationError::NotNullable {
                field: path.to_string(),
            });
        }
        return;
    }
    check_value(&field.kind, field.constraints, value, path, out);
}

fn check_value(
    kind: &FieldKind,
    constraints: &'static [Constraint],
    value: &Value,
    path: &str,
    out: &mut Vec<ValidationError>,
) {
    if !kind_matches(kind, value) {
        out.push(ValidationError::WrongType {
            field: path.to_string(),
            expected: kind.to_string(),
            actual: json_type(value),
        });
        return;
    }

    match (kind, value) {
        (FieldKind::DateTime, Value::String(s)) => {
            if chrono::DateTime::parse_from_rfc3339(s).is_err() {
                out.push(ValidationError::InvalidDateTime {
                    field: path.to_string(),
                    value: s.clone(),
                });
                return;
            }
        }
        (FieldKind::Model(_, nested) | FieldKind::AllOf(_, nested), Value::Object(object)) => {
            check_object(nested(), object, path, out);
        }
        (FieldKind::Array(inner), Value::Array(items)) => {
            for constraint in constraints {
                check_collection(constraint, items, path, out);
            }
            for (i, item) in items.iter().enumerate() {
                let item_path = format!("{path}[{i}]");
                check_element(inner, constraints, item, &item_path, out);
            }
            return;
        }
        (FieldKind::Map(inner), Value::Object(entries)) => {
            for (key, item) in entries {
                let item_path = format!("{path}.{key}");
                check_element(inner, constraints, item, &item_path, out);
            }
            return;
        }
        _ => {}
    }

    for constraint in constraints {
        check_scalar(constraint, value, path, out);
    }
}

fn check_element(
    kind: &FieldKind,
    constraints: &'static [Constraint],
    item: &Value,
    path: &str,
    out: &mut Vec<ValidationError>,
) {
    if item.is_null() && !matches!(kind, FieldKind::Any) {
        out.push(ValidationError::WrongType {
            field: path.to_string(),
            expected: kind.to_string(),
            actual: "null",
        });
        return;
    }
    check_value(kind, constraints, item, path, out);
}

fn check_collection(
    constraint: &Constraint,
    items: &[Value],
    path: &str,
    out: &mut Vec<ValidationError>,
) {
    match constraint {
        Constraint::Items { min, max } => {
            let count = items.len();
            if min.is_some_and(|min| count < min) || max.is_some_and(|max| count > max) {
                out.push(ValidationError::ItemCount {
                    field: path.to_string(),
                    count,
                    min: *min,
                    max: *max,
                });
            }
        }
        Constraint::UniqueItems => {
            let duplicated = items
                .iter()
                .enumerate()
                .any(|(i, item)| items[..i].contains(item));
            if duplicated {
                out.push(ValidationError::DuplicateItems {
                    field: path.to_string(),
                });
            }
        }
        _ => {}
    }
}

fn check_scalar(constraint: &Constraint, value: &Value, path: &str, out: &mut Vec<ValidationError>) {
    match (constraint, value) {
        (Constraint::OneOf(allowed), Value::String(s)) => {
            if !allowed.contains(&s.as_str()) {
                out.push(ValidationError::InvalidEnum {
                    field: path.to_string(),
                    value: s.clone(),
                    allowed: allowed.iter().map(|v| v.to_string()).collect(),
                });
            }
        }
        (Constraint::Pattern(pattern), Value::String(s)) => match compiled(pattern) {
            Ok(regex) if regex.is_match(s) => {}
            Ok(_) => out.push(ValidationError::PatternMismatch {
                field: path.to_string(),
                value: s.clone(),
                pattern: pattern.to_string(),
            }),
            Err(e) => out.push(ValidationError::InvalidPattern {
                field: path.to_string(),
                pattern: pattern.to_string(),
                message: e.to_string(),
            }),
        },
        (Constraint::Length { min, max }, Value::String(s)) => {
            let len = s.chars().count();
            if min.is_some_and(|min| len < min) || max.is_some_and(|max| len > max) {
                out.push(ValidationError::Length {
                    field: path.to_string(),
                    len,
                    min: *min,
                    max: *max,
                });
            }
        }
        (Constraint::Range { min, max }, Value::Number(n)) => {
            let Some(v) = n.as_f64() else { return };
            if min.is_some_and(|min| v < min) || max.is_some_and(|max| v > max) {
                out.push(out_of_range(constraint, v, path));
            }
        }
        (Constraint::ExclusiveRange { min, max }, Value::Number(n)) => {
            let Some(v) = n.as_f64() else { return };
            if min.is_some_and(|min| v <= min) || max.is_some_and(|max| v >= max) {
                out.push(out_of_range(constraint, v, path));
            }
        }
        _ => {}
    }
}

fn out_of_range(constraint: &Constraint, value: f64, path: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: path.to_string(),
        value,
        constraint: constraint.to_string(),
    }
}

fn compiled(pattern: &'static str) -> Result<Regex, regex::Error> {
    let mut cache = PATTERNS.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(regex) = cache.get(pattern) {
        return Ok(regex.clone());
    }
    let regex = Regex::new(pattern)?;
    cache.insert(pattern, regex.clone());
    Ok(regex)
}

fn kind_matches(kind: &FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::String | FieldKind::Enum | FieldKind::DateTime => value.is_string(),
        FieldKind::Integer => match value {
            Value::Number(n) => n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.fract() == 0.0),
            _ => false,
        },
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Object | FieldKind::Model(..) | FieldKind::AllOf(..) | FieldKind::Map(_) => {
            value.is_object()
        }
        FieldKind::Array(_) => value.is_array(),
        FieldKind::Any => true,
    }
}

/// Returns the JSON type name of a value.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const KINDS: &[&str] = &["Windows", "Linux"];

    fn sink_fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[FieldSpec::new("kind", "kind", FieldKind::Enum)
            .required()
            .with(&[Constraint::OneOf(&["EventHub", "ApplicationInsights"])])];
        F
    }

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("os_type", "osType", FieldKind::Enum)
                .required()
                .with(&[Constraint::OneOf(KINDS)]),
            FieldSpec::new("name", "name", FieldKind::String)
                .with(&[Constraint::Length { min: Some(1), max: Some(5) }]),
            FieldSpec::new("label", "label", FieldKind::String)
                .nullable()
                .with(&[Constraint::Pattern("^[a-z]+$")]),
            FieldSpec::new("slots", "slots", FieldKind::Integer)
                .with(&[Constraint::Range { min: Some(1.0), max: Some(14.0) }]),
            FieldSpec::new("servers", "servers", FieldKind::Array(&FieldKind::String)).with(&[
                Constraint::Items { min: None, max: Some(3) },
                Constraint::UniqueItems,
                Constraint::Pattern("^[0-9.]+$"),
            ]),
            FieldSpec::new("sinks", "sinks", FieldKind::Array(&FieldKind::Model("Sink", sink_fields))),
            FieldSpec::new("tags", "tags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new("created", "created", FieldKind::DateTime),
        ];
        F
    }

    #[test]
    fn test_valid_value_passes() {
        let value = json!({
            "osType": "Linux",
            "name": "web",
            "label": null,
            "slots": 14,
            "servers": ["10.0.0.1"],
            "sinks": [{"kind": "EventHub"}],
            "tags": {"env": "prod"},
            "created": "2024-01-02T03:04:05Z",
            "unknown": true
        });
        assert!(collect_violations("M", fields(), &value).is_empty());
    }

    #[test]
    fn test_non_object_input() {
        let err = validate_value("M", fields(), &json!([1])).unwrap_err();
        assert!(matches!(err, ValidationError::NotAnObject { actual: "array", .. }));
    }

    #[test]
    fn test_required_missing_and_null() {
        let err = validate_value("M", fields(), &json!({})).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "osType".to_string() });

        let err = validate_value("M", fields(), &json!({"osType": null})).unwrap_err();
        assert_eq!(err, ValidationError::Required { field: "osType".to_string() });
    }

    #[test]
    fn test_defaulted_required_field_may_be_omitted() {
        const F: &[FieldSpec] = &[FieldSpec::new("class_id", "ClassId", FieldKind::String)
            .required()
            .defaults_to("mo.MoRef")];
        assert!(validate_value("M", F, &json!({})).is_ok());
        assert!(validate_value("M", F, &json!({"ClassId": null})).is_err());
    }

    #[test]
    fn test_null_on_non_nullable_optional() {
        let err = validate_value("M", fields(), &json!({"osType": "Linux", "name": null})).unwrap_err();
        assert_eq!(err, ValidationError::NotNullable { field: "name".to_string() });
    }

    #[test]
    fn test_enum_violation_lists_allowed() {
        let err = validate_value("M", fields(), &json!({"osType": "Solaris"})).unwrap_err();
        match err {
            ValidationError::InvalidEnum { field, allowed, .. } => {
                assert_eq!(field, "osType");
                assert_eq!(allowed, vec!["Windows", "Linux"]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_wrong_type() {
        let err = validate_value("M", fields(), &json!({"osType": "Linux", "slots": "3"})).unwrap_err();
        assert!(matches!(err, ValidationError::WrongType { actual: "string", .. }));
    }

    #[test]
    fn test_integer_accepts_whole_floats_only() {
        assert!(validate_value("M", fields(), &json!({"osType": "Linux", "slots": 3.0})).is_ok());
        assert!(validate_value("M", fields(), &json!({"osType": "Linux", "slots": 3.5})).is_err());
    }

    #[test]
    fn test_range_boundaries() {
        for ok in [1, 14] {
            assert!(validate_value("M", fields(), &json!({"osType": "Linux", "slots": ok})).is_ok());
        }
        for bad in [0, 15] {
            let err = validate_value("M", fields(), &json!({"osType": "Linux", "slots": bad})).unwrap_err();
            assert!(matches!(err, ValidationError::OutOfRange { .. }));
        }
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(validate_value("M", fields(), &json!({"osType": "Linux", "name": "ééééé"})).is_ok());
        let err = validate_value("M", fields(), &json!({"osType": "Linux", "name": ""})).unwrap_err();
        assert!(matches!(err, ValidationError::Length { len: 0, .. }));
    }

    #[test]
    fn test_array_rules_and_element_paths() {
        let value = json!({"osType": "Linux", "servers": ["1", "2", "3", "4"]});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert!(matches!(err, ValidationError::ItemCount { count: 4, .. }));

        let value = json!({"osType": "Linux", "servers": ["1", "1"]});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateItems { field: "servers".to_string() });

        let value = json!({"osType": "Linux", "servers": ["1", "dns"]});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert_eq!(err.field(), Some("servers[1]"));
    }

    #[test]
    fn test_nested_model_path() {
        let value = json!({"osType": "Linux", "sinks": [{"kind": "EventHub"}, {"kind": "Blob"}]});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert_eq!(err.field(), Some("sinks[1].kind"));
    }

    #[test]
    fn test_map_value_path() {
        let value = json!({"osType": "Linux", "tags": {"env": 1}});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert_eq!(err.field(), Some("tags.env"));
    }

    #[test]
    fn test_date_time_must_be_rfc3339() {
        let value = json!({"osType": "Linux", "created": "yesterday"});
        let err = validate_value("M", fields(), &value).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidDateTime { .. }));
    }

    #[test]
    fn test_collects_all_violations() {
        let value = json!({"name": "toolong", "slots": 99});
        let all = collect_violations("M", fields(), &value);
        let paths: Vec<_> = all.iter().filter_map(|e| e.field()).collect();
        assert_eq!(paths, vec!["osType", "name", "slots"]);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        const BROKEN: &[FieldSpec] =
            &[FieldSpec::new("x", "x", FieldKind::String).with(&[Constraint::Pattern("(")])];
        let err = validate_value("M", BROKEN, &json!({"x": "a"})).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPattern { .. }));
    }

    #[test]
    fn test_all_of_fields_share_the_object() {
        const WRAPPER: &[FieldSpec] = &[FieldSpec::all_of("sink", "Sink", sink_fields)];
        assert!(validate_value("W", WRAPPER, &json!({"kind": "EventHub"})).is_ok());
        let err = validate_value("W", WRAPPER, &json!({})).unwrap_err();
        assert_eq!(err.field(), Some("kind"));
    }

    #[test]
    fn test_single_field_validation() {
        let field = &fields()[3];
        assert!(validate_field_value(field, &json!(7)).is_ok());
        assert!(validate_field_value(field, &json!(0)).is_err());
        assert_eq!(
            validate_field_value(field, &Value::Null).unwrap_err(),
            ValidationError::NotNullable { field: "slots".to_string() }
        );
    }
}
