//! URL path templates.
//!
//! A template such as `/subscriptions/{subscriptionId}/providers/x` is parsed
//! once into literal and parameter pieces; [`PathTemplate::render`] then
//! substitutes values, percent-encoding each one as a single path segment.
//! A `{+param}` placeholder takes a value spanning several segments (Azure
//! resource URIs) and keeps its `/` separators.

use cloudsdk_define::path::check_path_template;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::error::ConfigError;

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Characters escaped in a multi-segment value: as [`SEGMENT`], but `/` stays.
const MULTI_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Param { name: String, multi: bool },
}

/// A parsed path template.
///
/// ## Examples
///
/// ```
/// use cloudsdk::PathTemplate;
///
/// let template = PathTemplate::parse("/20160918/vcns/{vcnId}").unwrap();
/// let path = template.render(&[("vcnId", "ocid1.vcn.oc1..aaa")]).unwrap();
/// assert_eq!(path, "/20160918/vcns/ocid1.vcn.oc1..aaa");
///
/// // values are encoded as a single segment
/// let path = template.render(&[("vcnId", "a/b c")]).unwrap();
/// assert_eq!(path, "/20160918/vcns/a%2Fb%20c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    template: String,
    pieces: Vec<Piece>,
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidPathTemplate`] for a malformed template.
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        check_path_template(template).map_err(ConfigError::invalid_path)?;

        let mut pieces = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            if open > 0 {
                pieces.push(Piece::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 1..];
            let close = after
                .find('}')
                .ok_or_else(|| ConfigError::invalid_path(format!("unclosed '{{' in {template}")))?;
            let raw = &after[..close];
            let multi = raw.starts_with('+');
            pieces.push(Piece::Param {
                name: raw.trim_start_matches('+').to_string(),
                multi,
            });
            rest = &after[close + 1..];
        }
        if !rest.is_empty() {
            pieces.push(Piece::Literal(rest.to_string()));
        }

        Ok(Self {
            template: template.to_string(),
            pieces,
        })
    }

    /// Returns the template text.
    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Returns parameter names in order of appearance.
    pub fn param_names(&self) -> Vec<&str> {
        self.pieces
            .iter()
            .filter_map(|piece| match piece {
                Piece::Param { name, .. } => Some(name.as_str()),
                Piece::Literal(_) => None,
            })
            .collect()
    }

    /// Substitutes parameters into the template.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingPathParam`] when a placeholder has no
    /// value, [`ConfigError::EmptyPathParam`] when its value is blank and
    /// [`ConfigError::DotSegmentPathParam`] when it is `.` or `..` (for
    /// `{+param}`, when any of its segments is).
    pub fn render(&self, params: &[(&str, &str)]) -> Result<String, ConfigError> {
        let mut out = String::with_capacity(self.template.len());
        for piece in &self.pieces {
            match piece {
                Piece::Literal(text) => out.push_str(text),
                Piece::Param { name, multi } => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| ConfigError::MissingPathParam {
                            param: name.clone(),
                            template: self.template.clone(),
                        })?;
                    if value.trim().is_empty() {
                        return Err(ConfigError::EmptyPathParam { param: name.clone() });
                    }
                    let has_dot_segment = if *multi {
                        value.split('/').any(is_dot_segment)
                    } else {
                        is_dot_segment(value)
                    };
                    if has_dot_segment {
                        return Err(ConfigError::DotSegmentPathParam {
                            param: name.clone(),
                            value: value.to_string(),
                        });
                    }
                    if *multi {
                        let value = if out.ends_with('/') {
                            value.trim_start_matches('/')
                        } else {
                            value
                        };
                        out.extend(utf8_percent_encode(value, MULTI_SEGMENT));
                    } else {
                        out.extend(utf8_percent_encode(value, SEGMENT));
                    }
                }
            }
        }
        Ok(out)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}
