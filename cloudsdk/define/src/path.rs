//! Path template helpers.
//!
//! Templates use `{param}` placeholders. A `{+param}` placeholder marks a
//! parameter whose value may span several path segments.

/// Extracts parameter names from a path template.
///
/// The `+` marker of multi-segment parameters is not part of the name.
///
/// ## Examples
///
/// ```
/// use cloudsdk_define::path::extract_path_params;
///
/// assert_eq!(extract_path_params("/nodes"), Vec::<&str>::new());
/// assert_eq!(extract_path_params("/nodes/{uuid}"), vec!["uuid"]);
/// assert_eq!(
///     extract_path_params("/{+resourceUri}/providers/x/{name}"),
///     vec!["resourceUri", "name"]
/// );
/// ```
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut start = None;

    for (idx, c) in path.char_indices() {
        if c == '{' {
            start = Some(idx + 1);
        } else if c == '}' {
            if let Some(pos) = start.take() {
                let param = path[pos..idx].trim_start_matches('+');
                if !param.is_empty() {
                    params.push(param);
                }
            }
        }
    }

    params
}

/// Checks that a path template is well formed.
///
/// A template must start with `/`, braces must be balanced and not nested,
/// and every placeholder must have a non-empty name.
///
/// ## Errors
///
/// Returns a human-readable reason when the template is malformed.
pub fn check_path_template(path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err("path must start with '/'".to_string());
    }

    let mut open: Option<usize> = None;
    for (idx, c) in path.char_indices() {
        match (c, open) {
            ('{', Some(_)) => return Err(format!("nested '{{' at offset {idx}")),
            ('{', None) => open = Some(idx),
            ('}', None) => return Err(format!("unmatched '}}' at offset {idx}")),
            ('}', Some(start)) => {
                let name = path[start + 1..idx].trim_start_matches('+');
                if name.is_empty() {
                    return Err(format!("empty parameter name at offset {start}"));
                }
                open = None;
            }
            _ => {}
        }
    }

    match open {
        Some(start) => Err(format!("unclosed '{{' at offset {start}")),
        None => Ok(()),
    }
}
