//! Errors raised while checking API definitions.

use thiserror::Error;

/// A mistake in a [`RestApi`](crate::RestApi) definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// The API has no base URL.
    #[error("API '{api}' has an empty base URL")]
    EmptyBaseUrl {
        /// The API name.
        api: String,
    },

    /// An endpoint id is not a valid identifier.
    #[error("Invalid endpoint ID '{id}': must start with a letter and contain only letters, digits or '_'")]
    InvalidEndpointId {
        /// The offending id.
        id: String,
    },

    /// Two endpoints share an id.
    #[error("Duplicate endpoint ID: {id}")]
    DuplicateEndpoint {
        /// The duplicated id.
        id: String,
    },

    /// A path template is malformed.
    #[error("Invalid path template '{path}' for endpoint '{endpoint}': {reason}")]
    InvalidPath {
        /// The endpoint id.
        endpoint: String,
        /// The template.
        path: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The expected status set is empty or holds non-HTTP codes.
    #[error("Invalid expected status set for endpoint '{endpoint}': {statuses:?}")]
    InvalidStatus {
        /// The endpoint id.
        endpoint: String,
        /// The configured statuses.
        statuses: Vec<u16>,
    },

    /// A request schema is declared on a method that carries no body.
    #[error("Endpoint '{endpoint}' declares a request body but {method} requests have none")]
    UnexpectedBody {
        /// The endpoint id.
        endpoint: String,
        /// The HTTP method.
        method: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_endpoint_display() {
        let err = DefinitionError::DuplicateEndpoint {
            id: "GetVcn".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate endpoint ID: GetVcn");
    }

    #[test]
    fn invalid_path_display_includes_reason() {
        let err = DefinitionError::InvalidPath {
            endpoint: "GetNode".to_string(),
            path: "/nodes/{uuid".to_string(),
            reason: "unclosed '{' at offset 7".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("GetNode"));
        assert!(display.contains("unclosed"));
    }
}
