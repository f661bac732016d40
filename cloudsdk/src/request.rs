//! Request construction.

use cloudsdk_define::{Endpoint, RestMethod};
use serde_json::Value;

use crate::error::{ApiError, ConfigError};
use crate::model::Model;
use crate::path::PathTemplate;

/// Everything a resource-client operation hands to the transport.
///
/// ## Examples
///
/// ```
/// use cloudsdk::RequestParts;
/// use cloudsdk_define::RestMethod;
///
/// let parts = RequestParts::new("list_vcns", RestMethod::Get, "/20160918/vcns")
///     .query("compartmentId", "ocid1.compartment.oc1..aaa")
///     .query_opt("limit", Some(10))
///     .query_opt("page", None::<String>);
///
/// assert_eq!(parts.query.len(), 2);
/// assert_eq!(parts.expected_status, vec![200]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
    /// Operation id, used in errors and tracing.
    pub operation: String,
    /// HTTP method.
    pub method: RestMethod,
    /// Rendered path, relative to the client base URL.
    pub path: String,
    /// Query pairs in order.
    pub query: Vec<(String, String)>,
    /// Operation-specific headers; these win over client defaults.
    pub headers: Vec<(String, String)>,
    /// JSON body.
    pub body: Option<Value>,
    /// Statuses that count as success.
    pub expected_status: Vec<u16>,
}

impl RequestParts {
    /// Creates a request expecting `200`.
    pub fn new(operation: impl Into<String>, method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            expected_status: vec![200],
        }
    }

    /// Creates a request whose path is rendered from a template.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] when the template is malformed or a path
    /// parameter is missing or empty.
    pub fn from_template(
        operation: impl Into<String>,
        method: RestMethod,
        template: &str,
        params: &[(&str, &str)],
    ) -> Result<Self, ConfigError> {
        let path = PathTemplate::parse(template)?.render(params)?;
        Ok(Self::new(operation, method, path))
    }

    /// Builds a request from an endpoint definition, rendering its path
    /// template and copying its static headers and expected statuses.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] when the template is malformed or a path
    /// parameter is missing or empty.
    pub fn from_endpoint(endpoint: &Endpoint, params: &[(&str, &str)]) -> Result<Self, ConfigError> {
        let mut parts = Self::from_template(endpoint.id.clone(), endpoint.method, &endpoint.path, params)?;
        parts.headers = endpoint.headers.clone();
        parts.expected_status = endpoint.expected_status.clone();
        Ok(parts)
    }

    /// Appends a query pair.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends a query pair when the value is present.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a header when the value is present.
    pub fn header_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Sets the statuses that count as success.
    pub fn expect(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.expected_status = statuses.into();
        self
    }

    /// Validates a model and attaches it as the JSON body.
    ///
    /// ## Errors
    ///
    /// Returns [`ApiError::Validation`] when the model breaks a constraint;
    /// nothing is sent in that case.
    pub fn json_body<M: Model>(mut self, body: &M) -> Result<Self, ApiError> {
        body.validate()?;
        self.body = Some(body.to_value()?);
        Ok(self)
    }

    /// Returns `true` if the status is in the expected set.
    pub fn expects(&self, status: u16) -> bool {
        self.expected_status.contains(&status)
    }

    /// Returns `true` if the request may be sent again after a failure:
    /// the method is idempotent or an `opc-retry-token` makes it so.
    pub fn is_replayable(&self) -> bool {
        self.method.is_idempotent()
            || self
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("opc-retry-token"))
    }
}

#[cfg(test)]
mod tests {
    use cloudsdk_define::ApiResponse;

    use super::*;

    #[test]
    fn test_from_endpoint_renders_path() {
        let endpoint = Endpoint::new("get_node", RestMethod::Get, "/nodes/{uuid}", ApiResponse::json_type("Node"))
            .with_header("Accept", "application/json");
        let parts = RequestParts::from_endpoint(&endpoint, &[("uuid", "ABC")]).unwrap();
        assert_eq!(parts.path, "/nodes/ABC");
        assert_eq!(parts.operation, "get_node");
        assert_eq!(parts.headers, vec![("Accept".to_string(), "application/json".to_string())]);
        assert!(parts.expects(200));
        assert!(!parts.expects(201));
    }

    #[test]
    fn test_from_endpoint_missing_param() {
        let endpoint = Endpoint::new("get_node", RestMethod::Get, "/nodes/{uuid}", ApiResponse::Empty);
        assert!(RequestParts::from_endpoint(&endpoint, &[]).is_err());
    }

    #[test]
    fn test_from_template_rejects_blank_param() {
        let err = RequestParts::from_template("get_vcn", RestMethod::Get, "/20160918/vcns/{vcnId}", &[("vcnId", "")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPathParam { .. }));
    }

    #[test]
    fn test_replayable() {
        let post = RequestParts::new("create_vcn", RestMethod::Post, "/20160918/vcns");
        assert!(!post.is_replayable());
        assert!(post.header("opc-retry-token", "t1").is_replayable());
        assert!(RequestParts::new("delete_vcn", RestMethod::Delete, "/x").is_replayable());
    }

    #[test]
    fn test_optional_headers_and_expectations() {
        let parts = RequestParts::new("update_vcn", RestMethod::Put, "/x")
            .header_opt("if-match", Some("etag-1"))
            .header_opt("opc-request-id", None::<String>)
            .expect([200, 204]);
        assert_eq!(parts.headers.len(), 1);
        assert!(parts.expects(204));
    }
}
