//! Core types for REST API definitions.
//!
//! - [`RestApi`] - The top-level API definition
//! - [`Endpoint`] - Individual API operation definitions
//! - [`RestMethod`] - HTTP method enumeration

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::auth::AuthStrategy;
use crate::error::DefinitionError;
use crate::path::{check_path_template, extract_path_params};
use crate::response::ApiResponse;
use crate::schema::Schema;

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// ```
/// use std::str::FromStr;
/// use cloudsdk_define::RestMethod;
///
/// let method = RestMethod::from_str("PATCH").unwrap();
/// assert_eq!(method, RestMethod::Patch);
/// assert_eq!(RestMethod::Put.to_string(), "PUT");
/// assert!(!RestMethod::Post.is_idempotent());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

impl RestMethod {
    /// Returns `true` if this method typically has a request body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if repeating the request has the same effect as
    /// sending it once. POST and PATCH are not idempotent.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }
}

/// A complete REST API definition.
///
/// ## Examples
///
/// ```
/// use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};
///
/// let api = RestApi {
///     name: "Health".to_string(),
///     description: "A tiny API".to_string(),
///     base_url: "https://api.example.com".to_string(),
///     docs_url: None,
///     auth: AuthStrategy::None,
///     env_auth: vec![],
///     env_username: None,
///     headers: vec![],
///     query: vec![],
///     endpoints: vec![Endpoint::new(
///         "GetHealth",
///         RestMethod::Get,
///         "/health",
///         ApiResponse::json_type("Health"),
///     )],
///     module_path: None,
/// };
///
/// assert!(api.validate().is_ok());
/// assert!(api.endpoint("GetHealth").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestApi {
    /// Unique identifier for this API (e.g., "AzureMonitor").
    pub name: String,
    /// Human-readable description of the API.
    pub description: String,
    /// Base URL for all endpoints (e.g., `https://management.azure.com`).
    pub base_url: String,
    /// Link to API documentation (optional).
    pub docs_url: Option<String>,
    /// Authentication strategy for this API.
    pub auth: AuthStrategy,
    /// Environment variable names for the credential, tried in order.
    ///
    /// For `Basic` auth this holds the password variable.
    pub env_auth: Vec<String>,
    /// Environment variable for the Basic auth username.
    pub env_username: Option<String>,
    /// Default HTTP headers sent with every request.
    ///
    /// Endpoint headers take precedence for matching keys (case-insensitive).
    pub headers: Vec<(String, String)>,
    /// Default query parameters sent with every request.
    ///
    /// Azure Resource Manager APIs put `api-version` here.
    pub query: Vec<(String, String)>,
    /// All endpoints defined for this API.
    pub endpoints: Vec<Endpoint>,
    /// Module the API's models live in (e.g., "azure_monitor").
    pub module_path: Option<String>,
}

impl RestApi {
    /// Looks up an endpoint by its identifier.
    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Returns the module path, falling back to the lowercased name.
    pub fn module(&self) -> String {
        self.module_path
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }

    /// Checks the definition for mistakes that would only surface at
    /// request time.
    ///
    /// ## Errors
    ///
    /// - [`DefinitionError::EmptyBaseUrl`] when `base_url` is blank
    /// - [`DefinitionError::InvalidEndpointId`] for ids that are not identifiers
    /// - [`DefinitionError::DuplicateEndpoint`] for repeated ids
    /// - [`DefinitionError::InvalidPath`] for malformed path templates
    /// - [`DefinitionError::InvalidStatus`] for empty or out-of-range status sets
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.base_url.trim().is_empty() {
            return Err(DefinitionError::EmptyBaseUrl {
                api: self.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        for endpoint in &self.endpoints {
            endpoint.validate()?;
            if !seen.insert(endpoint.id.as_str()) {
                return Err(DefinitionError::DuplicateEndpoint {
                    id: endpoint.id.clone(),
                });
            }
        }

        Ok(())
    }
}

/// A single API operation.
///
/// Paths use `{param}` placeholders; a placeholder written `{+param}` is a
/// multi-segment parameter whose `/` separators are kept verbatim (Azure's
/// `{resourceUri}`).
///
/// ## Examples
///
/// ```
/// use cloudsdk_define::{ApiResponse, Endpoint, RestMethod, Schema};
///
/// let endpoint = Endpoint::new(
///     "GetVcn",
///     RestMethod::Get,
///     "/20160918/vcns/{vcnId}",
///     ApiResponse::json_type("Vcn"),
/// )
/// .with_description("Gets the specified VCN's information.")
/// .with_query_params(["opc-request-id"]);
///
/// assert_eq!(endpoint.path_params(), vec!["vcnId"]);
/// assert_eq!(endpoint.expected_status, vec![200]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Identifier for this endpoint (PascalCase, e.g., "CreateVcn").
    pub id: String,
    /// HTTP method for this endpoint.
    pub method: RestMethod,
    /// Path template (e.g., "/nodes/{uuid}").
    pub path: String,
    /// Human-readable description of what this endpoint does.
    pub description: String,
    /// Request body model (typically `None` for GET/DELETE requests).
    pub request: Option<Schema>,
    /// Expected response type for this endpoint.
    pub response: ApiResponse,
    /// HTTP headers specific to this endpoint.
    pub headers: Vec<(String, String)>,
    /// Names of the query parameters this endpoint accepts.
    pub query_params: Vec<String>,
    /// Status codes treated as success. Anything else is an operation error.
    pub expected_status: Vec<u16>,
}

impl Endpoint {
    /// Creates an endpoint expecting `200 OK` with no body, headers or query.
    pub fn new(
        id: impl Into<String>,
        method: RestMethod,
        path: impl Into<String>,
        response: ApiResponse,
    ) -> Self {
        Self {
            id: id.into(),
            method,
            path: path.into(),
            description: String::new(),
            request: None,
            response,
            headers: vec![],
            query_params: vec![],
            expected_status: vec![200],
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the request body model.
    pub fn with_request(mut self, type_name: impl Into<String>) -> Self {
        self.request = Some(Schema::new(type_name));
        self
    }

    /// Adds a header sent with every call to this endpoint.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the accepted query parameter names.
    pub fn with_query_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query_params = params.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the expected status set.
    pub fn with_expected_status(mut self, statuses: impl Into<Vec<u16>>) -> Self {
        self.expected_status = statuses.into();
        self
    }

    /// Returns path parameter names in the order they appear.
    pub fn path_params(&self) -> Vec<&str> {
        extract_path_params(&self.path)
    }

    /// Returns `true` when `status` is in the expected set.
    pub fn expects(&self, status: u16) -> bool {
        self.expected_status.contains(&status)
    }

    fn validate(&self) -> Result<(), DefinitionError> {
        let mut chars = self.id.chars();
        let valid_id = match chars.next() {
            Some(first) => first.is_alphabetic() && chars.all(|c| c.is_alphanumeric() || c == '_'),
            None => false,
        };
        if !valid_id {
            return Err(DefinitionError::InvalidEndpointId {
                id: self.id.clone(),
            });
        }

        check_path_template(&self.path).map_err(|reason| DefinitionError::InvalidPath {
            endpoint: self.id.clone(),
            path: self.path.clone(),
            reason,
        })?;

        if self.expected_status.is_empty()
            || self.expected_status.iter().any(|s| !(100..=599).contains(s))
        {
            return Err(DefinitionError::InvalidStatus {
                endpoint: self.id.clone(),
                statuses: self.expected_status.clone(),
            });
        }

        if self.request.is_some() && !self.method.has_body() {
            return Err(DefinitionError::UnexpectedBody {
                endpoint: self.id.clone(),
                method: self.method.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn make_api(endpoints: Vec<Endpoint>) -> RestApi {
        RestApi {
            name: "TestApi".to_string(),
            description: "Test API".to_string(),
            base_url: "https://api.example.com".to_string(),
            docs_url: None,
            auth: AuthStrategy::None,
            env_auth: vec![],
            env_username: None,
            headers: vec![],
            query: vec![],
            endpoints,
            module_path: None,
        }
    }

    fn get(id: &str, path: &str) -> Endpoint {
        Endpoint::new(id, RestMethod::Get, path, ApiResponse::json_type("Thing"))
    }

    #[test]
    fn rest_method_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RestMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn rest_method_from_str_invalid() {
        assert!(RestMethod::from_str("INVALID").is_err());
        assert!(RestMethod::from_str("get").is_err()); // Case-sensitive
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn rest_method_iter_all_variants() {
        assert_eq!(RestMethod::iter().count(), 7);
    }

    #[test]
    fn rest_method_idempotency() {
        assert!(RestMethod::Get.is_idempotent());
        assert!(RestMethod::Put.is_idempotent());
        assert!(RestMethod::Delete.is_idempotent());
        assert!(!RestMethod::Post.is_idempotent());
        assert!(!RestMethod::Patch.is_idempotent());
    }

    #[test]
    fn rest_method_serde_roundtrip() {
        let serialized = serde_json::to_string(&RestMethod::Delete).unwrap();
        assert_eq!(serialized, "\"DELETE\"");
        let parsed: RestMethod = serde_json::from_str(&serialized).unwrap();
        assert_eq!(parsed, RestMethod::Delete);
    }

    #[test]
    fn endpoint_builder_defaults() {
        let endpoint = get("ListNodes", "/nodes");
        assert!(endpoint.request.is_none());
        assert!(endpoint.expects(200));
        assert!(!endpoint.expects(204));
    }

    #[test]
    fn endpoint_builder_chaining() {
        let endpoint = Endpoint::new("DeleteVcn", RestMethod::Delete, "/vcns/{vcnId}", ApiResponse::Empty)
            .with_expected_status([204])
            .with_header("if-match", "etag")
            .with_query_params(["page"]);
        assert!(endpoint.expects(204));
        assert_eq!(endpoint.headers.len(), 1);
        assert_eq!(endpoint.query_params, vec!["page"]);
        assert_eq!(endpoint.path_params(), vec!["vcnId"]);
    }

    #[test]
    fn validate_accepts_well_formed_api() {
        let api = make_api(vec![get("ListNodes", "/nodes"), get("GetNode", "/nodes/{uuid}")]);
        assert!(api.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_endpoint() {
        let api = make_api(vec![get("GetNode", "/nodes/{uuid}"), get("GetNode", "/nodes")]);
        assert!(matches!(
            api.validate(),
            Err(DefinitionError::DuplicateEndpoint { id }) if id == "GetNode"
        ));
    }

    #[test]
    fn validate_rejects_bad_endpoint_id() {
        let api = make_api(vec![get("1Node", "/nodes")]);
        assert!(matches!(api.validate(), Err(DefinitionError::InvalidEndpointId { .. })));

        let api = make_api(vec![get("Get-Node", "/nodes")]);
        assert!(matches!(api.validate(), Err(DefinitionError::InvalidEndpointId { .. })));
    }

    #[test]
    fn validate_rejects_unbalanced_path() {
        let api = make_api(vec![get("GetNode", "/nodes/{uuid")]);
        assert!(matches!(api.validate(), Err(DefinitionError::InvalidPath { .. })));
    }

    #[test]
    fn validate_rejects_empty_status_set() {
        let api = make_api(vec![get("GetNode", "/nodes").with_expected_status(Vec::<u16>::new())]);
        assert!(matches!(api.validate(), Err(DefinitionError::InvalidStatus { .. })));
    }

    #[test]
    fn validate_rejects_body_on_get() {
        let api = make_api(vec![get("GetVcn", "/vcns/{vcnId}").with_request("Vcn")]);
        assert!(matches!(
            api.validate(),
            Err(DefinitionError::UnexpectedBody { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_base_url() {
        let mut api = make_api(vec![]);
        api.base_url = "  ".to_string();
        assert!(matches!(api.validate(), Err(DefinitionError::EmptyBaseUrl { .. })));
    }

    #[test]
    fn module_falls_back_to_lowercase_name() {
        let mut api = make_api(vec![]);
        assert_eq!(api.module(), "testapi");
        api.module_path = Some("test_api".to_string());
        assert_eq!(api.module(), "test_api");
    }
}
