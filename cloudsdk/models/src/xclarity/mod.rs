//! Lenovo XClarity Administrator node management.
//!
//! XClarity uses HTTP Basic authentication with credentials from
//! `XCLARITY_USERNAME` and `XCLARITY_PASSWORD`. There is no public endpoint;
//! set the management server URL with `CLOUDSDK_BASE_URL` or a config file.

mod client;
mod types;

pub use client::NodesApi;
pub use types::*;

use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};

pub(crate) const NODES_PATH: &str = "/nodes";
pub(crate) const NODE_PATH: &str = "/nodes/{uuid}";

/// Defines the XClarity nodes API.
///
/// ## Endpoints
///
/// | ID | Method | Path |
/// |----|--------|------|
/// | `ListNodes` | GET | `/nodes` |
/// | `GetNode` | GET | `/nodes/{uuid}` |
/// | `UpdateNode` | PUT | `/nodes/{uuid}` |
pub fn define_xclarity_api() -> RestApi {
    RestApi {
        name: "XClarity".to_string(),
        description: "Lenovo XClarity Administrator REST API".to_string(),
        base_url: "https://localhost".to_string(),
        docs_url: Some("https://pubs.lenovo.com/lxca_scripting/rest_apis".to_string()),
        auth: AuthStrategy::Basic,
        env_auth: vec!["XCLARITY_PASSWORD".to_string()],
        env_username: Some("XCLARITY_USERNAME".to_string()),
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        query: vec![],
        endpoints: vec![
            Endpoint::new("ListNodes", RestMethod::Get, NODES_PATH, ApiResponse::json_type("NodeList"))
                .with_description("Retrieves properties for all managed servers")
                .with_query_params(["includeAttributes"]),
            Endpoint::new("GetNode", RestMethod::Get, NODE_PATH, ApiResponse::json_type("Node"))
                .with_description("Retrieves properties for a managed server"),
            Endpoint::new("UpdateNode", RestMethod::Put, NODE_PATH, ApiResponse::Empty)
                .with_description("Modifies properties or performs power actions on a server")
                .with_request("NodeUpdate")
                .with_expected_status([200, 204]),
        ],
        module_path: Some("xclarity".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_is_valid() {
        let api = define_xclarity_api();
        assert!(api.validate().is_ok());
        assert_eq!(api.auth, AuthStrategy::Basic);
    }
}
