//! Oracle Cloud Infrastructure Core: virtual cloud networks.
//!
//! OCI normally signs every request (draft-cavage HTTP signatures). This
//! client instead sends a pre-signed session token as a bearer token, read
//! from `OCI_SESSION_TOKEN`. Point the base URL at the region you use,
//! e.g. through `CLOUDSDK_BASE_URL`.

mod client;
mod types;

pub use client::{ListVcnsQuery, MAX_PAGE_SIZE, SortBy, SortOrder, VirtualNetworkClient};
pub use types::*;

use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};

pub(crate) const VCNS_PATH: &str = "/20160918/vcns";
pub(crate) const VCN_PATH: &str = "/20160918/vcns/{vcnId}";

/// Defines the OCI Core VCN API.
///
/// ## Endpoints
///
/// | ID | Method | Path | Notes |
/// |----|--------|------|-------|
/// | `CreateVcn` | POST | `/20160918/vcns` | `opc-retry-token` header |
/// | `ListVcns` | GET | `/20160918/vcns` | paginated via `opc-next-page` |
/// | `GetVcn` | GET | `/20160918/vcns/{vcnId}` | |
/// | `UpdateVcn` | PUT | `/20160918/vcns/{vcnId}` | `if-match` header |
/// | `DeleteVcn` | DELETE | `/20160918/vcns/{vcnId}` | 204 on success |
pub fn define_oci_api() -> RestApi {
    RestApi {
        name: "OCI".to_string(),
        description: "Oracle Cloud Infrastructure Core virtual network service".to_string(),
        base_url: "https://iaas.us-ashburn-1.oraclecloud.com".to_string(),
        docs_url: Some("https://docs.oracle.com/en-us/iaas/api/#/en/iaas/20160918/Vcn/".to_string()),
        auth: AuthStrategy::BearerToken { header: None },
        env_auth: vec!["OCI_SESSION_TOKEN".to_string()],
        env_username: None,
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        query: vec![],
        endpoints: vec![
            Endpoint::new("CreateVcn", RestMethod::Post, VCNS_PATH, ApiResponse::json_type("Vcn"))
                .with_description("Creates a new virtual cloud network")
                .with_request("CreateVcnDetails"),
            Endpoint::new("ListVcns", RestMethod::Get, VCNS_PATH, ApiResponse::json_type("Vcn"))
                .with_description("Lists the virtual cloud networks in a compartment")
                .with_query_params([
                    "compartmentId",
                    "limit",
                    "page",
                    "displayName",
                    "sortBy",
                    "sortOrder",
                    "lifecycleState",
                ]),
            Endpoint::new("GetVcn", RestMethod::Get, VCN_PATH, ApiResponse::json_type("Vcn"))
                .with_description("Gets the specified VCN's information"),
            Endpoint::new("UpdateVcn", RestMethod::Put, VCN_PATH, ApiResponse::json_type("Vcn"))
                .with_description("Updates the specified VCN")
                .with_request("UpdateVcnDetails"),
            Endpoint::new("DeleteVcn", RestMethod::Delete, VCN_PATH, ApiResponse::Empty)
                .with_description("Deletes the specified VCN")
                .with_expected_status([200, 204]),
        ],
        module_path: Some("oci".to_string()),
    }
}
