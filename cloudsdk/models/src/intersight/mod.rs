//! Cisco Intersight Kubernetes system config policies.
//!
//! Authentication uses a bearer token from `INTERSIGHT_TOKEN`. Intersight's
//! HTTP-signature scheme is not supported; obtain a session token out of
//! band.

mod client;
mod timezones;
mod types;

pub use client::{KubernetesApi, ListQuery};
pub use timezones::TIMEZONES;
pub use types::*;

use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};

pub(crate) const SYS_CONFIG_POLICIES_PATH: &str = "/api/v1/kubernetes/SysConfigPolicies";
pub(crate) const SYS_CONFIG_POLICY_PATH: &str = "/api/v1/kubernetes/SysConfigPolicies/{Moid}";

/// Defines the Intersight Kubernetes API subset.
///
/// ## Endpoints
///
/// | ID | Method | Path |
/// |----|--------|------|
/// | `CreateKubernetesSysConfigPolicy` | POST | `/api/v1/kubernetes/SysConfigPolicies` |
/// | `GetKubernetesSysConfigPolicyList` | GET | `/api/v1/kubernetes/SysConfigPolicies` |
/// | `GetKubernetesSysConfigPolicyByMoid` | GET | `/api/v1/kubernetes/SysConfigPolicies/{Moid}` |
/// | `PatchKubernetesSysConfigPolicy` | PATCH | `/api/v1/kubernetes/SysConfigPolicies/{Moid}` |
/// | `UpdateKubernetesSysConfigPolicy` | POST | `/api/v1/kubernetes/SysConfigPolicies/{Moid}` |
/// | `DeleteKubernetesSysConfigPolicy` | DELETE | `/api/v1/kubernetes/SysConfigPolicies/{Moid}` |
pub fn define_intersight_api() -> RestApi {
    RestApi {
        name: "Intersight".to_string(),
        description: "Cisco Intersight Kubernetes policies".to_string(),
        base_url: "https://intersight.com".to_string(),
        docs_url: Some("https://intersight.com/apidocs/apirefs/kubernetes/SysConfigPolicies/model/".to_string()),
        auth: AuthStrategy::BearerToken { header: None },
        env_auth: vec!["INTERSIGHT_TOKEN".to_string()],
        env_username: None,
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        query: vec![],
        endpoints: vec![
            Endpoint::new(
                "CreateKubernetesSysConfigPolicy",
                RestMethod::Post,
                SYS_CONFIG_POLICIES_PATH,
                ApiResponse::json_type("KubernetesSysConfigPolicy"),
            )
            .with_description("Create a 'kubernetes.SysConfigPolicy' resource")
            .with_request("KubernetesSysConfigPolicy"),
            Endpoint::new(
                "GetKubernetesSysConfigPolicyList",
                RestMethod::Get,
                SYS_CONFIG_POLICIES_PATH,
                ApiResponse::json_type("KubernetesSysConfigPolicyList"),
            )
            .with_description("Read a 'kubernetes.SysConfigPolicy' resource list")
            .with_query_params([
                "$filter",
                "$orderby",
                "$top",
                "$skip",
                "$select",
                "$expand",
                "$apply",
                "$count",
                "$inlinecount",
                "at",
            ]),
            Endpoint::new(
                "GetKubernetesSysConfigPolicyByMoid",
                RestMethod::Get,
                SYS_CONFIG_POLICY_PATH,
                ApiResponse::json_type("KubernetesSysConfigPolicy"),
            )
            .with_description("Read a 'kubernetes.SysConfigPolicy' resource"),
            Endpoint::new(
                "PatchKubernetesSysConfigPolicy",
                RestMethod::Patch,
                SYS_CONFIG_POLICY_PATH,
                ApiResponse::json_type("KubernetesSysConfigPolicy"),
            )
            .with_description("Update a 'kubernetes.SysConfigPolicy' resource")
            .with_request("KubernetesSysConfigPolicy"),
            Endpoint::new(
                "UpdateKubernetesSysConfigPolicy",
                RestMethod::Post,
                SYS_CONFIG_POLICY_PATH,
                ApiResponse::json_type("KubernetesSysConfigPolicy"),
            )
            .with_description("Update a 'kubernetes.SysConfigPolicy' resource")
            .with_request("KubernetesSysConfigPolicy"),
            Endpoint::new(
                "DeleteKubernetesSysConfigPolicy",
                RestMethod::Delete,
                SYS_CONFIG_POLICY_PATH,
                ApiResponse::Empty,
            )
            .with_description("Delete a 'kubernetes.SysConfigPolicy' resource"),
        ],
        module_path: Some("intersight".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_is_valid() {
        let api = define_intersight_api();
        assert!(api.validate().is_ok());
        assert_eq!(
            api.endpoint("GetKubernetesSysConfigPolicyByMoid").unwrap().path_params(),
            vec!["Moid"]
        );
    }
}
