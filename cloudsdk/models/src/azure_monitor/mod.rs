//! Azure Monitor guest diagnostic settings (API version `2018-06-01-preview`).
//!
//! Requests go to Azure Resource Manager with an Azure AD bearer token,
//! read from `AZURE_ACCESS_TOKEN` (or `AZURE_TOKEN`) unless set on the
//! client builder.

mod client;
mod types;

pub use client::{GuestDiagnosticsSettingsAssociationClient, GuestDiagnosticsSettingsClient};
pub use types::*;

use cloudsdk_define::{ApiResponse, AuthStrategy, Endpoint, RestApi, RestMethod};

/// Value of the `api-version` query parameter on every call.
pub const API_VERSION: &str = "2018-06-01-preview";

pub(crate) const SETTINGS_PATH: &str =
    "/subscriptions/{subscriptionId}/providers/microsoft.insights/guestDiagnosticSettings";
pub(crate) const SETTINGS_BY_RESOURCE_GROUP_PATH: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/microsoft.insights/guestDiagnosticSettings";
pub(crate) const SETTINGS_RESOURCE_PATH: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/microsoft.insights/guestDiagnosticSettings/{diagnosticSettingsName}";
pub(crate) const ASSOCIATION_PATH: &str =
    "/{+resourceUri}/providers/microsoft.insights/guestDiagnosticSettingsAssociation/{associationName}";
pub(crate) const ASSOCIATIONS_PATH: &str =
    "/subscriptions/{subscriptionId}/providers/microsoft.insights/guestDiagnosticSettingsAssociations";
pub(crate) const ASSOCIATIONS_BY_RESOURCE_GROUP_PATH: &str = "/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/microsoft.insights/guestDiagnosticSettingsAssociations";

/// Defines the Azure Monitor guest diagnostics API.
///
/// ## Endpoints
///
/// | ID | Method | Path | Statuses |
/// |----|--------|------|----------|
/// | `GuestDiagnosticsSettings_CreateOrUpdate` | PUT | `.../guestDiagnosticSettings/{diagnosticSettingsName}` | 200, 201 |
/// | `GuestDiagnosticsSettings_Get` | GET | `.../guestDiagnosticSettings/{diagnosticSettingsName}` | 200 |
/// | `GuestDiagnosticsSettings_Update` | PATCH | `.../guestDiagnosticSettings/{diagnosticSettingsName}` | 200, 201 |
/// | `GuestDiagnosticsSettings_Delete` | DELETE | `.../guestDiagnosticSettings/{diagnosticSettingsName}` | 200, 204 |
/// | `GuestDiagnosticsSettings_List` | GET | `/subscriptions/{subscriptionId}/.../guestDiagnosticSettings` | 200 |
/// | `GuestDiagnosticsSettings_ListByResourceGroup` | GET | `.../resourceGroups/{resourceGroupName}/.../guestDiagnosticSettings` | 200 |
/// | `GuestDiagnosticsSettingsAssociation_CreateOrUpdate` | PUT | `/{resourceUri}/.../guestDiagnosticSettingsAssociation/{associationName}` | 200, 201 |
/// | `GuestDiagnosticsSettingsAssociation_Get` | GET | same | 200 |
/// | `GuestDiagnosticsSettingsAssociation_Update` | PATCH | same | 200 |
/// | `GuestDiagnosticsSettingsAssociation_Delete` | DELETE | same | 200, 204 |
/// | `GuestDiagnosticsSettingsAssociation_List` | GET | `/subscriptions/{subscriptionId}/.../guestDiagnosticSettingsAssociations` | 200 |
/// | `GuestDiagnosticsSettingsAssociation_ListByResourceGroup` | GET | `.../resourceGroups/{resourceGroupName}/.../guestDiagnosticSettingsAssociations` | 200 |
pub fn define_azure_monitor_api() -> RestApi {
    RestApi {
        name: "AzureMonitor".to_string(),
        description: "Azure Monitor guest diagnostic settings".to_string(),
        base_url: "https://management.azure.com".to_string(),
        docs_url: Some(
            "https://learn.microsoft.com/en-us/rest/api/monitor/guest-diagnostics-settings".to_string(),
        ),
        auth: AuthStrategy::BearerToken { header: None },
        env_auth: vec!["AZURE_ACCESS_TOKEN".to_string(), "AZURE_TOKEN".to_string()],
        env_username: None,
        headers: vec![("Accept".to_string(), "application/json".to_string())],
        query: vec![("api-version".to_string(), API_VERSION.to_string())],
        endpoints: vec![
            Endpoint::new(
                "GuestDiagnosticsSettings_CreateOrUpdate",
                RestMethod::Put,
                SETTINGS_RESOURCE_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsResource"),
            )
            .with_description("Creates or updates guest diagnostic settings")
            .with_request("GuestDiagnosticSettingsResource")
            .with_expected_status([200, 201]),
            Endpoint::new(
                "GuestDiagnosticsSettings_Get",
                RestMethod::Get,
                SETTINGS_RESOURCE_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsResource"),
            )
            .with_description("Gets guest diagnostic settings"),
            Endpoint::new(
                "GuestDiagnosticsSettings_Update",
                RestMethod::Patch,
                SETTINGS_RESOURCE_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsResource"),
            )
            .with_description("Updates tags or properties of guest diagnostic settings")
            .with_request("GuestDiagnosticSettingsPatchResource")
            .with_expected_status([200, 201]),
            Endpoint::new(
                "GuestDiagnosticsSettings_Delete",
                RestMethod::Delete,
                SETTINGS_RESOURCE_PATH,
                ApiResponse::Empty,
            )
            .with_description("Deletes guest diagnostic settings")
            .with_expected_status([200, 204]),
            Endpoint::new(
                "GuestDiagnosticsSettings_List",
                RestMethod::Get,
                SETTINGS_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsList"),
            )
            .with_description("Lists guest diagnostic settings in a subscription"),
            Endpoint::new(
                "GuestDiagnosticsSettings_ListByResourceGroup",
                RestMethod::Get,
                SETTINGS_BY_RESOURCE_GROUP_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsList"),
            )
            .with_description("Lists guest diagnostic settings in a resource group"),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_CreateOrUpdate",
                RestMethod::Put,
                ASSOCIATION_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsAssociationResource"),
            )
            .with_description("Associates guest diagnostic settings with a resource")
            .with_request("GuestDiagnosticSettingsAssociationResource")
            .with_expected_status([200, 201]),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_Get",
                RestMethod::Get,
                ASSOCIATION_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsAssociationResource"),
            )
            .with_description("Gets a guest diagnostic settings association"),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_Update",
                RestMethod::Patch,
                ASSOCIATION_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsAssociationResource"),
            )
            .with_description("Updates a guest diagnostic settings association")
            .with_request("GuestDiagnosticSettingsAssociationResourcePatch"),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_Delete",
                RestMethod::Delete,
                ASSOCIATION_PATH,
                ApiResponse::Empty,
            )
            .with_description("Deletes a guest diagnostic settings association")
            .with_expected_status([200, 204]),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_List",
                RestMethod::Get,
                ASSOCIATIONS_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsAssociationList"),
            )
            .with_description("Lists guest diagnostic settings associations in a subscription"),
            Endpoint::new(
                "GuestDiagnosticsSettingsAssociation_ListByResourceGroup",
                RestMethod::Get,
                ASSOCIATIONS_BY_RESOURCE_GROUP_PATH,
                ApiResponse::json_type("GuestDiagnosticSettingsAssociationList"),
            )
            .with_description("Lists guest diagnostic settings associations in a resource group"),
        ],
        module_path: Some("azure_monitor".to_string()),
    }
}
