//! Guest diagnostic settings resource clients.

use cloudsdk::{ApiClient, ApiError, HttpResponse, RequestParts};
use cloudsdk_define::RestMethod;

use super::types::{
    GuestDiagnosticSettingsAssociationList, GuestDiagnosticSettingsAssociationResource,
    GuestDiagnosticSettingsAssociationResourcePatch, GuestDiagnosticSettingsList,
    GuestDiagnosticSettingsPatchResource, GuestDiagnosticSettingsResource,
};
use super::{
    API_VERSION, ASSOCIATION_PATH, ASSOCIATIONS_BY_RESOURCE_GROUP_PATH, ASSOCIATIONS_PATH,
    SETTINGS_BY_RESOURCE_GROUP_PATH, SETTINGS_PATH, SETTINGS_RESOURCE_PATH,
};

/// Operations on `microsoft.insights/guestDiagnosticSettings`.
///
/// ## Examples
///
/// ```no_run
/// use cloudsdk::ApiClient;
/// use cloudsdk_models::azure_monitor::{define_azure_monitor_api, GuestDiagnosticsSettingsClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::for_api(&define_azure_monitor_api())?.build()?;
/// let settings = GuestDiagnosticsSettingsClient::new(client, "00000000-0000-0000-0000-000000000000");
///
/// let resource = settings.get("rg1", "vm-diagnostics").await?;
/// println!("{}", resource.location);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GuestDiagnosticsSettingsClient {
    client: ApiClient,
    subscription_id: String,
}

impl GuestDiagnosticsSettingsClient {
    pub fn new(client: ApiClient, subscription_id: impl Into<String>) -> Self {
        Self {
            client,
            subscription_id: subscription_id.into(),
        }
    }

    /// Creates or replaces a guest diagnostic setting.
    ///
    /// ## Errors
    ///
    /// Fails with [`ApiError::Validation`] before sending when the body
    /// breaks a constraint, otherwise as [`ApiClient::send`].
    pub async fn create_or_update(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
        parameters: &GuestDiagnosticSettingsResource,
    ) -> Result<GuestDiagnosticSettingsResource, ApiError> {
        self.create_or_update_with_http_info(resource_group_name, diagnostic_settings_name, parameters)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn create_or_update_with_http_info(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
        parameters: &GuestDiagnosticSettingsResource,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsResource>, ApiError> {
        let parts = self
            .settings_request(
                "GuestDiagnosticsSettings_CreateOrUpdate",
                RestMethod::Put,
                resource_group_name,
                diagnostic_settings_name,
            )?
            .expect([200, 201])
            .json_body(parameters)?;
        self.client.send(parts).await
    }

    /// Gets a guest diagnostic setting.
    pub async fn get(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
    ) -> Result<GuestDiagnosticSettingsResource, ApiError> {
        self.get_with_http_info(resource_group_name, diagnostic_settings_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_with_http_info(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsResource>, ApiError> {
        let parts = self.settings_request(
            "GuestDiagnosticsSettings_Get",
            RestMethod::Get,
            resource_group_name,
            diagnostic_settings_name,
        )?;
        self.client.send(parts).await
    }

    /// Updates tags or properties of a guest diagnostic setting.
    pub async fn update(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
        parameters: &GuestDiagnosticSettingsPatchResource,
    ) -> Result<GuestDiagnosticSettingsResource, ApiError> {
        self.update_with_http_info(resource_group_name, diagnostic_settings_name, parameters)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn update_with_http_info(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
        parameters: &GuestDiagnosticSettingsPatchResource,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsResource>, ApiError> {
        let parts = self
            .settings_request(
                "GuestDiagnosticsSettings_Update",
                RestMethod::Patch,
                resource_group_name,
                diagnostic_settings_name,
            )?
            .expect([200, 201])
            .json_body(parameters)?;
        self.client.send(parts).await
    }

    /// Deletes a guest diagnostic setting. `204` means it did not exist.
    pub async fn delete(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
    ) -> Result<(), ApiError> {
        self.delete_with_http_info(resource_group_name, diagnostic_settings_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn delete_with_http_info(
        &self,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
    ) -> Result<HttpResponse<()>, ApiError> {
        let parts = self
            .settings_request(
                "GuestDiagnosticsSettings_Delete",
                RestMethod::Delete,
                resource_group_name,
                diagnostic_settings_name,
            )?
            .expect([200, 204]);
        self.client.send(parts).await
    }

    /// Lists the guest diagnostic settings in the subscription.
    pub async fn list(&self) -> Result<GuestDiagnosticSettingsList, ApiError> {
        self.list_with_http_info().await.map(HttpResponse::into_body)
    }

    pub async fn list_with_http_info(
        &self,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsList>, ApiError> {
        let parts = RequestParts::from_template(
            "GuestDiagnosticsSettings_List",
            RestMethod::Get,
            SETTINGS_PATH,
            &[("subscriptionId", &self.subscription_id)],
        )?
        .query("api-version", API_VERSION);
        self.client.send(parts).await
    }

    /// Lists the guest diagnostic settings in a resource group.
    pub async fn list_by_resource_group(
        &self,
        resource_group_name: &str,
    ) -> Result<GuestDiagnosticSettingsList, ApiError> {
        self.list_by_resource_group_with_http_info(resource_group_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn list_by_resource_group_with_http_info(
        &self,
        resource_group_name: &str,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsList>, ApiError> {
        let parts = RequestParts::from_template(
            "GuestDiagnosticsSettings_ListByResourceGroup",
            RestMethod::Get,
            SETTINGS_BY_RESOURCE_GROUP_PATH,
            &[
                ("subscriptionId", &self.subscription_id),
                ("resourceGroupName", resource_group_name),
            ],
        )?
        .query("api-version", API_VERSION);
        self.client.send(parts).await
    }

    fn settings_request(
        &self,
        operation: &str,
        method: RestMethod,
        resource_group_name: &str,
        diagnostic_settings_name: &str,
    ) -> Result<RequestParts, ApiError> {
        let parts = RequestParts::from_template(
            operation,
            method,
            SETTINGS_RESOURCE_PATH,
            &[
                ("subscriptionId", &self.subscription_id),
                ("resourceGroupName", resource_group_name),
                ("diagnosticSettingsName", diagnostic_settings_name),
            ],
        )?;
        Ok(parts.query("api-version", API_VERSION))
    }
}

/// Operations on `microsoft.insights/guestDiagnosticSettingsAssociation`.
///
/// Associations are extension resources: `resource_uri` is the full ARM id
/// of the target resource, e.g.
/// `subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.Compute/virtualMachines/{vm}`,
/// and is inserted into the path with its `/` separators intact.
#[derive(Debug, Clone)]
pub struct GuestDiagnosticsSettingsAssociationClient {
    client: ApiClient,
    subscription_id: String,
}

impl GuestDiagnosticsSettingsAssociationClient {
    /// `subscription_id` is only used by the list operations.
    pub fn new(client: ApiClient, subscription_id: impl Into<String>) -> Self {
        Self {
            client,
            subscription_id: subscription_id.into(),
        }
    }

    /// Creates or replaces an association.
    pub async fn create_or_update(
        &self,
        resource_uri: &str,
        association_name: &str,
        diagnostic_settings_association: &GuestDiagnosticSettingsAssociationResource,
    ) -> Result<GuestDiagnosticSettingsAssociationResource, ApiError> {
        self.create_or_update_with_http_info(resource_uri, association_name, diagnostic_settings_association)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn create_or_update_with_http_info(
        &self,
        resource_uri: &str,
        association_name: &str,
        diagnostic_settings_association: &GuestDiagnosticSettingsAssociationResource,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsAssociationResource>, ApiError> {
        let parts = association_request(
            "GuestDiagnosticsSettingsAssociation_CreateOrUpdate",
            RestMethod::Put,
            resource_uri,
            association_name,
        )?
        .expect([200, 201])
        .json_body(diagnostic_settings_association)?;
        self.client.send(parts).await
    }

    /// Gets an association.
    pub async fn get(
        &self,
        resource_uri: &str,
        association_name: &str,
    ) -> Result<GuestDiagnosticSettingsAssociationResource, ApiError> {
        self.get_with_http_info(resource_uri, association_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn get_with_http_info(
        &self,
        resource_uri: &str,
        association_name: &str,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsAssociationResource>, ApiError> {
        let parts = association_request(
            "GuestDiagnosticsSettingsAssociation_Get",
            RestMethod::Get,
            resource_uri,
            association_name,
        )?;
        self.client.send(parts).await
    }

    /// Deletes an association.
    pub async fn delete(&self, resource_uri: &str, association_name: &str) -> Result<(), ApiError> {
        self.delete_with_http_info(resource_uri, association_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn delete_with_http_info(
        &self,
        resource_uri: &str,
        association_name: &str,
    ) -> Result<HttpResponse<()>, ApiError> {
        let parts = association_request(
            "GuestDiagnosticsSettingsAssociation_Delete",
            RestMethod::Delete,
            resource_uri,
            association_name,
        )?
        .expect([200, 204]);
        self.client.send(parts).await
    }

    /// Updates tags or the referenced setting of an association.
    pub async fn update(
        &self,
        resource_uri: &str,
        association_name: &str,
        parameters: &GuestDiagnosticSettingsAssociationResourcePatch,
    ) -> Result<GuestDiagnosticSettingsAssociationResource, ApiError> {
        self.update_with_http_info(resource_uri, association_name, parameters)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn update_with_http_info(
        &self,
        resource_uri: &str,
        association_name: &str,
        parameters: &GuestDiagnosticSettingsAssociationResourcePatch,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsAssociationResource>, ApiError> {
        let parts = association_request(
            "GuestDiagnosticsSettingsAssociation_Update",
            RestMethod::Patch,
            resource_uri,
            association_name,
        )?
        .json_body(parameters)?;
        self.client.send(parts).await
    }

    /// Lists the associations in the subscription.
    pub async fn list(&self) -> Result<GuestDiagnosticSettingsAssociationList, ApiError> {
        self.list_with_http_info().await.map(HttpResponse::into_body)
    }

    pub async fn list_with_http_info(
        &self,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsAssociationList>, ApiError> {
        let parts = RequestParts::from_template(
            "GuestDiagnosticsSettingsAssociation_List",
            RestMethod::Get,
            ASSOCIATIONS_PATH,
            &[("subscriptionId", &self.subscription_id)],
        )?
        .query("api-version", API_VERSION);
        self.client.send(parts).await
    }

    /// Lists the associations in a resource group.
    pub async fn list_by_resource_group(
        &self,
        resource_group_name: &str,
    ) -> Result<GuestDiagnosticSettingsAssociationList, ApiError> {
        self.list_by_resource_group_with_http_info(resource_group_name)
            .await
            .map(HttpResponse::into_body)
    }

    pub async fn list_by_resource_group_with_http_info(
        &self,
        resource_group_name: &str,
    ) -> Result<HttpResponse<GuestDiagnosticSettingsAssociationList>, ApiError> {
        let parts = RequestParts::from_template(
            "GuestDiagnosticsSettingsAssociation_ListByResourceGroup",
            RestMethod::Get,
            ASSOCIATIONS_BY_RESOURCE_GROUP_PATH,
            &[
                ("subscriptionId", &self.subscription_id),
                ("resourceGroupName", resource_group_name),
            ],
        )?
        .query("api-version", API_VERSION);
        self.client.send(parts).await
    }
}

fn association_request(
    operation: &str,
    method: RestMethod,
    resource_uri: &str,
    association_name: &str,
) -> Result<RequestParts, ApiError> {
    let parts = RequestParts::from_template(
        operation,
        method,
        ASSOCIATION_PATH,
        &[("resourceUri", resource_uri), ("associationName", association_name)],
    )?;
    Ok(parts.query("api-version", API_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_request_path() {
        let client = ApiClient::new(url::Url::parse("https://management.azure.com").unwrap()).unwrap();
        let settings = GuestDiagnosticsSettingsClient::new(client, "sub-1");
        let parts = settings
            .settings_request("op", RestMethod::Get, "rg 1", "diag")
            .unwrap();
        assert_eq!(
            parts.path,
            "/subscriptions/sub-1/resourceGroups/rg%201/providers/microsoft.insights/guestDiagnosticSettings/diag"
        );
        assert_eq!(parts.query, vec![("api-version".to_string(), API_VERSION.to_string())]);
    }

    #[test]
    fn test_association_keeps_resource_uri_slashes() {
        let parts = association_request(
            "op",
            RestMethod::Get,
            "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm1",
            "assoc",
        )
        .unwrap();
        assert_eq!(
            parts.path,
            "/subscriptions/s/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/vm1/providers/microsoft.insights/guestDiagnosticSettingsAssociation/assoc"
        );
    }

    #[test]
    fn test_blank_name_is_rejected_locally() {
        let err = association_request("op", RestMethod::Get, "subscriptions/s", " ").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
