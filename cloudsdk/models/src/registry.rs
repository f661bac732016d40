//! Name-based lookup of every model and API definition.
//!
//! Tooling such as the `cloudsdk` CLI works with models it only knows by
//! name. Each [`ModelEntry`] carries the model's field metadata and a
//! function that validates a raw JSON value against it.

use cloudsdk::{Model, ValidationError};
use cloudsdk::validate::validate_value;
use cloudsdk_define::{FieldSpec, RestApi};
use serde_json::Value;

use crate::{azure_monitor, intersight, oci, xclarity};

/// A registered model.
#[derive(Debug, Clone, Copy)]
pub struct ModelEntry {
    /// Name of the API the model belongs to.
    pub api: &'static str,
    /// Schema name.
    pub name: &'static str,
    /// Attribute metadata.
    pub fields: fn() -> &'static [FieldSpec],
    /// Validates a wire hash, returning the first violation.
    pub validate: fn(&Value) -> Result<(), ValidationError>,
}

impl ModelEntry {
    fn of<M: Model>(api: &'static str) -> Self {
        Self {
            api,
            name: M::NAME,
            fields: M::fields,
            validate: validate_model::<M>,
        }
    }

    /// Lists every violation in a wire hash.
    pub fn violations(&self, value: &Value) -> Vec<ValidationError> {
        cloudsdk::validate::collect_violations(self.name, (self.fields)(), value)
    }
}

fn validate_model<M: Model>(value: &Value) -> Result<(), ValidationError> {
    validate_value(M::NAME, M::fields(), value)
}

/// Every API definition.
pub fn apis() -> Vec<RestApi> {
    vec![
        azure_monitor::define_azure_monitor_api(),
        intersight::define_intersight_api(),
        oci::define_oci_api(),
        xclarity::define_xclarity_api(),
    ]
}

/// Finds an API definition by name, ignoring case.
pub fn find_api(name: &str) -> Option<RestApi> {
    apis().into_iter().find(|api| api.name.eq_ignore_ascii_case(name))
}

/// Every model, grouped by API.
pub fn registry() -> Vec<ModelEntry> {
    use azure_monitor as az;
    use intersight as is;

    vec![
        ModelEntry::of::<az::GuestDiagnosticSettingsResource>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettings>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsPatchResource>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsList>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsAssociation>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsAssociationResource>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsAssociationResourcePatch>("AzureMonitor"),
        ModelEntry::of::<az::GuestDiagnosticSettingsAssociationList>("AzureMonitor"),
        ModelEntry::of::<az::DataSource>("AzureMonitor"),
        ModelEntry::of::<az::DataSourceConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::PerformanceCounterConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::EtwProviderConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::EtwEventConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::EventLogConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::SinkConfiguration>("AzureMonitor"),
        ModelEntry::of::<az::ErrorResponse>("AzureMonitor"),
        ModelEntry::of::<is::MoBaseMo>("Intersight"),
        ModelEntry::of::<is::MoMoRef>("Intersight"),
        ModelEntry::of::<is::MoTag>("Intersight"),
        ModelEntry::of::<is::PolicyAbstractPolicy>("Intersight"),
        ModelEntry::of::<is::KubernetesSysConfigPolicyAllOf>("Intersight"),
        ModelEntry::of::<is::KubernetesSysConfigPolicy>("Intersight"),
        ModelEntry::of::<is::KubernetesSysConfigPolicyList>("Intersight"),
        ModelEntry::of::<is::IntersightError>("Intersight"),
        ModelEntry::of::<oci::Vcn>("OCI"),
        ModelEntry::of::<oci::CreateVcnDetails>("OCI"),
        ModelEntry::of::<oci::UpdateVcnDetails>("OCI"),
        ModelEntry::of::<oci::OciError>("OCI"),
        ModelEntry::of::<xclarity::Node>("XClarity"),
        ModelEntry::of::<xclarity::NodeList>("XClarity"),
        ModelEntry::of::<xclarity::NodeUpdate>("XClarity"),
        ModelEntry::of::<xclarity::Firmware>("XClarity"),
        ModelEntry::of::<xclarity::Location>("XClarity"),
        ModelEntry::of::<xclarity::XClarityError>("XClarity"),
    ]
}

/// Finds a model by schema name, ignoring case.
pub fn find_model(name: &str) -> Option<ModelEntry> {
    registry()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_names_are_unique() {
        let entries = registry();
        let names: HashSet<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_every_api_is_valid() {
        for api in apis() {
            assert!(api.validate().is_ok(), "{} is invalid", api.name);
        }
    }

    #[test]
    fn test_every_model_api_is_registered() {
        let api_names: HashSet<_> = apis().into_iter().map(|api| api.name).collect();
        for entry in registry() {
            assert!(api_names.contains(entry.api), "{} has unknown api {}", entry.name, entry.api);
        }
    }

    #[test]
    fn test_endpoint_schemas_are_registered() {
        for api in apis() {
            for endpoint in &api.endpoints {
                let schemas = endpoint.response.schema().into_iter().chain(endpoint.request.as_ref());
                for schema in schemas {
                    assert!(
                        find_model(&schema.type_name).is_some(),
                        "{} refers to unregistered {}",
                        endpoint.id,
                        schema.type_name
                    );
                }
            }
        }
    }

    #[test]
    fn test_find_model_validates() {
        let entry = find_model("vcn").unwrap();
        assert_eq!(entry.name, "Vcn");
        assert!((entry.validate)(&json!({"lifecycleState": "AVAILABLE"})).is_err());
        assert_eq!(entry.violations(&json!({})).len(), 4);
    }

    #[test]
    fn test_find_api_ignores_case() {
        assert_eq!(find_api("xclarity").unwrap().name, "XClarity");
        assert!(find_api("aws").is_none());
    }
}
