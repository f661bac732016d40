//! Azure Monitor guest diagnostic settings types.
//!
//! Models for the `microsoft.insights` guest diagnostic settings resources,
//! API version `2018-06-01-preview`. Wire keys are camelCase; ARM resource
//! envelopes carry the payload under `properties`.

use std::collections::BTreeMap;

use cloudsdk::Model;
use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

/// ISO 8601 duration such as `PT1M` or `P1DT12H`. At least one component is
/// required, and a `T` must be followed by a time component.
const ISO8601_DURATION: &str = concat!(
    r"^P(\d+D(T(\d+H(\d+M)?(\d+(\.\d+)?S)?|\d+M(\d+(\.\d+)?S)?|\d+(\.\d+)?S))?",
    r"|T(\d+H(\d+M)?(\d+(\.\d+)?S)?|\d+M(\d+(\.\d+)?S)?|\d+(\.\d+)?S))$"
);

// =============================================================================
// Enums
// =============================================================================

/// Operating system of the virtual machines a setting targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum OsType {
    Windows,
    Linux,
}

/// Kind of data collected by a [`DataSource`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum DataSourceKind {
    /// Performance counters, see [`PerformanceCounterConfiguration`].
    PerformanceCounter,
    /// Event Tracing for Windows providers.
    #[serde(rename = "ETWProviders")]
    #[strum(serialize = "ETWProviders")]
    EtwProviders,
    /// Windows event logs.
    WindowsEventLogs,
}

/// Destination of collected data.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum SinkKind {
    EventHub,
    ApplicationInsights,
    LogAnalytics,
}

// =============================================================================
// Settings
// =============================================================================

/// An ARM resource holding a guest diagnostic setting.
///
/// ## Example
///
/// ```json
/// {
///   "location": "westus",
///   "tags": {"team": "ops"},
///   "properties": {
///     "osType": "Windows",
///     "dataSources": [{
///       "kind": "PerformanceCounter",
///       "configuration": {"perfCounters": [{"name": "\\Processor(_Total)\\% Processor Time", "samplingPeriod": "PT1M"}]},
///       "sinks": [{"kind": "LogAnalytics"}]
///     }]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestDiagnosticSettingsResource {
    /// Azure resource id (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Resource name (read-only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Resource type (read-only).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    /// Resource location.
    pub location: String,

    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    /// The diagnostic settings.
    pub properties: GuestDiagnosticSettings,
}

impl GuestDiagnosticSettingsResource {
    /// Creates a resource with the required attributes.
    pub fn new(location: impl Into<String>, properties: GuestDiagnosticSettings) -> Self {
        Self {
            id: None,
            name: None,
            resource_type: None,
            location: location.into(),
            tags: None,
            properties,
        }
    }
}

impl Model for GuestDiagnosticSettingsResource {
    const NAME: &'static str = "GuestDiagnosticSettingsResource";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("id", "id", FieldKind::String),
            FieldSpec::new("name", "name", FieldKind::String),
            FieldSpec::new("resource_type", "type", FieldKind::String),
            FieldSpec::new("location", "location", FieldKind::String).required(),
            FieldSpec::new("tags", "tags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new(
                "properties",
                "properties",
                FieldKind::Model("GuestDiagnosticSettings", <GuestDiagnosticSettings as Model>::fields),
            )
            .required(),
        ];
        F
    }
}

/// Guest diagnostic setting content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDiagnosticSettings {
    /// Operating system type of the targeted machines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<OsType>,

    /// What to collect and where to send it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<DataSource>>,

    /// Proxy used by the guest agent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_setting: Option<String>,
}

impl Model for GuestDiagnosticSettings {
    const NAME: &'static str = "GuestDiagnosticSettings";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("os_type", "osType", FieldKind::Enum)
                .with(&[Constraint::OneOf(<OsType as VariantNames>::VARIANTS)]),
            FieldSpec::new(
                "data_sources",
                "dataSources",
                FieldKind::Array(&FieldKind::Model("DataSource", <DataSource as Model>::fields)),
            ),
            FieldSpec::new("proxy_setting", "proxySetting", FieldKind::String),
        ];
        F
    }
}

/// Patch body for a guest diagnostic setting: only tags and properties
/// can change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestDiagnosticSettingsPatchResource {
    /// Resource tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    /// Replacement settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<GuestDiagnosticSettings>,
}

impl Model for GuestDiagnosticSettingsPatchResource {
    const NAME: &'static str = "GuestDiagnosticSettingsPatchResource";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("tags", "tags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new(
                "properties",
                "properties",
                FieldKind::Model("GuestDiagnosticSettings", <GuestDiagnosticSettings as Model>::fields),
            ),
        ];
        F
    }
}

/// A page of guest diagnostic settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDiagnosticSettingsList {
    /// The settings on this page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<GuestDiagnosticSettingsResource>>,

    /// URL of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl Model for GuestDiagnosticSettingsList {
    const NAME: &'static str = "GuestDiagnosticSettingsList";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new(
                "value",
                "value",
                FieldKind::Array(&FieldKind::Model(
                    "GuestDiagnosticSettingsResource",
                    <GuestDiagnosticSettingsResource as Model>::fields,
                )),
            ),
            FieldSpec::new("next_link", "nextLink", FieldKind::String),
        ];
        F
    }
}

// =============================================================================
// Data sources
// =============================================================================

/// One source of diagnostic data and the sinks it feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// What is collected.
    pub kind: DataSourceKind,

    /// Collection details; which list is used depends on `kind`.
    pub configuration: DataSourceConfiguration,

    /// Where the data goes.
    pub sinks: Vec<SinkConfiguration>,
}

impl Model for DataSource {
    const NAME: &'static str = "DataSource";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("kind", "kind", FieldKind::Enum)
                .required()
                .with(&[Constraint::OneOf(<DataSourceKind as VariantNames>::VARIANTS)]),
            FieldSpec::new(
                "configuration",
                "configuration",
                FieldKind::Model("DataSourceConfiguration", <DataSourceConfiguration as Model>::fields),
            )
            .required(),
            FieldSpec::new(
                "sinks",
                "sinks",
                FieldKind::Array(&FieldKind::Model("SinkConfiguration", <SinkConfiguration as Model>::fields)),
            )
            .required(),
        ];
        F
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSourceConfiguration {
    /// ETW providers, for `ETWProviders` sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<EtwProviderConfiguration>>,

    /// Performance counters, for `PerformanceCounter` sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perf_counters: Option<Vec<PerformanceCounterConfiguration>>,

    /// Event logs, for `WindowsEventLogs` sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_logs: Option<Vec<EventLogConfiguration>>,
}

impl Model for DataSourceConfiguration {
    const NAME: &'static str = "DataSourceConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new(
                "providers",
                "providers",
                FieldKind::Array(&FieldKind::Model(
                    "EtwProviderConfiguration",
                    <EtwProviderConfiguration as Model>::fields,
                )),
            ),
            FieldSpec::new(
                "perf_counters",
                "perfCounters",
                FieldKind::Array(&FieldKind::Model(
                    "PerformanceCounterConfiguration",
                    <PerformanceCounterConfiguration as Model>::fields,
                )),
            ),
            FieldSpec::new(
                "event_logs",
                "eventLogs",
                FieldKind::Array(&FieldKind::Model(
                    "EventLogConfiguration",
                    <EventLogConfiguration as Model>::fields,
                )),
            ),
        ];
        F
    }
}

/// A performance counter sampled at a fixed period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceCounterConfiguration {
    /// Counter path, e.g. `\Memory\Available Bytes`.
    pub name: String,

    /// ISO 8601 sampling period, e.g. `PT1M`.
    pub sampling_period: String,

    /// Counter instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl PerformanceCounterConfiguration {
    pub fn new(name: impl Into<String>, sampling_period: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sampling_period: sampling_period.into(),
            instance: None,
        }
    }
}

impl Model for PerformanceCounterConfiguration {
    const NAME: &'static str = "PerformanceCounterConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("name", "name", FieldKind::String)
                .required()
                .with(&[Constraint::Length { min: Some(1), max: None }]),
            FieldSpec::new("sampling_period", "samplingPeriod", FieldKind::String)
                .required()
                .with(&[Constraint::Pattern(ISO8601_DURATION)]),
            FieldSpec::new("instance", "instance", FieldKind::String),
        ];
        F
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtwProviderConfiguration {
    /// Provider GUID or name.
    pub id: String,

    pub events: Vec<EtwEventConfiguration>,
}

impl Model for EtwProviderConfiguration {
    const NAME: &'static str = "EtwProviderConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("id", "id", FieldKind::String).required(),
            FieldSpec::new(
                "events",
                "events",
                FieldKind::Array(&FieldKind::Model(
                    "EtwEventConfiguration",
                    <EtwEventConfiguration as Model>::fields,
                )),
            )
            .required(),
        ];
        F
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EtwEventConfiguration {
    pub name: String,

    /// Event id.
    pub id: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Model for EtwEventConfiguration {
    const NAME: &'static str = "EtwEventConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("name", "name", FieldKind::String).required(),
            FieldSpec::new("id", "id", FieldKind::Integer)
                .required()
                .with(&[Constraint::Range { min: Some(0.0), max: Some(65535.0) }]),
            FieldSpec::new("filter", "filter", FieldKind::String),
        ];
        F
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLogConfiguration {
    /// Log name, e.g. `Application`.
    pub log_name: String,

    /// XPath filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Model for EventLogConfiguration {
    const NAME: &'static str = "EventLogConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("log_name", "logName", FieldKind::String)
                .required()
                .with(&[Constraint::Length { min: Some(1), max: None }]),
            FieldSpec::new("filter", "filter", FieldKind::String),
        ];
        F
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfiguration {
    pub kind: SinkKind,
}

impl Model for SinkConfiguration {
    const NAME: &'static str = "SinkConfiguration";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[FieldSpec::new("kind", "kind", FieldKind::Enum)
            .required()
            .with(&[Constraint::OneOf(<SinkKind as VariantNames>::VARIANTS)])];
        F
    }
}

// =============================================================================
// Associations
// =============================================================================

/// Links a resource (usually a VM) to a guest diagnostic setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDiagnosticSettingsAssociation {
    /// Name of the associated guest diagnostic setting.
    pub guest_diagnostic_settings_name: String,
}

impl Model for GuestDiagnosticSettingsAssociation {
    const NAME: &'static str = "GuestDiagnosticSettingsAssociation";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[FieldSpec::new(
            "guest_diagnostic_settings_name",
            "guestDiagnosticSettingsName",
            FieldKind::String,
        )
        .required()
        .with(&[Constraint::Length { min: Some(1), max: None }])];
        F
    }
}

/// An ARM resource holding a guest diagnostic settings association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDiagnosticSettingsAssociationResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,

    pub location: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    pub properties: GuestDiagnosticSettingsAssociation,
}

impl GuestDiagnosticSettingsAssociationResource {
    /// Creates an association resource pointing at a setting.
    pub fn new(location: impl Into<String>, settings_name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: None,
            resource_type: None,
            location: location.into(),
            tags: None,
            properties: GuestDiagnosticSettingsAssociation {
                guest_diagnostic_settings_name: settings_name.into(),
            },
        }
    }
}

impl Model for GuestDiagnosticSettingsAssociationResource {
    const NAME: &'static str = "GuestDiagnosticSettingsAssociationResource";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("id", "id", FieldKind::String),
            FieldSpec::new("name", "name", FieldKind::String),
            FieldSpec::new("resource_type", "type", FieldKind::String),
            FieldSpec::new("location", "location", FieldKind::String).required(),
            FieldSpec::new("tags", "tags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new(
                "properties",
                "properties",
                FieldKind::Model(
                    "GuestDiagnosticSettingsAssociation",
                    <GuestDiagnosticSettingsAssociation as Model>::fields,
                ),
            )
            .required(),
        ];
        F
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDiagnosticSettingsAssociationResourcePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<GuestDiagnosticSettingsAssociation>,
}

impl Model for GuestDiagnosticSettingsAssociationResourcePatch {
    const NAME: &'static str = "GuestDiagnosticSettingsAssociationResourcePatch";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("tags", "tags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new(
                "properties",
                "properties",
                FieldKind::Model(
                    "GuestDiagnosticSettingsAssociation",
                    <GuestDiagnosticSettingsAssociation as Model>::fields,
                ),
            ),
        ];
        F
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDiagnosticSettingsAssociationList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<GuestDiagnosticSettingsAssociationResource>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl Model for GuestDiagnosticSettingsAssociationList {
    const NAME: &'static str = "GuestDiagnosticSettingsAssociationList";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new(
                "value",
                "value",
                FieldKind::Array(&FieldKind::Model(
                    "GuestDiagnosticSettingsAssociationResource",
                    <GuestDiagnosticSettingsAssociationResource as Model>::fields,
                )),
            ),
            FieldSpec::new("next_link", "nextLink", FieldKind::String),
        ];
        F
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by Azure Monitor.
///
/// ```json
/// {"code": "ResourceNotFound", "message": "The resource was not found."}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Model for ErrorResponse {
    const NAME: &'static str = "ErrorResponse";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("code", "code", FieldKind::String),
            FieldSpec::new("message", "message", FieldKind::String),
        ];
        F
    }
}
