//! Cisco Intersight managed-object types.
//!
//! Intersight models are composed with `allOf`: every managed object carries
//! the `mo.BaseMo` fields, policies add `policy.AbstractPolicy`, and each
//! concrete policy adds its own part. Here each part is a struct and the
//! composition uses `#[serde(flatten)]`. Wire keys are PascalCase.

use chrono::{DateTime, Utc};
use cloudsdk::Model;
use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};

use super::timezones::TIMEZONES;

const MOID: &str = r"^[0-9a-fA-F]{24}$";
const POLICY_NAME: &str = r"^[a-zA-Z0-9_.:-]{1,64}$";
const DNS_NAME: &str =
    r"^(([a-zA-Z0-9]|[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9])\.)*([A-Za-z0-9]|[A-Za-z0-9][A-Za-z0-9-]*[A-Za-z0-9])$";

/// Class and object type of [`KubernetesSysConfigPolicy`].
pub const SYS_CONFIG_POLICY_TYPE: &str = "kubernetes.SysConfigPolicy";
/// Class of a [`MoMoRef`].
pub const MO_REF_CLASS: &str = "mo.MoRef";

fn sys_config_policy_type() -> String {
    SYS_CONFIG_POLICY_TYPE.to_string()
}

fn mo_ref_class() -> String {
    MO_REF_CLASS.to_string()
}

// =============================================================================
// Common Types
// =============================================================================

/// A reference to another managed object.
///
/// ```json
/// {"ClassId": "mo.MoRef", "ObjectType": "organization.Organization", "Moid": "5ddfd9ff6972652d31ee6582"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoMoRef {
    #[serde(default = "mo_ref_class")]
    pub class_id: String,

    /// Type of the referenced object, e.g. `organization.Organization`.
    pub object_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub moid: Option<String>,

    /// OData filter selecting the object when `Moid` is not known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    #[serde(rename = "link", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MoMoRef {
    /// References an object by type and id.
    pub fn new(object_type: impl Into<String>, moid: impl Into<String>) -> Self {
        Self {
            class_id: mo_ref_class(),
            object_type: object_type.into(),
            moid: Some(moid.into()),
            selector: None,
            link: None,
        }
    }
}

impl Model for MoMoRef {
    const NAME: &'static str = "MoMoRef";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("class_id", "ClassId", FieldKind::String)
                .required()
                .defaults_to(MO_REF_CLASS),
            FieldSpec::new("object_type", "ObjectType", FieldKind::String).required(),
            FieldSpec::new("moid", "Moid", FieldKind::String).with(&[Constraint::Pattern(MOID)]),
            FieldSpec::new("selector", "Selector", FieldKind::String),
            FieldSpec::new("link", "link", FieldKind::String),
        ];
        F
    }
}

/// A key/value tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoTag {
    pub key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MoTag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }
}

impl Model for MoTag {
    const NAME: &'static str = "MoTag";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("key", "Key", FieldKind::String)
                .required()
                .with(&[Constraint::Length { min: Some(1), max: Some(128) }]),
            FieldSpec::new("value", "Value", FieldKind::String)
                .with(&[Constraint::Length { min: None, max: Some(256) }]),
        ];
        F
    }
}

/// Fields shared by every managed object. All are set by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoBaseMo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_moid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mod_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_group_moid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<MoTag>>,

    /// Direct parent of the object; `Some(None)` is an explicit `null`.
    #[serde(default, skip_serializing_if = "Option::is_none", with = "cloudsdk::nullable")]
    #[allow(clippy::option_option)]
    pub parent: Option<Option<MoMoRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ancestors: Option<Vec<MoMoRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_resources: Option<Vec<MoMoRef>>,
}

impl Model for MoBaseMo {
    const NAME: &'static str = "MoBaseMo";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("moid", "Moid", FieldKind::String).with(&[Constraint::Pattern(MOID)]),
            FieldSpec::new("account_moid", "AccountMoid", FieldKind::String),
            FieldSpec::new("create_time", "CreateTime", FieldKind::DateTime),
            FieldSpec::new("mod_time", "ModTime", FieldKind::DateTime),
            FieldSpec::new("domain_group_moid", "DomainGroupMoid", FieldKind::String),
            FieldSpec::new("owners", "Owners", FieldKind::Array(&FieldKind::String)),
            FieldSpec::new("shared_scope", "SharedScope", FieldKind::String),
            FieldSpec::new(
                "tags",
                "Tags",
                FieldKind::Array(&FieldKind::Model("MoTag", <MoTag as Model>::fields)),
            ),
            FieldSpec::new("parent", "Parent", FieldKind::Model("MoMoRef", <MoMoRef as Model>::fields))
                .nullable(),
            FieldSpec::new(
                "ancestors",
                "Ancestors",
                FieldKind::Array(&FieldKind::Model("MoMoRef", <MoMoRef as Model>::fields)),
            ),
            FieldSpec::new(
                "permission_resources",
                "PermissionResources",
                FieldKind::Array(&FieldKind::Model("MoMoRef", <MoMoRef as Model>::fields)),
            ),
        ];
        F
    }
}

/// Fields shared by every policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyAbstractPolicy {
    #[serde(flatten)]
    pub base: MoBaseMo,

    /// Policy name, unique within an organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Model for PolicyAbstractPolicy {
    const NAME: &'static str = "PolicyAbstractPolicy";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::all_of("base", "MoBaseMo", <MoBaseMo as Model>::fields),
            FieldSpec::new("name", "Name", FieldKind::String).with(&[Constraint::Pattern(POLICY_NAME)]),
            FieldSpec::new("description", "Description", FieldKind::String)
                .with(&[Constraint::Length { min: None, max: Some(1024) }]),
        ];
        F
    }
}

// =============================================================================
// Kubernetes System Config Policy
// =============================================================================

/// The part of a system config policy specific to Kubernetes nodes: DNS,
/// NTP and timezone settings.
///
/// ```json
/// {
///   "ClassId": "kubernetes.SysConfigPolicy",
///   "ObjectType": "kubernetes.SysConfigPolicy",
///   "DnsDomainName": "cluster.example.com",
///   "DnsServers": ["10.0.0.53"],
///   "NtpServers": ["10.0.0.123"],
///   "Timezone": "America/New_York"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KubernetesSysConfigPolicyAllOf {
    #[serde(default = "sys_config_policy_type")]
    pub class_id: String,

    #[serde(default = "sys_config_policy_type")]
    pub object_type: String,

    /// DNS search domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_domain_name: Option<String>,

    /// Up to three DNS servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,

    /// Up to three NTP servers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntp_servers: Option<Vec<String>>,

    /// IANA timezone name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", with = "cloudsdk::nullable")]
    #[allow(clippy::option_option)]
    pub organization: Option<Option<MoMoRef>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Vec<MoMoRef>>,
}

impl Default for KubernetesSysConfigPolicyAllOf {
    fn default() -> Self {
        Self {
            class_id: sys_config_policy_type(),
            object_type: sys_config_policy_type(),
            dns_domain_name: None,
            dns_servers: None,
            ntp_servers: None,
            timezone: None,
            organization: None,
            profiles: None,
        }
    }
}

impl Model for KubernetesSysConfigPolicyAllOf {
    const NAME: &'static str = "KubernetesSysConfigPolicyAllOf";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("class_id", "ClassId", FieldKind::Enum)
                .required()
                .defaults_to(SYS_CONFIG_POLICY_TYPE)
                .with(&[Constraint::OneOf(&[SYS_CONFIG_POLICY_TYPE])]),
            FieldSpec::new("object_type", "ObjectType", FieldKind::Enum)
                .required()
                .defaults_to(SYS_CONFIG_POLICY_TYPE)
                .with(&[Constraint::OneOf(&[SYS_CONFIG_POLICY_TYPE])]),
            FieldSpec::new("dns_domain_name", "DnsDomainName", FieldKind::String)
                .with(&[Constraint::Pattern(DNS_NAME)]),
            FieldSpec::new("dns_servers", "DnsServers", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Items { min: None, max: Some(3) }]),
            FieldSpec::new("ntp_servers", "NtpServers", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Items { min: None, max: Some(3) }]),
            FieldSpec::new("timezone", "Timezone", FieldKind::Enum).with(&[Constraint::OneOf(TIMEZONES)]),
            FieldSpec::new(
                "organization",
                "Organization",
                FieldKind::Model("MoMoRef", <MoMoRef as Model>::fields),
            )
            .nullable(),
            FieldSpec::new(
                "profiles",
                "Profiles",
                FieldKind::Array(&FieldKind::Model("MoMoRef", <MoMoRef as Model>::fields)),
            ),
        ];
        F
    }
}

/// Kubernetes node system configuration policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KubernetesSysConfigPolicy {
    #[serde(flatten)]
    pub policy: PolicyAbstractPolicy,

    #[serde(flatten)]
    pub sys_config: KubernetesSysConfigPolicyAllOf,
}

impl KubernetesSysConfigPolicy {
    /// Creates a named policy with the default class and object type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            policy: PolicyAbstractPolicy {
                name: Some(name.into()),
                ..PolicyAbstractPolicy::default()
            },
            sys_config: KubernetesSysConfigPolicyAllOf::default(),
        }
    }

    /// Server-assigned id, once the policy exists.
    pub fn moid(&self) -> Option<&str> {
        self.policy.base.moid.as_deref()
    }
}

impl Model for KubernetesSysConfigPolicy {
    const NAME: &'static str = "KubernetesSysConfigPolicy";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::all_of("policy", "PolicyAbstractPolicy", <PolicyAbstractPolicy as Model>::fields),
            FieldSpec::all_of(
                "sys_config",
                "KubernetesSysConfigPolicyAllOf",
                <KubernetesSysConfigPolicyAllOf as Model>::fields,
            ),
        ];
        F
    }
}

/// A page of system config policies.
///
/// With `$count=true` only `Count` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KubernetesSysConfigPolicyList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<KubernetesSysConfigPolicy>>,
}

impl Model for KubernetesSysConfigPolicyList {
    const NAME: &'static str = "KubernetesSysConfigPolicyList";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("object_type", "ObjectType", FieldKind::String),
            FieldSpec::new("count", "Count", FieldKind::Integer)
                .with(&[Constraint::Range { min: Some(0.0), max: None }]),
            FieldSpec::new(
                "results",
                "Results",
                FieldKind::Array(&FieldKind::Model(
                    "KubernetesSysConfigPolicy",
                    <KubernetesSysConfigPolicy as Model>::fields,
                )),
            ),
        ];
        F
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Error body returned by Intersight.
///
/// ```json
/// {"code": "InvalidRequest", "message": "Cannot find object", "messageId": "barcelona_request_not_found", "traceId": "abc"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersightError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Model for IntersightError {
    const NAME: &'static str = "IntersightError";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("code", "code", FieldKind::String),
            FieldSpec::new("message", "message", FieldKind::String),
            FieldSpec::new("message_id", "messageId", FieldKind::String),
            FieldSpec::new("trace_id", "traceId", FieldKind::String),
        ];
        F
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use cloudsdk::ValidationError;

    fn policy_wire() -> serde_json::Value {
        json!({
            "Moid": "5f4e3d2c1b0a5f4e3d2c1b0a",
            "AccountMoid": "596cc79e5d91b400010d15ad",
            "CreateTime": "2021-03-04T05:06:07Z",
            "Tags": [{"Key": "site", "Value": "lab"}],
            "Parent": null,
            "Name": "k8s-sys",
            "ClassId": "kubernetes.SysConfigPolicy",
            "ObjectType": "kubernetes.SysConfigPolicy",
            "DnsDomainName": "cluster.example.com",
            "DnsServers": ["10.0.0.53"],
            "NtpServers": ["ntp.example.com"],
            "Timezone": "America/New_York",
            "Organization": {"ClassId": "mo.MoRef", "ObjectType": "organization.Organization", "Moid": "5ddfd9ff6972652d31ee6582"}
        })
    }

    #[test]
    fn test_flattened_parts_deserialize() {
        let policy = KubernetesSysConfigPolicy::from_value(policy_wire()).unwrap();
        assert_eq!(policy.moid(), Some("5f4e3d2c1b0a5f4e3d2c1b0a"));
        assert_eq!(policy.policy.name.as_deref(), Some("k8s-sys"));
        assert_eq!(policy.policy.base.tags.as_ref().unwrap()[0].key, "site");
        assert_eq!(policy.sys_config.timezone.as_deref(), Some("America/New_York"));
        assert_eq!(
            policy.sys_config.organization.clone().flatten().unwrap().object_type,
            "organization.Organization"
        );
        assert_eq!(policy.policy.base.parent, Some(None));
    }

    #[test]
    fn test_round_trip_keeps_wire_keys() {
        let policy = KubernetesSysConfigPolicy::from_value(policy_wire()).unwrap();
        let out = policy.to_value().unwrap();
        assert_eq!(out, policy_wire());
    }

    #[test]
    fn test_null_references_survive_round_trip() {
        let wire = json!({
            "Name": "p1",
            "ClassId": "kubernetes.SysConfigPolicy",
            "ObjectType": "kubernetes.SysConfigPolicy",
            "Parent": null,
            "Organization": null
        });
        let out = KubernetesSysConfigPolicy::from_value(wire.clone()).unwrap().to_value().unwrap();
        assert_eq!(out, wire);

        let absent = KubernetesSysConfigPolicy::from_value(json!({"Name": "p1"})).unwrap();
        assert_eq!(absent.policy.base.parent, None);
        let out = absent.to_value().unwrap();
        assert!(out.get("Parent").is_none());
        assert!(out.get("Organization").is_none());
    }

    #[test]
    fn test_class_id_defaults_when_absent() {
        let policy = KubernetesSysConfigPolicy::from_value(json!({"Name": "p1"})).unwrap();
        assert_eq!(policy.sys_config.class_id, SYS_CONFIG_POLICY_TYPE);
        assert_eq!(policy.sys_config.object_type, SYS_CONFIG_POLICY_TYPE);
    }

    #[test]
    fn test_wrong_object_type() {
        let err = KubernetesSysConfigPolicyAllOf::from_value(json!({"ObjectType": "kubernetes.Cluster"}))
            .unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::InvalidEnum { field, .. }) if field == "ObjectType"
        ));
    }

    #[test]
    fn test_dns_servers_item_limit() {
        let four = json!({"DnsServers": ["a", "b", "c", "d"]});
        let err = KubernetesSysConfigPolicyAllOf::from_value(four).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::ItemCount { count: 4, .. })
        ));

        let one = KubernetesSysConfigPolicyAllOf::from_value(json!({"DnsServers": ["a"]})).unwrap();
        assert_eq!(one.dns_servers, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_unknown_timezone() {
        let mut policy = KubernetesSysConfigPolicy::new("p1");
        let result = policy.update(|p| p.sys_config.timezone = Some("Mars/Olympus_Mons".to_string()));
        assert!(result.is_err());
        assert!(policy.sys_config.timezone.is_none());
        assert!(
            policy
                .update(|p| p.sys_config.timezone = Some("Etc/GMT".to_string()))
                .is_ok()
        );
    }

    #[test]
    fn test_moid_pattern() {
        assert!(MoMoRef::new("organization.Organization", "5ddfd9ff6972652d31ee6582").is_valid());
        assert!(!MoMoRef::new("organization.Organization", "not-a-moid").is_valid());
    }

    #[test]
    fn test_tag_key_length() {
        assert!(!MoTag::new("", "v").is_valid());
        assert!(MoTag::new("k".repeat(128), "v").is_valid());
        assert!(!MoTag::new("k".repeat(129), "v").is_valid());
    }

    #[test]
    fn test_invalid_policy_name() {
        let err = KubernetesSysConfigPolicy::from_value(json!({"Name": "has spaces"})).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field(), Some("Name"));
    }
}
