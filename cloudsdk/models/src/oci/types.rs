//! Oracle Cloud Infrastructure Core VCN types (API version `20160918`).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use cloudsdk::Model;
use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{Display, EnumString, VariantNames};

const OCID: &str = r"^ocid1\.[a-z0-9_]+\.[a-z0-9]+\.[a-z0-9-]*\.[a-zA-Z0-9]+$";
const IPV4_CIDR: &str = r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)/([0-9]|[12][0-9]|3[0-2])$";
const IPV6_CIDR: &str = r"^[0-9a-fA-F:]+/([0-9]|[1-9][0-9]|1[01][0-9]|12[0-8])$";
const DNS_LABEL: &str = r"^[a-zA-Z][a-zA-Z0-9]{0,14}$";

/// Defined tags: namespace → key → value.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, Value>>;
/// Free-form tags: key → value.
pub type FreeformTags = BTreeMap<String, String>;

/// Lifecycle state of a [`Vcn`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum VcnLifecycleState {
    Provisioning,
    Available,
    Terminating,
    Terminated,
    Updating,
}

/// A virtual cloud network.
///
/// ## Example
///
/// ```json
/// {
///   "id": "ocid1.vcn.oc1.iad.aaaaaaaavcn",
///   "compartmentId": "ocid1.compartment.oc1..aaaaaaaacomp",
///   "cidrBlocks": ["10.0.0.0/16"],
///   "displayName": "prod-vcn",
///   "dnsLabel": "prodvcn",
///   "lifecycleState": "AVAILABLE",
///   "timeCreated": "2016-08-25T21:10:29.600Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vcn {
    /// First entry of `cidrBlocks`; kept for older clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,

    pub cidr_blocks: Vec<String>,

    pub compartment_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_dhcp_options_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_route_table_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_security_list_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Label used in instance hostnames, e.g. `vcn1` in
    /// `bminstance1.subnet123.vcn1.oraclevcn.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr_blocks: Option<Vec<String>>,

    pub lifecycle_state: VcnLifecycleState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcn_domain_name: Option<String>,
}

impl Model for Vcn {
    const NAME: &'static str = "Vcn";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("cidr_block", "cidrBlock", FieldKind::String)
                .with(&[Constraint::Pattern(IPV4_CIDR)]),
            FieldSpec::new("cidr_blocks", "cidrBlocks", FieldKind::Array(&FieldKind::String))
                .required()
                .with(&[Constraint::Pattern(IPV4_CIDR)]),
            FieldSpec::new("compartment_id", "compartmentId", FieldKind::String)
                .required()
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("default_dhcp_options_id", "defaultDhcpOptionsId", FieldKind::String)
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("default_route_table_id", "defaultRouteTableId", FieldKind::String)
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("default_security_list_id", "defaultSecurityListId", FieldKind::String)
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("defined_tags", "definedTags", FieldKind::Map(&FieldKind::Map(&FieldKind::Any))),
            FieldSpec::new("display_name", "displayName", FieldKind::String)
                .with(&[Constraint::Length { min: Some(1), max: Some(255) }]),
            FieldSpec::new("dns_label", "dnsLabel", FieldKind::String).with(&[Constraint::Pattern(DNS_LABEL)]),
            FieldSpec::new("freeform_tags", "freeformTags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new("id", "id", FieldKind::String)
                .required()
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("ipv6_cidr_blocks", "ipv6CidrBlocks", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Pattern(IPV6_CIDR)]),
            FieldSpec::new("lifecycle_state", "lifecycleState", FieldKind::Enum)
                .required()
                .with(&[Constraint::OneOf(<VcnLifecycleState as VariantNames>::VARIANTS)]),
            FieldSpec::new("time_created", "timeCreated", FieldKind::DateTime),
            FieldSpec::new("vcn_domain_name", "vcnDomainName", FieldKind::String),
        ];
        F
    }
}

/// Body of `CreateVcn`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVcnDetails {
    /// Deprecated in favor of `cidrBlocks`; set one or the other.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidr_blocks: Option<Vec<String>>,

    pub compartment_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,

    /// Request an Oracle-allocated IPv6 /56 prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_ipv6_enabled: Option<bool>,
}

impl CreateVcnDetails {
    /// A VCN with the given address ranges in a compartment.
    pub fn new<I, S>(compartment_id: impl Into<String>, cidr_blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            compartment_id: compartment_id.into(),
            cidr_blocks: Some(cidr_blocks.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }
}

impl Model for CreateVcnDetails {
    const NAME: &'static str = "CreateVcnDetails";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("cidr_block", "cidrBlock", FieldKind::String)
                .with(&[Constraint::Pattern(IPV4_CIDR)]),
            FieldSpec::new("cidr_blocks", "cidrBlocks", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Items { min: Some(1), max: None }, Constraint::Pattern(IPV4_CIDR)]),
            FieldSpec::new("compartment_id", "compartmentId", FieldKind::String)
                .required()
                .with(&[Constraint::Pattern(OCID)]),
            FieldSpec::new("defined_tags", "definedTags", FieldKind::Map(&FieldKind::Map(&FieldKind::Any))),
            FieldSpec::new("display_name", "displayName", FieldKind::String)
                .with(&[Constraint::Length { min: Some(1), max: Some(255) }]),
            FieldSpec::new("dns_label", "dnsLabel", FieldKind::String).with(&[Constraint::Pattern(DNS_LABEL)]),
            FieldSpec::new("freeform_tags", "freeformTags", FieldKind::Map(&FieldKind::String)),
            FieldSpec::new("is_ipv6_enabled", "isIpv6Enabled", FieldKind::Boolean),
        ];
        F
    }
}

/// Body of `UpdateVcn`; only names and tags can change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVcnDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl Model for UpdateVcnDetails {
    const NAME: &'static str = "UpdateVcnDetails";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("defined_tags", "definedTags", FieldKind::Map(&FieldKind::Map(&FieldKind::Any))),
            FieldSpec::new("display_name", "displayName", FieldKind::String)
                .with(&[Constraint::Length { min: Some(1), max: Some(255) }]),
            FieldSpec::new("freeform_tags", "freeformTags", FieldKind::Map(&FieldKind::String)),
        ];
        F
    }
}

/// Error body returned by OCI.
///
/// ```json
/// {"code": "NotAuthorizedOrNotFound", "message": "Authorization failed or requested resource not found."}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OciError {
    /// Machine-usable error code, e.g. `InvalidParameter`.
    pub code: String,

    pub message: String,
}

impl Model for OciError {
    const NAME: &'static str = "OciError";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("code", "code", FieldKind::String).required(),
            FieldSpec::new("message", "message", FieldKind::String).required(),
        ];
        F
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn vcn_wire() -> Value {
        json!({
            "id": "ocid1.vcn.oc1.iad.aaaaaaaavcn",
            "compartmentId": "ocid1.compartment.oc1..aaaaaaaacomp",
            "cidrBlock": "10.0.0.0/16",
            "cidrBlocks": ["10.0.0.0/16", "10.1.0.0/16"],
            "definedTags": {"Operations": {"CostCenter": "42"}},
            "freeformTags": {"Department": "Finance"},
            "displayName": "prod-vcn",
            "dnsLabel": "prodvcn",
            "lifecycleState": "AVAILABLE",
            "timeCreated": "2016-08-25T21:10:29.600Z"
        })
    }

    #[test]
    fn test_vcn_round_trip() {
        let vcn = Vcn::from_value(vcn_wire()).unwrap();
        assert_eq!(vcn.lifecycle_state, VcnLifecycleState::Available);
        assert_eq!(vcn.cidr_blocks.len(), 2);
        assert_eq!(vcn.defined_tags.as_ref().unwrap()["Operations"]["CostCenter"], "42");
        assert_eq!(vcn.to_value().unwrap(), vcn_wire());
    }

    #[test]
    fn test_lifecycle_state_names() {
        assert_eq!(VcnLifecycleState::Terminating.to_string(), "TERMINATING");
        assert_eq!(
            <VcnLifecycleState as VariantNames>::VARIANTS,
            &["PROVISIONING", "AVAILABLE", "TERMINATING", "TERMINATED", "UPDATING"]
        );
    }

    #[test]
    fn test_unknown_lifecycle_state() {
        let mut wire = vcn_wire();
        wire["lifecycleState"] = json!("DELETED");
        let err = Vcn::from_value(wire).unwrap_err();
        assert_eq!(err.as_validation().unwrap().field(), Some("lifecycleState"));
    }

    #[test]
    fn test_cidr_pattern() {
        let ok = CreateVcnDetails::new("ocid1.compartment.oc1..aaaaaaaacomp", ["172.16.0.0/12"]);
        assert!(ok.is_valid());
        let bad = CreateVcnDetails::new("ocid1.compartment.oc1..aaaaaaaacomp", ["172.16.0.0/33"]);
        assert_eq!(bad.list_invalid_properties().len(), 1);
    }

    #[test]
    fn test_ocid_pattern() {
        let bad = CreateVcnDetails::new("compartment-1", ["10.0.0.0/16"]);
        let err = bad.validate().unwrap_err();
        assert_eq!(err.as_validation().unwrap().field(), Some("compartmentId"));
    }

    #[test]
    fn test_dns_label() {
        let mut details = CreateVcnDetails::new("ocid1.compartment.oc1..aaaaaaaacomp", ["10.0.0.0/16"]);
        assert!(details.update(|d| d.dns_label = Some("vcn1".to_string())).is_ok());
        assert!(details.update(|d| d.dns_label = Some("1vcn".to_string())).is_err());
        assert!(
            details
                .update(|d| d.dns_label = Some("abcdefghijklmnop".to_string()))
                .is_err()
        );
        assert_eq!(details.dns_label.as_deref(), Some("vcn1"));
    }

    #[test]
    fn test_display_name_length() {
        let mut update = UpdateVcnDetails::default();
        assert!(update.update(|u| u.display_name = Some(String::new())).is_err());
        assert!(update.update(|u| u.display_name = Some("x".repeat(255))).is_ok());
        assert!(update.update(|u| u.display_name = Some("x".repeat(256))).is_err());
    }

    #[test]
    fn test_error_requires_code_and_message() {
        assert!(OciError::from_value(json!({"code": "InvalidParameter"})).is_err());
    }
}
