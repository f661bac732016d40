//! Lenovo XClarity Administrator node types.

use cloudsdk::Model;
use cloudsdk_define::model::{Constraint, FieldKind, FieldSpec};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

const NODE_UUID: &str = r"^[0-9A-Fa-f]{32}$";
const MAC_ADDRESS: &str = r"^([0-9A-Fa-f]{2}[:-]){5}[0-9A-Fa-f]{2}$";
const IPV4: &str = r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$";

/// Reported power state of a node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum PowerState {
    Unknown,
    On,
    Off,
    ShuttingDown,
    Standby,
    Hibernate,
}

/// Whether the management server can reach the node.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
pub enum AccessState {
    Online,
    Offline,
    Pending,
    Partial,
    Unknown,
}

/// Power action requested through [`NodeUpdate`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, VariantNames,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PowerAction {
    PowerOn,
    PowerOff,
    PowerCycleSoft,
    PowerCycleSoftGraceful,
    #[serde(rename = "powerNMI")]
    #[strum(serialize = "powerNMI")]
    PowerNmi,
    BootToF1,
    VirtualReseat,
}

/// A managed server.
///
/// ```json
/// {
///   "uuid": "0123456789ABCDEF0123456789ABCDEF",
///   "name": "rack-1-node-3",
///   "machineType": "7X06",
///   "powerStatus": "On",
///   "accessState": "Online",
///   "macAddress": ["08:94:EF:2A:11:01"],
///   "slots": 1,
///   "location": {"rack": "R12", "lowestRackUnit": 20}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub uuid: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,

    /// Node type, e.g. `Rack-Tower Server`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_status: Option<PowerState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_state: Option<AccessState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4_addresses: Option<Vec<String>>,

    /// Rack units occupied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<i64>,

    /// Chassis bay, for blade nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bay: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub firmware: Option<Vec<Firmware>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Node {
    pub fn new(uuid: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: None,
            hostname: None,
            machine_type: None,
            model: None,
            serial_number: None,
            node_type: None,
            power_status: None,
            access_state: None,
            mac_address: None,
            ipv4_addresses: None,
            slots: None,
            bay: None,
            firmware: None,
            location: None,
        }
    }
}

impl Model for Node {
    const NAME: &'static str = "Node";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("uuid", "uuid", FieldKind::String)
                .required()
                .with(&[Constraint::Pattern(NODE_UUID)]),
            FieldSpec::new("name", "name", FieldKind::String),
            FieldSpec::new("hostname", "hostname", FieldKind::String),
            FieldSpec::new("machine_type", "machineType", FieldKind::String),
            FieldSpec::new("model", "model", FieldKind::String),
            FieldSpec::new("serial_number", "serialNumber", FieldKind::String),
            FieldSpec::new("node_type", "type", FieldKind::String),
            FieldSpec::new("power_status", "powerStatus", FieldKind::Enum)
                .with(&[Constraint::OneOf(<PowerState as VariantNames>::VARIANTS)]),
            FieldSpec::new("access_state", "accessState", FieldKind::Enum)
                .with(&[Constraint::OneOf(<AccessState as VariantNames>::VARIANTS)]),
            FieldSpec::new("mac_address", "macAddress", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Pattern(MAC_ADDRESS)]),
            FieldSpec::new("ipv4_addresses", "ipv4Addresses", FieldKind::Array(&FieldKind::String))
                .with(&[Constraint::Pattern(IPV4)]),
            FieldSpec::new("slots", "slots", FieldKind::Integer)
                .with(&[Constraint::Range { min: Some(1.0), max: Some(14.0) }]),
            FieldSpec::new("bay", "bay", FieldKind::Integer)
                .with(&[Constraint::Range { min: Some(1.0), max: Some(14.0) }]),
            FieldSpec::new(
                "firmware",
                "firmware",
                FieldKind::Array(&FieldKind::Model("Firmware", <Firmware as Model>::fields)),
            ),
            FieldSpec::new("location", "location", FieldKind::Model("Location", <Location as Model>::fields)),
        ];
        F
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Firmware {
    /// Component, e.g. `UEFI` or `XCC`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub firmware_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Model for Firmware {
    const NAME: &'static str = "Firmware";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("firmware_type", "type", FieldKind::String),
            FieldSpec::new("name", "name", FieldKind::String),
            FieldSpec::new("version", "version", FieldKind::String),
            FieldSpec::new("build", "build", FieldKind::String),
            FieldSpec::new("date", "date", FieldKind::String),
            FieldSpec::new("status", "status", FieldKind::String),
        ];
        F
    }
}

/// Physical location of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,

    /// Lowest rack unit the node occupies; `0` when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowest_rack_unit: Option<i64>,
}

impl Model for Location {
    const NAME: &'static str = "Location";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("location", "location", FieldKind::String),
            FieldSpec::new("room", "room", FieldKind::String),
            FieldSpec::new("rack", "rack", FieldKind::String),
            FieldSpec::new("lowest_rack_unit", "lowestRackUnit", FieldKind::Integer)
                .with(&[Constraint::Range { min: Some(0.0), max: Some(50.0) }]),
        ];
        F
    }
}

/// Response of `GET /nodes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeList {
    #[serde(default)]
    pub node_list: Vec<Node>,
}

impl Model for NodeList {
    const NAME: &'static str = "NodeList";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[FieldSpec::new(
            "node_list",
            "nodeList",
            FieldKind::Array(&FieldKind::Model("Node", <Node as Model>::fields)),
        )];
        F
    }
}

/// Body of `PUT /nodes/{uuid}`: rename, relocate or trigger a power action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerAction>,
}

impl NodeUpdate {
    pub fn power(action: PowerAction) -> Self {
        Self {
            power_state: Some(action),
            ..Self::default()
        }
    }
}

impl Model for NodeUpdate {
    const NAME: &'static str = "NodeUpdate";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("name", "name", FieldKind::String)
                .with(&[Constraint::Length { min: Some(1), max: Some(255) }]),
            FieldSpec::new("location", "location", FieldKind::Model("Location", <Location as Model>::fields)),
            FieldSpec::new("power_state", "powerState", FieldKind::Enum)
                .with(&[Constraint::OneOf(<PowerAction as VariantNames>::VARIANTS)]),
        ];
        F
    }
}

/// One message of an XClarity error response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XClarityMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    /// Severity: `informational`, `warning` or `major`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
}

impl Model for XClarityMessage {
    const NAME: &'static str = "XClarityMessage";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[
            FieldSpec::new("id", "id", FieldKind::String),
            FieldSpec::new("text", "text", FieldKind::String),
            FieldSpec::new("explanation", "explanation", FieldKind::String),
            FieldSpec::new("result", "result", FieldKind::String),
        ];
        F
    }
}

/// Error body returned by XClarity.
///
/// ```json
/// {"messages": [{"id": "FQXHMSE0001J", "text": "The request completed successfully.", "result": "informational"}]}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XClarityError {
    #[serde(default)]
    pub messages: Vec<XClarityMessage>,
}

impl XClarityError {
    /// Text of the first message.
    pub fn text(&self) -> Option<&str> {
        self.messages.first().and_then(|m| m.text.as_deref())
    }
}

impl Model for XClarityError {
    const NAME: &'static str = "XClarityError";

    fn fields() -> &'static [FieldSpec] {
        const F: &[FieldSpec] = &[FieldSpec::new(
            "messages",
            "messages",
            FieldKind::Array(&FieldKind::Model("XClarityMessage", <XClarityMessage as Model>::fields)),
        )];
        F
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use cloudsdk::ValidationError;

    const UUID: &str = "0123456789ABCDEF0123456789ABCDEF";

    #[test]
    fn test_node_nested_types() {
        let node = Node::from_value(json!({
            "uuid": UUID,
            "powerStatus": "On",
            "accessState": "Online",
            "firmware": [{"type": "UEFI", "version": "2.31"}],
            "location": {"rack": "R12", "lowestRackUnit": 20}
        }))
        .unwrap();
        assert_eq!(node.power_status, Some(PowerState::On));
        assert_eq!(node.firmware.unwrap()[0].firmware_type.as_deref(), Some("UEFI"));
        assert_eq!(node.location.unwrap().lowest_rack_unit, Some(20));
    }

    #[test]
    fn test_uuid_pattern() {
        assert!(Node::new(UUID).is_valid());
        assert!(!Node::new("0123-4567").is_valid());
    }

    #[test]
    fn test_mac_pattern_names_element() {
        let err = Node::from_value(json!({"uuid": UUID, "macAddress": ["08:94:EF:2A:11:01", "0894EF2A1101"]}))
            .unwrap_err();
        assert_eq!(err.as_validation().unwrap().field(), Some("macAddress[1]"));
    }

    #[test]
    fn test_slots_bounds() {
        for (slots, ok) in [(0, false), (1, true), (14, true), (15, false)] {
            let result = Node::from_value(json!({"uuid": UUID, "slots": slots}));
            assert_eq!(result.is_ok(), ok, "slots = {slots}");
        }
    }

    #[test]
    fn test_nested_location_path() {
        let err = Node::from_value(json!({"uuid": UUID, "location": {"lowestRackUnit": 51}})).unwrap_err();
        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::OutOfRange { field, .. }) if field == "location.lowestRackUnit"
        ));
    }

    #[test]
    fn test_power_action_wire_names() {
        assert_eq!(PowerAction::PowerNmi.to_string(), "powerNMI");
        assert_eq!(PowerAction::BootToF1.to_string(), "bootToF1");
        assert_eq!(
            NodeUpdate::power(PowerAction::PowerCycleSoft).to_value().unwrap(),
            json!({"powerState": "powerCycleSoft"})
        );
    }

    #[test]
    fn test_error_text() {
        let err = XClarityError::from_value(json!({"messages": [{"id": "FQXHMCR0001M", "text": "Node not found"}]}))
            .unwrap();
        assert_eq!(err.text(), Some("Node not found"));
    }
}
