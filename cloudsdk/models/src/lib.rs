//! Models and resource clients for cloud-management REST APIs.
//!
//! Each API lives in its own module with three parts: the model types (each
//! implementing [`cloudsdk::Model`]), the resource client with one method
//! per HTTP operation, and a `define_*_api()` function returning the
//! declarative [`RestApi`](cloudsdk_define::RestApi) definition.
//!
//! ## Available APIs
//!
//! - [`azure_monitor`] - Azure Monitor guest diagnostic settings and associations
//! - [`intersight`] - Cisco Intersight Kubernetes system config policies
//! - [`oci`] - Oracle Cloud Infrastructure Core virtual cloud networks
//! - [`xclarity`] - Lenovo XClarity Administrator nodes
//!
//! ## Examples
//!
//! ```
//! use cloudsdk::Model;
//! use cloudsdk_models::xclarity::{Node, PowerState};
//!
//! let node = Node::from_json(r#"{"uuid": "0123456789ABCDEF0123456789ABCDEF", "powerStatus": "On"}"#).unwrap();
//! assert_eq!(node.power_status, Some(PowerState::On));
//!
//! let bad = Node::from_json(r#"{"uuid": "0123456789ABCDEF0123456789ABCDEF", "powerStatus": "Sleeping"}"#);
//! assert!(bad.is_err());
//! ```

pub mod azure_monitor;
pub mod intersight;
pub mod oci;
pub mod prelude;
pub mod registry;
pub mod xclarity;

// Re-export API definition functions for convenience
pub use azure_monitor::define_azure_monitor_api;
pub use intersight::define_intersight_api;
pub use oci::define_oci_api;
pub use registry::{ModelEntry, apis, find_api, find_model, registry};
pub use xclarity::define_xclarity_api;
