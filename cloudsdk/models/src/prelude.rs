//! Convenient re-exports of every API definition and resource client.
//!
//! ```
//! use cloudsdk_models::prelude::*;
//!
//! let api = define_oci_api();
//! assert_eq!(api.name, "OCI");
//! ```

// API definition functions
pub use crate::azure_monitor::define_azure_monitor_api;
pub use crate::intersight::define_intersight_api;
pub use crate::oci::define_oci_api;
pub use crate::xclarity::define_xclarity_api;

// Resource clients
pub use crate::azure_monitor::{GuestDiagnosticsSettingsAssociationClient, GuestDiagnosticsSettingsClient};
pub use crate::intersight::{KubernetesApi, ListQuery};
pub use crate::oci::{ListVcnsQuery, VirtualNetworkClient};
pub use crate::xclarity::NodesApi;

// Runtime
pub use cloudsdk::{ApiClient, ApiError, HttpResponse, Model};
