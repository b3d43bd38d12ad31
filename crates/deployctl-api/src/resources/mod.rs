//! Resource endpoint modules.
//!
//! One module per resource family. Each declares its entity shape, its
//! list-response envelope, and the operations the service supports for
//! it, implemented as inherent methods on
//! [`InventoryClient`](crate::client::InventoryClient).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod addresses;
pub mod certificates;
pub mod clusters;
pub mod dns;
pub mod drbd;
pub mod hostfs;
pub mod licenses;
pub mod ntp;
pub mod ptp;
pub mod ptp_parameters;

/// Result envelope returned by the certificate and licence install
/// endpoints.
///
/// The non-error fields are opaque strings surfaced to the caller as-is;
/// anything the service adds beyond the modelled fields lands in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl InstallResponse {
    /// `true` when the service reported a non-empty error string.
    pub fn is_error(&self) -> bool {
        self.error.as_deref().is_some_and(|e| !e.is_empty())
    }
}
