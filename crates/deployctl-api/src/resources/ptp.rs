//! PTP (Precision Time Protocol) configuration (`/ptp`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::patch::{self, PatchOp};
use crate::query::ListQuery;

/// PTP configuration for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ptp {
    pub uuid: Uuid,
    /// Timestamping mode: `hardware` or `software`.
    pub mode: String,
    /// Network transport: `l2` or `udp`.
    pub transport: String,
    /// Delay mechanism: `e2e` or `p2p`.
    pub mechanism: String,
    pub isystem_uuid: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PtpList {
    pub ptps: Vec<Ptp>,
}

impl Collection for PtpList {
    type Item = Ptp;

    fn into_items(self) -> Vec<Ptp> {
        self.ptps
    }
}

/// Sparse PTP update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PtpOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
}

impl InventoryClient {
    pub async fn list_ptp(&self) -> Result<Page<Ptp>, Error> {
        self.list::<PtpList>(&["ptp"], &ListQuery::default()).await
    }

    pub async fn get_ptp(&self, id: &Uuid) -> Result<Ptp, Error> {
        self.get(&["ptp", &id.to_string()]).await
    }

    pub async fn update_ptp(&self, id: &Uuid, opts: &PtpOpts) -> Result<Ptp, Error> {
        let body = patch::entries(PatchOp::Replace, opts)?;
        self.patch(&["ptp", &id.to_string()], &body).await
    }
}
