//! DRBD replication configuration (`/drbdconfig`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::patch::{self, PatchOp};
use crate::query::ListQuery;

/// DRBD replication settings between controller nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drbd {
    pub uuid: Uuid,
    /// Link utilisation percentage reserved for replication.
    pub link_util: i32,
    /// Number of parallel DRBD devices to sync.
    pub num_parallel: i32,
    /// Round-trip delay in milliseconds.
    pub rtt_ms: f64,
    pub isystem_uuid: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DrbdList {
    pub drbdconfigs: Vec<Drbd>,
}

impl Collection for DrbdList {
    type Item = Drbd;

    fn into_items(self) -> Vec<Drbd> {
        self.drbdconfigs
    }
}

/// Sparse DRBD update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DrbdOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_util: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_parallel: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtt_ms: Option<f64>,
}

impl InventoryClient {
    pub async fn list_drbd(&self) -> Result<Page<Drbd>, Error> {
        self.list::<DrbdList>(&["drbdconfig"], &ListQuery::default())
            .await
    }

    pub async fn get_drbd(&self, id: &Uuid) -> Result<Drbd, Error> {
        self.get(&["drbdconfig", &id.to_string()]).await
    }

    pub async fn update_drbd(&self, id: &Uuid, opts: &DrbdOpts) -> Result<Drbd, Error> {
        let body = patch::entries(PatchOp::Replace, opts)?;
        self.patch(&["drbdconfig", &id.to_string()], &body).await
    }
}
