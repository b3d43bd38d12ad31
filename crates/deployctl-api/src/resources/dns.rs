//! DNS nameserver configuration (`/idns`).
//!
//! A singleton per system: list returns one record, updated in place
//! with a JSON Patch.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::patch::{self, PatchOp};
use crate::query::ListQuery;

/// DNS configuration for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dns {
    pub uuid: Uuid,
    /// Comma-joined nameserver list; `none` when cleared.
    pub nameservers: String,
    pub isystem_uuid: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DnsList {
    pub idnss: Vec<Dns>,
}

impl Collection for DnsList {
    type Item = Dns;

    fn into_items(self) -> Vec<Dns> {
        self.idnss
    }
}

/// Sparse DNS update. An empty nameserver list clears the servers
/// (encoded as `"none"` on the wire).
#[derive(Debug, Clone, Default, Serialize)]
pub struct DnsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
}

impl InventoryClient {
    pub async fn list_dns(&self) -> Result<Page<Dns>, Error> {
        self.list::<DnsList>(&["idns"], &ListQuery::default()).await
    }

    pub async fn get_dns(&self, id: &Uuid) -> Result<Dns, Error> {
        self.get(&["idns", &id.to_string()]).await
    }

    pub async fn update_dns(&self, id: &Uuid, opts: &DnsOpts) -> Result<Dns, Error> {
        let body = patch::entries(PatchOp::Replace, opts)?;
        self.patch(&["idns", &id.to_string()], &body).await
    }
}
