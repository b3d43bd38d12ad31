//! NTP server configuration (`/intp`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::patch::{self, PatchOp};
use crate::query::ListQuery;

/// NTP configuration for a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ntp {
    pub uuid: Uuid,
    /// Comma-joined server list; `none` when cleared.
    pub ntpservers: String,
    pub isystem_uuid: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NtpList {
    pub intps: Vec<Ntp>,
}

impl Collection for NtpList {
    type Item = Ntp;

    fn into_items(self) -> Vec<Ntp> {
        self.intps
    }
}

/// Sparse NTP update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NtpOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ntpservers: Option<Vec<String>>,
}

impl InventoryClient {
    pub async fn list_ntp(&self) -> Result<Page<Ntp>, Error> {
        self.list::<NtpList>(&["intp"], &ListQuery::default()).await
    }

    pub async fn get_ntp(&self, id: &Uuid) -> Result<Ntp, Error> {
        self.get(&["intp", &id.to_string()]).await
    }

    pub async fn update_ntp(&self, id: &Uuid, opts: &NtpOpts) -> Result<Ntp, Error> {
        let body = patch::entries(PatchOp::Replace, opts)?;
        self.patch(&["intp", &id.to_string()], &body).await
    }
}
