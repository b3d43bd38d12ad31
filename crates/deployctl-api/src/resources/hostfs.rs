//! Host filesystem resources (`/host_fs`, `/ihosts/{host}/host_fs`).
//!
//! Unlike the singleton config families, filesystem updates are batched:
//! one PUT to `update_many` carries a list of patch-lists, one inner
//! list per filesystem being resized.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::patch::{self, PatchEntry, PatchOp};
use crate::query::ListQuery;

/// A provisioned filesystem on a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostFilesystem {
    pub uuid: Uuid,
    /// Filesystem name, e.g. `backup` or `scratch`.
    pub name: String,
    /// Size in GiB.
    pub size: i32,
    /// Backing logical volume.
    pub logical_volume: String,
    pub ihost_uuid: Uuid,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HostFilesystemList {
    pub host_fs: Vec<HostFilesystem>,
}

impl Collection for HostFilesystemList {
    type Item = HostFilesystem;

    fn into_items(self) -> Vec<HostFilesystem> {
        self.host_fs
    }
}

/// Sparse update for a single filesystem within a batch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HostFilesystemOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
}

impl InventoryClient {
    /// List the filesystems provisioned on a host.
    pub async fn list_host_filesystems(
        &self,
        host: &Uuid,
        query: &ListQuery,
    ) -> Result<Page<HostFilesystem>, Error> {
        self.list::<HostFilesystemList>(&["ihosts", &host.to_string(), "host_fs"], query)
            .await
    }

    pub async fn get_host_filesystem(&self, id: &Uuid) -> Result<HostFilesystem, Error> {
        self.get(&["host_fs", &id.to_string()]).await
    }

    /// Update one or more filesystems on a host in a single batch.
    ///
    /// The wire body is a list of patch-lists — the outer list is
    /// required even when only one filesystem changes.
    pub async fn update_host_filesystems(
        &self,
        host: &Uuid,
        updates: &[HostFilesystemOpts],
    ) -> Result<(), Error> {
        let body: Vec<Vec<PatchEntry>> = updates
            .iter()
            .map(|opts| patch::entries(PatchOp::Replace, opts))
            .collect::<Result<_, _>>()?;
        self.put_no_response(
            &["ihosts", &host.to_string(), "host_fs", "update_many"],
            &body,
        )
        .await
    }
}
