//! Storage cluster resources (`/clusters`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::query::ListQuery;

/// A storage cluster known to the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub uuid: Uuid,
    pub name: String,
    /// Cluster backend, e.g. `ceph`.
    #[serde(rename = "type")]
    pub cluster_type: String,
    /// UUID reported by the ceph cluster itself, when present.
    pub cluster_uuid: Option<Uuid>,
    pub deployment_model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClusterList {
    pub clusters: Vec<Cluster>,
}

impl Collection for ClusterList {
    type Item = Cluster;

    fn into_items(self) -> Vec<Cluster> {
        self.clusters
    }
}

impl InventoryClient {
    pub async fn list_clusters(&self, query: &ListQuery) -> Result<Page<Cluster>, Error> {
        self.list::<ClusterList>(&["clusters"], query).await
    }

    pub async fn get_cluster(&self, id: &Uuid) -> Result<Cluster, Error> {
        self.get(&["clusters", &id.to_string()]).await
    }
}
