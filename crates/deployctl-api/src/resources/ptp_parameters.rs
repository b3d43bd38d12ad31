//! PTP service parameters (`/ptp_parameters`).
//!
//! Key/value pairs attached to PTP instances or interfaces by owner
//! UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::query::ListQuery;

/// A single PTP parameter and the owners it applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PtpParameter {
    pub uuid: Uuid,
    pub name: String,
    pub value: String,
    /// UUIDs of the PTP instances/interfaces this parameter applies to.
    #[serde(default)]
    pub owners: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PtpParameterList {
    pub ptp_parameters: Vec<PtpParameter>,
}

impl Collection for PtpParameterList {
    type Item = PtpParameter;

    fn into_items(self) -> Vec<PtpParameter> {
        self.ptp_parameters
    }
}

/// Fields accepted when creating a PTP parameter. Unset fields are
/// omitted from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PtpParameterOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl InventoryClient {
    pub async fn list_ptp_parameters(
        &self,
        query: &ListQuery,
    ) -> Result<Page<PtpParameter>, Error> {
        self.list::<PtpParameterList>(&["ptp_parameters"], query)
            .await
    }

    pub async fn get_ptp_parameter(&self, id: &Uuid) -> Result<PtpParameter, Error> {
        self.get(&["ptp_parameters", &id.to_string()]).await
    }

    pub async fn create_ptp_parameter(
        &self,
        opts: &PtpParameterOpts,
    ) -> Result<PtpParameter, Error> {
        self.post(&["ptp_parameters"], opts).await
    }

    pub async fn delete_ptp_parameter(&self, id: &Uuid) -> Result<(), Error> {
        self.delete(&["ptp_parameters", &id.to_string()]).await
    }
}
