//! Host IP address resources (`/addresses`, `/ihosts/{host}/addresses`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::InventoryClient;
use crate::error::Error;
use crate::page::{Collection, Page};
use crate::query::ListQuery;

/// An IP address assigned to a host interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub uuid: Uuid,
    /// IPv4 or IPv6 literal.
    pub address: String,
    /// Prefix length in bits.
    pub prefix: i32,
    /// Name of the owning interface.
    pub ifname: String,
    pub interface_uuid: Uuid,
    /// Whether duplicate address detection runs for this address.
    pub enable_dad: bool,
    /// Address pool this address was allocated from, if any.
    pub pool_uuid: Option<Uuid>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressList {
    pub addresses: Vec<Address>,
}

impl Collection for AddressList {
    type Item = Address;

    fn into_items(self) -> Vec<Address> {
        self.addresses
    }
}

/// Fields accepted when creating an address. Unset fields are omitted
/// from the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_dad: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_uuid: Option<String>,
}

impl InventoryClient {
    /// List the addresses assigned to a host.
    pub async fn list_addresses(
        &self,
        host: &Uuid,
        query: &ListQuery,
    ) -> Result<Page<Address>, Error> {
        self.list::<AddressList>(&["ihosts", &host.to_string(), "addresses"], query)
            .await
    }

    pub async fn get_address(&self, id: &Uuid) -> Result<Address, Error> {
        self.get(&["addresses", &id.to_string()]).await
    }

    /// Create an address and return the decoded entity.
    pub async fn create_address(&self, opts: &AddressOpts) -> Result<Address, Error> {
        self.post(&["addresses"], opts).await
    }

    pub async fn delete_address(&self, id: &Uuid) -> Result<(), Error> {
        self.delete(&["addresses", &id.to_string()]).await
    }
}
