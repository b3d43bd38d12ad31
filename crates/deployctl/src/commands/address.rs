//! Address command handlers.

use tabled::Tabled;

use deployctl_api::{InventoryClient, ListQuery};
use deployctl_api::resources::addresses::{Address, AddressOpts};

use crate::cli::{AddressArgs, AddressCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct AddressRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Address")]
    address: String,
    #[tabled(rename = "Prefix")]
    prefix: i32,
    #[tabled(rename = "Interface")]
    ifname: String,
    #[tabled(rename = "Pool")]
    pool: String,
}

impl From<&Address> for AddressRow {
    fn from(a: &Address) -> Self {
        Self {
            uuid: a.uuid.to_string(),
            address: a.address.clone(),
            prefix: a.prefix,
            ifname: a.ifname.clone(),
            pool: a
                .pool_uuid
                .map_or_else(|| "-".into(), |p| p.to_string()),
        }
    }
}

fn detail(a: &Address) -> String {
    [
        format!("UUID:      {}", a.uuid),
        format!("Address:   {}/{}", a.address, a.prefix),
        format!("Interface: {} ({})", a.ifname, a.interface_uuid),
        format!("DAD:       {}", a.enable_dad),
        format!(
            "Pool:      {}",
            a.pool_uuid.map_or_else(|| "-".into(), |p| p.to_string())
        ),
    ]
    .join("\n")
}

pub async fn handle(
    client: &InventoryClient,
    args: AddressArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AddressCommand::List { host } => {
            let host = util::parse_uuid(&host, "host")?;
            let page = client.list_addresses(&host, &ListQuery::default()).await?;
            let out = output::render_list(global.output, &page.items, |a| AddressRow::from(a))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AddressCommand::Get { id } => {
            let id = util::parse_uuid(&id, "id")?;
            let address = client.get_address(&id).await?;
            let out = output::render_single(global.output, &address, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AddressCommand::Add {
            interface,
            address,
            prefix,
            pool,
            enable_dad,
        } => {
            // Validate the interface reference up front for a clearer error.
            util::parse_uuid(&interface, "interface")?;

            let opts = AddressOpts {
                interface_uuid: Some(interface),
                address: Some(address),
                prefix: Some(prefix),
                pool_uuid: pool,
                enable_dad: enable_dad.then_some(true),
            };
            let created = client.create_address(&opts).await?;
            let out = output::render_single(global.output, &created, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AddressCommand::Delete { id } => {
            let uuid = util::parse_uuid(&id, "id")?;
            if !util::confirm(&format!("Delete address {id}?"), global.yes)? {
                return Ok(());
            }
            client.delete_address(&uuid).await?;
            if !global.quiet {
                eprintln!("Address deleted");
            }
            Ok(())
        }
    }
}
