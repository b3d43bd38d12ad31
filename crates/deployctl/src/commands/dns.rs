//! DNS command handlers.

use deployctl_api::InventoryClient;
use deployctl_api::resources::dns::{Dns, DnsOpts};

use crate::cli::{DnsArgs, DnsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(d: &Dns) -> String {
    [
        format!("UUID:        {}", d.uuid),
        format!("Nameservers: {}", d.nameservers),
        format!("System:      {}", d.isystem_uuid),
        format!("Updated:     {}", output::or_dash(d.updated_at.as_deref())),
    ]
    .join("\n")
}

/// The system's DNS record (a singleton behind a list endpoint).
async fn current(client: &InventoryClient) -> Result<Dns, CliError> {
    client
        .list_dns()
        .await?
        .into_items()
        .into_iter()
        .next()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "DNS configuration".into(),
            identifier: "system".into(),
            list_command: "dns show".into(),
        })
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &InventoryClient,
    args: DnsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DnsCommand::Show => {
            let dns = current(client).await?;
            let out = output::render_single(global.output, &dns, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DnsCommand::Update { nameservers, clear } => {
            let servers = match nameservers {
                Some(ref raw) => util::split_servers(raw),
                None if clear => vec![],
                None => {
                    return Err(CliError::Validation {
                        field: "nameservers".into(),
                        reason: "pass --nameservers or --clear".into(),
                    });
                }
            };

            let dns = current(client).await?;
            let updated = client
                .update_dns(
                    &dns.uuid,
                    &DnsOpts {
                        nameservers: Some(servers),
                    },
                )
                .await?;

            let out = output::render_single(global.output, &updated, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
