//! NTP command handlers.

use deployctl_api::InventoryClient;
use deployctl_api::resources::ntp::{Ntp, NtpOpts};

use crate::cli::{GlobalOpts, NtpArgs, NtpCommand};
use crate::error::CliError;
use crate::output;

use super::util;

fn detail(n: &Ntp) -> String {
    [
        format!("UUID:    {}", n.uuid),
        format!("Servers: {}", n.ntpservers),
        format!("System:  {}", n.isystem_uuid),
        format!("Updated: {}", output::or_dash(n.updated_at.as_deref())),
    ]
    .join("\n")
}

async fn current(client: &InventoryClient) -> Result<Ntp, CliError> {
    client
        .list_ntp()
        .await?
        .into_items()
        .into_iter()
        .next()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "NTP configuration".into(),
            identifier: "system".into(),
            list_command: "ntp show".into(),
        })
}

pub async fn handle(
    client: &InventoryClient,
    args: NtpArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        NtpCommand::Show => {
            let ntp = current(client).await?;
            let out = output::render_single(global.output, &ntp, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        NtpCommand::Update { servers, clear } => {
            let servers = match servers {
                Some(ref raw) => util::split_servers(raw),
                None if clear => vec![],
                None => {
                    return Err(CliError::Validation {
                        field: "servers".into(),
                        reason: "pass --servers or --clear".into(),
                    });
                }
            };

            let ntp = current(client).await?;
            let updated = client
                .update_ntp(
                    &ntp.uuid,
                    &NtpOpts {
                        ntpservers: Some(servers),
                    },
                )
                .await?;

            let out = output::render_single(global.output, &updated, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
