//! DRBD command handlers.

use deployctl_api::InventoryClient;
use deployctl_api::resources::drbd::{Drbd, DrbdOpts};

use crate::cli::{DrbdArgs, DrbdCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

fn detail(d: &Drbd) -> String {
    [
        format!("UUID:          {}", d.uuid),
        format!("Link util:     {}%", d.link_util),
        format!("Parallel devs: {}", d.num_parallel),
        format!("RTT:           {} ms", d.rtt_ms),
        format!("System:        {}", d.isystem_uuid),
    ]
    .join("\n")
}

async fn current(client: &InventoryClient) -> Result<Drbd, CliError> {
    client
        .list_drbd()
        .await?
        .into_items()
        .into_iter()
        .next()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "DRBD configuration".into(),
            identifier: "system".into(),
            list_command: "drbd show".into(),
        })
}

pub async fn handle(
    client: &InventoryClient,
    args: DrbdArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        DrbdCommand::Show => {
            let drbd = current(client).await?;
            let out = output::render_single(global.output, &drbd, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DrbdCommand::Update {
            link_util,
            num_parallel,
            rtt_ms,
        } => {
            if link_util.is_none() && num_parallel.is_none() && rtt_ms.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "pass at least one of --link-util, --num-parallel, --rtt-ms".into(),
                });
            }

            let drbd = current(client).await?;
            let updated = client
                .update_drbd(
                    &drbd.uuid,
                    &DrbdOpts {
                        link_util,
                        num_parallel,
                        rtt_ms,
                    },
                )
                .await?;

            let out = output::render_single(global.output, &updated, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
