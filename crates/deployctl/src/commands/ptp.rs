//! PTP command handlers.

use deployctl_api::InventoryClient;
use deployctl_api::resources::ptp::{Ptp, PtpOpts};

use crate::cli::{GlobalOpts, PtpArgs, PtpCommand};
use crate::error::CliError;
use crate::output;

fn detail(p: &Ptp) -> String {
    [
        format!("UUID:      {}", p.uuid),
        format!("Mode:      {}", p.mode),
        format!("Transport: {}", p.transport),
        format!("Mechanism: {}", p.mechanism),
        format!("System:    {}", p.isystem_uuid),
    ]
    .join("\n")
}

async fn current(client: &InventoryClient) -> Result<Ptp, CliError> {
    client
        .list_ptp()
        .await?
        .into_items()
        .into_iter()
        .next()
        .ok_or_else(|| CliError::NotFound {
            resource_type: "PTP configuration".into(),
            identifier: "system".into(),
            list_command: "ptp show".into(),
        })
}

pub async fn handle(
    client: &InventoryClient,
    args: PtpArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PtpCommand::Show => {
            let ptp = current(client).await?;
            let out = output::render_single(global.output, &ptp, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PtpCommand::Update {
            mode,
            transport,
            mechanism,
        } => {
            if mode.is_none() && transport.is_none() && mechanism.is_none() {
                return Err(CliError::Validation {
                    field: "update".into(),
                    reason: "pass at least one of --mode, --transport, --mechanism".into(),
                });
            }

            let ptp = current(client).await?;
            let updated = client
                .update_ptp(
                    &ptp.uuid,
                    &PtpOpts {
                        mode,
                        transport,
                        mechanism,
                    },
                )
                .await?;

            let out = output::render_single(global.output, &updated, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
