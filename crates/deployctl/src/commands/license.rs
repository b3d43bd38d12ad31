//! Licence command handlers.

use deployctl_api::InventoryClient;

use crate::cli::{GlobalOpts, LicenseArgs, LicenseCommand};
use crate::error::CliError;
use crate::output::{self, OutputFormat};

use super::util;

pub async fn handle(
    client: &InventoryClient,
    args: LicenseArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        LicenseCommand::Show => {
            let license = client.get_license().await?;
            let out = match global.output {
                // The licence is an opaque text blob; print it verbatim.
                OutputFormat::Table => license.content.clone(),
                OutputFormat::Json => serde_json::to_string_pretty(&license)?,
            };
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LicenseCommand::Install { file } => {
            let contents = std::fs::read(&file)?;
            let filename = util::upload_filename(&file);

            let result = client.install_license(&filename, contents).await?;
            if result.is_error() {
                return Err(CliError::InstallRejected {
                    message: result.error.unwrap_or_default(),
                });
            }

            if !global.quiet {
                eprintln!("Licence installed");
            }
            Ok(())
        }
    }
}
