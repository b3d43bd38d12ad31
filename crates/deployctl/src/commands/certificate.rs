//! Certificate command handlers.

use tabled::Tabled;

use deployctl_api::{InventoryClient, ListQuery};
use deployctl_api::resources::certificates::Certificate;

use crate::cli::{CertArgs, CertCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct CertRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Type")]
    certtype: String,
    #[tabled(rename = "Expires")]
    expiry: String,
}

impl From<&Certificate> for CertRow {
    fn from(c: &Certificate) -> Self {
        Self {
            uuid: c.uuid.to_string(),
            certtype: c.certtype.clone(),
            expiry: output::or_dash(c.expiry_date.as_deref()),
        }
    }
}

fn detail(c: &Certificate) -> String {
    [
        format!("UUID:      {}", c.uuid),
        format!("Type:      {}", c.certtype),
        format!("Signature: {}", c.signature),
        format!("Starts:    {}", output::or_dash(c.start_date.as_deref())),
        format!("Expires:   {}", output::or_dash(c.expiry_date.as_deref())),
        format!("Issuer:    {}", output::or_dash(c.issuer.as_deref())),
    ]
    .join("\n")
}

pub async fn handle(
    client: &InventoryClient,
    args: CertArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CertCommand::List => {
            let page = client.list_certificates(&ListQuery::default()).await?;
            let out = output::render_list(global.output, &page.items, |c| CertRow::from(c))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CertCommand::Get { id } => {
            let id = util::parse_uuid(&id, "id")?;
            let cert = client.get_certificate(&id).await?;
            let out = output::render_single(global.output, &cert, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CertCommand::Install { mode, file } => {
            let contents = std::fs::read(&file)?;
            let filename = util::upload_filename(&file);

            let result = client
                .install_certificate(&mode, &filename, contents)
                .await?;
            if result.is_error() {
                return Err(CliError::InstallRejected {
                    message: result.error.unwrap_or_default(),
                });
            }

            if !global.quiet {
                eprintln!("Certificate installed");
            }
            Ok(())
        }
    }
}
