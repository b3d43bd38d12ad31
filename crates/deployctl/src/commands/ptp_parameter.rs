//! PTP parameter command handlers.

use tabled::Tabled;

use deployctl_api::{InventoryClient, ListQuery};
use deployctl_api::resources::ptp_parameters::{PtpParameter, PtpParameterOpts};

use crate::cli::{GlobalOpts, PtpParamsArgs, PtpParamsCommand};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ParamRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Owners")]
    owners: String,
}

impl From<&PtpParameter> for ParamRow {
    fn from(p: &PtpParameter) -> Self {
        Self {
            uuid: p.uuid.to_string(),
            name: p.name.clone(),
            value: p.value.clone(),
            owners: p.owners.join(","),
        }
    }
}

fn detail(p: &PtpParameter) -> String {
    [
        format!("UUID:   {}", p.uuid),
        format!("Name:   {}", p.name),
        format!("Value:  {}", p.value),
        format!("Owners: {}", p.owners.join(",")),
    ]
    .join("\n")
}

pub async fn handle(
    client: &InventoryClient,
    args: PtpParamsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        PtpParamsCommand::List => {
            let page = client.list_ptp_parameters(&ListQuery::default()).await?;
            let out = output::render_list(global.output, &page.items, |p| ParamRow::from(p))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PtpParamsCommand::Get { id } => {
            let id = util::parse_uuid(&id, "id")?;
            let param = client.get_ptp_parameter(&id).await?;
            let out = output::render_single(global.output, &param, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PtpParamsCommand::Add { name, value } => {
            let param = client
                .create_ptp_parameter(&PtpParameterOpts {
                    name: Some(name),
                    value: Some(value),
                })
                .await?;
            let out = output::render_single(global.output, &param, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PtpParamsCommand::Delete { id } => {
            let uuid = util::parse_uuid(&id, "id")?;
            if !util::confirm(&format!("Delete PTP parameter {id}?"), global.yes)? {
                return Ok(());
            }
            client.delete_ptp_parameter(&uuid).await?;
            if !global.quiet {
                eprintln!("PTP parameter deleted");
            }
            Ok(())
        }
    }
}
