//! Cluster command handlers.

use tabled::Tabled;

use deployctl_api::{InventoryClient, ListQuery};
use deployctl_api::resources::clusters::Cluster;

use crate::cli::{ClusterArgs, ClusterCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct ClusterRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    cluster_type: String,
}

impl From<&Cluster> for ClusterRow {
    fn from(c: &Cluster) -> Self {
        Self {
            uuid: c.uuid.to_string(),
            name: c.name.clone(),
            cluster_type: c.cluster_type.clone(),
        }
    }
}

fn detail(c: &Cluster) -> String {
    [
        format!("UUID:         {}", c.uuid),
        format!("Name:         {}", c.name),
        format!("Type:         {}", c.cluster_type),
        format!(
            "Cluster UUID: {}",
            c.cluster_uuid.map_or_else(|| "-".into(), |u| u.to_string())
        ),
        format!(
            "Model:        {}",
            output::or_dash(c.deployment_model.as_deref())
        ),
    ]
    .join("\n")
}

pub async fn handle(
    client: &InventoryClient,
    args: ClusterArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ClusterCommand::List => {
            let page = client.list_clusters(&ListQuery::default()).await?;
            let out = output::render_list(global.output, &page.items, |c| ClusterRow::from(c))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ClusterCommand::Get { id } => {
            let id = util::parse_uuid(&id, "id")?;
            let cluster = client.get_cluster(&id).await?;
            let out = output::render_single(global.output, &cluster, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
