//! Host filesystem command handlers.

use tabled::Tabled;

use deployctl_api::{InventoryClient, ListQuery};
use deployctl_api::resources::hostfs::{HostFilesystem, HostFilesystemOpts};

use crate::cli::{FsArgs, FsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

#[derive(Tabled)]
struct FsRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Size (GiB)")]
    size: i32,
    #[tabled(rename = "Volume")]
    logical_volume: String,
}

impl From<&HostFilesystem> for FsRow {
    fn from(fs: &HostFilesystem) -> Self {
        Self {
            uuid: fs.uuid.to_string(),
            name: fs.name.clone(),
            size: fs.size,
            logical_volume: fs.logical_volume.clone(),
        }
    }
}

fn detail(fs: &HostFilesystem) -> String {
    [
        format!("UUID:   {}", fs.uuid),
        format!("Name:   {}", fs.name),
        format!("Size:   {} GiB", fs.size),
        format!("Volume: {}", fs.logical_volume),
        format!("Host:   {}", fs.ihost_uuid),
    ]
    .join("\n")
}

pub async fn handle(
    client: &InventoryClient,
    args: FsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FsCommand::List { host } => {
            let host = util::parse_uuid(&host, "host")?;
            let page = client
                .list_host_filesystems(&host, &ListQuery::default())
                .await?;
            let out = output::render_list(global.output, &page.items, |f| FsRow::from(f))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FsCommand::Get { id } => {
            let id = util::parse_uuid(&id, "id")?;
            let fs = client.get_host_filesystem(&id).await?;
            let out = output::render_single(global.output, &fs, detail)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FsCommand::Update { host, name, size } => {
            let host = util::parse_uuid(&host, "host")?;
            client
                .update_host_filesystems(
                    &host,
                    &[HostFilesystemOpts {
                        name: Some(name.clone()),
                        size: Some(size),
                    }],
                )
                .await?;

            if !global.quiet {
                eprintln!("Filesystem '{name}' resized to {size} GiB");
            }
            Ok(())
        }
    }
}
