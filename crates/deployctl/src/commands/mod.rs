//! Command dispatch: bridges CLI args -> inventory client calls -> output.

pub mod address;
pub mod certificate;
pub mod cluster;
pub mod config_cmd;
pub mod dns;
pub mod drbd;
pub mod filesystem;
pub mod license;
pub mod ntp;
pub mod ptp;
pub mod ptp_parameter;
pub mod util;

use deployctl_api::InventoryClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &InventoryClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Dns(args) => dns::handle(client, args, global).await,
        Command::Ntp(args) => ntp::handle(client, args, global).await,
        Command::Ptp(args) => ptp::handle(client, args, global).await,
        Command::PtpParams(args) => ptp_parameter::handle(client, args, global).await,
        Command::Address(args) => address::handle(client, args, global).await,
        Command::Cert(args) => certificate::handle(client, args, global).await,
        Command::Cluster(args) => cluster::handle(client, args, global).await,
        Command::Drbd(args) => drbd::handle(client, args, global).await,
        Command::Fs(args) => filesystem::handle(client, args, global).await,
        Command::License(args) => license::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
