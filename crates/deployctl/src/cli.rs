//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "deployctl",
    version,
    about = "Inspect a running StarlingX system and manage its inventory configuration",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Inventory service endpoint URL.
    #[arg(long, short = 'H', env = "DEPLOYCTL_ENDPOINT", global = true)]
    pub endpoint: Option<String>,

    /// Auth token for the inventory service.
    #[arg(long, env = "DEPLOYCTL_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Configuration profile to use.
    #[arg(long, short = 'p', env = "DEPLOYCTL_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Skip TLS certificate verification.
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Assume yes for destructive prompts.
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// DNS nameserver configuration.
    Dns(DnsArgs),
    /// NTP server configuration.
    Ntp(NtpArgs),
    /// PTP configuration.
    Ptp(PtpArgs),
    /// PTP service parameters.
    #[command(name = "ptp-params")]
    PtpParams(PtpParamsArgs),
    /// Host interface addresses.
    Address(AddressArgs),
    /// System certificates.
    Cert(CertArgs),
    /// Storage clusters.
    Cluster(ClusterArgs),
    /// DRBD replication configuration.
    Drbd(DrbdArgs),
    /// Host filesystems.
    Fs(FsArgs),
    /// Licence management.
    License(LicenseArgs),
    /// Inspect deployctl configuration.
    Config(ConfigArgs),
    /// Generate shell completions.
    Completions(CompletionsArgs),
}

// ── DNS ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DnsArgs {
    #[command(subcommand)]
    pub command: DnsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DnsCommand {
    /// Show the DNS configuration.
    Show,
    /// Replace the nameserver list.
    Update {
        /// Comma-separated nameservers.
        #[arg(long, conflicts_with = "clear")]
        nameservers: Option<String>,

        /// Clear the nameserver list.
        #[arg(long)]
        clear: bool,
    },
}

// ── NTP ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NtpArgs {
    #[command(subcommand)]
    pub command: NtpCommand,
}

#[derive(Debug, Subcommand)]
pub enum NtpCommand {
    /// Show the NTP configuration.
    Show,
    /// Replace the NTP server list.
    Update {
        /// Comma-separated NTP servers.
        #[arg(long, conflicts_with = "clear")]
        servers: Option<String>,

        /// Clear the server list.
        #[arg(long)]
        clear: bool,
    },
}

// ── PTP ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PtpArgs {
    #[command(subcommand)]
    pub command: PtpCommand,
}

#[derive(Debug, Subcommand)]
pub enum PtpCommand {
    /// Show the PTP configuration.
    Show,
    /// Change PTP settings.
    Update {
        /// Timestamping mode: hardware or software.
        #[arg(long)]
        mode: Option<String>,

        /// Network transport: l2 or udp.
        #[arg(long)]
        transport: Option<String>,

        /// Delay mechanism: e2e or p2p.
        #[arg(long)]
        mechanism: Option<String>,
    },
}

// ── PTP parameters ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PtpParamsArgs {
    #[command(subcommand)]
    pub command: PtpParamsCommand,
}

#[derive(Debug, Subcommand)]
pub enum PtpParamsCommand {
    /// List PTP parameters.
    List,
    /// Show one PTP parameter.
    Get { id: String },
    /// Create a PTP parameter.
    Add {
        name: String,
        value: String,
    },
    /// Delete a PTP parameter.
    Delete { id: String },
}

// ── Addresses ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AddressArgs {
    #[command(subcommand)]
    pub command: AddressCommand,
}

#[derive(Debug, Subcommand)]
pub enum AddressCommand {
    /// List the addresses assigned to a host.
    List {
        /// Host UUID.
        #[arg(long)]
        host: String,
    },
    /// Show one address.
    Get { id: String },
    /// Assign an address to an interface.
    Add {
        /// Interface UUID.
        #[arg(long)]
        interface: String,

        /// IPv4 or IPv6 literal.
        #[arg(long)]
        address: String,

        /// Prefix length in bits.
        #[arg(long)]
        prefix: i32,

        /// Address pool UUID.
        #[arg(long)]
        pool: Option<String>,

        /// Enable duplicate address detection.
        #[arg(long)]
        enable_dad: bool,
    },
    /// Remove an address.
    Delete { id: String },
}

// ── Certificates ────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CertArgs {
    #[command(subcommand)]
    pub command: CertCommand,
}

#[derive(Debug, Subcommand)]
pub enum CertCommand {
    /// List installed certificates.
    List,
    /// Show one certificate.
    Get { id: String },
    /// Install a certificate from a PEM file.
    Install {
        /// Install mode, e.g. ssl or ssl_ca.
        #[arg(long)]
        mode: String,

        /// Path to the PEM file.
        file: PathBuf,
    },
}

// ── Clusters ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ClusterArgs {
    #[command(subcommand)]
    pub command: ClusterCommand,
}

#[derive(Debug, Subcommand)]
pub enum ClusterCommand {
    /// List storage clusters.
    List,
    /// Show one cluster.
    Get { id: String },
}

// ── DRBD ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DrbdArgs {
    #[command(subcommand)]
    pub command: DrbdCommand,
}

#[derive(Debug, Subcommand)]
pub enum DrbdCommand {
    /// Show the DRBD configuration.
    Show,
    /// Change DRBD settings.
    Update {
        /// Link utilisation percentage.
        #[arg(long)]
        link_util: Option<i32>,

        /// Number of parallel devices to sync.
        #[arg(long)]
        num_parallel: Option<i32>,

        /// Round-trip delay in milliseconds.
        #[arg(long)]
        rtt_ms: Option<f64>,
    },
}

// ── Host filesystems ────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FsArgs {
    #[command(subcommand)]
    pub command: FsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FsCommand {
    /// List the filesystems on a host.
    List {
        /// Host UUID.
        #[arg(long)]
        host: String,
    },
    /// Show one filesystem.
    Get { id: String },
    /// Resize a filesystem on a host.
    Update {
        /// Host UUID.
        #[arg(long)]
        host: String,

        /// Filesystem name, e.g. backup.
        #[arg(long)]
        name: String,

        /// New size in GiB.
        #[arg(long)]
        size: i32,
    },
}

// ── Licences ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LicenseArgs {
    #[command(subcommand)]
    pub command: LicenseCommand,
}

#[derive(Debug, Subcommand)]
pub enum LicenseCommand {
    /// Show the installed licence.
    Show,
    /// Install a licence file.
    Install {
        /// Path to the licence file.
        file: PathBuf,
    },
}

// ── Config & completions ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the resolved configuration (token redacted).
    Show,
    /// Print the configuration file path.
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
