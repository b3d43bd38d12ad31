//! CLI error types with miette diagnostics.
//!
//! Maps `deployctl_api::Error` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

/// Exit codes surfaced by the binary.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the inventory service{url}")]
    #[diagnostic(
        code(deployctl::connection_failed),
        help(
            "Check that the endpoint is correct and the service is reachable.\n\
             Try: deployctl cluster list --insecure"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS error: {message}")]
    #[diagnostic(
        code(deployctl::tls_error),
        help(
            "The system may be using a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or configure ca_cert in your profile."
        )
    )]
    TlsError { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(deployctl::timeout),
        help("Increase the timeout with --timeout or check service responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication rejected (HTTP {status})")]
    #[diagnostic(
        code(deployctl::auth_failed),
        help(
            "The auth token was rejected. Obtain a fresh token and pass it\n\
             via --token or the DEPLOYCTL_TOKEN environment variable."
        )
    )]
    AuthFailed { status: u16 },

    #[error("No auth token configured for profile '{profile}'")]
    #[diagnostic(
        code(deployctl::no_token),
        help(
            "Set DEPLOYCTL_TOKEN, pass --token, or add a token to the profile\n\
             in your configuration file."
        )
    )]
    NoToken { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(deployctl::not_found),
        help("Run: deployctl {list_command} to see what the system reports")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Inventory API error (HTTP {status}): {message}")]
    #[diagnostic(code(deployctl::api_error))]
    ApiError { status: u16, message: String },

    #[error("The service answered with an undecodable body: {message}")]
    #[diagnostic(code(deployctl::decode_error))]
    Decode { message: String },

    #[error("Install rejected: {message}")]
    #[diagnostic(code(deployctl::install_rejected))]
    InstallRejected { message: String },

    #[error("Operation cancelled")]
    #[diagnostic(code(deployctl::cancelled))]
    Cancelled,

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(deployctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No inventory endpoint configured")]
    #[diagnostic(
        code(deployctl::no_endpoint),
        help(
            "Pass --endpoint (-H), set DEPLOYCTL_ENDPOINT, or add an endpoint\n\
             to a profile at: {path}"
        )
    )]
    NoEndpoint { path: String },

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(deployctl::profile_not_found),
        help("Available profiles: {available}")
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(deployctl::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(deployctl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(deployctl::json))]
    Json(#[from] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoToken { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. }
            | Self::NoEndpoint { .. }
            | Self::ProfileNotFound { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── deployctl_api::Error → CliError mapping ─────────────────────────

impl From<deployctl_api::Error> for CliError {
    fn from(err: deployctl_api::Error) -> Self {
        use deployctl_api::Error as Api;

        match err {
            Api::Transport(e) => {
                if e.is_timeout() {
                    CliError::Timeout
                } else {
                    CliError::ConnectionFailed {
                        url: e
                            .url()
                            .map(|u| format!(" at {u}"))
                            .unwrap_or_default(),
                        source: e.into(),
                    }
                }
            }

            Api::InvalidUrl(e) => CliError::Validation {
                field: "endpoint".into(),
                reason: e.to_string(),
            },

            Api::Tls(message) => CliError::TlsError { message },

            Api::Api {
                status, message, ..
            } => CliError::ApiError { status, message },

            Api::NotFound { url } => CliError::NotFound {
                resource_type: "resource".into(),
                identifier: url,
                list_command: "cluster list".into(),
            },

            Api::AuthFailed { status } => CliError::AuthFailed { status },

            Api::Deserialization { message, .. } => CliError::Decode { message },

            Api::MalformedPatch(reason) => CliError::Validation {
                field: "update".into(),
                reason,
            },

            Api::Cancelled => CliError::Cancelled,
        }
    }
}
