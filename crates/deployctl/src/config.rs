//! Configuration loading and endpoint/token resolution.
//!
//! TOML profiles merged with `DEPLOYCTL_`-prefixed environment
//! variables; CLI flags override both. Tokens resolve through a chain:
//! CLI flag, then the profile's `token_env` variable, then plaintext in
//! the profile.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use deployctl_api::{TlsMode, TransportConfig};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Timeout applied when neither the profile nor the CLI sets one, so
/// interactive use never hangs indefinitely.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Named system profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            profiles: HashMap::new(),
        }
    }
}

/// A named system profile.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Profile {
    /// Inventory service endpoint URL.
    pub endpoint: String,

    /// Auth token (plaintext — prefer token_env).
    pub token: Option<String>,

    /// Environment variable name containing the auth token.
    pub token_env: Option<String>,

    /// Path to a custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS verification for this system.
    pub insecure: Option<bool>,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "starlingx", "deployctl").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("deployctl");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("DEPLOYCTL_CONFIG_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, falling back to defaults when the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Resolution ──────────────────────────────────────────────────────

/// Everything needed to build an `InventoryClient`.
pub struct ResolvedTarget {
    pub endpoint: String,
    pub token: SecretString,
    pub transport: TransportConfig,
}

/// The profile name the CLI should use: flag, then config default.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Resolve endpoint, token, and transport from profile + CLI overrides.
pub fn resolve(global: &GlobalOpts) -> Result<ResolvedTarget, CliError> {
    let cfg = load_config_or_default();
    let profile_name = active_profile_name(global, &cfg);

    // --profile naming a missing profile is an error; the implicit
    // default profile is allowed to be absent.
    let profile = match cfg.profiles.get(&profile_name) {
        Some(p) => Some(p.clone()),
        None if global.profile.is_some() => {
            let mut available: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
            available.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available.join(", "),
            });
        }
        None => None,
    };

    let endpoint = global
        .endpoint
        .clone()
        .or_else(|| profile.as_ref().map(|p| p.endpoint.clone()))
        .ok_or_else(|| CliError::NoEndpoint {
            path: config_path().display().to_string(),
        })?;

    let token = resolve_token(global, profile.as_ref(), &profile_name)?;

    let tls = if global.insecure || profile.as_ref().is_some_and(|p| p.insecure.unwrap_or(false)) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca) = profile.as_ref().and_then(|p| p.ca_cert.clone()) {
        TlsMode::CustomCa(ca)
    } else {
        TlsMode::System
    };

    let timeout_secs = global
        .timeout
        .or_else(|| profile.as_ref().and_then(|p| p.timeout))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(ResolvedTarget {
        endpoint,
        token,
        transport: TransportConfig {
            tls,
            timeout: Some(Duration::from_secs(timeout_secs)),
        },
    })
}

/// Resolve the auth token: CLI flag → profile token_env → plaintext.
fn resolve_token(
    global: &GlobalOpts,
    profile: Option<&Profile>,
    profile_name: &str,
) -> Result<SecretString, CliError> {
    if let Some(ref token) = global.token {
        return Ok(SecretString::from(token.clone()));
    }

    if let Some(profile) = profile {
        if let Some(ref env_name) = profile.token_env {
            if let Ok(val) = std::env::var(env_name) {
                return Ok(SecretString::from(val));
            }
        }
        if let Some(ref token) = profile.token {
            return Ok(SecretString::from(token.clone()));
        }
    }

    Err(CliError::NoToken {
        profile: profile_name.into(),
    })
}
