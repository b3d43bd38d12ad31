//! Configuration inspection commands.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let profile_name = config::active_profile_name(global, &cfg);

            println!("config file: {}", config::config_path().display());
            println!("active profile: {profile_name}");

            let mut names: Vec<&String> = cfg.profiles.keys().collect();
            names.sort_unstable();
            for name in names {
                let Some(profile) = cfg.profiles.get(name) else {
                    continue;
                };
                println!("\n[{name}]");
                println!("  endpoint: {}", profile.endpoint);
                println!(
                    "  token: {}",
                    if profile.token.is_some() {
                        "<redacted>"
                    } else {
                        "-"
                    }
                );
                if let Some(ref env_name) = profile.token_env {
                    println!("  token_env: {env_name}");
                }
                if let Some(insecure) = profile.insecure {
                    println!("  insecure: {insecure}");
                }
                if let Some(timeout) = profile.timeout {
                    println!("  timeout: {timeout}s");
                }
            }
            Ok(())
        }
    }
}
