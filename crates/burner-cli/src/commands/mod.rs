//! CLI commands

pub mod check;
pub mod completions;
pub mod config;
pub mod list;
pub mod verify;
pub mod verify_dns;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::debug;

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check email addresses or domains against the blocklist
    Check(check::CheckArgs),

    /// Print the blocklist or allowlist
    List(list::ListArgs),

    /// Verify list files against the dataset hygiene rules
    Verify(verify::VerifyArgs),

    /// Verify that listed domains still resolve and accept mail
    VerifyDns(verify_dns::VerifyDnsArgs),

    /// Configuration management
    Config(config::ConfigArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the effective configuration.
///
/// An explicitly passed path must exist. Otherwise well-known locations
/// are probed and the defaults are used when nothing is found.
pub fn load_config(explicit: Option<&str>) -> Result<burner_core::Config> {
    let config = if let Some(path) = explicit {
        burner_core::Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path))?
    } else if let Some(path) = find_config_file() {
        debug!("Using config file {}", path.display());
        burner_core::Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        burner_core::Config::default()
    };

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Probe the well-known config file locations.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("burner.toml");
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "burner") {
        let user = dirs.config_dir().join("config.toml");
        if user.exists() {
            return Some(user);
        }
    }

    None
}
