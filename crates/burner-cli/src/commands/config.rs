//! Config command - configuration management

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use tracing::info;

use burner_core::Config;

/// Config command arguments
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Config file to show (default: detect)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Generate a configuration file with the defaults
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "burner.toml")]
        output: PathBuf,
    },

    /// Validate a configuration file
    Validate {
        /// Config file to validate
        file: PathBuf,
    },

    /// Show config file locations
    Paths,
}

/// Execute config command
pub fn execute(args: ConfigArgs, global_config: Option<&str>) -> Result<ExitCode> {
    match args.action {
        ConfigAction::Show { file } => show_config(file, global_config),
        ConfigAction::Generate { output } => generate_config(output),
        ConfigAction::Validate { file } => validate_config(file),
        ConfigAction::Paths => show_paths(),
    }?;
    Ok(ExitCode::SUCCESS)
}

fn show_config(file: Option<PathBuf>, global_config: Option<&str>) -> Result<()> {
    let config = if let Some(path) = file {
        Config::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        super::load_config(global_config)?
    };

    println!("{}", config.to_toml().context("Failed to serialize config")?);
    Ok(())
}

fn generate_config(output: PathBuf) -> Result<()> {
    let config = Config::default();
    let toml_str = config.to_toml().context("Failed to serialize config")?;

    // Add header comment
    let content = format!(
        "# Burner Configuration\n\
         # Extra list files stack on top of the embedded dataset\n\n\
         {toml_str}"
    );

    std::fs::write(&output, content)
        .with_context(|| format!("Failed to write config to {}", output.display()))?;

    info!("Generated config file: {}", output.display());
    println!("Configuration file generated: {}", output.display());

    Ok(())
}

fn validate_config(file: PathBuf) -> Result<()> {
    let config = Config::load(&file)
        .with_context(|| format!("Failed to load config from {}", file.display()))?;

    config.validate()
        .context("Configuration validation failed")?;

    println!("{} Configuration is valid", "✓".green());
    println!("  Embedded dataset: {}", config.lists.embedded);
    println!("  Extra blocklists: {}", config.lists.blocklists.len());
    println!("  Extra allowlists: {}", config.lists.allowlists.len());
    println!("  Log level: {}", config.logging.level);

    Ok(())
}

fn show_paths() -> Result<()> {
    println!("Configuration file search paths:");
    println!();

    println!("  1. ./burner.toml");

    if let Some(dirs) = directories::ProjectDirs::from("", "", "burner") {
        println!("  2. {}/config.toml", dirs.config_dir().display());
    }

    println!();
    match super::find_config_file() {
        Some(path) => println!("Active config: {}", path.display().to_string().cyan()),
        None => println!("Active config: {}", "built-in defaults".dimmed()),
    }

    Ok(())
}
