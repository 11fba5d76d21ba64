//! Burner CLI
//!
//! Command-line interface for the disposable email domain checker.

mod args;
mod commands;
mod logging;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::error;

use args::Args;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Shells eval the completion output; a broken config file in the
    // search path must not take this command down.
    if matches!(args.command, commands::Command::Completions(_)) {
        return match run(args, burner_core::Config::default()) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::from(2)
            }
        };
    }

    // Load configuration before logging so the config can set defaults
    let config = match commands::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Keep the config command usable for inspecting and fixing a
            // broken file; its subcommands load what they need.
            if matches!(args.command, commands::Command::Config(_)) {
                burner_core::Config::default()
            } else {
                eprintln!("Error: {e:#}");
                return ExitCode::from(2);
            }
        }
    };

    // Initialize logging
    if let Err(e) = logging::init(&args, &config.logging) {
        eprintln!("Error: failed to initialize logging: {e:#}");
        return ExitCode::from(2);
    }

    // Run the main logic
    match run(args, config) {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(args: Args, config: burner_core::Config) -> Result<ExitCode> {
    match args.command {
        commands::Command::Check(check_args) => {
            commands::check::execute(check_args, &config)
        }
        commands::Command::List(list_args) => {
            commands::list::execute(list_args, &config)
        }
        commands::Command::Verify(verify_args) => {
            commands::verify::execute(verify_args)
        }
        commands::Command::VerifyDns(dns_args) => {
            commands::verify_dns::execute(dns_args)
        }
        commands::Command::Config(config_args) => {
            commands::config::execute(config_args, args.config.as_deref())
        }
        commands::Command::Completions(comp_args) => {
            commands::completions::execute(comp_args)
        }
    }
}
