//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use crate::commands::Command;

/// Burner - disposable email domain checker
///
/// Checks email addresses and domains against a curated blocklist of
/// disposable email providers. Matching is subdomain-aware, so entries
/// cover their whole subtree.
#[derive(Parser, Debug)]
#[command(name = "burner")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Run in quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for logs
    #[arg(long, value_enum, value_name = "FORMAT", global = true)]
    pub log_format: Option<LogFormat>,

    /// Log file path
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
    /// Compact format
    Compact,
}
