//! Check email addresses or domains against the blocklist

use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use burner_core::{domain, Config, DomainList};

/// Check command arguments
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Email addresses or bare domains to check
    #[arg(value_name = "ADDRESS|DOMAIN", required_unless_present = "stdin")]
    pub inputs: Vec<String>,

    /// Read inputs from stdin, one per line
    #[arg(long)]
    pub stdin: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Check output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// One JSON object per input
    Json,
}

/// Verdict for a single input
#[derive(Debug, Serialize)]
struct Verdict<'a> {
    input: &'a str,
    domain: Option<&'a str>,
    disposable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    matched_entry: Option<&'a str>,
}

/// Execute the check command
pub fn execute(args: CheckArgs, config: &Config) -> Result<ExitCode> {
    let blocklist = config.lists.load_blocklist()?;
    debug!("Checking against {} blocked domains", blocklist.len());

    let mut any_disposable = false;

    for input in &args.inputs {
        any_disposable |= check_one(input, &blocklist, args.format)?;
    }

    if args.stdin {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read from stdin")?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            any_disposable |= check_one(input, &blocklist, args.format)?;
        }
    }

    if any_disposable {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Check a single input and print its verdict. Returns whether it was
/// disposable.
fn check_one(input: &str, blocklist: &DomainList, format: OutputFormat) -> Result<bool> {
    // Inputs with an '@' are addresses; anything else is a bare domain.
    let domain = if input.contains('@') {
        domain::domain_of(input)
    } else {
        Some(input)
    };

    let matched = domain.and_then(|d| blocklist.matching_entry(d));
    let verdict = Verdict {
        input,
        domain,
        disposable: matched.is_some(),
        matched_entry: matched,
    };

    match format {
        OutputFormat::Text => {
            if let Some(entry) = verdict.matched_entry {
                println!(
                    "{} {} {}",
                    "✗".red(),
                    verdict.input,
                    format!("(matches {})", entry).dimmed()
                );
            } else {
                println!("{} {}", "✓".green(), verdict.input);
            }
        }
        OutputFormat::Json => {
            let line = serde_json::to_string(&verdict)
                .context("Failed to serialize verdict")?;
            println!("{line}");
        }
    }

    Ok(verdict.disposable)
}
