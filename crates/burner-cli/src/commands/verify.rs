//! Verify list files against the dataset hygiene rules

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use burner_core::verify::Violation;
use burner_core::{data, verify_dataset};

/// Verify command arguments
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Blocklist file to verify instead of the shipped dataset
    #[arg(long, value_name = "FILE")]
    pub blocklist: Option<PathBuf>,

    /// Allowlist file to verify instead of the shipped dataset
    #[arg(long, value_name = "FILE")]
    pub allowlist: Option<PathBuf>,
}

/// Execute the verify command
pub fn execute(args: VerifyArgs) -> Result<ExitCode> {
    let blocklist_text = read_or_embedded(args.blocklist.as_ref(), data::BLOCKLIST_RAW)?;
    let allowlist_text = read_or_embedded(args.allowlist.as_ref(), data::ALLOWLIST_RAW)?;

    let report = verify_dataset(&blocklist_text, &allowlist_text);

    print_file_report("blocklist", &report.blocklist, entry_count(&blocklist_text));
    print_file_report("allowlist", &report.allowlist, entry_count(&allowlist_text));

    if report.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        println!();
        println!(
            "{} {} violation(s) found",
            "✗".red(),
            report.total().to_string().red()
        );
        Ok(ExitCode::from(1))
    }
}

fn read_or_embedded(path: Option<&PathBuf>, embedded: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => Ok(embedded.to_string()),
    }
}

fn entry_count(text: &str) -> usize {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .count()
}

fn print_file_report(name: &str, violations: &[Violation], entries: usize) {
    if violations.is_empty() {
        println!(
            "{} {}: no violations ({} entries)",
            "✓".green(),
            name,
            entries
        );
    } else {
        println!("{} {}:", "✗".red(), name);
        for violation in violations {
            println!("  {}", violation.to_string().red());
        }
    }
}
