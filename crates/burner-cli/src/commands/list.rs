//! Print the blocklist or allowlist

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use burner_core::Config;

/// List command arguments
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print the allowlist instead of the blocklist
    #[arg(long)]
    pub allow: bool,

    /// Only print entries containing the given substring
    #[arg(long, value_name = "SUBSTR")]
    pub contains: Option<String>,

    /// Print the entry count only
    #[arg(long)]
    pub count: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> Result<ExitCode> {
    let (name, list) = if args.allow {
        ("Allowlist", config.lists.load_allowlist()?)
    } else {
        ("Blocklist", config.lists.load_blocklist()?)
    };

    let mut domains = list.domains();
    if let Some(ref needle) = args.contains {
        let needle = needle.to_lowercase();
        domains.retain(|d| d.contains(&needle));
    }

    if args.count {
        println!("{}", domains.len());
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("{}", format!(" {name}").bright_white().bold());
    println!("{}", "═".repeat(50).bright_blue());
    println!("Total domains: {}", domains.len().to_string().green());
    println!("{}", "─".repeat(50).bright_black());

    if domains.is_empty() {
        println!("{}", "  (empty)".dimmed());
    } else {
        for domain in &domains {
            println!("{domain}");
        }
    }

    Ok(ExitCode::SUCCESS)
}
