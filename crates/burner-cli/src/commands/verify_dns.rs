//! Verify that listed domains still resolve and accept mail
//!
//! Looks up MX records for every entry in both lists. Dead domains show up
//! as NXDOMAIN, lookup timeouts, or a missing MX record set. All three mean
//! the entry no longer belongs in the dataset.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::ResolveErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};

use burner_core::data;

/// Verify-dns command arguments
#[derive(Args, Debug)]
pub struct VerifyDnsArgs {
    /// Blocklist file to check instead of the shipped dataset
    #[arg(long, value_name = "FILE")]
    pub blocklist: Option<PathBuf>,

    /// Allowlist file to check instead of the shipped dataset
    #[arg(long, value_name = "FILE")]
    pub allowlist: Option<PathBuf>,

    /// Maximum number of in-flight lookups
    #[arg(long, value_name = "N", default_value = "32")]
    pub concurrency: usize,

    /// Per-lookup timeout in seconds
    #[arg(long, value_name = "N", default_value = "1")]
    pub timeout_secs: u64,

    /// Resolver to query
    #[arg(long, value_enum, default_value = "system")]
    pub resolver: ResolverKind,

    /// Only check the first N entries of each list
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Which upstream resolver to use
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ResolverKind {
    /// The resolver configured on this host
    System,
    /// Cloudflare public DNS (1.1.1.1)
    Cloudflare,
    /// Google public DNS (8.8.8.8)
    Google,
    /// Quad9 public DNS (9.9.9.9)
    Quad9,
}

/// Outcome of a single MX lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MxStatus {
    Ok,
    NoMx,
    NxDomain,
    Timeout,
    Error,
}

impl MxStatus {
    /// Progress glyph printed while checking
    fn glyph(self) -> &'static str {
        match self {
            MxStatus::Ok => ".",
            MxStatus::NoMx => "M",
            MxStatus::NxDomain => "X",
            MxStatus::Timeout => "T",
            MxStatus::Error => "E",
        }
    }

    fn label(self) -> &'static str {
        match self {
            MxStatus::Ok => "ok",
            MxStatus::NoMx => "no MX records",
            MxStatus::NxDomain => "NXDOMAIN",
            MxStatus::Timeout => "timeout",
            MxStatus::Error => "resolver error",
        }
    }
}

/// Execute the verify-dns command
pub fn execute(args: VerifyDnsArgs) -> Result<ExitCode> {
    let allowlist = load_entries(args.allowlist.as_ref(), data::ALLOWLIST_RAW, args.limit)?;
    let blocklist = load_entries(args.blocklist.as_ref(), data::BLOCKLIST_RAW, args.limit)?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(run_checks(args, allowlist, blocklist))
}

async fn run_checks(
    args: VerifyDnsArgs,
    allowlist: Vec<String>,
    blocklist: Vec<String>,
) -> Result<ExitCode> {
    let resolver = Arc::new(build_resolver(args.resolver, args.timeout_secs)?);
    info!(
        "Checking MX records for {} domains with {} in-flight lookups",
        allowlist.len() + blocklist.len(),
        args.concurrency
    );

    let mut invalid = 0;
    invalid += check_list("allowlist", allowlist, Arc::clone(&resolver), args.concurrency).await?;
    invalid += check_list("blocklist", blocklist, resolver, args.concurrency).await?;

    if invalid > 0 {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Check one list, printing a progress glyph per domain and a summary of
/// the failures. Returns the number of failing entries.
async fn check_list(
    name: &str,
    domains: Vec<String>,
    resolver: Arc<TokioAsyncResolver>,
    concurrency: usize,
) -> Result<usize> {
    println!("checking {name}");

    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    for (index, domain) in domains.into_iter().enumerate() {
        let resolver = Arc::clone(&resolver);
        let semaphore = Arc::clone(&semaphore);
        tasks.spawn(async move {
            let _permit = match semaphore.acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => return (index, domain, MxStatus::Error),
            };
            let status = query_mx(&resolver, &domain).await;
            (index, domain, status)
        });
    }

    let mut failures = Vec::new();
    let mut stdout = io::stdout();
    while let Some(joined) = tasks.join_next().await {
        let (index, domain, status) = joined.context("MX lookup task failed")?;
        print!("{}", status.glyph());
        stdout.flush().ok();
        if status != MxStatus::Ok {
            debug!("{} failed MX check: {}", domain, status.label());
            failures.push((index, domain, status));
        }
    }
    println!();

    // Completion order is arbitrary; report in file order.
    failures.sort_by_key(|(index, _, _)| *index);

    if !failures.is_empty() {
        println!("Found invalid domains in DNS:");
        for (_, domain, status) in &failures {
            println!(
                "{} {} {}",
                "✗".red(),
                domain,
                format!("({})", status.label()).dimmed()
            );
        }
    }

    Ok(failures.len())
}

fn build_resolver(kind: ResolverKind, timeout_secs: u64) -> Result<TokioAsyncResolver> {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = 1;

    let resolver = match kind {
        // System configuration carries its own timeout and retry settings.
        ResolverKind::System => TokioAsyncResolver::tokio_from_system_conf()
            .context("Failed to read system resolver configuration")?,
        ResolverKind::Cloudflare => {
            TokioAsyncResolver::tokio(ResolverConfig::cloudflare(), opts)
        }
        ResolverKind::Google => TokioAsyncResolver::tokio(ResolverConfig::google(), opts),
        ResolverKind::Quad9 => TokioAsyncResolver::tokio(ResolverConfig::quad9(), opts),
    };
    Ok(resolver)
}

async fn query_mx(resolver: &TokioAsyncResolver, domain: &str) -> MxStatus {
    match resolver.mx_lookup(domain).await {
        Ok(lookup) => {
            if lookup.iter().next().is_some() {
                MxStatus::Ok
            } else {
                MxStatus::NoMx
            }
        }
        Err(e) => match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. }
                if *response_code == ResponseCode::NXDomain =>
            {
                MxStatus::NxDomain
            }
            ResolveErrorKind::NoRecordsFound { .. } => MxStatus::NoMx,
            ResolveErrorKind::Timeout => MxStatus::Timeout,
            _ => MxStatus::Error,
        },
    }
}

/// Read the entries of a list file in file order.
fn load_entries(
    path: Option<&PathBuf>,
    embedded: &str,
    limit: Option<usize>,
) -> Result<Vec<String>> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => embedded.to_string(),
    };

    let mut entries: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect();

    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    Ok(entries)
}
