//! Dataset integrity checking
//!
//! Report-only consistency rules for the list files: format violations
//! within a file (case, ordering, duplicates, entry shape) and rules across
//! the pair (overlap, shadowed subdomain entries). Nothing here ever
//! rewrites a file; fixing the data is a maintenance step, not a runtime
//! one.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::domain;

/// A single rule violation in a list file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Line number in the file (1-based)
    pub line: usize,
    /// The offending entry
    pub entry: String,
    /// Which rule was broken
    pub kind: ViolationKind,
}

/// The rules a list entry can break
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    /// Entry is not entirely lowercase
    NotLowercase,
    /// Entry contains an `@`; lists hold domains, not addresses
    ContainsAt,
    /// Entry is not shaped like a registrable domain (bare label,
    /// whitespace, empty label)
    NotADomain,
    /// Entry sorts before the previous entry; files are kept byte-sorted
    OutOfOrder {
        /// The entry this one should not precede
        previous: String,
    },
    /// Entry appeared earlier in the same file
    Duplicate {
        /// Line of the first occurrence
        first_line: usize,
    },
    /// Entry appears in both the blocklist and the allowlist
    AllowlistOverlap,
    /// Entry is a subdomain of another blocklist entry and can never be
    /// the first match
    ShadowedBy {
        /// The parent entry that already covers this one
        entry: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ViolationKind::NotLowercase => {
                write!(f, "line {}: '{}' is not lowercase", self.line, self.entry)
            }
            ViolationKind::ContainsAt => {
                write!(f, "line {}: '{}' contains '@'", self.line, self.entry)
            }
            ViolationKind::NotADomain => {
                write!(f, "line {}: '{}' is not a registrable domain", self.line, self.entry)
            }
            ViolationKind::OutOfOrder { previous } => {
                write!(f, "line {}: '{}' sorts before '{}'", self.line, self.entry, previous)
            }
            ViolationKind::Duplicate { first_line } => {
                write!(f, "line {}: '{}' duplicates line {}", self.line, self.entry, first_line)
            }
            ViolationKind::AllowlistOverlap => {
                write!(f, "line {}: '{}' appears in both lists", self.line, self.entry)
            }
            ViolationKind::ShadowedBy { entry } => {
                write!(f, "line {}: '{}' is already covered by '{}'", self.line, self.entry, entry)
            }
        }
    }
}

/// Verification results for a blocklist/allowlist pair
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Violations found in the blocklist
    pub blocklist: Vec<Violation>,
    /// Violations found in the allowlist
    pub allowlist: Vec<Violation>,
}

impl Report {
    /// Whether no violations were found
    pub fn is_clean(&self) -> bool {
        self.blocklist.is_empty() && self.allowlist.is_empty()
    }

    /// Total number of violations across both files
    pub fn total(&self) -> usize {
        self.blocklist.len() + self.allowlist.len()
    }
}

/// List entries with their 1-based line numbers, comments and blanks skipped.
///
/// Lines are taken as-is apart from a stripped trailing `\r`, so whitespace
/// damage stays visible to the shape rule.
fn entries(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.strip_suffix('\r').unwrap_or(line)))
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .collect()
}

fn is_domain_shaped(entry: &str) -> bool {
    !entry.is_empty()
        && !entry.chars().any(char::is_whitespace)
        && entry.contains('.')
        && !entry.starts_with('.')
        && !entry.ends_with('.')
        && !entry.contains("..")
}

/// Check a single list file against the per-file rules
pub fn verify_list(text: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut previous: Option<&str> = None;

    for (line, entry) in entries(text) {
        let push = |violations: &mut Vec<Violation>, kind| {
            violations.push(Violation {
                line,
                entry: entry.to_string(),
                kind,
            });
        };

        if entry.contains('@') {
            push(&mut violations, ViolationKind::ContainsAt);
        }
        if entry != entry.to_lowercase() {
            push(&mut violations, ViolationKind::NotLowercase);
        }
        if !is_domain_shaped(entry) {
            push(&mut violations, ViolationKind::NotADomain);
        }
        if let Some(prev) = previous {
            if entry < prev {
                push(&mut violations, ViolationKind::OutOfOrder {
                    previous: prev.to_string(),
                });
            }
        }
        match first_seen.get(entry) {
            Some(&first_line) => {
                push(&mut violations, ViolationKind::Duplicate { first_line });
            }
            None => {
                first_seen.insert(entry, line);
            }
        }
        previous = Some(entry);
    }

    violations
}

/// Check the blocklist/allowlist pair: per-file rules plus overlap and
/// shadowing across entries
pub fn verify_dataset(blocklist: &str, allowlist: &str) -> Report {
    let mut report = Report {
        blocklist: verify_list(blocklist),
        allowlist: verify_list(allowlist),
    };

    let block_entries = entries(blocklist);
    let allow_set: HashSet<&str> = entries(allowlist).iter().map(|&(_, e)| e).collect();
    let block_set: HashSet<&str> = block_entries.iter().map(|&(_, e)| e).collect();

    for &(line, entry) in &block_entries {
        if allow_set.contains(entry) {
            report.blocklist.push(Violation {
                line,
                entry: entry.to_string(),
                kind: ViolationKind::AllowlistOverlap,
            });
        }
        // The first proper parent suffix that is itself listed makes this
        // entry unreachable for first-match purposes.
        for candidate in domain::candidates(entry).skip(1) {
            if block_set.contains(candidate) {
                report.blocklist.push(Violation {
                    line,
                    entry: entry.to_string(),
                    kind: ViolationKind::ShadowedBy {
                        entry: candidate.to_string(),
                    },
                });
                break;
            }
        }
    }

    report.blocklist.sort_by_key(|v| v.line);
    report
}
