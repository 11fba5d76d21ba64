//! Domain list storage and matching
//!
//! `DomainList` is an immutable set of lowercase domains built once from a
//! file, string, or iterator, then queried concurrently without locking.
//! Matching is subdomain-aware: an address whose domain sits anywhere under
//! a listed entry matches that entry.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::domain;
use crate::error::{Error, Result};

/// An immutable set of domains with subdomain-aware matching
///
/// List sources use one domain per line; blank lines and lines starting
/// with `#` are skipped, entries are trimmed and lowercased. Entries that
/// could never match a domain (containing `@` or whitespace) are rejected.
#[derive(Debug, Clone, Default)]
pub struct DomainList {
    domains: HashSet<String>,
}

impl DomainList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a list from file contents
    pub fn parse(content: &str) -> Result<Self> {
        let mut list = Self::new();
        for (index, line) in content.lines().enumerate() {
            list.add_line(line, index + 1)?;
        }
        Ok(list)
    }

    /// Parse a list from a buffered reader
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut list = Self::new();
        for (index, line) in reader.lines().enumerate() {
            list.add_line(&line?, index + 1)?;
        }
        Ok(list)
    }

    /// Load a list from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::list_file(path.display().to_string(), e.to_string()))?;
        let list = Self::parse(&content)?;
        info!("Loaded {} domains from {}", list.len(), path.display());
        Ok(list)
    }

    /// Build a list from an iterator of domains
    ///
    /// Entries are trimmed and lowercased; empty ones are dropped. Unlike
    /// the parsing constructors this never fails, so entries that cannot
    /// match (an `@`, whitespace) are stored as-is and simply never hit.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domains = domains
            .into_iter()
            .map(|d| {
                let d = d.into();
                d.trim().to_lowercase()
            })
            .filter(|d| !d.is_empty())
            .collect();
        Self { domains }
    }

    fn add_line(&mut self, raw: &str, line: usize) -> Result<()> {
        let entry = raw.trim();
        if entry.is_empty() || entry.starts_with('#') {
            return Ok(());
        }
        if entry.contains('@') {
            return Err(Error::invalid_entry(entry, line, "entries are domains, not addresses"));
        }
        if entry.chars().any(char::is_whitespace) {
            return Err(Error::invalid_entry(entry, line, "entry contains whitespace"));
        }
        self.domains.insert(entry.to_lowercase());
        Ok(())
    }

    /// Union another list into this one
    pub fn merge(&mut self, other: Self) {
        self.domains.extend(other.domains);
    }

    /// Exact membership check (case-insensitive)
    pub fn contains(&self, entry: &str) -> bool {
        self.domains.contains(entry.trim().to_lowercase().as_str())
    }

    /// Find the list entry covering a domain, if any
    ///
    /// Walks the candidate suffixes of `domain` from most to least specific
    /// and returns the first entry found, so an exact hit wins over a parent
    /// entry. A single-label domain has no candidates and never matches.
    pub fn matching_entry(&self, domain: &str) -> Option<&str> {
        let domain = domain.trim().to_lowercase();
        for candidate in domain::candidates(&domain) {
            if let Some(entry) = self.domains.get(candidate) {
                debug!("Domain {} matched list entry {}", domain, entry);
                return Some(entry.as_str());
            }
        }
        None
    }

    /// Whether a domain (or any parent of it) is listed
    pub fn matches_domain(&self, domain: &str) -> bool {
        self.matching_entry(domain).is_some()
    }

    /// Find the list entry covering an email address's domain, if any
    ///
    /// Malformed input (no `@`, empty domain) yields `None` rather than an
    /// error: an address this code cannot read is not a listed address.
    pub fn email_entry(&self, address: &str) -> Option<&str> {
        let domain = domain::domain_of(address)?;
        self.matching_entry(domain)
    }

    /// Whether an email address belongs to a listed domain
    pub fn matches_email(&self, address: &str) -> bool {
        self.email_entry(address).is_some()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Iterate over entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// All entries, sorted
    pub fn domains(&self) -> Vec<&str> {
        let mut all: Vec<&str> = self.domains.iter().map(String::as_str).collect();
        all.sort_unstable();
        all
    }
}

impl FromStr for DomainList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = DomainList::parse("# header\n\nmailinator.com\n  \n# tail\n").unwrap();
        assert_eq!(list.len(), 1);
        assert!(list.contains("mailinator.com"));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let list = DomainList::parse("MailiNator.COM\n").unwrap();
        assert!(list.contains("mailinator.com"));
        assert!(list.matches_domain("MAILINATOR.COM"));
    }

    #[test]
    fn test_parse_rejects_addresses() {
        let err = DomainList::parse("mailinator.com\nuser@mailinator.com\n").unwrap_err();
        match err {
            Error::InvalidEntry { line, .. } => assert_eq!(line, 2),
            other => panic!("Unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_inner_whitespace() {
        assert!(DomainList::parse("mail inator.com\n").is_err());
    }

    #[test]
    fn test_exact_and_subdomain_match() {
        let list = DomainList::from_domains(["mailinator.com", "10minutemail.com"]);
        assert!(list.matches_email("a@mailinator.com"));
        assert!(list.matches_email("a@sub.mailinator.com"));
        assert!(list.matches_email("a@deep.sub.mailinator.com"));
        assert!(!list.matches_email("a@gmail.com"));
    }

    #[test]
    fn test_matching_entry_reports_parent() {
        let list = DomainList::from_domains(["mailinator.com"]);
        assert_eq!(list.matching_entry("deep.sub.mailinator.com"), Some("mailinator.com"));
        assert_eq!(list.matching_entry("mailinator.com"), Some("mailinator.com"));
        assert_eq!(list.matching_entry("gmail.com"), None);
    }

    #[test]
    fn test_suffix_must_sit_on_label_boundary() {
        let list = DomainList::from_domains(["mailinator.com"]);
        assert!(!list.matches_domain("notmailinator.com"));
        assert!(!list.matches_email("a@notmailinator.com"));
    }

    #[test]
    fn test_bare_label_never_matches() {
        let list = DomainList::from_domains(["localhost", "com"]);
        assert!(list.contains("localhost"));
        assert!(!list.matches_domain("localhost"));
        assert!(!list.matches_email("user@localhost"));
        assert!(!list.matches_domain("com"));
    }

    #[test]
    fn test_fail_open_on_malformed_addresses() {
        let list = DomainList::from_domains(["mailinator.com"]);
        assert!(!list.matches_email("no-at-sign"));
        assert!(!list.matches_email("user@"));
        assert!(!list.matches_email(""));
    }

    #[test]
    fn test_last_at_wins() {
        let list = DomainList::from_domains(["mailinator.com"]);
        assert!(list.matches_email("\"user@gmail.com\"@mailinator.com"));
        assert!(!list.matches_email("\"user@mailinator.com\"@gmail.com"));
    }

    #[test]
    fn test_merge() {
        let mut list = DomainList::from_domains(["mailinator.com"]);
        list.merge(DomainList::from_domains(["trashmail.com", "mailinator.com"]));
        assert_eq!(list.len(), 2);
        assert!(list.matches_domain("trashmail.com"));
    }

    #[test]
    fn test_from_str() {
        let list: DomainList = "mailinator.com\n".parse().unwrap();
        assert!(list.contains("mailinator.com"));
    }

    #[test]
    fn test_from_reader() {
        let input = b"# comment\nmailinator.com\n" as &[u8];
        let list = DomainList::from_reader(input).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_sorted_domains() {
        let list = DomainList::from_domains(["b.com", "a.com", "c.com"]);
        assert_eq!(list.domains(), vec!["a.com", "b.com", "c.com"]);
    }
}
