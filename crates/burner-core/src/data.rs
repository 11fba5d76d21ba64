//! The embedded dataset
//!
//! Both list files ship inside the binary via `include_str!`, so the common
//! case needs no files at runtime. The parsed sets are built lazily on first
//! use and live for the lifetime of the process.

use once_cell::sync::Lazy;

use crate::list::DomainList;

/// Raw contents of the shipped blocklist file
pub const BLOCKLIST_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/disposable_email_blocklist.conf"));

/// Raw contents of the shipped allowlist file
pub const ALLOWLIST_RAW: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/allowlist.conf"));

static BLOCKLIST: Lazy<DomainList> = Lazy::new(|| {
    // The shipped files are pinned by the dataset tests.
    DomainList::parse(BLOCKLIST_RAW).expect("embedded blocklist is well-formed")
});

static ALLOWLIST: Lazy<DomainList> = Lazy::new(|| {
    DomainList::parse(ALLOWLIST_RAW).expect("embedded allowlist is well-formed")
});

/// The embedded blocklist of disposable email domains
pub fn blocklist() -> &'static DomainList {
    &BLOCKLIST
}

/// The embedded allowlist of legitimate providers that resemble disposable
/// ones
///
/// The matcher never consults this list; it exists for dataset maintenance
/// and for callers that want to whitelist on top of the blocklist.
pub fn allowlist() -> &'static DomainList {
    &ALLOWLIST
}

/// Whether an email address belongs to a known disposable email provider
///
/// Checks the domain after the last `@` against the embedded blocklist,
/// covering subdomains of listed entries. Malformed addresses are reported
/// as not disposable.
///
/// ```
/// assert!(burner_core::is_disposable_email("user@mailinator.com"));
/// assert!(burner_core::is_disposable_email("user@mail.mailinator.com"));
/// assert!(!burner_core::is_disposable_email("user@gmail.com"));
/// assert!(!burner_core::is_disposable_email("not-an-address"));
/// ```
pub fn is_disposable_email(address: &str) -> bool {
    blocklist().matches_email(address)
}

/// Whether a bare domain belongs to a known disposable email provider
pub fn is_disposable_domain(domain: &str) -> bool {
    blocklist().matches_domain(domain)
}
