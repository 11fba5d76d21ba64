//! Integration tests pinning the shipped dataset

use burner_core::data::{allowlist, blocklist, ALLOWLIST_RAW, BLOCKLIST_RAW};
use burner_core::verify::verify_dataset;

// ============ Invariant Tests ============

#[test]
fn test_shipped_dataset_verifies_clean() {
    let report = verify_dataset(BLOCKLIST_RAW, ALLOWLIST_RAW);
    assert!(
        report.is_clean(),
        "shipped dataset has {} violations: {:?}",
        report.total(),
        report
    );
}

#[test]
fn test_blocklist_entries_are_matchable() {
    // Every entry must match itself; a bare label would silently never hit.
    for entry in blocklist().iter() {
        assert!(
            blocklist().matches_domain(entry),
            "blocklist entry '{entry}' does not match itself"
        );
    }
}

#[test]
fn test_allowlist_not_covered_by_blocklist() {
    // An allowlisted provider sitting under a blocklist entry would still be
    // flagged by the matcher, defeating the allowlist's purpose.
    for entry in allowlist().iter() {
        assert!(
            !blocklist().matches_domain(entry),
            "allowlist entry '{entry}' is covered by the blocklist"
        );
    }
}

#[test]
fn test_dataset_sizes() {
    assert!(blocklist().len() > 400, "blocklist unexpectedly small");
    assert!(allowlist().len() > 10, "allowlist unexpectedly small");
}

// ============ Well-Known Entry Tests ============

#[test]
fn test_well_known_disposable_providers() {
    for domain in [
        "mailinator.com",
        "guerrillamail.com",
        "10minutemail.com",
        "yopmail.com",
        "sharklasers.com",
        "temp-mail.org",
        "maildrop.cc",
    ] {
        assert!(
            blocklist().contains(domain),
            "expected '{domain}' in the blocklist"
        );
    }
}

#[test]
fn test_well_known_legitimate_providers_absent() {
    for domain in ["gmail.com", "outlook.com", "yahoo.com", "icloud.com"] {
        assert!(
            !blocklist().matches_domain(domain),
            "'{domain}' must not be flagged"
        );
    }
}

#[test]
fn test_allowlisted_look_alikes() {
    for domain in ["fastmail.com", "hushmail.com", "mailbox.org", "spamarrest.com"] {
        assert!(
            allowlist().contains(domain),
            "expected '{domain}' in the allowlist"
        );
        assert!(
            !blocklist().matches_domain(domain),
            "allowlisted '{domain}' must not be flagged"
        );
    }
}
