//! Integration tests for the domain matcher

use std::sync::Arc;

use burner_core::{is_disposable_email, DomainList};

// ============ Matching Contract Tests ============

#[test]
fn test_exact_match() {
    let list = DomainList::from_domains(["mailinator.com", "10minutemail.com"]);

    assert!(list.matches_email("a@mailinator.com"));
    assert!(list.matches_email("a@10minutemail.com"));
    assert!(!list.matches_email("a@gmail.com"));
}

#[test]
fn test_subdomain_match() {
    let list = DomainList::from_domains(["mailinator.com", "10minutemail.com"]);

    assert!(list.matches_email("a@sub.mailinator.com"));
    assert!(list.matches_email("a@very.deep.sub.mailinator.com"));
    assert!(!list.matches_email("a@mailinator.org"));
}

#[test]
fn test_case_insensitive() {
    let list = DomainList::from_domains(["mailinator.com"]);

    assert!(list.matches_email("A@MAILINATOR.COM"));
    assert!(list.matches_email("a@MailiNator.Com"));
    assert!(list.matches_domain("SUB.MAILINATOR.COM"));
}

#[test]
fn test_parent_entry_wins_over_longer_input() {
    let list = DomainList::from_domains(["mailinator.com"]);

    // The walk reports the most specific listed entry that covers the input.
    assert_eq!(list.email_entry("a@x.y.mailinator.com"), Some("mailinator.com"));
}

#[test]
fn test_most_specific_entry_reported_first() {
    let list = DomainList::from_domains(["mailinator.com", "sub.mailinator.com"]);

    assert_eq!(list.matching_entry("sub.mailinator.com"), Some("sub.mailinator.com"));
    assert_eq!(list.matching_entry("other.mailinator.com"), Some("mailinator.com"));
    // Either way the boolean answer is the same.
    assert!(list.matches_domain("deep.sub.mailinator.com"));
}

// ============ Fail-Open Edge Cases ============

#[test]
fn test_no_at_sign_is_not_disposable() {
    let list = DomainList::from_domains(["mailinator.com"]);

    assert!(!list.matches_email("mailinator.com"));
    assert!(!list.matches_email("plain text"));
    assert!(!list.matches_email(""));
}

#[test]
fn test_empty_domain_is_not_disposable() {
    let list = DomainList::from_domains(["mailinator.com"]);

    assert!(!list.matches_email("user@"));
    assert!(!list.matches_email("@"));
}

#[test]
fn test_domain_after_last_at() {
    let list = DomainList::from_domains(["mailinator.com"]);

    assert!(list.matches_email("\"quoted@local\"@mailinator.com"));
    assert!(!list.matches_email("\"quoted@mailinator.com\"@example.net"));
}

#[test]
fn test_single_label_domains_never_match() {
    let list = DomainList::from_domains(["localhost", "com", "mailinator.com"]);

    assert!(!list.matches_email("user@localhost"));
    assert!(!list.matches_email("user@com"));
    assert!(list.matches_email("user@mailinator.com"));
}

#[test]
fn test_unrelated_suffix_rejected() {
    let list = DomainList::from_domains(["mailinator.com"]);

    // String suffix without a label boundary is not a match.
    assert!(!list.matches_email("a@notmailinator.com"));
    assert!(!list.matches_email("a@innator.com"));
}

// ============ Concurrent Read Tests ============

#[test]
fn test_concurrent_readers() {
    let list = Arc::new(DomainList::from_domains(["mailinator.com", "trashmail.com"]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let list = Arc::clone(&list);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    assert!(list.matches_email("user@mailinator.com"));
                    assert!(!list.matches_email(&format!("user{i}@example.org")));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

// ============ Embedded Dataset Smoke Tests ============

#[test]
fn test_embedded_end_to_end() {
    assert!(is_disposable_email("someone@mailinator.com"));
    assert!(is_disposable_email("someone@sub.mailinator.com"));
    assert!(is_disposable_email("someone@10minutemail.com"));
    assert!(!is_disposable_email("someone@gmail.com"));
    assert!(!is_disposable_email("someone@fastmail.com"));
    assert!(!is_disposable_email("not-an-address"));
}
