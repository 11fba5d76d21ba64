//! # Burner Core
//!
//! Disposable email domain detection backed by a curated dataset.
//!
//! ## Architecture
//!
//! This crate provides:
//! - **The dataset** - a curated blocklist of disposable email domains plus
//!   an allowlist of look-alike legitimate providers, embedded at compile
//!   time
//! - **The matcher** - subdomain-aware membership checks for email
//!   addresses and bare domains
//! - **Verification** - offline integrity rules for list files
//! - **Configuration** - TOML-based list source and logging settings
//!
//! ## Example
//!
//! ```rust
//! use burner_core::blocklist;
//!
//! let list = blocklist();
//! assert!(list.matches_email("someone@mailinator.com"));
//! assert!(list.matches_email("someone@mail.mailinator.com"));
//! assert!(!list.matches_email("someone@example.org"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod list;
pub mod verify;

// Re-exports for convenience
pub use config::Config;
pub use data::{allowlist, blocklist, is_disposable_domain, is_disposable_email};
pub use error::{Error, Result};
pub use list::DomainList;
pub use verify::{verify_dataset, verify_list, Report, Violation, ViolationKind};
