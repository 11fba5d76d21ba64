//! Configuration management
//!
//! Strongly-typed TOML configuration: which list sources feed the matcher
//! and how logging behaves. Every field has a default, so an empty file (or
//! none at all) yields a working setup backed by the embedded dataset.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data;
use crate::error::{Error, Result};
use crate::list::DomainList;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// List sources
    pub lists: ListsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lists: ListsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| Error::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::from)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.lists.embedded && self.lists.blocklists.is_empty() {
            return Err(Error::config_value(
                "lists",
                "embedded dataset disabled and no blocklist files configured",
            ));
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_value(
                "logging.level",
                format!("Unknown level '{}'", self.logging.level),
            ));
        }

        Ok(())
    }
}

/// Which domain lists feed the matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListsConfig {
    /// Include the compiled-in dataset
    pub embedded: bool,
    /// Extra blocklist files, stacked onto the blocklist (set union)
    pub blocklists: Vec<String>,
    /// Extra allowlist files (verification and caller-side whitelisting;
    /// the matcher itself never consults allowlists)
    pub allowlists: Vec<String>,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            embedded: true,
            blocklists: Vec::new(),
            allowlists: Vec::new(),
        }
    }
}

impl ListsConfig {
    /// Build the effective blocklist from the configured sources
    pub fn load_blocklist(&self) -> Result<DomainList> {
        let mut list = if self.embedded {
            data::blocklist().clone()
        } else {
            DomainList::new()
        };
        for path in &self.blocklists {
            list.merge(DomainList::load(path)?);
        }
        Ok(list)
    }

    /// Build the effective allowlist from the configured sources
    pub fn load_allowlist(&self) -> Result<DomainList> {
        let mut list = if self.embedded {
            data::allowlist().clone()
        } else {
            DomainList::new()
        };
        for path in &self.allowlists {
            list.merge(DomainList::load(path)?);
        }
        Ok(list)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Log file path (None = console only)
    pub file: Option<String>,
    /// Enable JSON format logging
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json_format: false,
        }
    }
}
