//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$FORGELINK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/forgelink/config.toml`
//! 3. `~/.forgelink/config.toml`
//!
//! # Repo Config
//!
//! Located at `<git_dir>/forgelink/config.toml`.
//!
//! # Validation
//!
//! Config values are validated after parsing: forge kinds must name a known
//! builder family and hosts must be bare hostnames (optionally with a path
//! prefix), never full URLs.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::forge::{valid_forge_names, ForgeEntry, ForgeKind};

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// open = true
///
/// [[forges]]
/// host = "git.example.com"
/// kind = "gitea"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Open URLs in the browser instead of printing them
    pub open: Option<bool>,

    /// Additional forge hosts
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forges: Vec<ForgeHostConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.forges.iter().try_for_each(ForgeHostConfig::validate)
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// remote = "upstream"
/// branch = "main"
///
/// [[forges]]
/// host = "git.internal.corp"
/// kind = "gitlab"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Remote name to resolve against
    pub remote: Option<String>,

    /// Branch to use instead of the upstream tracking branch
    pub branch: Option<String>,

    /// Additional forge hosts, applied after the global ones
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forges: Vec<ForgeHostConfig>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(remote) = &self.remote {
            if remote.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "remote cannot be empty".to_string(),
                ));
            }
        }

        self.forges.iter().try_for_each(ForgeHostConfig::validate)
    }
}

/// A user-registered forge host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ForgeHostConfig {
    /// Hostname, e.g. "git.example.com"
    pub host: String,

    /// Builder family ("cgit", "gitea", "github", "gitlab", "sourcehut")
    pub kind: String,
}

impl ForgeHostConfig {
    /// Validate the host entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::InvalidValue(
                "forge host cannot be empty".to_string(),
            ));
        }
        if self.host.contains("://") {
            return Err(ConfigError::InvalidValue(format!(
                "forge host '{}' must be a hostname, not a URL",
                self.host
            )));
        }
        if ForgeKind::parse(&self.kind).is_none() {
            return Err(ConfigError::InvalidValue(format!(
                "invalid forge kind '{}', must be one of: {}",
                self.kind,
                valid_forge_names().join(", ")
            )));
        }
        Ok(())
    }

    /// Convert to a registry entry. `None` if the kind is invalid.
    pub fn entry(&self) -> Option<ForgeEntry> {
        ForgeKind::parse(&self.kind).map(|kind| ForgeEntry::new(self.host.clone(), kind))
    }
}
