//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! forgelink has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! Forge hosts accumulate instead of overriding: the effective registry is
//! the built-in hosts, then global hosts, then repo hosts. Because the
//! registry resolves to the last matching host, a repo entry beats a global
//! entry, which beats a built-in one.
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$FORGELINK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/forgelink/config.toml`
//! 3. `~/.forgelink/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use forgelink::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/path/to/repo/.git"))).unwrap();
//! let config = result.config;
//!
//! println!("Open in browser: {}", config.open());
//! for entry in config.registry().entries() {
//!     println!("{} -> {}", entry.host, entry.kind);
//! }
//! ```

pub mod schema;

pub use schema::{ForgeHostConfig, GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::forge::{Registry, Resolution, ResourceType, UrlError};

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `git_dir` is provided, also loads repo-specific config from
    /// `<git_dir>/forgelink/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or hold
    /// invalid values. Missing config files are not an error.
    pub fn load(git_dir: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let (global, global_path) = Self::load_global()?;
        Self::assemble(global, global_path, git_dir)
    }

    /// Combine a loaded global config with the repo config under `git_dir`.
    fn assemble(
        global: GlobalConfig,
        global_path: Option<PathBuf>,
        git_dir: Option<&Path>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let (repo, repo_path) = match git_dir {
            Some(dir) => {
                let path = Self::repo_config_path(dir);
                if path.exists() {
                    (Some(Self::read_config::<RepoConfig>(&path)?), Some(path))
                } else {
                    (None, None)
                }
            }
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        let config = Config {
            global,
            repo,
            global_path,
            repo_path,
        };
        let warnings = config.override_warnings();

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $FORGELINK_CONFIG
        if let Ok(path) = std::env::var("FORGELINK_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/forgelink/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("forgelink/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.forgelink/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".forgelink/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Read and parse a config file.
    fn read_config<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for repo config.
    pub fn repo_config_path(git_dir: &Path) -> PathBuf {
        git_dir.join("forgelink/config.toml")
    }

    /// Warn about configured hosts that replace a built-in host's kind.
    fn override_warnings(&self) -> Vec<ConfigWarning> {
        let builtin = Registry::builtin();
        let scoped = self
            .global
            .forges
            .iter()
            .map(|f| (f, self.global_path.as_ref()))
            .chain(
                self.repo
                    .iter()
                    .flat_map(|r| r.forges.iter())
                    .map(|f| (f, self.repo_path.as_ref())),
            );

        scoped
            .filter_map(|(forge, path)| {
                let entry = forge.entry()?;
                let existing = builtin.entries().iter().find(|e| e.host == entry.host)?;
                (existing.kind != entry.kind).then(|| ConfigWarning {
                    message: format!(
                        "forge host '{}' is built in as {}, configured as {}",
                        entry.host, existing.kind, entry.kind
                    ),
                    path: path.cloned().unwrap_or_default(),
                })
            })
            .collect()
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Whether URLs should be opened in a browser by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn open(&self) -> bool {
        self.global.open.unwrap_or(false)
    }

    /// Get the configured remote name, if any.
    pub fn remote(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|r| r.remote.as_deref())
    }

    /// Get the configured branch override, if any.
    pub fn branch(&self) -> Option<&str> {
        self.repo.as_ref().and_then(|r| r.branch.as_deref())
    }

    /// The effective forge registry: built-in, then global, then repo hosts.
    pub fn registry(&self) -> Registry {
        let mut registry = Registry::builtin();
        let configured = self
            .global
            .forges
            .iter()
            .chain(self.repo.iter().flat_map(|r| r.forges.iter()));
        for forge in configured {
            if let Some(entry) = forge.entry() {
                registry.push(entry);
            }
        }
        registry
    }

    /// Resolve a URL against the effective registry.
    pub fn resolve(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<Resolution, UrlError> {
        self.registry().resolve(remote, resource, branch, path)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}
