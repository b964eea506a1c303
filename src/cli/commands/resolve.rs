//! resolve command - Build a URL from an explicit remote
//!
//! No repository is opened. Config is still loaded (without repo scope) so
//! user-registered forge hosts apply.

use crate::cli::Context;
use crate::core::config::Config;
use crate::forge::ResourceType;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Resolve `resource` for `remote`, `branch` and `path`.
pub fn resolve(
    ctx: &Context,
    remote: &str,
    resource: ResourceType,
    branch: &str,
    path: &str,
    json: bool,
) -> Result<()> {
    let verbosity = ctx.verbosity();
    let loaded = Config::load(None).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    let path = path.trim_start_matches('/');
    output::debug(
        format!(
            "resolving {} for remote '{}', branch '{}', path '{}'",
            resource, remote, branch, path
        ),
        verbosity,
    );

    let resolution = loaded.config.resolve(remote, resource, branch, path)?;
    super::emit(&resolution, json, verbosity)
}
