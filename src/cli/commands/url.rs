//! cli::commands::url
//!
//! Print or open the forge URL for a file in the current repository.
//!
//! # Design
//!
//! Inputs are gathered from git with flag and config overrides:
//! - remote: `--remote`, repo config `remote`, the upstream's remote, then
//!   the default remote (`origin`, else the first one)
//! - branch: `--branch`, repo config `branch`, the upstream branch, else empty
//! - path: the file relative to the work tree, empty for the root
//!
//! # Example
//!
//! ```bash
//! # Print the blame URL of a file
//! fl url blame src/lib.rs
//!
//! # Open the history of the repository in the browser
//! fl url log --open
//! ```

use std::path::Path;

use crate::cli::Context;
use crate::core::config::Config;
use crate::forge::ResourceType;
use crate::git::Git;
use crate::ui::output::{self, Verbosity};
use anyhow::{anyhow, Context as _, Result};

/// Options for the url command.
#[derive(Debug, Clone, Copy)]
pub struct UrlOptions<'a> {
    /// Requested view
    pub resource: ResourceType,
    /// File to link to (relative to the working directory or absolute)
    pub file: Option<&'a Path>,
    /// Remote name override
    pub remote: Option<&'a str>,
    /// Branch override
    pub branch: Option<&'a str>,
    /// Open in a browser; `None` defers to config
    pub open: Option<bool>,
    /// Print JSON instead of the bare URL
    pub json: bool,
}

/// Run the url command.
pub fn url(ctx: &Context, opts: UrlOptions<'_>) -> Result<()> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.cwd()?;
    let git = Git::open(&cwd).context("Failed to open repository")?;
    let info = git.info()?;
    output::debug(format!("repository: {}", info.work_dir.display()), verbosity);

    let loaded = Config::load(Some(git.git_dir())).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }
    let config = loaded.config;
    if let Some(path) = config.global_config_loaded_from() {
        output::debug(format!("global config: {}", path.display()), verbosity);
    }
    if let Some(path) = config.repo_config_loaded_from() {
        output::debug(format!("repo config: {}", path.display()), verbosity);
    }

    let remote_name = select_remote(&git, &config, opts.remote)?;
    let remote_url = git
        .remote_url(&remote_name)?
        .ok_or_else(|| anyhow!("Remote '{}' does not exist or has no URL", remote_name))?;
    output::debug(
        format!("remote '{}' -> {}", remote_name, remote_url),
        verbosity,
    );

    let branch = select_branch(&git, &config, opts.branch, verbosity)?;
    output::debug(format!("branch '{}'", branch), verbosity);

    let path = match opts.file {
        Some(file) => git
            .relative_path(&cwd.join(file))
            .with_context(|| format!("Cannot link to '{}'", file.display()))?,
        None => String::new(),
    };
    output::debug(format!("path '{}'", path), verbosity);

    let resolution = config.resolve(&remote_url, opts.resource, &branch, &path)?;

    if opts.open.unwrap_or_else(|| config.open()) && !opts.json {
        output::debug(format!("opening {}", resolution.url), verbosity);
        if let Err(e) = open::that(&resolution.url) {
            // Fall back to printing
            output::warn(format!("Could not open browser: {}", e), verbosity);
            output::result(&resolution.url);
        }
        return Ok(());
    }

    super::emit(&resolution, opts.json, verbosity)
}

/// Pick the remote name to resolve against.
fn select_remote(git: &Git, config: &Config, flag: Option<&str>) -> Result<String> {
    if let Some(name) = flag.or(config.remote()) {
        return Ok(name.to_string());
    }

    // A "." remote means the branch tracks a local branch.
    if let Some(name) = git.upstream_remote()?.filter(|name| name != ".") {
        return Ok(name);
    }

    git.default_remote()?
        .ok_or_else(|| anyhow!("Repository has no remotes. Add one with 'git remote add'."))
}

/// Pick the branch name; empty when nothing is configured or tracked.
fn select_branch(
    git: &Git,
    config: &Config,
    flag: Option<&str>,
    verbosity: Verbosity,
) -> Result<String> {
    if let Some(branch) = flag.or(config.branch()) {
        return Ok(branch.to_string());
    }

    match git.upstream_branch()? {
        Some(branch) => Ok(branch),
        None => {
            match git.current_branch()? {
                Some(local) => output::debug(
                    format!("branch '{}' has no upstream; linking without a branch", local),
                    verbosity,
                ),
                None => output::debug("detached HEAD; linking without a branch", verbosity),
            }
            Ok(String::new())
        }
    }
}
