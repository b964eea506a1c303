//! forges command - List the effective forge registry

use serde::Serialize;

use crate::cli::Context;
use crate::core::config::Config;
use crate::forge::{ForgeKind, ResourceType};
use crate::git::Git;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// One registry row as shown to the user.
#[derive(Debug, Serialize)]
struct ForgeRow {
    host: String,
    kind: ForgeKind,
    resources: Vec<ResourceType>,
}

/// List registered hosts in resolution order.
///
/// Repo-scoped hosts are included when run inside a repository.
pub fn forges(ctx: &Context, json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let cwd = ctx.cwd()?;

    // Outside a repository only the global scope applies.
    let git = Git::open(&cwd).ok();
    let loaded = Config::load(git.as_ref().map(|g| g.git_dir())).context("Failed to load config")?;
    for warning in &loaded.warnings {
        output::warn(
            format!("{} ({})", warning.message, warning.path.display()),
            verbosity,
        );
    }

    let rows = loaded
        .config
        .registry()
        .entries()
        .iter()
        .map(|entry| ForgeRow {
            host: entry.host.clone(),
            kind: entry.kind,
            resources: entry.kind.builder().supported(),
        })
        .collect::<Vec<_>>();

    if json {
        output::result(output::to_json(&rows)?);
        return Ok(());
    }

    let width = rows.iter().map(|r| r.host.len()).max().unwrap_or(0);
    for row in &rows {
        output::result(format!(
            "{:<width$}  {:<9}  {}",
            row.host,
            row.kind.name(),
            output::format_list(&row.resources, ", "),
            width = width
        ));
    }
    Ok(())
}
