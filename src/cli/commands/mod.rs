//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Gathers inputs (from git, config and flags)
//! 2. Calls [`crate::forge`] to build the URL
//! 3. Formats and displays output
//!
//! Handlers never write to the repository.

mod completion;
mod forges;
mod resolve;
mod url;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use forges::forges;
pub use resolve::resolve;
pub use url::{url, UrlOptions};

use crate::cli::args::Command;
use crate::cli::Context;
use crate::forge::Resolution;
use crate::ui::output::{self, Verbosity};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Url {
            resource,
            file,
            remote,
            branch,
            open,
            no_open,
            json,
        } => url::url(
            ctx,
            UrlOptions {
                resource: resource.into(),
                file: file.as_deref(),
                remote: remote.as_deref(),
                branch: branch.as_deref(),
                open: match (open, no_open) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                },
                json,
            },
        ),
        Command::Resolve {
            remote,
            resource,
            branch,
            path,
            json,
        } => resolve::resolve(ctx, &remote, resource.into(), &branch, &path, json),
        Command::Forges { json } => forges::forges(ctx, json),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Print a resolution as a bare URL or as JSON.
fn emit(resolution: &Resolution, json: bool, verbosity: Verbosity) -> Result<()> {
    output::debug(
        format!(
            "{} built {} URL via host '{}'",
            resolution.forge, resolution.resource, resolution.host
        ),
        verbosity,
    );

    if json {
        output::result(output::to_json(resolution)?);
    } else {
        output::result(&resolution.url);
    }
    Ok(())
}
