//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::forge::ResourceType;

/// forgelink - Resolve files in a git checkout to their forge web URLs
#[derive(Parser, Debug)]
#[command(name = "forgelink")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if forgelink was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print (or open) the forge URL for a file in this repository
    #[command(
        name = "url",
        long_about = "Print the forge URL for a file in the current repository.\n\n\
            The remote, the upstream branch and the file's path relative to the \
            repository root are read from git. The remote decides which forge \
            builds the URL; the resource type picks the view.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Link to the rendered file on the upstream branch
    fl url tree src/main.rs

    # Raw content, for curl or a chat message
    fl url blob src/main.rs

    # Blame view, opened in the browser
    fl url blame src/main.rs --open

    # History of the whole repository
    fl url log

    # Resolve against another remote or branch
    fl url tree README.md --remote upstream --branch release"
    )]
    Url {
        /// View to link to
        #[arg(value_enum)]
        resource: ResourceArg,

        /// File inside the repository (defaults to the repository root)
        file: Option<PathBuf>,

        /// Remote to resolve against (defaults to the upstream remote, then origin)
        #[arg(long)]
        remote: Option<String>,

        /// Branch to link to (defaults to the upstream tracking branch)
        #[arg(long)]
        branch: Option<String>,

        /// Open the URL in the default browser
        #[arg(long, conflicts_with = "no_open")]
        open: bool,

        /// Print the URL even when config says to open it
        #[arg(long)]
        no_open: bool,

        /// Print forge, host, resource and URL as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a URL from an explicit remote, without a repository
    #[command(
        name = "resolve",
        long_about = "Build a forge URL from an explicit remote string.\n\n\
            No repository is consulted; this is the pure resolver.",
        after_help = "\
WORKFLOW EXAMPLES:
    fl resolve git@github.com:octo/cat.git blob --branch main --path src/main.c
    fl resolve https://git.sr.ht/~octo/cat tree --branch master --path a/b.py"
    )]
    Resolve {
        /// Remote URL (git@host:owner/repo or https://host/owner/repo)
        remote: String,

        /// View to link to
        #[arg(value_enum)]
        resource: ResourceArg,

        /// Branch name
        #[arg(long, default_value = "")]
        branch: String,

        /// Path relative to the repository root
        #[arg(long, default_value = "")]
        path: String,

        /// Print forge, host, resource and URL as JSON
        #[arg(long)]
        json: bool,
    },

    /// List known forge hosts and the views each supports
    #[command(name = "forges")]
    Forges {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    fl completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    fl completion zsh >> ~/.zshrc

    # Fish
    fl completion fish > ~/.config/fish/completions/fl.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Resource type as a CLI argument.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceArg {
    /// Commit history
    Log,
    /// Rendered file or directory listing
    Tree,
    /// Raw file content
    Blob,
    /// Blame view
    Blame,
    /// Web editor
    Edit,
    /// Plain-text rendering
    Plain,
}

impl From<ResourceArg> for ResourceType {
    fn from(arg: ResourceArg) -> Self {
        match arg {
            ResourceArg::Log => ResourceType::Log,
            ResourceArg::Tree => ResourceType::Tree,
            ResourceArg::Blob => ResourceType::Blob,
            ResourceArg::Blame => ResourceType::Blame,
            ResourceArg::Edit => ResourceType::Edit,
            ResourceArg::Plain => ResourceType::Plain,
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
