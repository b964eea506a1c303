//! forgelink - Resolve files in a git checkout to their forge web URLs
//!
//! Given a remote, a resource type, a branch and a repository-relative path,
//! forgelink builds the exact URL of that view on the hosting forge (GitHub,
//! GitLab, Gitea-style forges, cgit and SourceHut).
//!
//! # Architecture
//!
//! - [`forge`] - Remote normalization, forge registry and per-forge URL builders (pure)
//! - [`git`] - Single interface for reading remotes, branches and paths from Git
//! - [`core`] - Configuration schema and loading
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output and logging
//!
//! # Correctness Invariants
//!
//! 1. URL construction is a pure function of (remote, type, branch, path)
//! 2. A forge is only chosen when the remote's origin matches a registered host
//! 3. Unsupported views are reported as errors, never as empty URLs

pub mod cli;
pub mod core;
pub mod forge;
pub mod git;
pub mod ui;
