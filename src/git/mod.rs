//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. No other module should import
//! `git2`. It is read-only: forgelink never writes refs, objects or config.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Remote URL lookup and default remote selection
//! - Upstream tracking branch lookup
//! - Relativizing file paths against the work tree
//!
//! # Example
//!
//! ```ignore
//! use forgelink::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let branch = git.upstream_branch()?.unwrap_or_default();
//! let path = git.relative_path(Path::new("src/lib.rs"))?;
//! ```

mod interface;

pub use interface::{Git, GitError, RepoInfo};
