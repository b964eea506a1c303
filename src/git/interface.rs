//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to the repository. It answers
//! exactly the questions URL resolution needs from version control: which
//! remote URL is configured, which upstream branch the current branch
//! tracks, and where a file sits relative to the work tree.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no work tree
//! - [`GitError::PathOutsideRepo`]: File is not under the work tree
//!
//! # Example
//!
//! ```ignore
//! use forgelink::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let remote = git.default_remote()?.unwrap_or_else(|| "origin".to_string());
//! println!("{:?}", git.remote_url(&remote)?);
//! ```

use std::path::{Component, Path, PathBuf};

use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The file does not live under the repository's work tree.
    #[error("{path} is outside the repository at {work_dir}")]
    PathOutsideRepo {
        /// The offending path
        path: PathBuf,
        /// The repository work tree
        work_dir: PathBuf,
    },

    /// Permission or filesystem error.
    #[error("cannot access {path}: {source}")]
    AccessError {
        /// The path being accessed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Internal {
            message: err.message().to_string(),
        }
    }
}

/// Information about a Git repository.
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Path to the .git directory
    pub git_dir: PathBuf,
    /// Path to the working directory
    pub work_dir: PathBuf,
}

/// Handle to a non-bare repository.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening and Info
    // =========================================================================

    /// Open the repository containing `path`.
    ///
    /// Uses `git2::Repository::discover`, so any path inside the work tree
    /// works.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Get repository information (git_dir and work_dir paths).
    pub fn info(&self) -> Result<RepoInfo, GitError> {
        let git_dir = self.repo.path().to_path_buf();
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?.to_path_buf();

        Ok(RepoInfo { git_dir, work_dir })
    }

    /// Get direct access to the .git directory path.
    pub fn git_dir(&self) -> &Path {
        self.repo.path()
    }

    // =========================================================================
    // Remotes
    // =========================================================================

    /// Get the URL configured for a remote.
    ///
    /// Returns `None` if the remote doesn't exist or has no URL.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        match self.repo.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Get the default remote name.
    ///
    /// Prefers "origin", otherwise the first remote; `None` if there are no remotes.
    pub fn default_remote(&self) -> Result<Option<String>, GitError> {
        let remotes = self.repo.remotes()?;

        if remotes.iter().flatten().any(|name| name == "origin") {
            return Ok(Some("origin".to_string()));
        }

        Ok(remotes.iter().flatten().next().map(String::from))
    }

    // =========================================================================
    // Branches
    // =========================================================================

    /// Full ref name of the checked-out branch (`refs/heads/...`).
    ///
    /// `None` if HEAD is detached or unborn.
    fn head_branch_ref(&self) -> Result<Option<String>, GitError> {
        let head = match self.repo.head() {
            Ok(h) => h,
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        if !head.is_branch() {
            return Ok(None);
        }
        Ok(head.name().map(String::from))
    }

    /// Get the current branch name, if on a branch.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        Ok(self
            .head_branch_ref()?
            .and_then(|r| r.strip_prefix("refs/heads/").map(String::from)))
    }

    /// Name of the remote the current branch tracks (`branch.<name>.remote`).
    pub fn upstream_remote(&self) -> Result<Option<String>, GitError> {
        let Some(head) = self.head_branch_ref()? else {
            return Ok(None);
        };

        match self.repo.branch_upstream_remote(&head) {
            Ok(buf) => Ok(buf.as_str().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Name of the upstream branch on the remote (`branch.<name>.merge`,
    /// without `refs/heads/`).
    ///
    /// `None` when HEAD is detached, unborn, or has no upstream.
    pub fn upstream_branch(&self) -> Result<Option<String>, GitError> {
        let Some(head) = self.head_branch_ref()? else {
            return Ok(None);
        };

        let merge = match self.repo.branch_upstream_merge(&head) {
            Ok(buf) => buf.as_str().map(String::from),
            Err(e) if e.code() == git2::ErrorCode::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(merge.map(|m| match m.strip_prefix("refs/heads/") {
            Some(name) => name.to_string(),
            None => m,
        }))
    }

    // =========================================================================
    // Paths
    // =========================================================================

    /// Path of `file` relative to the work tree, `/`-separated.
    ///
    /// Relative paths are taken relative to the process's current directory.
    /// The work tree root itself yields an empty string.
    ///
    /// # Errors
    ///
    /// - [`GitError::AccessError`] if the path cannot be resolved
    /// - [`GitError::PathOutsideRepo`] if it is not under the work tree
    pub fn relative_path(&self, file: &Path) -> Result<String, GitError> {
        let work_dir = self.repo.workdir().ok_or(GitError::BareRepo)?;
        let work_dir = canonicalize(work_dir)?;
        let file = canonicalize(file)?;

        let relative = file
            .strip_prefix(&work_dir)
            .map_err(|_| GitError::PathOutsideRepo {
                path: file.clone(),
                work_dir: work_dir.clone(),
            })?;

        let parts = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>();

        Ok(parts.join("/"))
    }
}

fn canonicalize(path: &Path) -> Result<PathBuf, GitError> {
    path.canonicalize().map_err(|source| GitError::AccessError {
        path: path.to_path_buf(),
        source,
    })
}
