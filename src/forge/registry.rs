//! forge::registry
//!
//! Forge selection and URL resolution.
//!
//! # Design
//!
//! The registry is an ordered list of (hostname, [`ForgeKind`]) pairs. An
//! entry matches a remote when the remote's normalized HTTPS form starts with
//! `https://<hostname>` at a host boundary. Every entry is tested and the
//! **last** match wins, so hosts appended after the defaults (from user
//! configuration) override the built-in kind for the same host.
//!
//! # Example
//!
//! ```
//! use forgelink::forge::{resolve_resource_url, ResourceType};
//!
//! let url = resolve_resource_url(
//!     "https://codeberg.org/octo/cat",
//!     ResourceType::Log,
//!     "main",
//!     "x.go",
//! )
//! .unwrap();
//! assert_eq!(url, "https://codeberg.org/octo/cat/commits/branch/main/x.go");
//! ```

use serde::Serialize;

use super::cgit::CgitBuilder;
use super::gitea::GiteaBuilder;
use super::github::GitHubBuilder;
use super::gitlab::GitLabBuilder;
use super::remote::Remote;
use super::sourcehut::SourceHutBuilder;
use super::traits::{ResourceType, UrlBuilder, UrlError};

static CGIT: CgitBuilder = CgitBuilder;
static GITEA: GiteaBuilder = GiteaBuilder;
static GITHUB: GitHubBuilder = GitHubBuilder;
static GITLAB: GitLabBuilder = GitLabBuilder;
static SOURCEHUT: SourceHutBuilder = SourceHutBuilder;

/// Built-in hosts, in declaration order.
const BUILTIN_FORGES: &[(&str, ForgeKind)] = &[
    ("github.com", ForgeKind::GitHub),
    ("gitlab.com", ForgeKind::GitLab),
    ("codeberg.org", ForgeKind::Gitea),
    ("gitea.com", ForgeKind::Gitea),
    ("git.sr.ht", ForgeKind::SourceHut),
    ("git.savannah.gnu.org", ForgeKind::Cgit),
    ("git.kernel.org", ForgeKind::Cgit),
];

/// Forge families with a URL builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ForgeKind {
    /// cgit web frontend
    Cgit,
    /// Gitea, Forgejo and Codeberg
    Gitea,
    /// GitHub
    GitHub,
    /// GitLab
    GitLab,
    /// SourceHut
    SourceHut,
}

impl ForgeKind {
    /// Every forge kind.
    pub fn all() -> &'static [ForgeKind] {
        &[
            ForgeKind::Cgit,
            ForgeKind::Gitea,
            ForgeKind::GitHub,
            ForgeKind::GitLab,
            ForgeKind::SourceHut,
        ]
    }

    /// The kind's name as used in configuration files.
    pub fn name(&self) -> &'static str {
        self.builder().name()
    }

    /// Parse a kind from a string, ignoring case.
    ///
    /// ```
    /// use forgelink::forge::ForgeKind;
    ///
    /// assert_eq!(ForgeKind::parse("GitHub"), Some(ForgeKind::GitHub));
    /// assert_eq!(ForgeKind::parse("bitbucket"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
    }

    /// The URL builder for this kind.
    pub fn builder(&self) -> &'static dyn UrlBuilder {
        match self {
            ForgeKind::Cgit => &CGIT,
            ForgeKind::Gitea => &GITEA,
            ForgeKind::GitHub => &GITHUB,
            ForgeKind::GitLab => &GITLAB,
            ForgeKind::SourceHut => &SOURCEHUT,
        }
    }
}

impl std::fmt::Display for ForgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Names accepted for `kind` in configuration.
pub fn valid_forge_names() -> Vec<&'static str> {
    ForgeKind::all().iter().map(|k| k.name()).collect()
}

/// A registered forge host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForgeEntry {
    /// Hostname, optionally followed by a path prefix
    pub host: String,
    /// Builder family
    pub kind: ForgeKind,
}

impl ForgeEntry {
    /// Create an entry.
    pub fn new(host: impl Into<String>, kind: ForgeKind) -> Self {
        Self {
            host: host.into(),
            kind,
        }
    }

    /// Check whether a normalized remote belongs to this host.
    fn matches(&self, normalized: &str) -> bool {
        let prefix = format!("https://{}", self.host);
        match normalized.strip_prefix(&prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with(':'),
            None => false,
        }
    }

    /// Build a URL with this entry's builder.
    pub fn build(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<String, UrlError> {
        self.kind.builder().build(remote, resource, branch, path)
    }
}

/// Ordered set of forge hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<ForgeEntry>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// The built-in hosts.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_FORGES
                .iter()
                .map(|(host, kind)| ForgeEntry::new(*host, *kind))
                .collect(),
        }
    }

    /// A registry with no entries.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a host. Later entries win ties.
    pub fn push(&mut self, entry: ForgeEntry) {
        self.entries.push(entry);
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &[ForgeEntry] {
        &self.entries
    }

    /// Find the forge serving `remote`.
    ///
    /// Returns `None` for malformed remotes and unregistered hosts.
    pub fn resolve_forge(&self, remote: &str) -> Option<&ForgeEntry> {
        let normalized = Remote::parse(remote).ok()?.normalized();
        self.entries
            .iter()
            .filter(|entry| entry.matches(&normalized))
            .last()
    }

    /// Resolve `resource` of `path` on `branch`, reporting which forge built it.
    ///
    /// # Errors
    ///
    /// - [`UrlError::MalformedRemote`] if the remote cannot be parsed
    /// - [`UrlError::UnknownForge`] if no entry matches
    /// - [`UrlError::UnsupportedResourceType`] if the forge has no such view
    pub fn resolve(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<Resolution, UrlError> {
        Remote::parse(remote)?;
        let entry = self
            .resolve_forge(remote)
            .ok_or_else(|| UrlError::UnknownForge {
                remote: remote.to_string(),
            })?;
        let url = entry.build(remote, resource, branch, path)?;

        Ok(Resolution {
            forge: entry.kind,
            host: entry.host.clone(),
            resource,
            url,
        })
    }

    /// Resolve the URL for `resource` of `path` on `branch`.
    ///
    /// Same errors as [`Registry::resolve`].
    pub fn resolve_resource_url(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<String, UrlError> {
        self.resolve(remote, resource, branch, path).map(|r| r.url)
    }
}

/// A built URL and the registry entry that built it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Builder family
    pub forge: ForgeKind,
    /// Matched registry host
    pub host: String,
    /// Requested view
    pub resource: ResourceType,
    /// The URL
    pub url: String,
}

/// Find the forge serving `remote` in the built-in registry.
pub fn resolve_forge(remote: &str) -> Option<ForgeEntry> {
    Registry::builtin().resolve_forge(remote).cloned()
}

/// Resolve a URL against the built-in registry.
///
/// See [`Registry::resolve_resource_url`].
pub fn resolve_resource_url(
    remote: &str,
    resource: ResourceType,
    branch: &str,
    path: &str,
) -> Result<String, UrlError> {
    Registry::builtin().resolve_resource_url(remote, resource, branch, path)
}
