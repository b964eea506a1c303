//! forge::traits
//!
//! URL builder trait and the types shared by every forge family.
//!
//! # Design
//!
//! Every forge exposes the same handful of logical views of a file (history,
//! browsable tree, raw content, blame, edit form, plain-text rendering) but
//! names and orders its path segments differently. Each builder therefore
//! owns a declarative [`Route`] table keyed by [`ResourceType`], and only the
//! template (the order in which origin, slug, segment, branch and path are
//! joined) lives in code.
//!
//! # Example
//!
//! ```
//! use forgelink::forge::{ForgeKind, ResourceType};
//!
//! let builder = ForgeKind::GitLab.builder();
//! let url = builder
//!     .build("git@gitlab.com:octo/cat.git", ResourceType::Blame, "dev", "lib/x.rb")
//!     .unwrap();
//! assert_eq!(url, "https://gitlab.com/octo/cat/-/blame/dev/lib/x.rb");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Errors from URL resolution.
///
/// Every failure is deterministic; retrying with the same inputs gives the
/// same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The remote's host matches no registry entry.
    #[error("no registered forge matches remote '{remote}'")]
    UnknownForge {
        /// The remote as given
        remote: String,
    },

    /// The forge does not offer a view for this resource type.
    #[error("{forge} does not support '{resource}' URLs")]
    UnsupportedResourceType {
        /// Forge family name
        forge: &'static str,
        /// The requested resource type
        resource: ResourceType,
    },

    /// The remote is neither `git@host:owner/repo` nor `https://host/owner/repo`.
    #[error("malformed remote '{remote}': expected git@<host>:<owner>/<repo> or https://<host>/<owner>/<repo>")]
    MalformedRemote {
        /// The remote as given
        remote: String,
    },
}

impl UrlError {
    /// True when no forge could be determined for the remote.
    ///
    /// A malformed remote counts as an unknown forge.
    pub fn is_unknown_forge(&self) -> bool {
        matches!(
            self,
            UrlError::UnknownForge { .. } | UrlError::MalformedRemote { .. }
        )
    }
}

/// The kind of web view requested for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    /// Commit history
    Log,
    /// Browsable tree / rendered file
    Tree,
    /// Raw file content
    Blob,
    /// Attribution-annotated content
    Blame,
    /// Web edit form
    Edit,
    /// Plain-text rendering of markup files
    Plain,
}

impl ResourceType {
    /// Every resource type, in declaration order.
    pub fn all() -> &'static [ResourceType] {
        &[
            ResourceType::Log,
            ResourceType::Tree,
            ResourceType::Blob,
            ResourceType::Blame,
            ResourceType::Edit,
            ResourceType::Plain,
        ]
    }

    /// Lowercase name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ResourceType::Log => "log",
            ResourceType::Tree => "tree",
            ResourceType::Blob => "blob",
            ResourceType::Blame => "blame",
            ResourceType::Edit => "edit",
            ResourceType::Plain => "plain",
        }
    }

    /// Parse a resource type, ignoring case.
    ///
    /// ```
    /// use forgelink::forge::ResourceType;
    ///
    /// assert_eq!(ResourceType::parse("Blame"), Some(ResourceType::Blame));
    /// assert_eq!(ResourceType::parse("diff"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "unknown resource type '{}', expected one of: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// One row of a forge's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// Resource type this row serves
    pub resource: ResourceType,
    /// Path segment naming the view (may be empty)
    pub segment: &'static str,
    /// Replacement origin for this view
    pub origin: Option<&'static str>,
    /// Segment placed between branch and path
    pub suffix: Option<&'static str>,
    /// Literal query string appended to the URL
    pub query: Option<&'static str>,
}

impl Route {
    /// A route that only names a segment.
    pub const fn new(resource: ResourceType, segment: &'static str) -> Self {
        Self {
            resource,
            segment,
            origin: None,
            suffix: None,
            query: None,
        }
    }

    /// Serve this view from a different origin.
    pub const fn with_origin(mut self, origin: &'static str) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Insert `suffix` between the branch and the path.
    pub const fn with_suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Append `query` to the finished URL.
    pub const fn with_query(mut self, query: &'static str) -> Self {
        self.query = Some(query);
        self
    }
}

/// Builds forge-specific URLs from a remote and a resource locator.
///
/// Implementations are zero-sized and stateless; one exists per forge family
/// and is reached through [`crate::forge::ForgeKind::builder`].
pub trait UrlBuilder: Send + Sync + fmt::Debug {
    /// Forge family name (e.g., "github").
    fn name(&self) -> &'static str;

    /// The route table for this forge.
    fn routes(&self) -> &'static [Route];

    /// Build the URL for `resource` on `branch` at `path`.
    ///
    /// `remote` is the raw, non-normalized remote string.
    ///
    /// # Errors
    ///
    /// - [`UrlError::MalformedRemote`] if the remote cannot be parsed
    /// - [`UrlError::UnsupportedResourceType`] if the route table has no row for `resource`
    fn build(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<String, UrlError>;

    /// Look up the route for `resource`.
    fn route(&self, resource: ResourceType) -> Result<&'static Route, UrlError> {
        self.routes()
            .iter()
            .find(|r| r.resource == resource)
            .ok_or(UrlError::UnsupportedResourceType {
                forge: self.name(),
                resource,
            })
    }

    /// Resource types this forge can build.
    fn supported(&self) -> Vec<ResourceType> {
        self.routes().iter().map(|r| r.resource).collect()
    }

    /// Check whether `resource` is in the route table.
    fn supports(&self, resource: ResourceType) -> bool {
        self.route(resource).is_ok()
    }
}

/// Join URL parts with `/`, skipping empty parts, then append the route's query.
pub(crate) fn join_segments(parts: &[&str], query: Option<&str>) -> String {
    let mut url = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");
    if let Some(q) = query {
        url.push_str(q);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    mod resource_type {
        use super::*;

        #[test]
        fn parse_is_case_insensitive() {
            assert_eq!(ResourceType::parse("log"), Some(ResourceType::Log));
            assert_eq!(ResourceType::parse("LOG"), Some(ResourceType::Log));
            assert_eq!(ResourceType::parse("Plain"), Some(ResourceType::Plain));
        }

        #[test]
        fn parse_unknown() {
            assert_eq!(ResourceType::parse("raw"), None);
            assert_eq!(ResourceType::parse(""), None);
        }

        #[test]
        fn from_str_lists_choices() {
            let err = "history".parse::<ResourceType>().unwrap_err();
            assert!(err.contains("history"));
            assert!(err.contains("log, tree, blob, blame, edit, plain"));
        }

        #[test]
        fn display_matches_name() {
            for t in ResourceType::all() {
                assert_eq!(t.to_string(), t.name());
            }
        }

        #[test]
        fn serializes_lowercase() {
            let json = serde_json::to_string(&ResourceType::Blame).unwrap();
            assert_eq!(json, "\"blame\"");
        }
    }

    mod url_error {
        use super::*;

        #[test]
        fn malformed_counts_as_unknown_forge() {
            let err = UrlError::MalformedRemote {
                remote: "ftp://x".to_string(),
            };
            assert!(err.is_unknown_forge());
        }

        #[test]
        fn unsupported_is_distinguishable() {
            let err = UrlError::UnsupportedResourceType {
                forge: "sourcehut",
                resource: ResourceType::Edit,
            };
            assert!(!err.is_unknown_forge());
            assert_eq!(err.to_string(), "sourcehut does not support 'edit' URLs");
        }
    }

    mod join_segments {
        use super::*;

        #[test]
        fn skips_empty_parts() {
            assert_eq!(
                join_segments(&["https://h", "", "a", "", "b"], None),
                "https://h/a/b"
            );
        }

        #[test]
        fn appends_query_after_last_part() {
            assert_eq!(
                join_segments(&["https://h", "blob", "x.md"], Some("?plain=1")),
                "https://h/blob/x.md?plain=1"
            );
        }
    }
}
