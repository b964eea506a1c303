//! forge::remote
//!
//! Remote URL normalization.
//!
//! Two remote shapes are accepted:
//! - SSH: `git@<host>:<owner>/<repo>[.git]`
//! - HTTPS: `https://<host>/<owner>/<repo>[.git]`
//!
//! Both normalize to `https://<host>/<owner>/<repo>`. This is the only place
//! slug extraction happens; builders call [`Remote::parse`].

use super::traits::UrlError;

/// A parsed remote: host plus `owner/repo` slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remote {
    host: String,
    slug: String,
}

impl Remote {
    /// Parse a raw remote string.
    ///
    /// # Errors
    ///
    /// [`UrlError::MalformedRemote`] if the remote has neither accepted shape
    /// or its host is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use forgelink::forge::Remote;
    ///
    /// let remote = Remote::parse("git@github.com:octo/cat.git").unwrap();
    /// assert_eq!(remote.origin(), "https://github.com");
    /// assert_eq!(remote.slug(), "octo/cat");
    /// ```
    pub fn parse(remote: &str) -> Result<Self, UrlError> {
        let malformed = || UrlError::MalformedRemote {
            remote: remote.to_string(),
        };

        let (host, slug) = if let Some(rest) = remote.strip_prefix("git@") {
            rest.split_once(':').ok_or_else(malformed)?
        } else if let Some(rest) = remote.strip_prefix("https://") {
            rest.split_once('/').unwrap_or((rest, ""))
        } else {
            return Err(malformed());
        };

        if host.is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            host: host.to_string(),
            slug: slug.strip_suffix(".git").unwrap_or(slug).to_string(),
        })
    }

    /// Host name, e.g. `gitlab.com`.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The `owner/repo` slug without a `.git` suffix.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// `https://<host>`.
    pub fn origin(&self) -> String {
        format!("https://{}", self.host)
    }

    /// `https://<host>/<slug>`, or just the origin when the slug is empty.
    pub fn normalized(&self) -> String {
        if self.slug.is_empty() {
            self.origin()
        } else {
            format!("https://{}/{}", self.host, self.slug)
        }
    }
}

/// Normalize a remote to its HTTPS form.
///
/// Returns `None` for remotes of any other shape.
///
/// ```
/// use forgelink::forge::normalize;
///
/// assert_eq!(
///     normalize("git@git.sr.ht:~octo/cat").as_deref(),
///     Some("https://git.sr.ht/~octo/cat")
/// );
/// assert_eq!(normalize("ssh://example.com/repo"), None);
/// ```
pub fn normalize(remote: &str) -> Option<String> {
    Remote::parse(remote).ok().map(|r| r.normalized())
}

/// Extract the `owner/repo` slug from a remote.
pub fn extract_repo_slug(remote: &str) -> Option<String> {
    Remote::parse(remote).ok().map(|r| r.slug)
}
