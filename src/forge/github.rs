//! forge::github
//!
//! GitHub URL builder.
//!
//! Template: `<origin>/<owner>/<repo>/<segment>/<branch>/<path>[?plain=1]`.
//! Raw content is served from `raw.githubusercontent.com` without a segment,
//! which makes `blob` the only view that switches origin.

use super::remote::Remote;
use super::traits::{join_segments, ResourceType, Route, UrlBuilder, UrlError};

/// Origin serving raw file content.
pub const RAW_ORIGIN: &str = "https://raw.githubusercontent.com";

const ROUTES: &[Route] = &[
    Route::new(ResourceType::Log, "commits"),
    Route::new(ResourceType::Edit, "edit"),
    Route::new(ResourceType::Blob, "").with_origin(RAW_ORIGIN),
    Route::new(ResourceType::Plain, "blob").with_query("?plain=1"),
    Route::new(ResourceType::Blame, "blame"),
    Route::new(ResourceType::Tree, "blob"),
];

/// Builds github.com URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubBuilder;

impl UrlBuilder for GitHubBuilder {
    fn name(&self) -> &'static str {
        "github"
    }

    fn routes(&self) -> &'static [Route] {
        ROUTES
    }

    fn build(
        &self,
        remote: &str,
        resource: ResourceType,
        branch: &str,
        path: &str,
    ) -> Result<String, UrlError> {
        let route = self.route(resource)?;
        let remote = Remote::parse(remote)?;
        let origin = route
            .origin
            .map(str::to_string)
            .unwrap_or_else(|| remote.origin());

        Ok(join_segments(
            &[origin.as_str(), remote.slug(), route.segment, branch, path],
            route.query,
        ))
    }
}
