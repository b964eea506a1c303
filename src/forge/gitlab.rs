//! forge::gitlab
//!
//! GitLab URL builder.
//!
//! Template: `<origin>/<namespace>/<project>/-/<segment>/<branch>/<path>[?plain=1]`.
//! Nested groups pass through as part of the slug.

use super::remote::Remote;
use super::traits::{join_segments, ResourceType, Route, UrlBuilder, UrlError};

const ROUTES: &[Route] = &[
    Route::new(ResourceType::Log, "commits"),
    Route::new(ResourceType::Tree, "blob"),
    Route::new(ResourceType::Blob, "raw"),
    Route::new(ResourceType::Blame, "blame"),
    Route::new(ResourceType::Plain, "blob").with_query("?plain=1"),
];

/// Builds GitLab URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitLabBuilder;

impl UrlBuilder for GitLabBuilder {
    fn name(&self) -> &'static str {
        "gitlab"
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

        Ok(join_segments(
            &[
                remote.origin().as_str(),
                remote.slug(),
                "-",
                route.segment,
                branch,
                path,
            ],
            route.query,
        ))
    }
}
