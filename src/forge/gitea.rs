//! forge::gitea
//!
//! Gitea-style URL builder (Gitea, Forgejo, Codeberg).
//!
//! Template: `<origin>/<owner>/<repo>/<segment>/branch/<branch>/<path>`.

use super::remote::Remote;
use super::traits::{join_segments, ResourceType, Route, UrlBuilder, UrlError};

const ROUTES: &[Route] = &[
    Route::new(ResourceType::Log, "commits"),
    Route::new(ResourceType::Tree, "src"),
    Route::new(ResourceType::Blob, "raw"),
    Route::new(ResourceType::Blame, "blame"),
];

/// Builds Gitea-style URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiteaBuilder;

impl UrlBuilder for GiteaBuilder {
    fn name(&self) -> &'static str {
        "gitea"
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
                route.segment,
                "branch",
                branch,
                path,
            ],
            route.query,
        ))
    }
}
