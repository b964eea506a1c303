//! forge::sourcehut
//!
//! SourceHut (git.sr.ht) URL builder.
//!
//! Template: `<origin>/~<owner>/<repo>/<type>/<branch>/item/<path>`, where the
//! segment is the resource type's own name and `item` is dropped for `blob`.

use super::remote::Remote;
use super::traits::{join_segments, ResourceType, Route, UrlBuilder, UrlError};

const ROUTES: &[Route] = &[
    Route::new(ResourceType::Log, "log").with_suffix("item"),
    Route::new(ResourceType::Tree, "tree").with_suffix("item"),
    Route::new(ResourceType::Blob, "blob"),
    Route::new(ResourceType::Blame, "blame").with_suffix("item"),
];

/// Builds SourceHut URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceHutBuilder;

impl UrlBuilder for SourceHutBuilder {
    fn name(&self) -> &'static str {
        "sourcehut"
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
                branch,
                route.suffix.unwrap_or_default(),
                path,
            ],
            route.query,
        ))
    }
}
