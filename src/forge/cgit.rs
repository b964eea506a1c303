//! forge::cgit
//!
//! cgit URL builder.
//!
//! cgit addresses a repository by its path under the host, so the origin here
//! is the whole normalized remote rather than the bare host.
//!
//! Template: `<host>/<repo-path>/<segment>/branch/<branch>/<path>`.

use super::remote::Remote;
use super::traits::{join_segments, ResourceType, Route, UrlBuilder, UrlError};

const ROUTES: &[Route] = &[
    Route::new(ResourceType::Log, "log"),
    Route::new(ResourceType::Tree, "src"),
    Route::new(ResourceType::Blob, "plain"),
];

/// Builds cgit URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct CgitBuilder;

impl UrlBuilder for CgitBuilder {
    fn name(&self) -> &'static str {
        "cgit"
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
        let origin = Remote::parse(remote)?.normalized();

        Ok(join_segments(
            &[origin.as_str(), route.segment, "branch", branch, path],
            route.query,
        ))
    }
}
