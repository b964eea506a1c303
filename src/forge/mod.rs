//! forge
//!
//! Forge resolution and URL construction.
//!
//! # Architecture
//!
//! Resolution flows Resolver → Remote normalizer → Registry lookup → URL
//! builder. Everything in this module is pure string computation: no I/O and
//! no shared mutable state, so any function here may be called from multiple
//! threads without coordination.
//!
//! # Modules
//!
//! - `traits`: [`UrlBuilder`] trait, [`ResourceType`], [`Route`], [`UrlError`]
//! - `remote`: SSH/HTTPS remote normalization
//! - `registry`: host → [`ForgeKind`] table and the resolver entry points
//! - [`cgit`], [`gitea`], [`github`], [`gitlab`], [`sourcehut`]: per-forge route tables
//!
//! # Example
//!
//! ```
//! use forgelink::forge::{resolve_resource_url, ResourceType};
//!
//! let url = resolve_resource_url(
//!     "git@github.com:octo/cat.git",
//!     ResourceType::Blob,
//!     "main",
//!     "src/main.c",
//! )
//! .unwrap();
//! assert_eq!(url, "https://raw.githubusercontent.com/octo/cat/main/src/main.c");
//! ```

pub mod cgit;
pub mod gitea;
pub mod github;
pub mod gitlab;
mod registry;
mod remote;
pub mod sourcehut;
mod traits;

pub use registry::{
    resolve_forge, resolve_resource_url, valid_forge_names, ForgeEntry, ForgeKind, Registry,
    Resolution,
};
pub use remote::{extract_repo_slug, normalize, Remote};
pub use traits::*;
