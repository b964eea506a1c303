//! Property-based tests for remote normalization and URL building.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use forgelink::forge::{
    extract_repo_slug, normalize, resolve_forge, resolve_resource_url, ForgeKind, Remote,
    ResourceType,
};

/// Strategy for one path or slug component.
fn component() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,15}".prop_filter("must not end in .git", |s| {
        !s.ends_with(".git")
    })
}

/// Strategy for `owner/repo` slugs.
fn slug() -> impl Strategy<Value = String> {
    (component(), component()).prop_map(|(owner, repo)| format!("{}/{}", owner, repo))
}

/// Strategy for repository-relative file paths.
fn resource_path() -> impl Strategy<Value = String> {
    prop::collection::vec(component(), 1..5).prop_map(|parts| parts.join("/"))
}

/// Strategy for branch names.
fn branch() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9/_-]{0,20}".prop_filter("no trailing slash", |b| !b.ends_with('/'))
}

/// Strategy for the built-in hosts.
fn builtin_host() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "github.com",
        "gitlab.com",
        "codeberg.org",
        "gitea.com",
        "git.sr.ht",
        "git.savannah.gnu.org",
        "git.kernel.org",
    ])
}

fn resource_type() -> impl Strategy<Value = ResourceType> {
    prop::sample::select(ResourceType::all().to_vec())
}

proptest! {
    /// SSH and HTTPS forms of one repository normalize identically.
    #[test]
    fn ssh_and_https_agree(host in builtin_host(), slug in slug(), suffix in prop::bool::ANY) {
        let tail = if suffix { ".git" } else { "" };
        let ssh = format!("git@{}:{}{}", host, slug, tail);
        let https = format!("https://{}/{}", host, slug);

        let a = Remote::parse(&ssh).unwrap();
        let b = Remote::parse(&https).unwrap();
        prop_assert_eq!(a.origin(), b.origin());
        prop_assert_eq!(a.slug(), b.slug());
        prop_assert_eq!(normalize(&ssh), normalize(&https));
        prop_assert_eq!(extract_repo_slug(&ssh), Some(slug));
    }

    /// Building is a pure function of its inputs.
    #[test]
    fn build_is_deterministic(
        host in builtin_host(),
        slug in slug(),
        resource in resource_type(),
        branch in branch(),
        path in resource_path(),
    ) {
        let remote = format!("https://{}/{}", host, slug);
        let first = resolve_resource_url(&remote, resource, &branch, &path);
        let second = resolve_resource_url(&remote, resource, &branch, &path);
        prop_assert_eq!(first, second);
    }

    /// A supported view always yields an https URL ending in the path.
    #[test]
    fn supported_views_embed_branch_and_path(
        host in builtin_host(),
        slug in slug(),
        resource in resource_type(),
        branch in branch(),
        path in resource_path(),
    ) {
        let remote = format!("git@{}:{}.git", host, slug);
        let kind = resolve_forge(&remote).map(|e| e.kind);
        prop_assert!(kind.is_some());
        let kind: ForgeKind = kind.unwrap();

        match resolve_resource_url(&remote, resource, &branch, &path) {
            Ok(url) => {
                prop_assert!(kind.builder().supports(resource));
                prop_assert!(url.starts_with("https://"));
                let branch_seg = format!("/{}/", branch);
                prop_assert!(url.contains(&branch_seg));
                let without_query = url.trim_end_matches("?plain=1");
                let path_suffix = format!("/{}", path);
                prop_assert!(without_query.ends_with(&path_suffix));
            }
            Err(_) => prop_assert!(!kind.builder().supports(resource)),
        }
    }

    /// Hosts outside the registry never resolve.
    #[test]
    fn unregistered_hosts_never_resolve(owner in component(), slug in slug()) {
        let remote = format!("https://{}.example.net/{}", owner, slug);
        prop_assert_eq!(resolve_forge(&remote), None);
    }
}
