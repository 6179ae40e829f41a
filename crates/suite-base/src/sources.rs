//! Prefetch source URL construction
//!
//! The deployments repository publishes the container images its manifests
//! reference in two places: a top-level `external-images.yaml` and the
//! per-app manifests under `apps/`. Both are fetched at a pinned version so
//! the prefetch capability can pull every image before the first test runs.

/// Build the ordered list of prefetch source URLs for `repository` at
/// `version`.
///
/// Returns exactly two URLs: the raw `external-images.yaml` manifest and the
/// `apps/` directory-listing API endpoint. Local image files can be supplied
/// instead by configuring the prefetch capability with `file://` URLs.
pub fn prefetch_sources(repository: &str, version: &str) -> Vec<String> {
    vec![
        format!("https://raw.githubusercontent.com/{repository}/{version}/external-images.yaml"),
        format!("https://api.github.com/repos/{repository}/contents/apps?ref={version}"),
    ]
}
