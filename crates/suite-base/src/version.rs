//! Version reference resolution
//!
//! A single configured reference drives two things: what the checkout
//! capability materializes (full SHA or tag path) and what version string is
//! embedded in derived prefetch URLs (short SHA or bare tag).

use crate::{Error, Result};

/// Substring that marks a reference as a tag path rather than a commit SHA.
const TAG_MARKER: &str = "tags";

/// Prefix stripped from tag-path references to obtain the bare tag.
const TAG_PREFIX: &str = "tags/";

/// Number of leading characters kept when shortening a commit SHA.
const SHORT_LEN: usize = 8;

/// A version reference resolved into its checkout and URL forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Reference handed to the checkout capability: the full tag path, or
    /// the shortened SHA.
    pub checkout_ref: String,

    /// Version string substituted into derived URLs: the bare tag, or the
    /// shortened SHA.
    pub short: String,
}

/// Resolve a configured version reference.
///
/// Tag-path references (anything containing `tags`) are checked out as-is;
/// the bare tag with the `tags/` prefix stripped becomes the URL version.
/// Commit SHA references are shortened to their first eight characters for
/// both purposes.
///
/// Resolution is pure: equal inputs always produce equal outputs.
///
/// # Errors
///
/// Returns [`Error::ReferenceTooShort`] for a non-tag reference with fewer
/// than eight characters rather than silently truncating it.
pub fn resolve(reference: &str) -> Result<ResolvedVersion> {
    if reference.contains(TAG_MARKER) {
        return Ok(ResolvedVersion {
            checkout_ref: reference.to_string(),
            short: reference.replace(TAG_PREFIX, ""),
        });
    }

    let len = reference.chars().count();
    if len < SHORT_LEN {
        return Err(Error::ReferenceTooShort {
            reference: reference.to_string(),
            len,
        });
    }

    let short: String = reference.chars().take(SHORT_LEN).collect();
    Ok(ResolvedVersion {
        checkout_ref: short.clone(),
        short,
    })
}
