//! The fixed faction registry.
//!
//! The build system learns the set of pages to produce from this list, ahead
//! of time. There is no catch-all: a slug absent from the list never resolves
//! to a resource path, no matter what files exist on disk.

use crate::error::RosterError;

/// Every faction the site builds a page for, in build order.
pub const REGISTERED_SLUGS: &[&str] = &["disciples-de-la-guerre"];

/// Returns `true` if `slug` is in [`REGISTERED_SLUGS`].
#[must_use]
pub fn is_registered(slug: &str) -> bool {
    REGISTERED_SLUGS.contains(&slug)
}

/// Checks that `slug` is well-formed and registered.
///
/// The charset check runs first so a hostile value (`../secrets`) is rejected
/// as malformed rather than merely unregistered.
///
/// # Errors
/// Returns [`RosterError::InvalidSlug`] for characters outside `[a-z0-9-]`
/// and [`RosterError::UnknownSlug`] for well-formed but unregistered slugs.
pub fn validate(slug: &str) -> Result<(), RosterError> {
    if slug.is_empty()
        || !slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(RosterError::InvalidSlug { slug: slug.to_owned() });
    }

    if !is_registered(slug) {
        return Err(RosterError::UnknownSlug { slug: slug.to_owned() });
    }

    Ok(())
}
