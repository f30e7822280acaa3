//! Deferred loading hints for images present at startup.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

pub const LOADING_ATTR: &str = "loading";
pub const DECODING_ATTR: &str = "decoding";

/// Attributes to add to an image that has the given hints already.
///
/// Existing hints are never overwritten, so applying the result twice is a
/// no-op the second time.
#[must_use]
pub fn missing_hints(has_loading: bool, has_decoding: bool) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::with_capacity(2);
    if !has_loading {
        hints.push((LOADING_ATTR, "lazy"));
    }
    if !has_decoding {
        hints.push((DECODING_ATTR, "async"));
    }
    hints
}
