//! Same-page anchor interception.
//!
//! Default navigation is always suppressed for `#` links, even when the
//! target is missing; a broken anchor does nothing instead of jumping.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// Decision for one anchor activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOutcome<T> {
    pub prevent_default: bool,
    pub scroll_to: Option<T>,
}

/// Element id referenced by a same-page `href`, if it names one.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Resolve an activated link against the document via `lookup`.
pub fn resolve<T>(href: &str, lookup: impl FnOnce(&str) -> Option<T>) -> AnchorOutcome<T> {
    AnchorOutcome { prevent_default: true, scroll_to: fragment_id(href).and_then(lookup) }
}
