//! Navbar hide-on-scroll.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarPosition {
    /// Translated fully out of view upward.
    Hidden,
    Resting,
}

impl NavbarPosition {
    /// CSS `transform` value for this position.
    #[must_use]
    pub fn transform(self) -> &'static str {
        match self {
            Self::Hidden => "translateY(-100%)",
            Self::Resting => "translateY(0)",
        }
    }
}

/// Tracks the last scroll offset to derive scroll direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    last_offset: f64,
    hide_threshold: f64,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(hide_threshold: f64) -> Self {
        Self { last_offset: 0.0, hide_threshold }
    }

    /// Compare `offset` to the previous one, then remember it.
    pub fn on_scroll(&mut self, offset: f64) -> NavbarPosition {
        let position = if offset > self.last_offset && offset > self.hide_threshold {
            NavbarPosition::Hidden
        } else {
            NavbarPosition::Resting
        };
        self.last_offset = offset;
        position
    }

    #[cfg(test)]
    pub(crate) fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
