//! Light/dark theme preference.
//!
//! The stored value is read once at startup and rewritten on every toggle.
//! Anything other than `"light"` (including no value) means dark.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failing store is logged and the visual
//! toggle still happens, so the page never gets stuck in one theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::ports::PreferenceStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference value.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }
}

/// Read the persisted theme, treating storage failures as "no preference".
pub fn read_preference(store: &impl PreferenceStore, key: &str) -> Theme {
    match store.get(key) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            log::warn!("theme preference unreadable: {e}");
            Theme::Dark
        }
    }
}

/// Flip `current`, persist the result, and return it.
pub fn toggle(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    if let Err(e) = store.set(key, next.as_str()) {
        log::warn!("theme preference not saved: {e}");
    }
    next
}
