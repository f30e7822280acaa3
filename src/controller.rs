//! The page controller's session state.
//!
//! `ControllerCore` is the single owner of every piece of mutable state the
//! page features share: the theme flag, the last scroll offset, the filter
//! generation, the reveal registry, and the in-flight submission. It holds no
//! browser handles so it can be tested natively; the `dom` module wraps it in
//! `Rc<RefCell<_>>` and feeds it events.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::SiteConfig;
use crate::enquiry::{self, Prepared, SubmissionSlot};
use crate::filter::{FilterPlan, FilterState, FilterTiming};
use crate::navbar::{NavbarPosition, ScrollTracker};
use crate::ports::PreferenceStore;
use crate::reveal::{RevealAction, RevealRegistry, RevealTargets, VisibilityEntry};
use crate::theme::{self, Theme};

#[derive(Debug)]
pub struct ControllerCore {
    pub config: SiteConfig,
    theme: Theme,
    scroll: ScrollTracker,
    filter: FilterState,
    reveal: RevealRegistry,
    submission: SubmissionSlot,
}

impl ControllerCore {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        let scroll = ScrollTracker::new(config.navbar.hide_threshold_px);
        Self {
            config,
            theme: Theme::default(),
            scroll,
            filter: FilterState::new(),
            reveal: RevealRegistry::new(),
            submission: SubmissionSlot::new(),
        }
    }

    // --- Theme ---

    /// Load the persisted theme and return it.
    pub fn load_theme(&mut self, store: &impl PreferenceStore) -> Theme {
        self.theme = theme::read_preference(store, &self.config.theme.storage_key);
        self.theme
    }

    /// Flip the theme, persist it, and return the new value.
    pub fn toggle_theme(&mut self, store: &impl PreferenceStore) -> Theme {
        self.theme = theme::toggle(store, &self.config.theme.storage_key, self.theme);
        self.theme
    }

    #[cfg(test)]
    pub(crate) fn theme(&self) -> Theme {
        self.theme
    }

    // --- Filter ---

    pub fn select_category(&mut self, selected: &str, tokens: &[Option<String>]) -> FilterPlan {
        let timing = FilterTiming { stagger_ms: self.config.filter.stagger_ms, hide_ms: self.config.filter.hide_ms };
        self.filter.select(selected, tokens, timing)
    }

    #[must_use]
    pub fn filter_is_current(&self, generation: u64) -> bool {
        self.filter.is_current(generation)
    }

    // --- Reveal ---

    pub fn register_reveal_targets<T: PartialEq>(&mut self, elements: impl IntoIterator<Item = T>) -> RevealTargets<T> {
        RevealTargets::register_all(&mut self.reveal, elements)
    }

    pub fn observe_reveal(&mut self, entry: VisibilityEntry) -> RevealAction {
        self.reveal.observe(entry)
    }

    // --- Navbar ---

    pub fn on_scroll(&mut self, offset: f64) -> NavbarPosition {
        self.scroll.on_scroll(offset)
    }

    // --- Enquiry ---

    /// Decide a submit event; see [`enquiry::prepare`].
    pub fn prepare_submission(&mut self, button_label: Option<&str>, email: Option<&str>) -> Prepared {
        enquiry::prepare(button_label, email, &mut self.submission)
    }

    pub fn finish_submission(&mut self, id: u64) {
        self.submission.finish(id);
    }

    #[cfg(test)]
    pub(crate) fn submission_in_flight(&self) -> bool {
        self.submission.in_flight()
    }
}
