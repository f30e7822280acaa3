//! Category filter planning.
//!
//! A selection produces one [`PanelTransition`] per panel: matching panels are
//! shown immediately and faded in after a stagger proportional to their
//! index; the rest fade out immediately and leave layout after a fixed delay.
//!
//! Each selection bumps a generation counter. Deferred steps carry the
//! generation that scheduled them and must be dropped once it is stale, so a
//! quick re-selection cannot have an old fade-out hide a panel the new
//! selection shows.
//!
//! What "show" and "hide" do to a panel is data too: [`PanelEffect`] lists
//! the style and class changes applied now and after the delay. The DOM
//! wiring applies them verbatim.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::consts::{CATEGORY_ALL, FILTER_HIDE_TRANSFORM};

/// One change applied to a panel element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffect {
    /// Set an inline style property.
    Style { property: &'static str, value: &'static str },
    /// Add (`true`) or remove (`false`) the hidden class.
    HiddenClass(bool),
}

const SHOW_NOW: &[PanelEffect] =
    &[PanelEffect::Style { property: "display", value: "block" }, PanelEffect::HiddenClass(false)];
const SHOW_LATER: &[PanelEffect] = &[
    PanelEffect::Style { property: "opacity", value: "1" },
    PanelEffect::Style { property: "transform", value: "translateY(0)" },
];
const HIDE_NOW: &[PanelEffect] = &[
    PanelEffect::Style { property: "opacity", value: "0" },
    PanelEffect::Style { property: "transform", value: FILTER_HIDE_TRANSFORM },
];
const HIDE_LATER: &[PanelEffect] =
    &[PanelEffect::HiddenClass(true), PanelEffect::Style { property: "display", value: "none" }];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelTransition {
    /// Put the panel back in layout now; fade it in after `delay_ms`.
    Show { index: usize, delay_ms: u32 },
    /// Fade the panel out now; drop it from layout after `delay_ms`.
    Hide { index: usize, delay_ms: u32 },
}

impl PanelTransition {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Show { index, .. } | Self::Hide { index, .. } => index,
        }
    }

    #[must_use]
    pub fn delay_ms(self) -> u32 {
        match self {
            Self::Show { delay_ms, .. } | Self::Hide { delay_ms, .. } => delay_ms,
        }
    }

    /// Effects to apply as soon as the selection changes.
    #[must_use]
    pub fn immediate_effects(self) -> &'static [PanelEffect] {
        match self {
            Self::Show { .. } => SHOW_NOW,
            Self::Hide { .. } => HIDE_NOW,
        }
    }

    /// Effects to apply after `delay_ms`, if the selection is still current.
    #[must_use]
    pub fn deferred_effects(self) -> &'static [PanelEffect] {
        match self {
            Self::Show { .. } => SHOW_LATER,
            Self::Hide { .. } => HIDE_LATER,
        }
    }

    #[cfg(test)]
    pub(crate) fn is_shown(self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPlan {
    pub generation: u64,
    pub transitions: Vec<PanelTransition>,
}

/// Timing knobs for a filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTiming {
    pub stagger_ms: u32,
    pub hide_ms: u32,
}

#[derive(Debug, Default)]
pub struct FilterState {
    generation: u64,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan transitions for `selected` over panels tagged with `tokens`.
    pub fn select(&mut self, selected: &str, tokens: &[Option<String>], timing: FilterTiming) -> FilterPlan {
        self.generation += 1;
        let transitions = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if matches_selection(selected, token.as_deref()) {
                    PanelTransition::Show { index, delay_ms: stagger_delay(index, timing.stagger_ms) }
                } else {
                    PanelTransition::Hide { index, delay_ms: timing.hide_ms }
                }
            })
            .collect();
        FilterPlan { generation: self.generation, transitions }
    }

    /// Whether a deferred step scheduled under `generation` may still run.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}

#[must_use]
pub fn matches_selection(selected: &str, token: Option<&str>) -> bool {
    selected == CATEGORY_ALL || token == Some(selected)
}

fn stagger_delay(index: usize, stagger_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(stagger_ms)
}
