//! Typed controller configuration.
//!
//! Every field has a default from [`crate::consts`]. A page can embed a JSON
//! block to override individual fields; omitted fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::*;
use crate::error::ControllerError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: ThemeConfig,
    pub filter: FilterConfig,
    pub reveal: RevealConfig,
    pub navbar: NavbarConfig,
    pub messaging: MessagingConfig,
    pub enquiry: EnquiryConfig,
}

impl SiteConfig {
    /// Parse a JSON override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Like [`SiteConfig::from_json`], but falls back to defaults when the
    /// block is absent or malformed.
    #[must_use]
    pub fn from_optional_json(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring site config: {e}");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub toggle_id: String,
    pub light_class: String,
    pub press_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            toggle_id: THEME_TOGGLE_ID.to_owned(),
            light_class: LIGHT_MODE_CLASS.to_owned(),
            press_ms: TOGGLE_PRESS_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub select_id: String,
    pub panel_selector: String,
    pub stagger_ms: u32,
    pub hide_ms: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            select_id: CATEGORY_FILTER_ID.to_owned(),
            panel_selector: CATEGORY_PANEL_SELECTOR.to_owned(),
            stagger_ms: FILTER_STAGGER_MS,
            hide_ms: FILTER_HIDE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            threshold: REVEAL_THRESHOLD,
            bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
        }
    }
}

impl RevealConfig {
    /// Comma-joined selector list suitable for `querySelectorAll`.
    #[must_use]
    pub fn selector_list(&self) -> String {
        self.selectors.join(", ")
    }

    /// Observer root margin shrinking the trigger zone at the bottom edge.
    #[must_use]
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub selector: String,
    pub hide_threshold_px: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self { selector: NAVBAR_SELECTOR.to_owned(), hide_threshold_px: NAVBAR_HIDE_THRESHOLD_PX }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    pub base_url: String,
    pub destination: String,
    pub message: String,
    pub fallback_contact: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            base_url: WHATSAPP_BASE_URL.to_owned(),
            destination: WHATSAPP_DESTINATION.to_owned(),
            message: WHATSAPP_DEFAULT_MESSAGE.to_owned(),
            fallback_contact: WHATSAPP_FALLBACK_CONTACT.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnquiryConfig {
    pub form_selector: String,
    pub busy_ms: u32,
    pub redirect_ms: u32,
    pub reset_ms: u32,
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self {
            form_selector: ENQUIRY_FORM_SELECTOR.to_owned(),
            busy_ms: SUBMIT_BUSY_MS,
            redirect_ms: SUBMIT_REDIRECT_MS,
            reset_ms: SUBMIT_RESET_MS,
        }
    }
}
