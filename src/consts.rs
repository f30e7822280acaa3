//! Default selectors, keys, timings, and messaging constants.
//!
//! These seed [`crate::config::SiteConfig`]; pages may override most of them
//! through the embedded JSON config block.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Class applied to `<body>` while the light theme is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

/// Id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Delay before the toggle's press affordance scales back up.
pub const TOGGLE_PRESS_MS: u32 = 150;

// ── Anchors ─────────────────────────────────────────────────────

/// Links whose `href` points into the current page.
pub const SAME_PAGE_ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

// ── Category filter ─────────────────────────────────────────────

/// Id of the category `<select>` control.
pub const CATEGORY_FILTER_ID: &str = "category-filter";

/// Selector for the filterable category panels.
pub const CATEGORY_PANEL_SELECTOR: &str = ".product-category";

/// Attribute carrying a panel's category token.
pub const CATEGORY_ATTRIBUTE: &str = "data-category";

/// Selection token that matches every panel.
pub const CATEGORY_ALL: &str = "all";

/// Per-index stagger applied to panels being shown.
pub const FILTER_STAGGER_MS: u32 = 100;

/// Delay before a fading panel is removed from layout.
pub const FILTER_HIDE_MS: u32 = 300;

/// Transform a fading panel slides to (20px down).
pub const FILTER_HIDE_TRANSFORM: &str = "translateY(20px)";

/// Class marking a panel as filtered out.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Reveal ──────────────────────────────────────────────────────

/// Selectors for elements animated on first scroll into view.
pub const REVEAL_SELECTORS: [&str; 3] = [".category-card", ".product-card", ".industry-logo"];

/// Class tagging an element as reveal-eligible.
pub const REVEAL_ELIGIBLE_CLASS: &str = "fade-in";

/// Class added once an element has been revealed.
pub const REVEAL_VISIBLE_CLASS: &str = "visible";

/// Fraction of an element's area that must intersect before it counts.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How far above the viewport bottom the trigger zone ends, in pixels.
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 50;

// ── Navbar ──────────────────────────────────────────────────────

/// Selector for the navigation bar.
pub const NAVBAR_SELECTOR: &str = ".navbar";

/// Offset below which the navbar always stays visible.
pub const NAVBAR_HIDE_THRESHOLD_PX: f64 = 100.0;

// ── Messaging ───────────────────────────────────────────────────

pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Destination number in international format without `+`.
pub const WHATSAPP_DESTINATION: &str = "919885957350";

pub const WHATSAPP_DEFAULT_MESSAGE: &str =
    "Hello! I am interested in your products and services. Please provide more information.";

pub const WHATSAPP_FALLBACK_CONTACT: &str = "Please contact us at +91 98859 57350 for more information.";

// ── Enquiry form ────────────────────────────────────────────────

pub const ENQUIRY_FORM_SELECTOR: &str = ".enquiry-form";

pub const SUBMIT_BUTTON_SELECTOR: &str = r#"button[type="submit"]"#;

pub const EMAIL_INPUT_SELECTOR: &str = r#"input[type="email"]"#;

pub const SUBMIT_BUSY_LABEL: &str = "Submitting...";

pub const SUBMIT_REDIRECT_LABEL: &str = "Redirecting to WhatsApp...";

pub const SUBMIT_SUCCESS_BACKGROUND: &str = "linear-gradient(45deg, #25D366, #128C7E)";

pub const SUBMIT_BUSY_MS: u32 = 1000;

pub const SUBMIT_REDIRECT_MS: u32 = 1000;

pub const SUBMIT_RESET_MS: u32 = 2000;

pub const INVALID_EMAIL_ALERT: &str = "Please enter a valid email address.";

pub const GENERIC_FAILURE_ALERT: &str = "An error occurred. Please try again or contact us directly.";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_SCRIPT_ID: &str = "site-controller-config";
