//! WhatsApp deep-link construction and handoff.

#[cfg(test)]
#[path = "deep_link_test.rs"]
mod deep_link_test;

use crate::config::MessagingConfig;
use crate::ports::Navigator;

/// Build `<base>/<destination>?text=<percent-encoded message>`.
#[must_use]
pub fn build_url(config: &MessagingConfig) -> String {
    format!(
        "{}/{}?text={}",
        config.base_url.trim_end_matches('/'),
        config.destination,
        encode_uri_component(&config.message)
    )
}

/// Characters `encodeURIComponent` leaves as-is on top of the unreserved set
/// `urlencoding` already keeps.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [("%21", "!"), ("%27", "'"), ("%28", "("), ("%29", ")"), ("%2A", "*")];

/// Percent-encode `value` the way a browser's `encodeURIComponent` does.
///
/// `urlencoding` emits uppercase escapes and turns a literal `%` into `%25`,
/// so restoring the marks cannot touch text that was in the input.
#[must_use]
pub fn encode_uri_component(value: &str) -> String {
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(value).into_owned(), |encoded, (escape, mark)| encoded.replace(escape, mark))
}

/// Open the deep link in a new browsing context.
///
/// Returns `false` when the navigator refused; the user has then already
/// been shown the fallback contact instruction.
pub fn hand_off(navigator: &impl Navigator, config: &MessagingConfig) -> bool {
    let url = build_url(config);
    match navigator.open_new_context(&url) {
        Ok(()) => {
            log::debug!("opened messaging link");
            true
        }
        Err(e) => {
            log::error!("error opening messaging link: {e}");
            navigator.alert(&config.fallback_contact);
            false
        }
    }
}
