use std::cell::RefCell;

use super::*;
use crate::error::ControllerError;

#[derive(Default)]
struct RecordingNavigator {
    refuse: bool,
    opened: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open_new_context(&self, url: &str) -> Result<(), ControllerError> {
        if self.refuse {
            return Err(ControllerError::OpenFailed { url: url.to_owned(), reason: "popup blocked".to_owned() });
        }
        self.opened.borrow_mut().push(url.to_owned());
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }
}

#[test]
fn default_url_encodes_message() {
    let url = build_url(&MessagingConfig::default());
    assert!(url.starts_with("https://wa.me/919885957350?text=Hello!%20I%20am%20interested"));
    assert!(url.ends_with("more%20information."));
    assert!(!url.contains(' '));
}

#[test]
fn encoding_matches_browser_uri_component() {
    assert_eq!(encode_uri_component("Hi! It's (really) *great*"), "Hi!%20It's%20(really)%20*great*");
    assert_eq!(encode_uri_component("-_.~"), "-_.~");
    assert_eq!(encode_uri_component("50% off %21"), "50%25%20off%20%2521");
    assert_eq!(encode_uri_component("café & co/?#"), "caf%C3%A9%20%26%20co%2F%3F%23");
}

#[test]
fn trailing_slash_on_base_is_ignored() {
    let config = MessagingConfig {
        base_url: "https://wa.me/".to_owned(),
        destination: "15550001111".to_owned(),
        message: "a&b=c".to_owned(),
        ..MessagingConfig::default()
    };
    assert_eq!(build_url(&config), "https://wa.me/15550001111?text=a%26b%3Dc");
}

#[test]
fn successful_handoff_opens_once_without_alert() {
    let navigator = RecordingNavigator::default();
    assert!(hand_off(&navigator, &MessagingConfig::default()));
    assert_eq!(navigator.opened.borrow().len(), 1);
    assert!(navigator.alerts.borrow().is_empty());
}

#[test]
fn refused_handoff_alerts_fallback_contact() {
    let navigator = RecordingNavigator { refuse: true, ..RecordingNavigator::default() };
    assert!(!hand_off(&navigator, &MessagingConfig::default()));
    assert!(navigator.opened.borrow().is_empty());
    assert_eq!(
        navigator.alerts.borrow().as_slice(),
        ["Please contact us at +91 98859 57350 for more information.".to_owned()]
    );
}
