#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn synthetic_sequence_hides_only_on_downward_past_threshold() {
    let mut tracker = ScrollTracker::new(100.0);
    let positions = [0.0, 50.0, 150.0, 120.0].map(|offset| tracker.on_scroll(offset));
    assert_eq!(
        positions,
        [NavbarPosition::Resting, NavbarPosition::Resting, NavbarPosition::Hidden, NavbarPosition::Resting]
    );
}

#[test]
fn offset_is_stored_after_every_event() {
    let mut tracker = ScrollTracker::new(100.0);
    tracker.on_scroll(300.0);
    assert_eq!(tracker.last_offset(), 300.0);
    tracker.on_scroll(20.0);
    assert_eq!(tracker.last_offset(), 20.0);
}

#[test]
fn holding_still_past_threshold_restores() {
    let mut tracker = ScrollTracker::new(100.0);
    assert_eq!(tracker.on_scroll(400.0), NavbarPosition::Hidden);
    assert_eq!(tracker.on_scroll(400.0), NavbarPosition::Resting);
}

#[test]
fn transform_values() {
    assert_eq!(NavbarPosition::Hidden.transform(), "translateY(-100%)");
    assert_eq!(NavbarPosition::Resting.transform(), "translateY(0)");
}
