use super::*;
use crate::ports::MemoryStore;

#[test]
fn theme_round_trip_through_core() {
    let store = MemoryStore::with_entry("theme", "light");
    let mut core = ControllerCore::new(SiteConfig::default());
    assert_eq!(core.load_theme(&store), Theme::Light);
    assert_eq!(core.toggle_theme(&store), Theme::Dark);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(core.toggle_theme(&store), Theme::Light);
    assert_eq!(core.theme(), Theme::Light);
}

#[test]
fn configured_storage_key_is_used() {
    let mut config = SiteConfig::default();
    config.theme.storage_key = "site-theme".to_owned();
    let store = MemoryStore::new();
    let mut core = ControllerCore::new(config);
    core.toggle_theme(&store);
    assert_eq!(store.get("site-theme").unwrap().as_deref(), Some("light"));
    assert_eq!(store.get("theme").unwrap(), None);
}

#[test]
fn navbar_threshold_comes_from_config() {
    let mut config = SiteConfig::default();
    config.navbar.hide_threshold_px = 10.0;
    let mut core = ControllerCore::new(config);
    assert_eq!(core.on_scroll(50.0), NavbarPosition::Hidden);
}

#[test]
fn filter_generation_advances_per_selection() {
    let mut core = ControllerCore::new(SiteConfig::default());
    let tokens = vec![Some("a".to_owned())];
    let first = core.select_category("a", &tokens);
    assert!(core.filter_is_current(first.generation));
    let second = core.select_category("all", &tokens);
    assert!(!core.filter_is_current(first.generation));
    assert!(core.filter_is_current(second.generation));
}

#[test]
fn reveal_and_submission_state_live_on_core() {
    let mut core = ControllerCore::new(SiteConfig::default());
    let targets = core.register_reveal_targets(["hero"]);
    let id = targets.id_of(&"hero").unwrap();
    assert_eq!(core.observe_reveal(VisibilityEntry { id, is_intersecting: true }), RevealAction::Reveal);

    assert!(matches!(core.prepare_submission(Some("Send"), Some("bad")), Prepared::Rejected));
    assert!(!core.submission_in_flight());
    let Prepared::Started(ticket) = core.prepare_submission(Some("Send"), None) else {
        panic!("submission should start");
    };
    assert!(core.submission_in_flight());
    core.finish_submission(ticket.id);
    assert!(!core.submission_in_flight());
}
