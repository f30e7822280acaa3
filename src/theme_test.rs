use super::*;
use crate::error::ControllerError;
use crate::ports::MemoryStore;

struct BrokenStore;

impl PreferenceStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ControllerError> {
        Err(ControllerError::Storage("denied".to_owned()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), ControllerError> {
        Err(ControllerError::Storage("quota".to_owned()))
    }
}

#[test]
fn stored_light_starts_light() {
    let store = MemoryStore::with_entry("theme", "light");
    assert_eq!(read_preference(&store, "theme"), Theme::Light);
}

#[test]
fn anything_else_starts_dark() {
    assert_eq!(read_preference(&MemoryStore::new(), "theme"), Theme::Dark);
    assert_eq!(read_preference(&MemoryStore::with_entry("theme", "dark"), "theme"), Theme::Dark);
    assert_eq!(read_preference(&MemoryStore::with_entry("theme", "LIGHT"), "theme"), Theme::Dark);
    assert_eq!(read_preference(&MemoryStore::with_entry("theme", ""), "theme"), Theme::Dark);
}

#[test]
fn toggle_flips_and_persists_opposite() {
    let store = MemoryStore::new();
    let next = toggle(&store, "theme", Theme::Dark);
    assert_eq!(next, Theme::Light);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn toggling_twice_restores_original_value() {
    let store = MemoryStore::with_entry("theme", "light");
    let start = read_preference(&store, "theme");
    let once = toggle(&store, "theme", start);
    let twice = toggle(&store, "theme", once);
    assert_eq!(twice, start);
    assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
}

#[test]
fn broken_store_still_toggles() {
    assert_eq!(read_preference(&BrokenStore, "theme"), Theme::Dark);
    assert_eq!(toggle(&BrokenStore, "theme", Theme::Dark), Theme::Light);
}
