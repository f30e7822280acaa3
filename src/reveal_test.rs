use super::*;

fn entry(id: usize, is_intersecting: bool) -> VisibilityEntry {
    VisibilityEntry { id, is_intersecting }
}

#[test]
fn register_hands_out_sequential_ids() {
    let mut registry = RevealRegistry::new();
    assert_eq!(registry.register(), 0);
    assert_eq!(registry.register(), 1);
    assert_eq!(registry.registered(), 2);
}

#[test]
fn not_intersecting_is_never_revealed() {
    let mut registry = RevealRegistry::new();
    let id = registry.register();
    assert_eq!(registry.observe(entry(id, false)), RevealAction::Ignore);
    assert!(!registry.is_revealed(id));
}

#[test]
fn first_intersection_reveals_exactly_once() {
    let mut registry = RevealRegistry::new();
    let id = registry.register();
    assert_eq!(registry.observe(entry(id, true)), RevealAction::Reveal);
    assert_eq!(registry.observe(entry(id, true)), RevealAction::Ignore);
    assert!(registry.is_revealed(id));
}

#[test]
fn leaving_the_viewport_keeps_it_revealed() {
    let mut registry = RevealRegistry::new();
    let id = registry.register();
    registry.observe(entry(id, true));
    assert_eq!(registry.observe(entry(id, false)), RevealAction::Ignore);
    assert!(registry.is_revealed(id));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut registry = RevealRegistry::new();
    assert_eq!(registry.observe(entry(7, true)), RevealAction::Ignore);
    assert!(!registry.is_revealed(7));
}

#[test]
fn targets_resolve_elements_to_their_ids() {
    let mut registry = RevealRegistry::new();
    let targets = RevealTargets::register_all(&mut registry, ["hero", "card", "footer"]);
    assert_eq!(targets.len(), 3);
    assert_eq!(registry.registered(), 3);
    assert_eq!(targets.id_of(&"card"), Some(1));
    assert_eq!(targets.id_of(&"sidebar"), None);
    assert_eq!(targets.elements().copied().collect::<Vec<_>>(), vec!["hero", "card", "footer"]);
}

#[test]
fn reveal_by_element_reaches_only_that_element() {
    let mut registry = RevealRegistry::new();
    let targets = RevealTargets::register_all(&mut registry, ["a", "b"]);
    let id = targets.id_of(&"b").unwrap();
    assert_eq!(registry.observe(entry(id, true)), RevealAction::Reveal);
    assert!(registry.is_revealed(1));
    assert!(!registry.is_revealed(0));
}
