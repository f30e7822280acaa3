use std::collections::HashMap;

use super::*;

fn apply(attrs: &mut HashMap<&'static str, &'static str>) {
    let hints = missing_hints(attrs.contains_key(LOADING_ATTR), attrs.contains_key(DECODING_ATTR));
    for (name, value) in hints {
        attrs.insert(name, value);
    }
}

#[test]
fn bare_image_gets_both_hints() {
    assert_eq!(missing_hints(false, false), vec![("loading", "lazy"), ("decoding", "async")]);
}

#[test]
fn explicit_hints_are_kept() {
    let mut attrs = HashMap::from([("loading", "eager")]);
    apply(&mut attrs);
    assert_eq!(attrs.get("loading"), Some(&"eager"));
    assert_eq!(attrs.get("decoding"), Some(&"async"));
}

#[test]
fn second_pass_changes_nothing() {
    let mut attrs = HashMap::new();
    apply(&mut attrs);
    let after_first = attrs.clone();
    apply(&mut attrs);
    assert_eq!(attrs, after_first);
    assert!(missing_hints(true, true).is_empty());
}
