// Host-side tests for theme resolution and switching.

use linktree_core::constants::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use linktree_core::*;
use std::collections::HashMap;

#[derive(Default)]
struct MemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
    }
}

#[derive(Default)]
struct FakeRoot {
    attrs: HashMap<String, String>,
}

impl ThemeRoot for FakeRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attrs.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attrs.remove(name);
    }
}

fn switcher(stored: Option<&str>) -> ThemeSwitcher<MemoryStore, FakeRoot> {
    let mut store = MemoryStore::default();
    if let Some(v) = stored {
        store.items.insert(THEME_STORAGE_KEY.to_string(), v.to_string());
    }
    ThemeSwitcher::new(store, FakeRoot::default())
}

fn stored_value(s: &ThemeSwitcher<MemoryStore, FakeRoot>) -> Option<String> {
    s.store().load(THEME_STORAGE_KEY)
}

#[test]
fn resolve_prefers_stored_value() {
    assert_eq!(resolve_theme(Some("dark"), true), Theme::Dark);
    assert_eq!(resolve_theme(Some("light"), false), Theme::Light);
}

#[test]
fn resolve_falls_back_to_os_then_dark() {
    assert_eq!(resolve_theme(None, true), Theme::Light);
    assert_eq!(resolve_theme(None, false), Theme::Dark);
    assert_eq!(resolve_theme(Some(""), true), Theme::Light);
}

#[test]
fn unknown_stored_values_apply_as_dark() {
    assert_eq!(resolve_theme(Some("solarized"), true), Theme::Dark);
    assert_eq!(
        "solarized".parse::<Theme>(),
        Err(CoreError::UnknownTheme("solarized".into()))
    );
}

#[test]
fn theme_strings_round_trip() {
    for t in [Theme::Light, Theme::Dark] {
        assert_eq!(t.to_string().parse::<Theme>(), Ok(t));
        assert_eq!(t.toggled().toggled(), t);
    }
}

#[test]
fn set_light_marks_root_and_dark_clears_it() {
    let mut s = switcher(None);
    s.set(Theme::Light);
    assert_eq!(s.root().attribute(THEME_ATTRIBUTE).as_deref(), Some("light"));
    assert_eq!(stored_value(&s).as_deref(), Some("light"));

    s.set(Theme::Dark);
    assert_eq!(s.root().attribute(THEME_ATTRIBUTE), None);
    assert_eq!(stored_value(&s).as_deref(), Some("dark"));
}

#[test]
fn init_uses_os_preference_and_persists_it() {
    let mut s = switcher(None);
    assert_eq!(s.init(true), Theme::Light);
    assert_eq!(s.current(), Theme::Light);
    assert_eq!(stored_value(&s).as_deref(), Some("light"));
}

#[test]
fn init_stored_value_beats_os_preference() {
    let mut s = switcher(Some("dark"));
    assert_eq!(s.init(true), Theme::Dark);
    assert_eq!(s.current(), Theme::Dark);
}

#[test]
fn toggling_twice_restores_attribute_and_storage() {
    for initial in [Some("light"), Some("dark")] {
        let mut s = switcher(initial);
        s.init(false);
        let attr = s.root().attribute(THEME_ATTRIBUTE);
        let stored = stored_value(&s);

        let first = s.toggle();
        assert_ne!(Some(first.as_str()), stored.as_deref());
        s.toggle();

        assert_eq!(s.root().attribute(THEME_ATTRIBUTE), attr);
        assert_eq!(stored_value(&s), stored);
    }
}

#[test]
fn os_change_only_applies_without_stored_preference() {
    let mut s = switcher(None);
    assert_eq!(s.on_os_preference_change(true), Some(Theme::Light));
    assert_eq!(s.current(), Theme::Light);
    // The OS-driven change was stored, so it now pins the theme.
    assert!(s.has_stored_preference());
    assert_eq!(s.on_os_preference_change(false), None);
    assert_eq!(s.current(), Theme::Light);
}

#[test]
fn os_change_is_ignored_after_init() {
    let mut s = switcher(None);
    s.init(false);
    let writes = s.store().writes;
    assert_eq!(s.on_os_preference_change(true), None);
    assert_eq!(s.current(), Theme::Dark);
    assert_eq!(s.store().writes, writes);
}

#[test]
fn init_keeps_an_unrecognised_stored_value() {
    let mut s = switcher(Some("solarized"));
    assert_eq!(s.init(true), Theme::Dark);
    assert_eq!(s.root().attribute(THEME_ATTRIBUTE), None);
    assert_eq!(s.current(), Theme::Dark);
    assert_eq!(stored_value(&s).as_deref(), Some("solarized"));

    // Still counts as an explicit preference.
    assert!(s.has_stored_preference());
    assert_eq!(s.on_os_preference_change(true), None);
    assert_eq!(stored_value(&s).as_deref(), Some("solarized"));
}

#[test]
fn empty_stored_value_is_replaced_on_init() {
    let mut s = switcher(Some(""));
    assert!(!s.has_stored_preference());
    assert_eq!(s.init(true), Theme::Light);
    assert_eq!(stored_value(&s).as_deref(), Some("light"));
}
