use super::*;
use crate::util::preference::MemoryStore;

struct FailingStore;

impl PreferenceStore for FailingStore {
    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), UiError> {
        Err(UiError::StorageUnavailable)
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn theme_glyphs() {
    assert_eq!(Theme::Light.glyph(), "☀");
    assert_eq!(Theme::Dark.glyph(), "☾");
}

#[test]
fn theme_from_stored_accepts_only_known_values() {
    assert_eq!(Theme::from_stored("light"), Some(Theme::Light));
    assert_eq!(Theme::from_stored("dark"), Some(Theme::Dark));
    assert_eq!(Theme::from_stored("Light"), None);
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn restore_without_preference_is_dark() {
    let store = MemoryStore::new();
    let state = ThemeState::restore(&store, "theme");
    assert_eq!(state.mode(), Theme::Dark);
}

#[test]
fn restore_with_light_preference_is_light_with_sun_glyph() {
    let store = MemoryStore::with_value("theme", "light");
    let state = ThemeState::restore(&store, "theme");
    assert_eq!(state.mode(), Theme::Light);
    assert_eq!(state.mode().glyph(), "☀");
}

#[test]
fn initial_render_only_for_light() {
    let light = ThemeState::restore(&MemoryStore::with_value("theme", "light"), "theme");
    assert_eq!(light.initial_render(), Some(Theme::Light));

    let stored_dark = ThemeState::restore(&MemoryStore::with_value("theme", "dark"), "theme");
    assert_eq!(stored_dark.initial_render(), None);

    let unset = ThemeState::restore(&MemoryStore::new(), "theme");
    assert_eq!(unset.initial_render(), None);
}

#[test]
fn restore_ignores_garbage_preference() {
    let store = MemoryStore::with_value("theme", "sepia");
    assert_eq!(ThemeState::restore(&store, "theme").mode(), Theme::Dark);
}

#[test]
fn persisted_value_tracks_last_applied_mode() {
    let store = MemoryStore::new();
    let mut state = ThemeState::restore(&store, "theme");
    for _ in 0..5 {
        let applied = state.toggle(&store).unwrap();
        assert_eq!(applied, state.mode());
        assert_eq!(store.load("theme").as_deref(), Some(applied.as_str()));
    }
}

#[test]
fn reload_after_toggle_to_light_restores_light() {
    let store = MemoryStore::new();
    let mut state = ThemeState::restore(&store, "theme");
    assert_eq!(state.toggle(&store).unwrap(), Theme::Light);

    let reloaded = ThemeState::restore(&store, "theme");
    assert_eq!(reloaded.mode(), Theme::Light);
    assert_eq!(reloaded.mode().glyph(), "☀");
}

#[test]
fn toggle_flips_even_when_save_fails() {
    let mut state = ThemeState::restore(&FailingStore, "theme");
    let err = state.toggle(&FailingStore).unwrap_err();
    assert!(matches!(err, UiError::StorageUnavailable));
    assert_eq!(state.mode(), Theme::Light);
}
