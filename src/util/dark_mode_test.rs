use super::*;
use crate::config::SITE;
use crate::state::theme::Palette;
use crate::state::ui::UiState;
use crate::util::memory::{FixedScheme, MemoryDocument, MemoryStore};

fn theme_color_of(doc: &MemoryDocument) -> Option<&str> {
    doc.get(&HeadSlot::MetaName("theme-color"))
}

// =============================================================
// read_preference
// =============================================================

#[test]
fn stored_dark_wins_over_light_os_signal() {
    let store = MemoryStore::with("theme", "dark");
    assert_eq!(read_preference(&store, &FixedScheme(Some(false)), &SITE), ThemePreference::Dark);
}

#[test]
fn stored_light_wins_over_dark_os_signal() {
    let store = MemoryStore::with("theme", "light");
    assert_eq!(read_preference(&store, &FixedScheme(Some(true)), &SITE), ThemePreference::Light);
}

#[test]
fn os_dark_applies_when_nothing_stored() {
    let store = MemoryStore::empty();
    assert_eq!(read_preference(&store, &FixedScheme(Some(true)), &SITE), ThemePreference::Dark);
}

#[test]
fn both_absent_defaults_to_light() {
    let store = MemoryStore::empty();
    assert_eq!(read_preference(&store, &FixedScheme(Some(false)), &SITE), ThemePreference::Light);
}

#[test]
fn unavailable_signals_default_to_light() {
    let store = MemoryStore::unavailable();
    assert_eq!(read_preference(&store, &FixedScheme(None), &SITE), ThemePreference::Light);
}

#[test]
fn unavailable_storage_still_consults_os_signal() {
    let store = MemoryStore::unavailable();
    assert_eq!(read_preference(&store, &FixedScheme(Some(true)), &SITE), ThemePreference::Dark);
}

#[test]
fn unrecognized_stored_value_resolves_light_over_os_signal() {
    let store = MemoryStore::with("theme", "true");
    assert_eq!(read_preference(&store, &FixedScheme(Some(true)), &SITE), ThemePreference::Light);
    assert!(matches!(stored_preference(&store, &SITE), Ok(Some(ThemePreference::Light))));
}

#[test]
fn padded_stored_value_is_not_trimmed() {
    let store = MemoryStore::with("theme", " dark ");
    assert_eq!(read_preference(&store, &FixedScheme(Some(false)), &SITE), ThemePreference::Light);
    assert_eq!(read_preference(&store, &FixedScheme(Some(true)), &SITE), ThemePreference::Light);
}

#[test]
fn stored_preference_reports_storage_failure() {
    let store = MemoryStore::unavailable();
    assert!(matches!(stored_preference(&store, &SITE), Err(Error::StorageUnavailable)));
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_dark_sets_class_color_and_storage() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::empty();
    let errors = apply(ThemePreference::Dark, &mut doc, &mut store, &SITE);
    assert!(errors.is_empty());
    assert!(doc.has_root_class("dark"));
    assert_eq!(store.get("theme"), Some("dark"));
    assert_eq!(theme_color_of(&doc), Some("#0a0a0a"));
}

#[test]
fn apply_light_clears_class() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::empty();
    apply(ThemePreference::Dark, &mut doc, &mut store, &SITE);
    apply(ThemePreference::Light, &mut doc, &mut store, &SITE);
    assert!(!doc.has_root_class("dark"));
    assert_eq!(store.get("theme"), Some("light"));
    assert_eq!(theme_color_of(&doc), Some("#f5f5f5"));
}

#[test]
fn apply_keeps_projections_consistent_across_toggles() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::empty();
    let mut theme = ThemePreference::Light;
    for _ in 0..6 {
        theme = theme.toggle();
        apply(theme, &mut doc, &mut store, &SITE);
        assert_eq!(doc.has_root_class("dark"), theme.is_dark());
        assert_eq!(store.get("theme"), Some(theme.as_str()));
        assert_eq!(theme_color_of(&doc), Some(theme_color(theme, &SITE)));
    }
    assert_eq!(doc.created, 1);
}

#[test]
fn apply_runs_remaining_effects_when_storage_fails() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::unavailable();
    let errors = apply(ThemePreference::Dark, &mut doc, &mut store, &SITE);
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0], Error::StorageUnavailable));
    assert!(doc.has_root_class("dark"));
    assert_eq!(theme_color_of(&doc), Some("#0a0a0a"));
}

#[test]
fn apply_runs_remaining_effects_when_root_missing() {
    let mut doc = MemoryDocument { root_missing: true, ..MemoryDocument::default() };
    let mut store = MemoryStore::empty();
    let errors = apply(ThemePreference::Dark, &mut doc, &mut store, &SITE);
    assert_eq!(errors.len(), 1);
    assert_eq!(store.get("theme"), Some("dark"));
    assert_eq!(theme_color_of(&doc), Some("#0a0a0a"));
}

// =============================================================
// end to end
// =============================================================

#[test]
fn first_visit_renders_light_then_toggle_goes_dark() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::empty();

    let initial = read_preference(&store, &FixedScheme(Some(false)), &SITE);
    let mut ui = UiState { theme: initial, ..UiState::default() };
    apply(ui.theme, &mut doc, &mut store, &SITE);

    assert_eq!(ui.palette(), Palette::LIGHT);
    assert_eq!(theme_color_of(&doc), Some("#f5f5f5"));
    assert!(!doc.has_root_class("dark"));

    let next = ui.toggle_theme();
    apply(next, &mut doc, &mut store, &SITE);

    assert_eq!(theme_color_of(&doc), Some("#0a0a0a"));
    assert_eq!(store.get("theme"), Some("dark"));
    assert!(doc.has_root_class("dark"));
    assert_eq!(ui.palette(), Palette::DARK);
}

#[test]
fn reload_after_toggle_restores_dark() {
    let mut doc = MemoryDocument::default();
    let mut store = MemoryStore::empty();
    apply(ThemePreference::Dark, &mut doc, &mut store, &SITE);
    assert_eq!(read_preference(&store, &FixedScheme(Some(false)), &SITE), ThemePreference::Dark);
}

// =============================================================
// browser wrappers outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_wrappers_are_inert_natively() {
    assert_eq!(read_browser_preference(&SITE), ThemePreference::Light);
    apply_to_browser(ThemePreference::Dark, &SITE);
}
