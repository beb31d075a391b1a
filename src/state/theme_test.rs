use super::*;

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_flips_between_states() {
    assert_eq!(ThemePreference::Light.toggle(), ThemePreference::Dark);
    assert_eq!(ThemePreference::Dark.toggle(), ThemePreference::Light);
}

#[test]
fn toggle_is_an_involution() {
    for theme in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(theme.toggle().toggle(), theme);
    }
}

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
    assert!(!ThemePreference::default().is_dark());
}

// =============================================================
// resolve
// =============================================================

#[test]
fn stored_choice_wins_over_os_signal() {
    assert_eq!(
        ThemePreference::resolve(Some(ThemePreference::Dark), Some(false)),
        ThemePreference::Dark
    );
    assert_eq!(
        ThemePreference::resolve(Some(ThemePreference::Light), Some(true)),
        ThemePreference::Light
    );
}

#[test]
fn os_signal_applies_without_stored_choice() {
    assert_eq!(ThemePreference::resolve(None, Some(true)), ThemePreference::Dark);
    assert_eq!(ThemePreference::resolve(None, Some(false)), ThemePreference::Light);
}

#[test]
fn both_absent_resolves_light() {
    assert_eq!(ThemePreference::resolve(None, None), ThemePreference::Light);
}

// =============================================================
// string form
// =============================================================

#[test]
fn parses_stored_strings() {
    assert_eq!("dark".parse::<ThemePreference>().ok(), Some(ThemePreference::Dark));
    assert_eq!("light".parse::<ThemePreference>().ok(), Some(ThemePreference::Light));
}

#[test]
fn parsing_is_exact() {
    assert!(" dark ".parse::<ThemePreference>().is_err());
    assert!("Dark".parse::<ThemePreference>().is_err());
}

#[test]
fn rejects_unknown_strings() {
    let err = "true".parse::<ThemePreference>();
    assert!(matches!(err, Err(Error::UnknownTheme(ref v)) if v == "true"));
}

#[test]
fn display_matches_stored_form() {
    assert_eq!(ThemePreference::Dark.to_string(), "dark");
    assert_eq!(ThemePreference::Light.to_string(), "light");
}

// =============================================================
// palette
// =============================================================

#[test]
fn palette_follows_theme() {
    assert_eq!(ThemePreference::Light.palette(), Palette::LIGHT);
    assert_eq!(ThemePreference::Dark.palette(), Palette::DARK);
}

#[test]
fn palettes_invert_text_and_background() {
    assert_eq!(Palette::LIGHT.bg, "#f5f5f5");
    assert_eq!(Palette::LIGHT.text, "#1a1a1a");
    assert_eq!(Palette::DARK.bg, "#1a1a1a");
    assert_eq!(Palette::DARK.text, "#f5f5f5");
    assert_eq!(Palette::LIGHT.tooltip_text, Palette::DARK.tooltip);
}
