//! Theme preference initialization and the per-change theme effects.
//!
//! Reads the user's preference from `localStorage` (falling back to the OS
//! `prefers-color-scheme` signal) and, on every theme value, persists it,
//! toggles the `.dark` class on `<html>`, and updates `meta[name=theme-color]`.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage or media-query failures resolve to the
//! light theme and are logged, never surfaced, so rendering is never blocked.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::state::theme::{DARK_CLASS, ThemePreference};
use crate::util::head::{DocumentSurface, HeadSlot};

/// Client-local key-value storage holding the theme string.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&mut self, key: &str, value: &str) -> Result<()>;
}

/// OS-level dark color scheme signal.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> Result<bool>;
}

/// Read the stored theme, if any.
///
/// Only an absent key counts as no stored choice. Any value other than the
/// exact `"light"`/`"dark"` strings resolves to light.
pub fn stored_preference<S: PreferenceStore + ?Sized>(store: &S, config: &SiteConfig) -> Result<Option<ThemePreference>> {
    let Some(raw) = store.load(config.storage_key)? else {
        return Ok(None);
    };
    match raw.parse::<ThemePreference>() {
        Ok(theme) => Ok(Some(theme)),
        Err(Error::UnknownTheme(value)) => {
            log::debug!("dark_mode: unrecognized stored value {value:?}, using light");
            Ok(Some(ThemePreference::Light))
        }
        Err(e) => Err(e),
    }
}

/// Resolve the initial theme: stored choice, then OS signal, then light.
pub fn read_preference<S, C>(store: &S, scheme: &C, config: &SiteConfig) -> ThemePreference
where
    S: PreferenceStore + ?Sized,
    C: ColorSchemeSignal + ?Sized,
{
    let stored = match stored_preference(store, config) {
        Ok(stored) => stored,
        Err(e) => {
            log::debug!("dark_mode: stored preference unavailable: {e}");
            None
        }
    };
    if let Some(theme) = stored {
        return theme;
    }
    let os_dark = match scheme.prefers_dark() {
        Ok(dark) => Some(dark),
        Err(e) => {
            log::debug!("dark_mode: color scheme signal unavailable: {e}");
            None
        }
    };
    ThemePreference::resolve(None, os_dark)
}

/// `theme-color` meta value for a theme.
#[must_use]
pub fn theme_color(theme: ThemePreference, config: &SiteConfig) -> &'static str {
    match theme {
        ThemePreference::Light => config.theme_color_light,
        ThemePreference::Dark => config.theme_color_dark,
    }
}

/// Persist the theme string under the configured key.
pub fn persist<S: PreferenceStore + ?Sized>(theme: ThemePreference, store: &mut S, config: &SiteConfig) -> Result<()> {
    store.save(config.storage_key, theme.as_str())
}

/// Add or remove the root marker class.
pub fn sync_root_class<D: DocumentSurface + ?Sized>(theme: ThemePreference, doc: &mut D) -> Result<()> {
    doc.set_root_class(DARK_CLASS, theme.is_dark())
}

/// Upsert the `theme-color` meta entry.
pub fn sync_theme_color<D: DocumentSurface + ?Sized>(theme: ThemePreference, doc: &mut D, config: &SiteConfig) -> Result<()> {
    doc.upsert(&HeadSlot::MetaName("theme-color"), theme_color(theme, config))
}

/// Run all three theme effects for `theme`.
///
/// Each effect runs regardless of the others. Failures are logged and
/// returned.
pub fn apply<D, S>(theme: ThemePreference, doc: &mut D, store: &mut S, config: &SiteConfig) -> Vec<Error>
where
    D: DocumentSurface + ?Sized,
    S: PreferenceStore + ?Sized,
{
    let results = [
        ("persist", persist(theme, store, config)),
        ("root class", sync_root_class(theme, doc)),
        ("theme-color", sync_theme_color(theme, doc, config)),
    ];
    let mut errors = Vec::new();
    for (effect, result) in results {
        if let Err(e) = result {
            log::warn!("dark_mode: {effect} effect failed for {theme}: {e}");
            errors.push(e);
        }
    }
    errors
}

/// Resolve the initial theme from the browser's storage and media query.
pub fn read_browser_preference(config: &SiteConfig) -> ThemePreference {
    #[cfg(feature = "csr")]
    {
        use crate::util::browser::{BrowserColorScheme, LocalStorage};
        read_preference(&LocalStorage, &BrowserColorScheme, config)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _unused = config;
        ThemePreference::default()
    }
}

/// Run the theme effects against the live document and `localStorage`.
pub fn apply_to_browser(theme: ThemePreference, config: &SiteConfig) {
    #[cfg(feature = "csr")]
    {
        use crate::util::browser::{BrowserDocument, LocalStorage};
        let errors = apply(theme, &mut BrowserDocument, &mut LocalStorage, config);
        if errors.is_empty() {
            log::debug!("dark_mode: applied {theme}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _unused = (theme, config);
    }
}
