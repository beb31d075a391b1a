//! Light/dark theme state machine and its color palette.
//!
//! DESIGN
//! ======
//! `ThemePreference` is the single source of truth for the active theme.
//! Everything else (stored string, root class, `theme-color` meta, palette)
//! is a projection computed from it and never read back.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Marker class toggled on the `<html>` element while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Active color theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Flip to the other theme. Total and self-inverse.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Stored string form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Resolve the initial theme.
    ///
    /// An explicit stored choice wins, then the OS dark-scheme signal, then
    /// light. Unavailable signals are passed as `None`.
    #[must_use]
    pub fn resolve(stored: Option<Self>, os_prefers_dark: Option<bool>) -> Self {
        match (stored, os_prefers_dark) {
            (Some(theme), _) => theme,
            (None, Some(true)) => Self::Dark,
            (None, _) => Self::Light,
        }
    }

    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(Error::UnknownTheme(other.to_owned())),
        }
    }
}

/// Theme-dependent colors consumed by the view layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub card_bg: &'static str,
    pub border: &'static str,
    pub cursor: &'static str,
    pub tooltip: &'static str,
    pub tooltip_text: &'static str,
    pub badge_bg: &'static str,
    pub badge_border: &'static str,
    pub badge_shadow: &'static str,
}

impl Palette {
    pub const LIGHT: Self = Self {
        bg: "#f5f5f5",
        text: "#1a1a1a",
        text_secondary: "#3a3a3a",
        text_muted: "#999999",
        accent: "#2d2d2d",
        card_bg: "#ffffff",
        border: "#e5e5e5",
        cursor: "#2d2d2d",
        tooltip: "#2d2d2d",
        tooltip_text: "#f5f5f5",
        badge_bg: "#10b981",
        badge_border: "#059669",
        badge_shadow: "0 2px 8px rgba(0, 0, 0, 0.15), inset 0 1px 0 rgba(255, 255, 255, 0.2)",
    };

    pub const DARK: Self = Self {
        bg: "#1a1a1a",
        text: "#f5f5f5",
        text_secondary: "#b0b0b0",
        text_muted: "#888888",
        accent: "#f5f5f5",
        card_bg: "#242424",
        border: "#333333",
        cursor: "#f5f5f5",
        tooltip: "#f5f5f5",
        tooltip_text: "#1a1a1a",
        badge_bg: "#10b981",
        badge_border: "#0ea672",
        badge_shadow: "0 2px 8px rgba(0, 0, 0, 0.3), inset 0 1px 0 rgba(255, 255, 255, 0.1)",
    };
}
