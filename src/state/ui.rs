//! Owned view state shared through Leptos context.
//!
//! DESIGN
//! ======
//! Theme and device capability change rarely and drive whole-page styling, so
//! they live together here. Pointer coordinates change on every mouse move and
//! are kept in their own signal owned by the cursor component, so cursor
//! motion never re-runs palette-dependent views.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::pointer::DeviceCapability;
use crate::state::theme::{Palette, ThemePreference};

/// UI state for theme and device capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemePreference,
    pub device: DeviceCapability,
}

impl UiState {
    #[must_use]
    pub fn new(theme: ThemePreference, device: DeviceCapability) -> Self {
        Self { theme, device }
    }

    #[must_use]
    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Whether the page mounts the custom cursor. Touch devices never mount
    /// it, so they never subscribe to pointer moves.
    #[must_use]
    pub fn mounts_cursor(&self) -> bool {
        self.device.tracks_pointer()
    }

    /// Apply the toggle transition and return the new theme.
    pub fn toggle_theme(&mut self) -> ThemePreference {
        self.theme = self.theme.toggle();
        self.theme
    }
}
