//! Pointer tracking and device capability for the decorative cursor.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// Off-screen coordinate used before the first pointer move.
pub const OFFSCREEN: f64 = -100.0;

/// Whether the current device reports touch input.
///
/// Computed once at load and never re-read during the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceCapability {
    pub touch: bool,
}

impl DeviceCapability {
    /// Derive capability from the platform signals: an `ontouchstart`
    /// handler slot on `window`, or a positive `navigator.maxTouchPoints`.
    #[must_use]
    pub fn from_signals(has_touch_handler: bool, max_touch_points: i32) -> Self {
        Self { touch: has_touch_handler || max_touch_points > 0 }
    }

    /// Whether a pointer-move subscription should exist at all.
    #[must_use]
    pub fn tracks_pointer(self) -> bool {
        !self.touch
    }
}

/// Last known viewport pointer position plus the visibility latch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    /// Flips to `true` on the first move and stays there.
    pub visible: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self { x: OFFSCREEN, y: OFFSCREEN, visible: false }
    }
}

impl PointerState {
    /// Record a pointer move. Returns `true` when this move revealed the cursor.
    pub fn record_move(&mut self, x: f64, y: f64) -> bool {
        self.x = x;
        self.y = y;
        let revealed = !self.visible;
        self.visible = true;
        revealed
    }

    /// Whether the cursor elements should be rendered on this device.
    #[must_use]
    pub fn cursor_shown(&self, device: DeviceCapability) -> bool {
        device.tracks_pointer() && self.visible
    }
}
