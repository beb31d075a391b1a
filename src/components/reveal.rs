//! Staggered fade-and-rise entrance animation wrapper.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::prelude::*;

/// Default entrance duration.
pub const REVEAL_MS: u32 = 800;
/// Delay added per hero element, in order of appearance.
pub const STAGGER_MS: u32 = 100;

/// Inline style driving the `reveal` keyframes.
#[must_use]
pub fn reveal_style(delay_ms: u32, duration_ms: u32) -> String {
    format!("animation-duration: {duration_ms}ms; animation-delay: {delay_ms}ms;")
}

/// Delay for the `index`-th staggered element (1-based, matching visual order).
#[must_use]
pub fn stagger_delay(index: u32) -> u32 {
    index * STAGGER_MS
}

/// Wraps children in a block that fades in and rises 10px on mount.
#[component]
pub fn Reveal(
    /// Position in the entrance sequence.
    step: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("reveal {class}") style=reveal_style(stagger_delay(step), REVEAL_MS)>
            {children()}
        </div>
    }
}
