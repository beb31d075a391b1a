//! Fixed light/dark toggle button.
//!
//! The button only flips `UiState::theme`; persistence, the root class, and the
//! `theme-color` meta are applied by the theme effect in `app`. It stays
//! visible on touch devices too.

use leptos::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::components::reveal::reveal_style;
use crate::state::ui::UiState;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let style = move || {
        let palette = ui.get().palette();
        format!(
            "background-color: {}; color: {}; {}",
            palette.card_bg,
            palette.text,
            reveal_style(200, 500)
        )
    };

    view! {
        <button
            class="theme-toggle fade-in"
            style=style
            on:click=move |_| {
                ui.update(|u| {
                    u.toggle_theme();
                });
            }
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
        >
            <Show when=move || ui.get().dark_mode() fallback=|| view! { <MoonIcon/> }>
                <SunIcon/>
            </Show>
        </button>
    }
}
