//! The single portfolio page.

use leptos::prelude::*;

use crate::components::custom_cursor::CustomCursor;
use crate::components::hero::Hero;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::PROFILE;
use crate::state::ui::UiState;

/// Composes the cursor, theme toggle, and hero over a theme-colored backdrop.
#[component]
pub fn HomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let page_style = move || {
        let p = ui.get().palette();
        format!("background-color: {}; color: {};", p.bg, p.text)
    };

    view! {
        <div class="page" style=page_style>
            <Show when=move || ui.with(UiState::mounts_cursor)>
                <CustomCursor/>
            </Show>
            <ThemeToggle/>
            <main class="page__main">
                <Hero profile=PROFILE/>
            </main>
        </div>
    }
}
