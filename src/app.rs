//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Stylesheet, provide_meta_context};

use crate::config::{PROFILE, SITE};
use crate::pages::home::HomePage;
use crate::state::ui::UiState;
use crate::util::{dark_mode, metadata};

const FONTS_URL: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@400;600&family=Merriweather:wght@400&display=swap";

/// Seed the view state from the stored preference, OS signal, and device.
fn initial_ui_state() -> UiState {
    #[cfg(feature = "csr")]
    {
        UiState::new(
            dark_mode::read_browser_preference(&SITE),
            crate::util::browser::detect_device(),
        )
    }
    #[cfg(not(feature = "csr"))]
    {
        UiState::default()
    }
}

/// Root application component.
///
/// Owns the `UiState` signal and the two document-level effects: a one-shot
/// metadata sync, and the theme projection that re-runs on every theme value.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(initial_ui_state());
    provide_context(ui);

    Effect::new(move || metadata::sync_browser(&PROFILE, &SITE));

    let theme = Memo::new(move |_| ui.with(|u| u.theme));
    Effect::new(move || dark_mode::apply_to_browser(theme.get(), &SITE));

    view! {
        <Link rel="preconnect" href="https://fonts.googleapis.com"/>
        <Link rel="preconnect" href="https://fonts.gstatic.com" crossorigin="anonymous"/>
        <Stylesheet id="fonts" href=FONTS_URL/>
        <HomePage/>
    }
}
