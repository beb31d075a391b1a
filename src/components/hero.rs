//! Hero section: photo, greeting, role, bio, availability, and contact links.

use leptos::prelude::*;

use crate::components::profile_image::ProfileImage;
use crate::components::reveal::Reveal;
use crate::components::social_link::{SocialLink, profile_links};
use crate::config::Profile;
use crate::state::ui::UiState;

#[component]
fn AvailabilityBadge() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let style = move || {
        let p = ui.get().palette();
        format!(
            "background-color: {}; border-color: {}; box-shadow: {};",
            p.badge_bg, p.badge_border, p.badge_shadow
        )
    };

    view! {
        <div class="badge" style=style>
            <span class="badge__pulse"></span>
            <span class="badge__label">"Open to opportunities"</span>
        </div>
    }
}

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let text = move || format!("color: {};", ui.get().palette().text);
    let secondary = move || format!("color: {};", ui.get().palette().text_secondary);

    view! {
        <section class="hero">
            <div class="hero__inner">
                <Reveal step=1 class="hero__image">
                    <ProfileImage profile=profile/>
                </Reveal>
                <Reveal step=2>
                    <h1 class="hero__title" style=text>{format!("Hello, I'm {}.", profile.short_name)}</h1>
                </Reveal>
                <Reveal step=3 class="hero__text">
                    <p class="hero__role" style=text>{profile.role_line()}</p>
                </Reveal>
                <Reveal step=4 class="hero__text">
                    <p class="hero__bio" style=secondary>
                        {profile.bio}
                        <br/>
                        {format!("Currently, at {}", profile.employer)}
                    </p>
                </Reveal>
                <Show when=move || profile.available>
                    <Reveal step=5 class="hero__badge">
                        <AvailabilityBadge/>
                    </Reveal>
                </Show>
                <Reveal step=6>
                    <h2 class="hero__connect" style=text>"Let's connect"</h2>
                </Reveal>
                <Reveal step=7 class="hero__links">
                    {profile_links(&profile)
                        .into_iter()
                        .map(|link| view! { <SocialLink link=link/> })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}
