//! Round profile photo with a neutral placeholder when the image fails.

use leptos::prelude::*;

use crate::config::Profile;

#[component]
pub fn ProfileImage(profile: Profile) -> impl IntoView {
    let failed = RwSignal::new(false);

    view! {
        <div class="profile-image">
            <Show
                when=move || !failed.get()
                fallback=move || {
                    view! {
                        <div
                            class="profile-image__fallback"
                            role="img"
                            aria-label=profile.title()
                        ></div>
                    }
                }
            >
                <img
                    class="profile-image__img"
                    src=profile.image
                    alt=profile.title()
                    on:error=move |_| {
                        log::warn!("profile image failed to load: {}", profile.image);
                        failed.set(true);
                    }
                />
            </Show>
        </div>
    }
}
