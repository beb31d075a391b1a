//! Outbound contact links with hover/focus tooltips.
//!
//! SYSTEM CONTEXT
//! ==============
//! External links open in a new browsing context with `noopener noreferrer`
//! so the target page gets neither `window.opener` nor a referrer. `mailto:`
//! links stay in the current context.

#[cfg(test)]
#[path = "social_link_test.rs"]
mod social_link_test;

use leptos::prelude::*;

use crate::components::icons::{SocialGlyph, SocialIcon};
use crate::config::Profile;
use crate::state::ui::UiState;

/// Everything needed to render one outbound link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLinkSpec {
    pub href: String,
    pub aria_label: String,
    pub tooltip: String,
    pub icon: SocialIcon,
    pub external: bool,
}

impl SocialLinkSpec {
    #[must_use]
    pub fn target(&self) -> Option<&'static str> {
        self.external.then_some("_blank")
    }

    #[must_use]
    pub fn rel(&self) -> Option<&'static str> {
        self.external.then_some("noopener noreferrer")
    }
}

/// Email, professional network, and portfolio gallery links for a profile.
pub fn profile_links(profile: &Profile) -> Vec<SocialLinkSpec> {
    let email_label = format!("Email {}", profile.short_name);
    vec![
        SocialLinkSpec {
            href: profile.mailto(),
            aria_label: email_label.clone(),
            tooltip: email_label,
            icon: SocialIcon::Email,
            external: false,
        },
        SocialLinkSpec {
            href: profile.linkedin_url.to_owned(),
            aria_label: "Connect on LinkedIn".to_owned(),
            tooltip: "Connect on LinkedIn".to_owned(),
            icon: SocialIcon::LinkedIn,
            external: true,
        },
        SocialLinkSpec {
            href: profile.behance_url.to_owned(),
            aria_label: "View work on Behance".to_owned(),
            tooltip: "See work samples".to_owned(),
            icon: SocialIcon::Behance,
            external: true,
        },
    ]
}

#[component]
pub fn SocialLink(link: SocialLinkSpec) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let palette = move || ui.get().palette();
    let target = link.target();
    let rel = link.rel();

    view! {
        <a
            href=link.href
            target=target
            rel=rel
            class="social-link"
            style=move || format!("color: {0}; --ring-color: {0};", palette().text)
            aria-label=link.aria_label
        >
            <SocialGlyph icon=link.icon/>
            <span
                class="social-link__tooltip"
                style=move || {
                    let p = palette();
                    format!("background-color: {}; color: {};", p.tooltip, p.tooltip_text)
                }
            >
                {link.tooltip}
            </span>
            <span
                class="social-link__arrow"
                style=move || format!("border-top-color: {};", palette().tooltip)
            ></span>
        </a>
    }
}
