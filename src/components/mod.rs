//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the hero content and page chrome, reading the shared
//! `UiState` from Leptos context.

pub mod custom_cursor;
pub mod hero;
pub mod icons;
pub mod profile_image;
pub mod reveal;
pub mod social_link;
pub mod theme_toggle;
