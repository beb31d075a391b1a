//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site has one page; it owns layout and delegates rendering details to
//! `components`.

pub mod home;
