//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Decision logic is written against the seam traits in `head` and
//! `dark_mode`; `browser` supplies the `web-sys` implementations.

#[cfg(feature = "csr")]
pub mod browser;
pub mod dark_mode;
pub mod head;
#[cfg(test)]
pub mod memory;
pub mod metadata;
pub mod spring;
