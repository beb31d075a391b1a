//! Idempotent reconciliation of document `<head>` entries.
//!
//! ARCHITECTURE
//! ============
//! Every managed piece of metadata is a `HeadSlot` with a stable selector.
//! `reconcile` walks a list of `(slot, value)` entries in one pass and asks a
//! `DocumentSurface` to upsert each: update the matching element in place, or
//! create it when absent. Running the same entries twice leaves the document
//! exactly as one run did.

#[cfg(test)]
#[path = "head_test.rs"]
mod head_test;

use crate::error::Result;

/// One managed metadata location in the document.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadSlot {
    /// `lang` attribute on the `<html>` element.
    Lang,
    /// Document `<title>`.
    Title,
    /// `<link rel="...">`, value goes to `href`.
    Link(&'static str),
    /// `<meta name="...">`, value goes to `content`.
    MetaName(&'static str),
    /// `<meta property="...">`, value goes to `content`.
    MetaProperty(&'static str),
    /// `<script type="application/ld+json">`, value is the script body.
    JsonLd,
}

/// How a head-element slot is located, created, and written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: &'static str,
    /// Attribute that identifies the element, with its expected value.
    pub key: (&'static str, &'static str),
    /// Attribute receiving the value; `None` writes text content.
    pub value_attr: Option<&'static str>,
}

pub const JSON_LD_TYPE: &str = "application/ld+json";

impl HeadSlot {
    /// Element recipe for slots stored as `<head>` children.
    ///
    /// `Lang` and `Title` are document properties and have no recipe.
    #[must_use]
    pub fn element(&self) -> Option<ElementSpec> {
        match *self {
            Self::Lang | Self::Title => None,
            Self::Link(rel) => Some(ElementSpec { tag: "link", key: ("rel", rel), value_attr: Some("href") }),
            Self::MetaName(name) => Some(ElementSpec { tag: "meta", key: ("name", name), value_attr: Some("content") }),
            Self::MetaProperty(property) => Some(ElementSpec {
                tag: "meta",
                key: ("property", property),
                value_attr: Some("content"),
            }),
            Self::JsonLd => Some(ElementSpec { tag: "script", key: ("type", JSON_LD_TYPE), value_attr: None }),
        }
    }

    /// Stable CSS selector for the slot.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::Lang => "html".to_owned(),
            Self::Title => "title".to_owned(),
            other => match other.element() {
                Some(spec) => format!("{}[{}=\"{}\"]", spec.tag, spec.key.0, spec.key.1),
                None => String::new(),
            },
        }
    }
}

/// Desired value for one slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadEntry {
    pub slot: HeadSlot,
    pub value: String,
}

impl HeadEntry {
    pub fn new(slot: HeadSlot, value: impl Into<String>) -> Self {
        Self { slot, value: value.into() }
    }
}

/// The document operations the metadata and theme effects need.
pub trait DocumentSurface {
    /// Write `value` into `slot`, creating the backing element if missing.
    fn upsert(&mut self, slot: &HeadSlot, value: &str) -> Result<()>;

    /// Add (`present == true`) or remove a class on the root element.
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()>;
}

/// Apply every entry in one pass. Returns the number of slots written.
///
/// A failing slot is logged and skipped; the rest are still applied.
pub fn reconcile<D: DocumentSurface + ?Sized>(doc: &mut D, entries: &[HeadEntry]) -> usize {
    let mut applied = 0;
    for entry in entries {
        match doc.upsert(&entry.slot, &entry.value) {
            Ok(()) => applied += 1,
            Err(e) => log::warn!("head: failed to upsert {}: {e}", entry.slot.selector()),
        }
    }
    log::debug!("head: reconciled {applied}/{} slots", entries.len());
    applied
}
