//! In-memory document, storage, and color-scheme fakes for native tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Error, Result};
use crate::util::dark_mode::{ColorSchemeSignal, PreferenceStore};
use crate::util::head::{DocumentSurface, HeadSlot};

/// Document model keyed by slot, tracking how many elements were created.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    pub slots: BTreeMap<HeadSlot, String>,
    pub root_classes: BTreeSet<String>,
    pub created: usize,
    /// Slots that reject writes, to exercise failure isolation.
    pub broken: BTreeSet<HeadSlot>,
    pub root_missing: bool,
}

impl MemoryDocument {
    pub fn get(&self, slot: &HeadSlot) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn has_root_class(&self, class: &str) -> bool {
        self.root_classes.contains(class)
    }
}

impl DocumentSurface for MemoryDocument {
    fn upsert(&mut self, slot: &HeadSlot, value: &str) -> Result<()> {
        if self.broken.contains(slot) {
            return Err(Error::Dom(format!("{} is read-only", slot.selector())));
        }
        if self.slots.insert(slot.clone(), value.to_owned()).is_none() && slot.element().is_some() {
            self.created += 1;
        }
        Ok(())
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()> {
        if self.root_missing {
            return Err(Error::NoRootElement);
        }
        if present {
            self.root_classes.insert(class.to_owned());
        } else {
            self.root_classes.remove(class);
        }
        Ok(())
    }
}

/// Key-value store; `None` simulates storage that is unavailable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    pub items: Option<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self { items: Some(BTreeMap::new()) }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::empty();
        store
            .items
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        Self { items: None }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.as_ref()?.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let items = self.items.as_ref().ok_or(Error::StorageUnavailable)?;
        Ok(items.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        let items = self.items.as_mut().ok_or(Error::StorageUnavailable)?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Fixed OS color-scheme answer; `None` simulates a failing media query.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedScheme(pub Option<bool>);

impl ColorSchemeSignal for FixedScheme {
    fn prefers_dark(&self) -> Result<bool> {
        self.0.ok_or(Error::MediaQueryUnavailable)
    }
}
