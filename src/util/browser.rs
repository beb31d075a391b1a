//! `web-sys` implementations of the document, storage, and color-scheme seams.
//!
//! Compiled only with the `csr` feature. Every call returns `Result` so the
//! callers can log and move on.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use crate::error::{Error, Result};
use crate::state::pointer::DeviceCapability;
use crate::util::dark_mode::{ColorSchemeSignal, PreferenceStore};
use crate::util::head::{DocumentSurface, ElementSpec, HeadSlot};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

fn root_element(document: &Document) -> Result<Element> {
    document.document_element().ok_or(Error::NoRootElement)
}

fn find_or_create(document: &Document, slot: &HeadSlot, spec: ElementSpec) -> Result<Element> {
    if let Some(existing) = document.query_selector(&slot.selector())? {
        return Ok(existing);
    }
    let head = document.head().ok_or(Error::NoHead)?;
    let element = document.create_element(spec.tag)?;
    element.set_attribute(spec.key.0, spec.key.1)?;
    head.append_child(&element)?;
    log::debug!("browser: created {}", slot.selector());
    Ok(element)
}

/// The live `window.document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl DocumentSurface for BrowserDocument {
    fn upsert(&mut self, slot: &HeadSlot, value: &str) -> Result<()> {
        let document = document()?;
        match slot {
            HeadSlot::Lang => root_element(&document)?.set_attribute("lang", value)?,
            HeadSlot::Title => document.set_title(value),
            other => {
                let Some(spec) = other.element() else {
                    return Ok(());
                };
                let element = find_or_create(&document, other, spec)?;
                match spec.value_attr {
                    Some(attr) => element.set_attribute(attr, value)?,
                    None => element.set_text_content(Some(value)),
                }
            }
        }
        Ok(())
    }

    fn set_root_class(&mut self, class: &str, present: bool) -> Result<()> {
        let classes = root_element(&document()?)?.class_list();
        if present {
            classes.add_1(class)?;
        } else {
            classes.remove_1(class)?;
        }
        Ok(())
    }
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

fn storage() -> Result<web_sys::Storage> {
    window()?.local_storage()?.ok_or(Error::StorageUnavailable)
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(storage()?.get_item(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        storage()?.set_item(key, value)?;
        Ok(())
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserColorScheme;

impl ColorSchemeSignal for BrowserColorScheme {
    fn prefers_dark(&self) -> Result<bool> {
        let query = window()?
            .match_media(DARK_SCHEME_QUERY)?
            .ok_or(Error::MediaQueryUnavailable)?;
        Ok(query.matches())
    }
}

/// Read touch capability from `ontouchstart in window` and
/// `navigator.maxTouchPoints`.
pub fn detect_device() -> DeviceCapability {
    let window = match window() {
        Ok(window) => window,
        Err(e) => {
            log::debug!("browser: touch detection skipped: {e}");
            return DeviceCapability::default();
        }
    };
    let has_handler = js_sys::Reflect::has(&window, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    let device = DeviceCapability::from_signals(has_handler, window.navigator().max_touch_points());
    log::debug!("browser: touch device = {}", device.touch);
    device
}

/// Milliseconds since the epoch, for frame timing.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
