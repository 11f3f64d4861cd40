//! Theme switcher bound to the page: localStorage for persistence, the
//! `<html>` element for the marker attribute, `matchMedia` for the OS hint.

use crate::constants::{PREFERS_LIGHT_QUERY, THEME_TOGGLE_ID, TOGGLE_SPIN_MS, TOGGLE_SPIN_TRANSFORM};
use crate::dom;
use crate::timer::Debounce;
use anyhow::anyhow;
use linktree_core::{PreferenceStore, ThemeRoot, ThemeSwitcher};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `window.localStorage`, or nothing when storage is blocked.
pub struct LocalStorage(Option<web::Storage>);

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| match w.local_storage() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[theme] localStorage unavailable: {:?}", e);
                None
            }
        });
        Self(storage)
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.0.as_ref()?.get_item(key).ok().flatten()
    }

    fn save(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.0 {
            if let Err(e) = storage.set_item(key, value) {
                log::warn!("[theme] could not store {}={}: {:?}", key, value, e);
            }
        }
    }
}

/// The document's root element.
pub struct DocumentRoot(web::Element);

impl ThemeRoot for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        _ = self.0.set_attribute(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        _ = self.0.remove_attribute(name);
    }
}

type PageThemeSwitcher = ThemeSwitcher<LocalStorage, DocumentRoot>;

fn prefers_light_query() -> Option<web::MediaQueryList> {
    web::window()?.match_media(PREFERS_LIGHT_QUERY).ok().flatten()
}

pub fn wire(document: &web::Document) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow!("document has no root element"))?;
    let switcher = Rc::new(RefCell::new(PageThemeSwitcher::new(
        LocalStorage::open(),
        DocumentRoot(root),
    )));

    let query = prefers_light_query();
    let os_prefers_light = query.as_ref().map(|q| q.matches()).unwrap_or(false);
    switcher.borrow_mut().init(os_prefers_light);

    wire_toggle(document, switcher.clone());

    if let Some(query) = query {
        dom::listen(&query, "change", move |ev: web::MediaQueryListEvent| {
            switcher.borrow_mut().on_os_preference_change(ev.matches());
        });
    }
    Ok(())
}

fn wire_toggle(document: &web::Document, switcher: Rc<RefCell<PageThemeSwitcher>>) {
    let Some(toggle) = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::info!("[theme] no #{}; toggle disabled", THEME_TOGGLE_ID);
        return;
    };

    let spin = RefCell::new(Debounce::new(TOGGLE_SPIN_MS));
    let control = toggle.clone();
    dom::listen(&toggle, "click", move |_: web::Event| {
        switcher.borrow_mut().toggle();

        _ = control.style().set_property("transform", TOGGLE_SPIN_TRANSFORM);
        let control = control.clone();
        spin.borrow_mut().schedule(move || {
            _ = control.style().set_property("transform", "");
        });
    });
}
