//! Browser bindings: storage, window navigation, event wiring, entry point.
//!
//! Only compiled with the `hydrate` feature. Everything here translates
//! between `web_sys` objects and the browser-free feature modules; no
//! behavior rule lives in this module.

mod storage;
mod view;
mod wire;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

pub use storage::LocalStorage;
pub use view::{BrowserNavigator, FormView};

use crate::config::SiteConfig;
use crate::consts::CONFIG_SCRIPT_ID;
use crate::controller::ControllerCore;
use crate::error::ControllerError;

/// Initialise once the page structure is ready.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::warn!("console logger not installed: {e}");
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if is_loading(&document) {
        let ready_window = window.clone();
        let ready_document = document.clone();
        let on_ready: Closure<dyn FnMut()> = Closure::once(move || init(&ready_window, &ready_document));
        if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            log::error!("could not wait for DOMContentLoaded: {e:?}");
            return;
        }
        on_ready.forget();
    } else {
        init(&window, &document);
    }
}

fn is_loading(document: &Document) -> bool {
    document.ready_state() == "loading"
}

/// Read the optional JSON config block embedded in the page.
pub fn load_config(document: &Document) -> SiteConfig {
    let raw = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .and_then(|script| script.text_content());
    SiteConfig::from_optional_json(raw.as_deref())
}

fn init(window: &Window, document: &Document) {
    let config = load_config(document);
    let messaging = config.messaging.clone();
    let core = Rc::new(RefCell::new(ControllerCore::new(config)));
    let store = Rc::new(LocalStorage::open());

    guard("theme toggle", wire::install_theme(document, &core, store));
    if let Err(e) = wire::install_lazy_images(document) {
        log::debug!("lazy image hints skipped: {e}");
    }
    guard("anchor scrolling", wire::install_anchor_scrolling(document));
    guard("category filter", wire::install_category_filter(document, &core));
    guard("scroll animations", wire::install_reveal(document, &core));
    guard("navbar", wire::install_navbar(window, document, &core));
    guard("messaging link", wire::expose_open_whatsapp(window, messaging));
    guard("enquiry form", wire::install_enquiry_form(document, &core));
    log::info!("site controller ready");
}

/// Log a feature's setup failure without affecting the others.
fn guard(feature: &str, result: Result<(), ControllerError>) {
    match result {
        Ok(()) => {}
        Err(ControllerError::MissingElement(what)) => log::debug!("{feature} inactive: no {what}"),
        Err(e) => log::error!("error setting up {feature}: {e}"),
    }
}
