//! Event wiring for each page feature.
//!
//! Every `install_*` function is independent: it returns an error instead of
//! panicking, and the caller logs it and carries on with the next feature.
//! Handlers catch their own failures at the same boundary.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::Abortable;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement,
    HtmlInputElement, HtmlSelectElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use super::storage::LocalStorage;
use super::view::{BrowserNavigator, FormView};
use crate::anchor;
use crate::config::MessagingConfig;
use crate::consts::*;
use crate::controller::ControllerCore;
use crate::deep_link;
use crate::enquiry::{self, Prepared, SubmissionTicket};
use crate::error::ControllerError;
use crate::filter::PanelEffect;
use crate::images::{self, DECODING_ATTR, LOADING_ATTR};
use crate::ports::Navigator;
use crate::reveal::{RevealAction, VisibilityEntry};
use crate::theme::Theme;

pub type SharedCore = Rc<RefCell<ControllerCore>>;

// =============================================================
// Helpers
// =============================================================

fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), ControllerError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, ControllerError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .flat_map(|node| node.dyn_into::<Element>())
        .collect())
}

fn html(element: Element) -> Result<HtmlElement, ControllerError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|el| ControllerError::Dom(format!("<{}> is not an html element", el.tag_name())))
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), ControllerError> {
    element.style().set_property(property, value)?;
    Ok(())
}

fn missing(what: &str) -> ControllerError {
    ControllerError::MissingElement(what.to_owned())
}

// =============================================================
// Theme
// =============================================================

pub fn install_theme(document: &Document, core: &SharedCore, store: Rc<LocalStorage>) -> Result<(), ControllerError> {
    let body = document.body().ok_or_else(|| missing("body"))?;
    let (theme, config) = {
        let mut core = core.borrow_mut();
        (core.load_theme(&*store), core.config.theme.clone())
    };
    apply_theme(&body, &config.light_class, theme)?;

    let toggle = document
        .get_element_by_id(&config.toggle_id)
        .ok_or_else(|| missing(&format!("#{}", config.toggle_id)))?;
    let control = html(toggle.clone())?;
    let core = Rc::clone(core);
    listen(&toggle, "click", move |_event| {
        let next = core.borrow_mut().toggle_theme(&*store);
        if let Err(e) = apply_theme(&body, &config.light_class, next) {
            log::warn!("theme not applied: {e}");
        }
        press_affordance(&control, config.press_ms);
    })
}

fn apply_theme(body: &HtmlElement, light_class: &str, theme: Theme) -> Result<(), ControllerError> {
    body.class_list().toggle_with_force(light_class, theme.is_light())?;
    Ok(())
}

fn press_affordance(control: &HtmlElement, press_ms: u32) {
    if let Err(e) = set_style(control, "transform", "scale(0.95)") {
        log::debug!("press affordance skipped: {e}");
        return;
    }
    let control = control.clone();
    Timeout::new(press_ms, move || {
        if let Err(e) = set_style(&control, "transform", "scale(1)") {
            log::debug!("press affordance not reset: {e}");
        }
    })
    .forget();
}

// =============================================================
// Images
// =============================================================

pub fn install_lazy_images(document: &Document) -> Result<(), ControllerError> {
    for img in query_all(document, "img")? {
        for (name, value) in images::missing_hints(img.has_attribute(LOADING_ATTR), img.has_attribute(DECODING_ATTR)) {
            img.set_attribute(name, value)?;
        }
    }
    Ok(())
}

// =============================================================
// Anchors
// =============================================================

pub fn install_anchor_scrolling(document: &Document) -> Result<(), ControllerError> {
    for link in query_all(document, SAME_PAGE_ANCHOR_SELECTOR)? {
        let document = document.clone();
        let href_source = link.clone();
        listen(&link, "click", move |event| {
            let href = href_source.get_attribute("href").unwrap_or_default();
            let outcome = anchor::resolve(&href, |id| document.get_element_by_id(id));
            if outcome.prevent_default {
                event.prevent_default();
            }
            if let Some(target) = outcome.scroll_to {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

// =============================================================
// Category filter
// =============================================================

pub fn install_category_filter(document: &Document, core: &SharedCore) -> Result<(), ControllerError> {
    let config = core.borrow().config.filter.clone();
    let select = document
        .get_element_by_id(&config.select_id)
        .ok_or_else(|| missing(&format!("#{}", config.select_id)))?;
    let control = select
        .clone()
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| ControllerError::Dom(format!("#{} is not a <select>", config.select_id)))?;
    let panels = query_all(document, &config.panel_selector)?
        .into_iter()
        .map(html)
        .collect::<Result<Vec<_>, _>>()?;
    if panels.is_empty() {
        return Err(missing(&config.panel_selector));
    }

    let core = Rc::clone(core);
    listen(&select, "change", move |_event| {
        if let Err(e) = apply_filter(&control.value(), &panels, &core) {
            log::error!("error in category filter: {e}");
        }
    })
}

fn apply_filter(selected: &str, panels: &[HtmlElement], core: &SharedCore) -> Result<(), ControllerError> {
    let tokens = panels
        .iter()
        .map(|panel| panel.get_attribute(CATEGORY_ATTRIBUTE))
        .collect::<Vec<_>>();
    let plan = core.borrow_mut().select_category(selected, &tokens);

    for step in plan.transitions {
        let Some(panel) = panels.get(step.index()) else {
            continue;
        };
        apply_panel_effects(panel, step.immediate_effects())?;
        schedule_panel_step(core, plan.generation, step.delay_ms(), panel.clone(), step.deferred_effects());
    }
    Ok(())
}

fn apply_panel_effects(panel: &HtmlElement, effects: &[PanelEffect]) -> Result<(), ControllerError> {
    for effect in effects {
        match *effect {
            PanelEffect::Style { property, value } => set_style(panel, property, value)?,
            PanelEffect::HiddenClass(hidden) => {
                panel.class_list().toggle_with_force(HIDDEN_CLASS, hidden)?;
            }
        }
    }
    Ok(())
}

fn schedule_panel_step(
    core: &SharedCore,
    generation: u64,
    delay_ms: u32,
    panel: HtmlElement,
    effects: &'static [PanelEffect],
) {
    let core = Rc::clone(core);
    Timeout::new(delay_ms, move || {
        if !core.borrow().filter_is_current(generation) {
            return;
        }
        if let Err(e) = apply_panel_effects(&panel, effects) {
            log::error!("error in category filter: {e}");
        }
    })
    .forget();
}

// =============================================================
// Reveal
// =============================================================

pub fn install_reveal(document: &Document, core: &SharedCore) -> Result<(), ControllerError> {
    let config = core.borrow().config.reveal.clone();
    let elements = query_all(document, &config.selector_list())?;
    let targets = Rc::new(core.borrow_mut().register_reveal_targets(elements));

    let callback_core = Rc::clone(core);
    let callback_targets = Rc::clone(&targets);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(id) = callback_targets.id_of(&target) else {
                    continue;
                };
                let action = callback_core
                    .borrow_mut()
                    .observe_reveal(VisibilityEntry { id, is_intersecting: entry.is_intersecting() });
                if action == RevealAction::Reveal {
                    if let Err(e) = target.class_list().add_1(REVEAL_VISIBLE_CLASS) {
                        log::error!("error revealing element: {e:?}");
                    }
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in targets.elements() {
        element.class_list().add_1(REVEAL_ELIGIBLE_CLASS)?;
        observer.observe(element);
    }
    log::debug!("reveal watching {} elements", targets.len());
    Ok(())
}

// =============================================================
// Navbar
// =============================================================

pub fn install_navbar(window: &Window, document: &Document, core: &SharedCore) -> Result<(), ControllerError> {
    let selector = core.borrow().config.navbar.selector.clone();
    let navbar = html(document.query_selector(&selector)?.ok_or_else(|| missing(&selector))?)?;

    let scroll_window = window.clone();
    let scroll_document = document.clone();
    let core = Rc::clone(core);
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let offset = scroll_offset(&scroll_window, &scroll_document);
        let position = core.borrow_mut().on_scroll(offset);
        if let Err(e) = set_style(&navbar, "transform", position.transform()) {
            log::warn!("navbar not moved: {e}");
        }
    });
    // TODO: coalesce to one update per animation frame once the navbar gets heavier transitions.
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

fn scroll_offset(window: &Window, document: &Document) -> f64 {
    match window.scroll_y() {
        Ok(y) if y > 0.0 => y,
        _ => document
            .document_element()
            .map_or(0.0, |root| f64::from(root.scroll_top())),
    }
}

// =============================================================
// Messaging + enquiry form
// =============================================================

/// Publish `window.openWhatsApp()` for inline `onclick` handlers.
pub fn expose_open_whatsapp(window: &Window, messaging: MessagingConfig) -> Result<(), ControllerError> {
    let closure = Closure::<dyn FnMut()>::new(move || {
        if !deep_link::hand_off(&BrowserNavigator, &messaging) {
            log::debug!("messaging handoff fell back to contact alert");
        }
    });
    js_sys::Reflect::set(window, &JsValue::from_str("openWhatsApp"), closure.as_ref())?;
    closure.forget();
    Ok(())
}

pub fn install_enquiry_form(document: &Document, core: &SharedCore) -> Result<(), ControllerError> {
    let selector = core.borrow().config.enquiry.form_selector.clone();
    let form = document.query_selector(&selector)?.ok_or_else(|| missing(&selector))?;

    let form_root = form.clone();
    let core = Rc::clone(core);
    listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = start_submission(&form_root, &core) {
            log::error!("error in form submission: {e}");
            BrowserNavigator.alert(GENERIC_FAILURE_ALERT);
        }
    })
}

fn start_submission(form: &Element, core: &SharedCore) -> Result<(), ControllerError> {
    let button = match form.query_selector(SUBMIT_BUTTON_SELECTOR)? {
        Some(button) => Some(
            button
                .dyn_into::<HtmlButtonElement>()
                .map_err(|_| ControllerError::Dom("submit control is not a <button>".to_owned()))?,
        ),
        None => None,
    };
    let email = match form.query_selector(EMAIL_INPUT_SELECTOR)? {
        Some(input) => Some(
            input
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| ControllerError::Dom("email field is not an <input>".to_owned()))?,
        ),
        None => None,
    };

    let label = button.as_ref().map(|b| b.text_content().unwrap_or_default());
    let email_value = email.as_ref().map(HtmlInputElement::value);
    let (prepared, messaging, timing) = {
        let mut core = core.borrow_mut();
        let prepared = core.prepare_submission(label.as_deref(), email_value.as_deref());
        (prepared, core.config.messaging.clone(), core.config.enquiry.clone())
    };
    let (ticket, button) = match (prepared, button) {
        (Prepared::Started(ticket), Some(button)) => (ticket, button),
        (Prepared::Rejected, _) => {
            log::debug!("enquiry rejected: {}", ControllerError::InvalidEmail);
            BrowserNavigator.alert(INVALID_EMAIL_ALERT);
            return Ok(());
        }
        (Prepared::NoButton | Prepared::Started(_), _) => {
            log::error!("submit button not found");
            return Ok(());
        }
    };
    let SubmissionTicket { id, original_label, registration } = ticket;
    let view = FormView { button, email };
    let core = Rc::clone(core);

    wasm_bindgen_futures::spawn_local(async move {
        let flow = enquiry::submit(&view, &BrowserNavigator, &messaging, &timing, &original_label, TimeoutFuture::new);
        match Abortable::new(flow, registration).await {
            Ok(outcome) => log::debug!("submission {id} finished: {outcome:?}"),
            Err(_) => log::debug!("submission {id} superseded"),
        }
        core.borrow_mut().finish_submission(id);
    });
    Ok(())
}
