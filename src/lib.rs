//! # site-controller
//!
//! Page interaction controller for the storefront's static marketing site,
//! compiled to WebAssembly. It wires theme toggling, smooth anchor scrolling,
//! the category filter, scroll-triggered reveals, the auto-hiding navbar, and
//! the enquiry form's WhatsApp handoff onto an already-rendered page.
//!
//! Each feature's rules live in a browser-free module so they can be tested
//! natively. The [`dom`] module (feature `hydrate`) binds them to `web_sys`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ControllerCore`], the owner of all session state |
//! | [`theme`] | Light/dark preference read, toggle, persist |
//! | [`images`] | Lazy-loading and async-decoding hints |
//! | [`anchor`] | Same-page link interception |
//! | [`filter`] | Category filter transition planning |
//! | [`reveal`] | One-way reveal registry for the visibility observer |
//! | [`navbar`] | Scroll direction tracking for the navbar |
//! | [`deep_link`] | WhatsApp link building and handoff |
//! | [`enquiry`] | Email validation and the cancellable submission flow |
//! | [`config`] | Typed configuration with JSON overrides |
//! | [`ports`] | Storage and navigation seams |
//! | [`error`] | [`error::ControllerError`] |
//! | [`consts`] | Default selectors, keys, and timings |

pub mod anchor;
pub mod config;
pub mod consts;
pub mod controller;
pub mod deep_link;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod enquiry;
pub mod error;
pub mod filter;
pub mod images;
pub mod navbar;
pub mod ports;
pub mod reveal;
pub mod theme;

/// WASM entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    dom::start();
}
