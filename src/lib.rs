//! # contato
//!
//! Leptos + WASM behavior layer for the static contact page.
//!
//! The page HTML is authored by hand; this crate only attaches to it. Four
//! independent behaviors share nothing but the host document:
//! - `form`: field validation and a simulated submission.
//! - `modal`: a lazily mounted message dialog used by the form.
//! - `nav`: a "Menu" button that collapses the nav on narrow viewports.
//! - `theme`: a light/dark toggle persisted to `localStorage`.
//!
//! Each behavior silently skips itself when its host elements are absent.
//! Browser bindings are compiled only with the `csr` feature; without it the
//! page logic builds and tests natively.


pub mod config;
pub mod form;
pub mod modal;
pub mod nav;
pub mod theme;
pub mod util;

pub use config::PageConfig;

/// Attach every page behavior.
pub fn attach(config: &PageConfig) {
    form::attach(config);
    nav::attach(config);
    theme::attach(config);
}

/// WASM entry point: install logging, then attach once the DOM is parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    util::dom::on_ready(|| {
        log::debug!("attaching contact page behaviors");
        attach(&PageConfig::default());
    });
}
