//! Thin web-sys helpers for looking up and mutating host-page elements.
//!
//! Lookups return `Option` so a missing element simply disables the behavior
//! that needs it. DOM mutations are best-effort and ignore `JsValue` errors.

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

const ERROR_CLASS: &str = "erro";

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element with `id`, cast to `T`.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(selector: &str) -> Option<T> {
    document()?.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

/// Current value of an `<input>` or `<textarea>`; empty for anything else.
pub fn value_of(el: &HtmlElement) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Set or clear the error marker: the `erro` class plus `aria-invalid`.
pub fn set_invalid(el: &Element, invalid: bool) {
    let class_list = el.class_list();
    if invalid {
        let _ = class_list.add_1(ERROR_CLASS);
    } else {
        let _ = class_list.remove_1(ERROR_CLASS);
    }
    let _ = el.set_attribute("aria-invalid", if invalid { "true" } else { "false" });
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    } else {
        log::warn!("failed to bind {event} listener");
    }
}

/// Run `f` once the document has been parsed.
pub fn on_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    if super::ready::is_parsed(&document.ready_state()) {
        f();
        return;
    }
    let mut pending = Some(f);
    listen(&document, "DOMContentLoaded", move |_: Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}
