//! Guarded DOM lookups and listener attachment.
//!
//! Every lookup returns `Option`; callers treat absence as "feature disabled"
//! rather than an error.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlSelectElement};

pub(super) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub(super) fn by_id(id: &str) -> Option<Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

pub(super) fn input_by_id(id: &str) -> Option<HtmlInputElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

pub(super) fn select_by_id(id: &str) -> Option<HtmlSelectElement> {
    by_id(id).and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
}

pub(super) fn query(selector: &str) -> Option<Element> {
    document().and_then(|d| d.query_selector(selector).ok().flatten())
}

pub(super) fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.get(i) {
            if let Ok(el) = node.dyn_into::<Element>() {
                out.push(el);
            }
        }
    }
    out
}

/// Attach a listener for the lifetime of the page. The closure is leaked via
/// `forget()`; handlers are bound once at init and never detached.
pub(super) fn on(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .is_ok()
    {
        cb.forget();
    }
}

pub(super) fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
