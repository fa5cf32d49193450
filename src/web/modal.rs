//! Student detail modal. Placeholder: the dialog opens but no student data is
//! fetched yet.

use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsCast;

use crate::ui_model::dom_id;

use super::dom;
use super::services::{DashboardServices, StubServices};

/// Minimal Bootstrap-compatible open: enough for the placeholder dialog
/// without pulling in the full modal machinery (backdrop, focus trap).
pub(super) fn open_modal(element_id: &str) {
    let Some(el) = dom::by_id(element_id) else {
        return;
    };

    let _ = el.class_list().add_1("show");
    let _ = el.set_attribute("aria-hidden", "false");
    let _ = el.set_attribute("aria-modal", "true");
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("display", "block");
    }
}

/// Called from inline handlers in the server-rendered templates.
#[wasm_bindgen(js_name = showStudentDetails)]
pub fn show_student_details(student_id: String) {
    StubServices.student_details(&student_id);
    open_modal(dom_id::STUDENT_DETAIL_MODAL);
}
