//! Live table search: every keystroke re-derives row visibility from the
//! current term. No debouncing; the table is small and client-rendered.

use wasm_bindgen::JsCast;

use crate::ui_model::{self, dom_id};

use super::dom;

const ROW_SELECTOR: &str = "tbody tr";

pub(super) fn init() {
    let Some(input) = dom::input_by_id(dom_id::SEARCH_BOX) else {
        return;
    };

    let input_in_handler = input.clone();
    dom::on(&input, "keyup", move |_ev| {
        apply_term(&input_in_handler.value());
    });
}

fn apply_term(term: &str) {
    for row in dom::query_all(ROW_SELECTOR) {
        let text = row.text_content().unwrap_or_default();
        let visible = ui_model::row_matches(&text, term);

        if let Some(el) = row.dyn_ref::<web_sys::HtmlElement>() {
            let style = el.style();
            if visible {
                let _ = style.remove_property("display");
            } else {
                let _ = style.set_property("display", "none");
            }
        }
    }
}
