//! Toolbar button handlers: export, print, apply/reset filters.

use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::ui_model::{dom_id, is_filter_select_id, FilterSelection, FILTER_ID_SUFFIX, FILTER_RESET_VALUE};

use super::dom;
use super::services::DashboardServices;

pub(super) fn init(services: Rc<dyn DashboardServices>) {
    bind_click(dom_id::EXPORT_CSV, {
        let s = Rc::clone(&services);
        move || s.export_csv()
    });

    bind_click(dom_id::EXPORT_PDF, {
        let s = Rc::clone(&services);
        move || s.export_pdf()
    });

    // Print is the browser's own flow, not a backend concern.
    bind_click(dom_id::PRINT_DASHBOARD, || {
        if let Some(w) = web_sys::window() {
            let _ = w.print();
        }
    });

    bind_click(dom_id::APPLY_FILTERS, {
        let s = Rc::clone(&services);
        move || s.apply_filters(&read_selection())
    });

    bind_click(dom_id::RESET_FILTERS, {
        let s = services;
        move || {
            reset_selects();
            s.reset_filters();
        }
    });
}

fn bind_click(id: &str, handler: impl Fn() + 'static) {
    let Some(el) = dom::by_id(id) else {
        return;
    };
    dom::on(&el, "click", move |_ev| handler());
}

/// A missing selector reads as the "all" sentinel rather than disabling the
/// apply button outright.
fn select_value(id: &str) -> String {
    dom::select_by_id(id)
        .map(|s| s.value())
        .unwrap_or_else(|| FILTER_RESET_VALUE.to_string())
}

fn read_selection() -> FilterSelection {
    FilterSelection {
        program: select_value(dom_id::PROGRAM_FILTER),
        status: select_value(dom_id::STATUS_FILTER),
        year: select_value(dom_id::YEAR_FILTER),
    }
}

fn reset_selects() {
    for el in dom::query_all(&format!("select[id$=\"{FILTER_ID_SUFFIX}\"]")) {
        if !is_filter_select_id(&el.id()) {
            continue;
        }
        if let Some(sel) = el.dyn_ref::<web_sys::HtmlSelectElement>() {
            sel.set_value(FILTER_RESET_VALUE);
        }
    }
}
