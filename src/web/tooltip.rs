//! Hover tooltips for elements flagged with `data-bs-toggle="tooltip"`.
//!
//! Each flagged element gets a body-appended tooltip node positioned by
//! pixel `top`/`left` under the anchor. The node is keyed by a per-element
//! id so enter/leave handlers stay paired without shared state.

use web_sys::Element;

use crate::ui_model::px;

use super::dom;

const TOGGLE_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;
const TIP_ID_PREFIX: &str = "studash-tooltip-";
const TIP_OFFSET_PX: f64 = 6.0;

pub(super) fn init() {
    for (index, el) in dom::query_all(TOGGLE_SELECTOR).into_iter().enumerate() {
        let Some(text) = tooltip_text(&el) else {
            continue;
        };
        attach(el, index, text);
    }
}

fn tooltip_text(el: &Element) -> Option<String> {
    let text = el
        .get_attribute("data-bs-title")
        .or_else(|| el.get_attribute("title"))?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn attach(el: Element, index: usize, text: String) {
    let tip_id = format!("{TIP_ID_PREFIX}{index}");

    // Move the text off `title` so the native browser tooltip doesn't double
    // up with ours.
    if el.has_attribute("title") {
        let _ = el.remove_attribute("title");
        let _ = el.set_attribute("data-bs-title", &text);
    }

    let anchor = el.clone();
    let show_id = tip_id.clone();
    dom::on(&el, "mouseenter", move |_ev| show(&anchor, &show_id, &text));

    dom::on(&el, "mouseleave", move |_ev| hide(&tip_id));
}

fn show(anchor: &Element, tip_id: &str, text: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    if doc.get_element_by_id(tip_id).is_some() {
        return;
    }
    let Ok(tip) = doc.create_element("div") else {
        return;
    };

    tip.set_id(tip_id);
    tip.set_class_name("tooltip show");
    let _ = tip.set_attribute("role", "tooltip");
    tip.set_text_content(Some(text));

    let rect = anchor.get_bounding_client_rect();
    let top = px(rect.bottom() + TIP_OFFSET_PX);
    let left = px(rect.left());
    let _ = tip.set_attribute(
        "style",
        &format!("position: fixed; top: {top}px; left: {left}px; z-index: 1080;"),
    );

    if let Some(body) = doc.body() {
        let _ = body.append_child(&tip);
    }
}

fn hide(tip_id: &str) {
    if let Some(tip) = dom::by_id(tip_id) {
        tip.remove();
    }
}
