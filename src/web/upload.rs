//! Upload affordances: file label sync and the drag-and-drop zone.
//!
//! Dropping files and picking them through the input are equivalent entry
//! paths; both end with the input holding the file list and the label showing
//! the first file's name.

use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};

use crate::ui_model::{self, dom_class, dom_id, DragPhase, HIGHLIGHT_CLASS};

use super::dom;

pub(super) fn init() {
    init_file_label_sync();
    init_drop_zone();
}

fn file_label_el() -> Option<Element> {
    dom::query(&format!(".{}", dom_class::FILE_LABEL))
}

fn set_label(name: Option<&str>) {
    if let Some(label) = file_label_el() {
        label.set_text_content(Some(&ui_model::file_label(name)));
    }
}

fn init_file_label_sync() {
    let Some(input) = dom::input_by_id(dom_id::FILE_INPUT) else {
        return;
    };
    if file_label_el().is_none() {
        return;
    }

    let input_in_handler = input.clone();
    dom::on(&input, "change", move |_ev| {
        let name = input_in_handler
            .files()
            .and_then(|files| files.get(0))
            .map(|f| f.name());
        set_label(name.as_deref());
    });
}

fn init_drop_zone() {
    let Some(zone) = dom::query(&format!(".{}", dom_class::UPLOAD_ZONE)) else {
        return;
    };

    for phase in DragPhase::all().iter().copied() {
        let zone_in_handler = zone.clone();
        dom::on(&zone, phase.event_name(), move |ev| {
            // Keep the browser from navigating to the dropped file.
            ev.prevent_default();
            ev.stop_propagation();

            let classes = zone_in_handler.class_list();
            if phase.highlights() {
                let _ = classes.add_1(HIGHLIGHT_CLASS);
            } else {
                let _ = classes.remove_1(HIGHLIGHT_CLASS);
            }

            if phase == DragPhase::Drop {
                handle_drop(&ev);
            }
        });
    }
}

fn handle_drop(ev: &web_sys::Event) {
    let Some(drag) = ev.dyn_ref::<DragEvent>() else {
        return;
    };
    let Some(files) = drag.data_transfer().and_then(|dt| dt.files()) else {
        return;
    };
    // An empty drop is an explicit no-op: input and label stay as they were.
    let Some(first) = files.get(0) else {
        return;
    };

    if let Some(input) = dom::input_by_id(dom_id::FILE_INPUT) {
        input.set_files(Some(&files));
        set_label(Some(&first.name()));
    }
}
