//! Service boundary for the actions that need a real backend.
//!
//! The default implementation only notifies/logs, which preserves the
//! dashboard's current stub behavior while keeping the event wiring free of
//! business logic: a real export/filter backend slots in via
//! [`crate::web::init_with`] without touching any handler.

use crate::ui_model::FilterSelection;

use super::dom;

pub trait DashboardServices {
    fn export_csv(&self);
    fn export_pdf(&self);
    fn apply_filters(&self, selection: &FilterSelection);
    fn reset_filters(&self);
    fn student_details(&self, student_id: &str);
}

/// Notify-and-log placeholder used until the export/filter endpoints exist.
pub struct StubServices;

impl DashboardServices for StubServices {
    fn export_csv(&self) {
        notify("In a real application, this would download the data as CSV");
    }

    fn export_pdf(&self) {
        notify("In a real application, this would download the data as PDF");
    }

    fn apply_filters(&self, selection: &FilterSelection) {
        dom::console_log(&format!(
            "Applying filters: Program={}, Status={}, Year={}",
            selection.program, selection.status, selection.year
        ));
        if let Ok(json) = serde_json::to_string(selection) {
            dom::console_log(&format!("filter payload: {json}"));
        }
        notify(&selection.summary());
    }

    fn reset_filters(&self) {
        dom::console_log("Filters reset");
    }

    fn student_details(&self, student_id: &str) {
        dom::console_log(&format!("Showing details for student ID: {student_id}"));
    }
}

fn notify(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}
