//! Dashboard logic that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! formatting, matching, and filter rules on the host.

use serde::Serialize;

/// Label shown when no upload file is selected.
pub const FILE_LABEL_PLACEHOLDER: &str = "Choose file";

/// Sentinel option value meaning "no filtering" for a selector.
pub const FILTER_RESET_VALUE: &str = "all";

/// Id suffix shared by every filter selector on the page.
pub const FILTER_ID_SUFFIX: &str = "-filter";

/// CSS class marking the drop zone as an active drag target.
pub const HIGHLIGHT_CLASS: &str = "border-primary";

/// Element ids the controller binds to. A missing element silently disables
/// the corresponding feature, so this inventory is the whole page contract.
pub mod dom_id {
    pub const FILE_INPUT: &str = "file";
    pub const SEARCH_BOX: &str = "student-search";
    pub const EXPORT_CSV: &str = "export-csv";
    pub const EXPORT_PDF: &str = "export-pdf";
    pub const PRINT_DASHBOARD: &str = "print-dashboard";
    pub const APPLY_FILTERS: &str = "apply-filters";
    pub const RESET_FILTERS: &str = "reset-filters";
    pub const PROGRAM_FILTER: &str = "program-filter";
    pub const STATUS_FILTER: &str = "status-filter";
    pub const YEAR_FILTER: &str = "year-filter";
    pub const STUDENT_DETAIL_MODAL: &str = "studentDetailModal";

    pub fn all() -> &'static [&'static str] {
        &[
            FILE_INPUT,
            SEARCH_BOX,
            EXPORT_CSV,
            EXPORT_PDF,
            PRINT_DASHBOARD,
            APPLY_FILTERS,
            RESET_FILTERS,
            PROGRAM_FILTER,
            STATUS_FILTER,
            YEAR_FILTER,
            STUDENT_DETAIL_MODAL,
        ]
    }
}

/// Class selectors the controller binds to (written to or listened on).
pub mod dom_class {
    pub const FILE_LABEL: &str = "custom-file-label";
    pub const UPLOAD_ZONE: &str = "file-upload-wrapper";
}

/// Decimal rendering with a comma every three digits from the least
/// significant end: `1234567` → `"1,234,567"`. Values below 1000 have no
/// separator; negatives keep the sign outside the grouping.
///
/// Integer arithmetic only; `format!` on floats has had wasm-facing panics in
/// some toolchain/browser combinations, so nothing here goes through floats.
pub fn format_number(n: i64) -> String {
    let negative = n < 0;
    // Widen before abs so i64::MIN doesn't overflow.
    let mut rest = (n as i128).unsigned_abs();

    let mut groups: Vec<String> = Vec::new();
    loop {
        let group = (rest % 1000) as u16;
        rest /= 1000;
        if rest == 0 {
            groups.push(group.to_string());
            break;
        }
        groups.push(format!("{group:03}"));
    }
    groups.reverse();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&groups.join(","));
    out
}

/// Round a pixel measurement to a whole-number string for inline styles.
/// Non-finite values degrade to `"0"` rather than poisoning the style.
pub fn px(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = v.round();
    if rounded.abs() > i64::MAX as f64 {
        return "0".to_string();
    }
    (rounded as i64).to_string()
}

/// Text for the upload label: the chosen file's name, or the placeholder when
/// nothing is selected.
pub fn file_label(name: Option<&str>) -> String {
    match name {
        Some(n) => n.to_string(),
        None => FILE_LABEL_PLACEHOLDER.to_string(),
    }
}

/// Case-insensitive substring test used by the live table search. An empty
/// term matches every row.
pub fn row_matches(row_text: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    row_text.to_lowercase().contains(&term.to_lowercase())
}

/// Whether a selector id participates in reset-filters.
pub fn is_filter_select_id(id: &str) -> bool {
    id.ends_with(FILTER_ID_SUFFIX)
}

/// Drag lifecycle phases observed on the upload drop zone. The zone's
/// highlight class tracks the most recent phase only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    pub fn event_name(self) -> &'static str {
        match self {
            DragPhase::Enter => "dragenter",
            DragPhase::Over => "dragover",
            DragPhase::Leave => "dragleave",
            DragPhase::Drop => "drop",
        }
    }

    /// Whether the zone is highlighted after this phase.
    pub fn highlights(self) -> bool {
        matches!(self, DragPhase::Enter | DragPhase::Over)
    }

    pub fn all() -> &'static [DragPhase] {
        &[
            DragPhase::Enter,
            DragPhase::Over,
            DragPhase::Leave,
            DragPhase::Drop,
        ]
    }
}

/// The three selector values read when applying filters. `"all"` (or an
/// unset selector) means that dimension is unfiltered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub program: String,
    pub status: String,
    pub year: String,
}

impl FilterSelection {
    pub fn unfiltered() -> Self {
        Self {
            program: FILTER_RESET_VALUE.to_string(),
            status: FILTER_RESET_VALUE.to_string(),
            year: FILTER_RESET_VALUE.to_string(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        fn off(v: &str) -> bool {
            v.is_empty() || v == FILTER_RESET_VALUE
        }
        off(&self.program) && off(&self.status) && off(&self.year)
    }

    /// User-facing confirmation line, matching the dashboard's wording.
    pub fn summary(&self) -> String {
        format!(
            "Filters applied: Program={}, Status={}, Year={}",
            self.program, self.status, self.year
        )
    }

    /// Query string for a backend filter call. Dimensions left at `"all"`
    /// (or empty) are omitted; returns `""` when nothing is selected.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (key, value) in [
            ("program", self.program.as_str()),
            ("status", self.status.as_str()),
            ("year", self.year.as_str()),
        ] {
            if value.is_empty() || value == FILTER_RESET_VALUE {
                continue;
            }
            out.push(if out.is_empty() { '?' } else { '&' });
            out.push_str(key);
            out.push('=');
            out.push_str(&url_encode_component(value));
        }
        out
    }
}

fn url_encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                const HEX: &[u8; 16] = b"0123456789ABCDEF";
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_number_groups_every_three_digits() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(7), "7");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(100_200_300), "100,200,300");
    }

    #[test]
    fn format_number_keeps_sign_outside_grouping() {
        assert_eq!(format_number(-1), "-1");
        assert_eq!(format_number(-1234), "-1,234");
        assert_eq!(format_number(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(format_number(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn px_rounds_and_degrades() {
        assert_eq!(px(0.0), "0");
        assert_eq!(px(12.4), "12");
        assert_eq!(px(12.6), "13");
        assert_eq!(px(-3.5), "-4");
        assert_eq!(px(f64::NAN), "0");
        assert_eq!(px(f64::INFINITY), "0");
    }

    #[test]
    fn file_label_falls_back_to_placeholder() {
        assert_eq!(file_label(Some("roster.csv")), "roster.csv");
        assert_eq!(file_label(None), FILE_LABEL_PLACEHOLDER);
    }

    #[test]
    fn row_matches_is_case_insensitive_containment() {
        assert!(row_matches("Ada Lovelace | Mathematics | active", "love"));
        assert!(row_matches("Ada Lovelace | Mathematics | active", "MATH"));
        assert!(!row_matches("Ada Lovelace | Mathematics | active", "physics"));
        assert!(row_matches("ΣΟΦΙΑ ΠΑΠΑΔΟΠΟΥΛΟΥ", "σοφια"));
    }

    #[test]
    fn empty_search_term_matches_every_row() {
        for text in ["", "anything", "Grace Hopper | CS | incoming"] {
            assert!(row_matches(text, ""));
        }
    }

    #[test]
    fn drag_highlight_tracks_the_last_phase() {
        use DragPhase::*;
        let sequences: &[&[DragPhase]] = &[
            &[Enter],
            &[Enter, Over, Over],
            &[Enter, Leave],
            &[Enter, Over, Drop],
            &[Enter, Leave, Enter],
            &[Enter, Over, Leave, Enter, Over, Drop],
        ];
        for seq in sequences {
            let mut highlighted = false;
            for phase in *seq {
                highlighted = phase.highlights();
            }
            let last = seq.last().copied().expect("non-empty sequence");
            assert_eq!(highlighted, last.highlights(), "sequence {seq:?}");
        }
    }

    #[test]
    fn filter_select_ids_match_by_suffix() {
        assert!(is_filter_select_id("program-filter"));
        assert!(is_filter_select_id("status-filter"));
        assert!(is_filter_select_id("year-filter"));
        assert!(!is_filter_select_id("student-search"));
        assert!(!is_filter_select_id("filter-program"));
    }

    #[test]
    fn filter_summary_matches_dashboard_wording() {
        let sel = FilterSelection {
            program: "cs".to_string(),
            status: "active".to_string(),
            year: "2025".to_string(),
        };
        assert_eq!(
            sel.summary(),
            "Filters applied: Program=cs, Status=active, Year=2025"
        );
    }

    #[test]
    fn query_string_omits_unfiltered_dimensions() {
        assert_eq!(FilterSelection::unfiltered().to_query_string(), "");
        assert!(FilterSelection::unfiltered().is_unfiltered());

        let sel = FilterSelection {
            program: "computer science".to_string(),
            status: FILTER_RESET_VALUE.to_string(),
            year: "2024".to_string(),
        };
        assert_eq!(
            sel.to_query_string(),
            "?program=computer%20science&year=2024"
        );
        assert!(!sel.is_unfiltered());
    }

    #[test]
    fn filter_selection_serializes_stably() {
        let sel = FilterSelection {
            program: "cs".to_string(),
            status: "active".to_string(),
            year: "all".to_string(),
        };
        let json = serde_json::to_string(&sel).expect("serialize");
        assert_eq!(
            json,
            r#"{"program":"cs","status":"active","year":"all"}"#
        );
    }

    #[test]
    fn dom_id_inventory_is_stable() {
        let all = dom_id::all();
        assert_eq!(all.len(), 11);

        let mut ids: Vec<&'static str> = all.to_vec();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 11);

        for id in all {
            assert!(!id.trim().is_empty());
        }

        // Exactly the three filter selectors participate in reset.
        let filter_ids: Vec<&&str> = all.iter().filter(|id| is_filter_select_id(id)).collect();
        assert_eq!(filter_ids.len(), 3);
    }

    #[test]
    fn drag_phases_cover_all_drop_zone_events() {
        let all = DragPhase::all();
        assert_eq!(all.len(), 4);

        let mut names: Vec<&'static str> =
            all.iter().copied().map(DragPhase::event_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);

        assert!(DragPhase::Enter.highlights());
        assert!(DragPhase::Over.highlights());
        assert!(!DragPhase::Leave.highlights());
        assert!(!DragPhase::Drop.highlights());
    }
}
