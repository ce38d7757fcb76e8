//! Recognition of section headers and noise lines, plus date cleaning.
//!
//! Schedule reports repeat their column header on every page, stamp page-break
//! markers and a totals row into the text layer, and carry a running footer.
//! The predicates here let the reconstructor tell those apart from real
//! activity rows. Each predicate is a pure function of the text alone.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Section headers are entirely uppercase ASCII letters, whitespace, and
    /// hyphens ("SITEWORK", "PHASE 2 - INTERIORS").
    static ref RE_SECTION_HEADER: Regex = Regex::new(r"^[A-Z\s-]+$").unwrap();

    /// Any run of whitespace, for collapsing in date cleaning.
    static ref RE_WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Column-header text repeated at the top of every page.
const COLUMN_HEADER_REPEAT: &str = "Activity ID";

/// Substring identifying page-break marker lines ("PAGE 2 OF 14").
const PAGE_MARKER: &str = "PAGE";

/// The totals row's literal activity-id cell.
const TOTAL_MARKER: &str = "Total";

/// Check whether a fragment's text is a section-header line.
///
/// A header is entirely uppercase letters, whitespace, and hyphens, longer
/// than 3 characters, and does not contain the document's running-footer
/// token (which is also all-caps and would otherwise match).
///
/// # Examples
///
/// ```
/// use schedule_oxide::layout::is_section_header;
///
/// assert!(is_section_header("SITEWORK", "REED"));
/// assert!(is_section_header("PHASE TWO - INTERIORS", "REED"));
/// assert!(!is_section_header("REED CONSTRUCTION", "REED"));
/// assert!(!is_section_header("A100", "REED"));
/// ```
pub fn is_section_header(text: &str, footer_token: &str) -> bool {
    RE_SECTION_HEADER.is_match(text) && text.len() > 3 && !text.contains(footer_token)
}

/// Check whether an activity-id cell is the per-page column-header repeat.
pub fn is_column_header_repeat(activity_id: &str) -> bool {
    activity_id.contains(COLUMN_HEADER_REPEAT)
}

/// Check whether an activity-id cell is a page-break marker.
pub fn is_page_marker(activity_id: &str) -> bool {
    activity_id.contains(PAGE_MARKER)
}

/// Check whether an activity-id cell is the report's totals row.
pub fn is_total_row(activity_id: &str) -> bool {
    activity_id == TOTAL_MARKER
}

/// Clean a date cell: trim, strip every asterisk, collapse whitespace runs.
///
/// Schedule exports star constrained dates (`"12*Jan 2024"`) and pad cells
/// with runs of spaces; sinks want neither.
///
/// # Examples
///
/// ```
/// use schedule_oxide::layout::clean_date;
///
/// assert_eq!(clean_date("12*Jan  2024"), "12Jan 2024");
/// assert_eq!(clean_date("  05Feb24 "), "05Feb24");
/// ```
pub fn clean_date(raw: &str) -> String {
    let stripped = raw.trim().replace('*', "");
    RE_WHITESPACE_RUN.replace_all(&stripped, " ").into_owned()
}
