//! Single-pass row reconstruction from positioned fragments.
//!
//! The reconstructor is a stateful accumulator folded over the fragment
//! stream. It tracks the y of the physical line being assembled, a pending
//! line of optional column cells, and the running section label. State
//! persists across page boundaries — a row split by a page break still
//! assembles into one record.

use crate::config::LayoutConfig;
use crate::fragment::{Fragment, Page};
use crate::layout::noise_filter::{
    clean_date, is_column_header_repeat, is_page_marker, is_section_header, is_total_row,
};
use crate::record::ActivityRecord;
use log::{debug, info, trace};

/// Statistics for one reconstruction pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconstructionSummary {
    /// Number of pages consumed.
    pub pages: usize,
    /// Number of fragments consumed across all pages.
    pub fragments: usize,
    /// Number of records in the filtered output.
    pub records: usize,
}

/// One physical line mid-assembly.
///
/// Each cell stays `None` until a fragment lands in its band; duration and
/// date defaults are substituted only at finalize time, so an untouched band
/// is distinguishable from one that received empty text.
#[derive(Debug, Default)]
struct PendingLine {
    activity_id: Option<String>,
    activity_name: Option<String>,
    original_duration: Option<String>,
    remaining_duration: Option<String>,
    start_date: Option<String>,
    finish_date: Option<String>,
}

impl PendingLine {
    /// A line is worth finalizing only if its id cell is populated and is not
    /// the per-page column-header repeat or a page-break marker. Checked on
    /// the raw accumulated text, before any trimming.
    fn is_valid(&self) -> bool {
        match &self.activity_id {
            Some(id) => {
                !id.is_empty() && !is_column_header_repeat(id) && !is_page_marker(id)
            },
            None => false,
        }
    }

    /// Convert into a cleaned record under the given section label.
    fn finalize(self, section: &str) -> ActivityRecord {
        ActivityRecord {
            section: section.to_string(),
            activity_id: self.activity_id.unwrap_or_default().trim().to_string(),
            activity_name: self.activity_name.map(|name| name.trim().to_string()),
            original_duration: clean_duration(self.original_duration),
            remaining_duration: clean_duration(self.remaining_duration),
            start_date: clean_date(self.start_date.as_deref().unwrap_or("")),
            finish_date: clean_date(self.finish_date.as_deref().unwrap_or("")),
        }
    }
}

/// Trim a duration cell, defaulting to `"0"` when absent or blank.
fn clean_duration(cell: Option<String>) -> String {
    match cell {
        Some(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        },
        None => "0".to_string(),
    }
}

/// Append fragment text into a cell, joining successive fragments with a
/// separator. The first fragment lands bare; finalize trims anyway.
fn append_cell(cell: &mut Option<String>, text: &str, separator: &str) {
    match cell {
        Some(existing) => {
            existing.push_str(separator);
            existing.push_str(text);
        },
        None => *cell = Some(text.to_string()),
    }
}

/// Drop records that fail the output invariant: non-empty activity id that is
/// neither the totals row nor a page marker.
///
/// Finalize-time validity already enforces this on the raw cells; this pass
/// re-checks on the trimmed record fields (trimming can empty an id that was
/// all whitespace). Idempotent: filtering an already-filtered sequence is a
/// no-op.
pub fn filter_noise_records(records: Vec<ActivityRecord>) -> Vec<ActivityRecord> {
    records
        .into_iter()
        .filter(|record| {
            let keep = !record.activity_id.is_empty()
                && !is_total_row(&record.activity_id)
                && !is_page_marker(&record.activity_id);
            if !keep {
                debug!("dropping noise record with id {:?}", record.activity_id);
            }
            keep
        })
        .collect()
}

/// Single-pass reconstructor of activity rows from positioned fragments.
///
/// One instance owns the state of exactly one document pass: the pending
/// line, the tracked line y, and the running section label. `reconstruct`
/// consumes the instance, so state can never leak between documents.
///
/// # Examples
///
/// ```
/// use schedule_oxide::fragment::Fragment;
/// use schedule_oxide::layout::RowReconstructor;
///
/// let page = vec![
///     Fragment::new("A100", 10.0, 650.0),
///     Fragment::new("Pour footings", 150.0, 650.0),
/// ];
/// let records = RowReconstructor::new().reconstruct(vec![page]);
/// assert_eq!(records[0].activity_id, "A100");
/// ```
#[derive(Debug)]
pub struct RowReconstructor {
    config: LayoutConfig,
    tracked_y: Option<f32>,
    line: PendingLine,
    section: String,
}

impl Default for RowReconstructor {
    fn default() -> Self {
        Self::new()
    }
}

impl RowReconstructor {
    /// Create a reconstructor with the default tuned layout.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    /// Create a reconstructor with an explicit layout configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            tracked_y: None,
            line: PendingLine::default(),
            section: String::new(),
        }
    }

    /// Reconstruct activity records from per-page fragment sequences.
    ///
    /// Pages are concatenated into one logical stream; the pending line and
    /// section label persist across page boundaries. Malformed lines are
    /// silently dropped — this transform raises no errors.
    pub fn reconstruct(self, pages: impl IntoIterator<Item = Page>) -> Vec<ActivityRecord> {
        self.reconstruct_with_summary(pages).0
    }

    /// Like [`reconstruct`](Self::reconstruct), also returning pass statistics.
    pub fn reconstruct_with_summary(
        mut self,
        pages: impl IntoIterator<Item = Page>,
    ) -> (Vec<ActivityRecord>, ReconstructionSummary) {
        let mut records = Vec::new();
        let mut summary = ReconstructionSummary::default();

        for page in pages {
            summary.pages += 1;
            for fragment in &page {
                summary.fragments += 1;
                self.push_fragment(fragment, &mut records);
            }
        }

        // The last line has no following boundary to flush it.
        self.flush_pending(&mut records);

        let records = filter_noise_records(records);
        summary.records = records.len();
        info!(
            "reconstructed {} records from {} fragments across {} pages",
            summary.records, summary.fragments, summary.pages
        );
        (records, summary)
    }

    /// Process one fragment: boundary check, header check, column routing.
    fn push_fragment(&mut self, fragment: &Fragment, records: &mut Vec<ActivityRecord>) {
        if self.starts_new_line(fragment.y) {
            self.flush_pending(records);
            self.tracked_y = Some(fragment.y);
        }

        // Header lines update the running section and contribute nothing to
        // the pending line. The flush above already ran, so a header opening
        // a new line never relabels the row it closed.
        if is_section_header(&fragment.text, &self.config.footer_token) {
            trace!("section header: {:?}", fragment.text);
            self.section = fragment.text.clone();
            return;
        }

        self.assign_column(fragment.x, &fragment.text);
    }

    /// A fragment starts a new physical line when nothing is tracked yet or
    /// it sits more than the y tolerance away from the tracked line.
    fn starts_new_line(&self, y: f32) -> bool {
        match self.tracked_y {
            Some(tracked) => (y - tracked).abs() > self.config.line_y_tolerance,
            None => true,
        }
    }

    /// Finalize the pending line into a record if it is valid, then reset it.
    fn flush_pending(&mut self, records: &mut Vec<ActivityRecord>) {
        let line = std::mem::take(&mut self.line);
        if line.is_valid() {
            records.push(line.finalize(&self.section));
        } else if line.activity_id.is_some() {
            debug!("dropping invalid line with id {:?}", line.activity_id);
        }
    }

    /// Route fragment text into the column cell implied by its x placement.
    ///
    /// Bands are half-open `[min, next_min)`. Id and name cells concatenate
    /// (ids split across fragments join with no separator, names with a
    /// space); duration and date cells are last-write-wins, except finish
    /// dates, which the source wraps across fragments like names.
    fn assign_column(&mut self, x: f32, text: &str) {
        let config = &self.config;
        trace!("fragment at x={x}: {text:?}");
        if x < config.activity_name_min_x {
            append_cell(&mut self.line.activity_id, text, "");
        } else if x < config.original_duration_min_x {
            append_cell(&mut self.line.activity_name, text, " ");
        } else if x < config.remaining_duration_min_x {
            self.line.original_duration = Some(text.to_string());
        } else if x < config.start_date_min_x {
            self.line.remaining_duration = Some(text.to_string());
        } else if x < config.finish_date_min_x {
            self.line.start_date = Some(text.to_string());
        } else {
            append_cell(&mut self.line.finish_date, text, " ");
        }
    }
}
