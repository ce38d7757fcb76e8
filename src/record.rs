//! Structured activity records — the output model.

use serde::{Deserialize, Serialize};

/// The finalized, cleaned output for one schedule activity.
///
/// Produced by [`RowReconstructor`](crate::layout::RowReconstructor) and
/// immutable from then on. Every record that survives output filtering has a
/// non-empty `activity_id` that is neither a page marker nor the totals row.
///
/// All fields are kept as strings: durations and dates pass through exactly as
/// printed in the source document (after cleaning), since schedule reports mix
/// day counts, lags, and date formats that downstream sinks interpret
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Section label active while this activity's line accumulated.
    pub section: String,
    /// Activity identifier, trimmed. Never empty in filtered output.
    pub activity_id: String,
    /// Activity name, trimmed. `None` when no fragment landed in the name band.
    pub activity_name: Option<String>,
    /// Original duration as printed; `"0"` when the band was empty.
    pub original_duration: String,
    /// Remaining duration as printed; `"0"` when the band was empty.
    pub remaining_duration: String,
    /// Cleaned start date; empty string when the band was empty.
    pub start_date: String,
    /// Cleaned finish date; empty string when the band was empty.
    pub finish_date: String,
}
