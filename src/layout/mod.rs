//! Layout reconstruction for activity-schedule tables.
//!
//! This module rebuilds row/column structure from loose positioned fragments:
//! - New-line detection by vertical position
//! - Column routing by horizontal banding
//! - Section-header and noise-line recognition
//! - Record finalization and output filtering

pub mod noise_filter;
pub mod row_reconstructor;

// Re-export main types
pub use noise_filter::{clean_date, is_column_header_repeat, is_page_marker, is_section_header, is_total_row};
pub use row_reconstructor::{filter_noise_records, ReconstructionSummary, RowReconstructor};
