//! # Schedule Oxide
//!
//! Reconstructs a tabular activity schedule from a stream of positioned text
//! fragments extracted from a paginated document.
//!
//! Document renderers hand back text as loose fragments: a string plus an x/y
//! placement, with no row or column structure. This crate rebuilds that
//! structure for activity-schedule tables (Primavera-style lookahead reports):
//! fragments are grouped into physical rows by vertical position, routed into
//! logical columns by horizontal position, section-header lines are detected,
//! and cleaned structured records come out the other end.
//!
//! Decoding the document's binary format is out of scope — any source that can
//! produce ordered `(text, x, y)` fragments per page can feed the
//! reconstructor.
//!
//! ## Quick Start
//!
//! ```
//! use schedule_oxide::fragment::Fragment;
//! use schedule_oxide::layout::RowReconstructor;
//!
//! let page = vec![
//!     Fragment::new("SITEWORK", 50.0, 700.0),
//!     Fragment::new("A100", 10.0, 650.0),
//!     Fragment::new("Clear and grub", 150.0, 650.0),
//!     Fragment::new("5", 350.0, 650.0),
//!     Fragment::new("5", 450.0, 650.0),
//!     Fragment::new("01Jan24", 550.0, 650.0),
//!     Fragment::new("05Jan24", 650.0, 650.0),
//! ];
//!
//! let records = RowReconstructor::new().reconstruct(vec![page]);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].section, "SITEWORK");
//! assert_eq!(records[0].activity_id, "A100");
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Input/output data models
pub mod fragment;
pub mod record;

// Layout reconstruction
pub mod config;
pub mod layout;

// Output converters
pub mod converters;

// Re-export commonly used types
pub use config::LayoutConfig;
pub use converters::CsvConverter;
pub use error::{Error, Result};
pub use fragment::{Fragment, Page};
pub use layout::{ReconstructionSummary, RowReconstructor};
pub use record::ActivityRecord;
