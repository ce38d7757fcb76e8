//! Output converters for reconstructed schedules.
//!
//! Converters turn an ordered record sequence into a sink format. Only CSV is
//! implemented; the record model is plain `serde`-derived data, so other
//! formats are a `serde_json::to_string` away.

pub mod csv;

// Re-export main types
pub use self::csv::CsvConverter;
