//! CSV converter for activity records.

use crate::error::Result;
use crate::record::ActivityRecord;
use std::io::Write;

/// Fixed CSV header row, matching the source report's column titles.
const CSV_HEADER: [&str; 6] = [
    "Activity ID",
    "Activity Name",
    "Original Duration",
    "Remaining Duration",
    "Start Date",
    "Finish Date",
];

/// Converter from activity records to CSV.
///
/// Writes the fixed six-column header row followed by one line per record.
/// The section label is a grouping aid for tabular display and is not part of
/// the CSV contract. Quoting and escaping are delegated to the `csv` crate.
///
/// # Examples
///
/// ```
/// use schedule_oxide::converters::CsvConverter;
///
/// let converter = CsvConverter::new();
/// let csv = converter.convert(&[]).unwrap();
/// assert!(csv.starts_with("Activity ID,Activity Name"));
/// ```
#[derive(Debug, Default)]
pub struct CsvConverter;

impl CsvConverter {
    /// Create a new CSV converter.
    pub fn new() -> Self {
        Self
    }

    /// Serialize records to a CSV string.
    pub fn convert(&self, records: &[ActivityRecord]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(records, &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Serialize records as CSV into an arbitrary writer.
    pub fn write_to(&self, records: &[ActivityRecord], writer: impl Write) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(CSV_HEADER)?;
        for record in records {
            csv_writer.write_record([
                record.activity_id.as_str(),
                record.activity_name.as_deref().unwrap_or(""),
                record.original_duration.as_str(),
                record.remaining_duration.as_str(),
                record.start_date.as_str(),
                record.finish_date.as_str(),
            ])?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, name: &str) -> ActivityRecord {
        ActivityRecord {
            section: "SITEWORK".to_string(),
            activity_id: id.to_string(),
            activity_name: Some(name.to_string()),
            original_duration: "5".to_string(),
            remaining_duration: "3".to_string(),
            start_date: "01Jan24".to_string(),
            finish_date: "05Jan24".to_string(),
        }
    }

    #[test]
    fn test_header_row_only_for_empty_input() {
        let csv = CsvConverter::new().convert(&[]).unwrap();
        assert_eq!(
            csv,
            "Activity ID,Activity Name,Original Duration,Remaining Duration,Start Date,Finish Date\n"
        );
    }

    #[test]
    fn test_one_line_per_record() {
        let records = vec![record("A100", "Pour footings"), record("A110", "Strip forms")];
        let csv = CsvConverter::new().convert(&records).unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "A100,Pour footings,5,3,01Jan24,05Jan24");
        assert_eq!(lines[2], "A110,Strip forms,5,3,01Jan24,05Jan24");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = vec![record("A100", "Excavate, shore, and brace")];
        let csv = CsvConverter::new().convert(&records).unwrap();
        assert!(csv.contains("\"Excavate, shore, and brace\""));
    }

    #[test]
    fn test_missing_name_serializes_as_empty_field() {
        let mut rec = record("A100", "");
        rec.activity_name = None;
        let csv = CsvConverter::new().convert(&[rec]).unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with("A100,,5,"));
    }
}
