//! Extract an activity schedule from a fragment dump.
//!
//! Reads a JSON dump of per-page positioned fragments (the format a document
//! text extractor produces: an array of pages, each an array of
//! `{"text", "x", "y"}` objects), reconstructs the schedule table, and writes
//! it as CSV.
//!
//! Usage:
//!   extract_schedule <fragments.json> [output.csv]
//!
//! With no output path the CSV goes to stdout. Set RUST_LOG=debug to see
//! per-line reconstruction decisions.

use schedule_oxide::converters::CsvConverter;
use schedule_oxide::error::Result;
use schedule_oxide::fragment::Page;
use schedule_oxide::layout::RowReconstructor;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::process;

fn run(input: &str, output: Option<&str>) -> Result<()> {
    let json = fs::read_to_string(input)?;
    let pages: Vec<Page> = serde_json::from_str(&json)?;

    let (records, summary) = RowReconstructor::new().reconstruct_with_summary(pages);
    log::info!(
        "{}: {} pages, {} fragments, {} activities",
        input,
        summary.pages,
        summary.fragments,
        summary.records
    );

    let converter = CsvConverter::new();
    match output {
        Some(path) => converter.write_to(&records, BufWriter::new(File::create(path)?))?,
        None => converter.write_to(&records, io::stdout().lock())?,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <fragments.json> [output.csv]", args[0]);
        process::exit(1);
    }

    if let Err(err) = run(&args[1], args.get(2).map(String::as_str)) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
