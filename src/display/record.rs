//! Record display formatting
//!
//! Formats records for terminal output in detail and table views.

use std::ops::Range;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;

/// One table row per record
#[derive(Tabled)]
struct RecordRow<'a> {
    #[tabled(rename = "SRNO")]
    serial: u32,
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Age")]
    age: u8,
    #[tabled(rename = "Gender")]
    gender: &'static str,
    #[tabled(rename = "Occupation")]
    occupation: &'a str,
}

impl<'a> From<&'a Record> for RecordRow<'a> {
    fn from(record: &'a Record) -> Self {
        Self {
            serial: record.serial,
            name: &record.name,
            age: record.age,
            gender: record.gender.code(),
            occupation: &record.occupation,
        }
    }
}

/// Format records as detail blocks, each followed by a blank line
pub fn format_record_details(records: &[&Record]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&record.render());
        output.push('\n');
    }

    output
}

/// Format records as a table
pub fn format_record_table(records: &[&Record]) -> String {
    let rows: Vec<RecordRow<'_>> = records.iter().map(|record| RecordRow::from(*record)).collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Header line for a page of the full listing
pub fn format_page_header(range: &Range<usize>, total: usize) -> String {
    format!(
        "Showing entries {} to {} of {}\n",
        range.start + 1,
        range.end,
        total
    )
}

/// Format the outcome of a search
pub fn format_search_results(records: &[&Record]) -> String {
    if records.is_empty() {
        return "No matching entries found.\n".to_string();
    }

    format!(
        "\nFound {} matching entries:\n\n{}",
        records.len(),
        format_record_details(records)
    )
}
