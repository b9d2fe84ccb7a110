/// Formatter adapters for the supported report formats
mod csv_formatter;
mod json_formatter;

pub use csv_formatter::{CsvReportFormatter, CSV_HEADER};
pub use json_formatter::JsonReportFormatter;
