use crate::adapters::outbound::formatters::{CsvReportFormatter, JsonReportFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the formatter adapter for an output format so the CLI only deals
/// with `OutputFormat`.
pub struct FormatterFactory;

impl FormatterFactory {
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Csv => Box::new(CsvReportFormatter::new()),
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use mvn_vuln_report::application::dto::OutputFormat;
    /// use mvn_vuln_report::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Csv);
    /// assert_eq!(message, "📝 Writing CSV vulnerability report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Csv => "📝 Writing CSV vulnerability report...",
            OutputFormat::Json => "📝 Writing JSON vulnerability report...",
        }
    }
}
