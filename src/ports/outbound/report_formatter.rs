use crate::scan::domain::VulnerabilityReport;
use crate::shared::Result;

/// ReportFormatter port for serializing the vulnerability report
///
/// This port abstracts the formatting logic for different report formats
/// (CSV, JSON).
pub trait ReportFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &VulnerabilityReport) -> Result<String>;
}
