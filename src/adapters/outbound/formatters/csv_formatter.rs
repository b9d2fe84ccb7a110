use crate::ports::outbound::ReportFormatter;
use crate::scan::domain::VulnerabilityReport;
use crate::shared::Result;
use anyhow::Context;

/// Fixed report columns
pub const CSV_HEADER: [&str; 6] = [
    "CVE Number",
    "Package Name",
    "Version",
    "Title",
    "CVSS Score",
    "CVSS Vector",
];

/// CsvReportFormatter adapter for the tabular vulnerability report
///
/// Writes the header row even when the report is empty. Scores are
/// written with one decimal place.
pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn format(&self, report: &VulnerabilityReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(CSV_HEADER)?;

        for record in report.records() {
            let score = format!("{:.1}", record.cvss_score());
            writer.write_record([
                record.cve_number(),
                record.package_name(),
                record.version(),
                record.title(),
                score.as_str(),
                record.cvss_vector(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::domain::{CveRecord, ReportMetadata, NO_CVE_FOUND};

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "mvn-vuln-report".to_string(),
            "0.3.0".to_string(),
            "urn:uuid:test".to_string(),
        )
    }

    fn record(cve: &str, package: &str, advisory: &str, title: &str, score: f64) -> CveRecord {
        CveRecord::new(
            cve.to_string(),
            package.to_string(),
            "4.5.6".to_string(),
            advisory.to_string(),
            title.to_string(),
            score,
            "CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N".to_string(),
        )
    }

    #[test]
    fn test_empty_report_has_header_only() {
        let report = VulnerabilityReport::new(metadata());
        let output = CsvReportFormatter::new().format(&report).unwrap();
        assert_eq!(
            output,
            "CVE Number,Package Name,Version,Title,CVSS Score,CVSS Vector\n"
        );
    }

    #[test]
    fn test_rows_follow_report_order() {
        let report = VulnerabilityReport::from_records(
            metadata(),
            vec![
                record("CVE-2021-2", "org.zeta:z", "GHSA-2", "Second", 5.0),
                record("CVE-2020-0001", "com.example:libbar", "ADV-1", "Sample", 7.5),
            ],
        );

        let output = CsvReportFormatter::new().format(&report).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "CVE-2020-0001,com.example:libbar,4.5.6,Sample,7.5,CVSS:3.1/AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:N"
        );
        assert!(lines[2].starts_with("CVE-2021-2,org.zeta:z,"));
    }

    #[test]
    fn test_title_with_comma_is_quoted() {
        let report = VulnerabilityReport::from_records(
            metadata(),
            vec![record(NO_CVE_FOUND, "a.b:c", "GHSA-1", "Overflow, remote", 9.8)],
        );

        let output = CsvReportFormatter::new().format(&report).unwrap();
        assert!(output.contains("No CVE found,a.b:c,4.5.6,\"Overflow, remote\",9.8,"));
    }

    #[test]
    fn test_score_has_one_decimal() {
        let report = VulnerabilityReport::from_records(
            metadata(),
            vec![record("CVE-1", "a.b:c", "GHSA-1", "t", 10.0)],
        );

        let output = CsvReportFormatter::new().format(&report).unwrap();
        assert!(output.contains(",10.0,"));
    }
}
