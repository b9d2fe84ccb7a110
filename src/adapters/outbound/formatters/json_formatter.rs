use crate::ports::outbound::ReportFormatter;
use crate::scan::domain::VulnerabilityReport;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: &'a str,
    run_id: &'a str,
    tool: Tool<'a>,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonRecord<'a> {
    cve_number: &'a str,
    package_name: &'a str,
    version: &'a str,
    advisory_id: &'a str,
    title: &'a str,
    cvss_score: f64,
    cvss_vector: &'a str,
    severity: &'static str,
}

/// JsonReportFormatter adapter for machine-readable reports
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &VulnerabilityReport) -> Result<String> {
        let metadata = report.metadata();
        let document = JsonReport {
            generated_at: metadata.timestamp(),
            run_id: metadata.run_id(),
            tool: Tool {
                name: metadata.tool_name(),
                version: metadata.tool_version(),
            },
            records: report
                .records()
                .map(|record| JsonRecord {
                    cve_number: record.cve_number(),
                    package_name: record.package_name(),
                    version: record.version(),
                    advisory_id: record.advisory_id(),
                    title: record.title(),
                    cvss_score: record.cvss_score(),
                    cvss_vector: record.cvss_vector(),
                    severity: record.severity().as_str(),
                })
                .collect(),
        };

        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
