use super::{CveRecord, ReportMetadata, Severity};
use std::collections::BTreeMap;

/// VulnerabilityReport aggregate handed to the report formatters
///
/// Merges the CVE records of every scanned coordinate. Records are keyed by
/// (package name, version, advisory id), so a dependency shared by two root
/// coordinates is listed once, and iteration order is stable.
#[derive(Debug, Clone)]
pub struct VulnerabilityReport {
    metadata: ReportMetadata,
    records: BTreeMap<(String, String, String), CveRecord>,
}

impl VulnerabilityReport {
    pub fn new(metadata: ReportMetadata) -> Self {
        Self {
            metadata,
            records: BTreeMap::new(),
        }
    }

    pub fn from_records(
        metadata: ReportMetadata,
        records: impl IntoIterator<Item = CveRecord>,
    ) -> Self {
        let mut report = Self::new(metadata);
        report.merge(records);
        report
    }

    pub fn merge(&mut self, records: impl IntoIterator<Item = CveRecord>) {
        for record in records {
            self.records.insert(record.sort_key(), record);
        }
    }

    pub fn metadata(&self) -> &ReportMetadata {
        &self.metadata
    }

    /// Records ordered by package name, version, then advisory id
    pub fn records(&self) -> impl Iterator<Item = &CveRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.records()
            .filter(|record| record.severity() == severity)
            .count()
    }

    pub fn affected_package_count(&self) -> usize {
        let mut packages: Vec<(&str, &str)> = self
            .records()
            .map(|r| (r.package_name(), r.version()))
            .collect();
        packages.dedup();
        packages.len()
    }
}
