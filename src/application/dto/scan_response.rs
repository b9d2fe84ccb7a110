use crate::scan::domain::{AdvisoryRef, Coordinate, CveRecord, DependencyRecord, ReportMetadata};
use crate::shared::error::ScanError;

/// ScanResponse - result of scanning one root coordinate
///
/// `cve_records` are sorted by (package name, version, advisory id).
/// `diagnostics` holds every scoped failure of the run; none of them
/// produced a record.
#[derive(Debug, Clone)]
pub struct ScanResponse {
    pub coordinate: Coordinate,
    pub metadata: ReportMetadata,
    /// Resolved dependencies in name order
    pub dependencies: Vec<DependencyRecord>,
    pub advisory_refs: Vec<AdvisoryRef>,
    pub cve_records: Vec<CveRecord>,
    pub diagnostics: Vec<ScanError>,
}
