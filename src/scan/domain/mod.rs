pub mod advisory;
pub mod coordinate;
pub mod cve_record;
pub mod dependency_graph;
pub mod dependency_record;
pub mod report_metadata;
pub mod resolution_context;
pub mod vulnerability_report;

pub use advisory::{AdvisoryDetail, AdvisoryKey, AdvisoryRef};
pub use coordinate::Coordinate;
pub use cve_record::{CveRecord, Severity, NO_CVE_FOUND};
pub use dependency_graph::{DependencyGraph, GraphNode, SkippedNode};
pub use dependency_record::DependencyRecord;
pub use report_metadata::ReportMetadata;
pub use resolution_context::ResolutionContext;
pub use vulnerability_report::VulnerabilityReport;
