pub mod advisory_correlator;
pub mod artifact_layout;
pub mod cve_detail_resolver;

pub use advisory_correlator::{AdvisoryCorrelator, Correlation, RejectedAdvisoryKey};
pub use artifact_layout::{ArtifactLayout, ArtifactLocation, DEFAULT_EXTENSIONS};
pub use cve_detail_resolver::CveDetailResolver;
