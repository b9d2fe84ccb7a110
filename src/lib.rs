//! mvn-vuln-report - Maven dependency and vulnerability reporting
//!
//! This library resolves the transitive dependency graph of a Maven
//! coordinate through deps.dev, correlates every dependency with its
//! security advisories, and produces CVE records ready for a CSV or JSON
//! report. Resolved artifacts can also be downloaded from a Maven repository.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan`): coordinates, dependency records, advisory correlation
//! - **Application Layer** (`application`): use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): deps.dev and Maven clients, file system, console, formatters
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use mvn_vuln_report::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let deps_dev = DepsDevClient::new(Duration::from_secs(30))?;
//! let use_case = ScanPackageUseCase::new(
//!     deps_dev.clone(),
//!     deps_dev.clone(),
//!     CachingAdvisoryDetailRepository::new(deps_dev),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ScanRequest::builder()
//!     .token("com.example:libfoo@v1.2.3")
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! let mut report = VulnerabilityReport::new(response.metadata.clone());
//! report.merge(response.cve_records);
//! println!("{}", CsvReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemArtifactStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{CsvReportFormatter, JsonReportFormatter};
    pub use crate::adapters::outbound::network::{
        CachingAdvisoryDetailRepository, DepsDevClient, MavenRepositoryClient,
    };
    pub use crate::application::dto::{
        DownloadRequest, DownloadSummary, OutputFormat, ScanRequest, ScanResponse,
    };
    pub use crate::application::use_cases::{DownloadArtifactsUseCase, ScanPackageUseCase};
    pub use crate::ports::outbound::{
        AdvisoryDetailRepository, AdvisoryRepository, ArtifactRepository, ArtifactStore,
        CoordinateListReader, DependencyGraphRepository, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::scan::domain::{
        AdvisoryDetail, AdvisoryKey, AdvisoryRef, Coordinate, CveRecord, DependencyRecord,
        ReportMetadata, Severity, VulnerabilityReport,
    };
    pub use crate::scan::services::{AdvisoryCorrelator, ArtifactLayout, CveDetailResolver};
    pub use crate::shared::error::ScanError;
    pub use crate::shared::Result;
}
