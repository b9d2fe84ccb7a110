/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (deps.dev, Maven repository,
/// file system, console).
pub mod advisory_repository;
pub mod artifact_repository;
pub mod coordinate_list_reader;
pub mod dependency_graph_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use advisory_repository::{AdvisoryDetailRepository, AdvisoryRepository};
pub use artifact_repository::{ArtifactRepository, ArtifactStore};
pub use coordinate_list_reader::CoordinateListReader;
pub use dependency_graph_repository::DependencyGraphRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
