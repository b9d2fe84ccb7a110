/// Mock implementations for testing
mod mock_advisory_repository;
mod mock_artifact_repository;
mod mock_dependency_graph_repository;
mod mock_progress_reporter;

pub use mock_advisory_repository::{MockAdvisoryDetailRepository, MockAdvisoryRepository};
pub use mock_artifact_repository::MockArtifactRepository;
pub use mock_dependency_graph_repository::MockDependencyGraphRepository;
pub use mock_progress_reporter::MockProgressReporter;
