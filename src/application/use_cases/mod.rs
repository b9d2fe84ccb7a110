/// Use cases module containing application business logic orchestration
mod download_artifacts;
mod scan_package;

pub use download_artifacts::DownloadArtifactsUseCase;
pub use scan_package::ScanPackageUseCase;
