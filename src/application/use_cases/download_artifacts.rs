use crate::application::dto::{DownloadRequest, DownloadSummary};
use crate::ports::outbound::{ArtifactRepository, ArtifactStore, ProgressReporter};
use crate::scan::domain::{Coordinate, DependencyRecord};
use crate::scan::services::{ArtifactLayout, ArtifactLocation};
use crate::shared::error::ScanError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// DownloadArtifactsUseCase - fetches the artifact files of resolved
/// dependencies into the local download tree
///
/// Every (dependency, extension) pair is one independent download. A 404 is
/// counted as "not available"; any other failure is recorded in the summary
/// and never stops the remaining downloads. Writes run on the blocking
/// thread pool.
pub struct DownloadArtifactsUseCase<AR, AS, PR> {
    artifact_repository: AR,
    artifact_store: Arc<AS>,
    progress_reporter: PR,
}

impl<AR, AS, PR> DownloadArtifactsUseCase<AR, AS, PR>
where
    AR: ArtifactRepository,
    AS: ArtifactStore + 'static,
    PR: ProgressReporter,
{
    pub fn new(artifact_repository: AR, artifact_store: AS, progress_reporter: PR) -> Self {
        Self {
            artifact_repository,
            artifact_store: Arc::new(artifact_store),
            progress_reporter,
        }
    }

    pub async fn execute(
        &self,
        request: &DownloadRequest,
        dependencies: &[DependencyRecord],
    ) -> DownloadSummary {
        let mut summary = DownloadSummary::default();
        let locations = self.plan(request, dependencies, &mut summary);
        let total = locations.len();

        if total > 0 {
            self.progress_reporter.report(&format!(
                "📦 Downloading up to {} artifact file(s) for {} dependencies",
                total,
                dependencies.len()
            ));
        }

        let mut downloads = stream::iter(locations)
            .map(|location| async move {
                let result = self.artifact_repository.fetch_artifact(&location.url).await;
                (location, result)
            })
            .buffer_unordered(request.max_concurrency.max(1));

        let mut done = 0;
        while let Some((location, result)) = downloads.next().await {
            done += 1;
            self.progress_reporter
                .report_progress(done, total, Some("Downloading artifacts"));

            match result {
                Ok(Some(content)) => {
                    let url = location.url.clone();
                    match self.store(location, content).await {
                        Ok(path) => {
                            debug!(%url, path = %path.display(), "artifact stored");
                            summary.downloaded += 1;
                        }
                        Err(e) => summary.failures.push(ScanError::ArtifactDownloadFailed {
                            url,
                            reason: format!("{:#}", e),
                        }),
                    }
                }
                Ok(None) => summary.not_available += 1,
                Err(e) => summary.failures.push(ScanError::ArtifactDownloadFailed {
                    url: location.url,
                    reason: format!("{:#}", e),
                }),
            }
        }

        summary.failures.sort_by_key(|failure| failure.to_string());
        for failure in &summary.failures {
            self.progress_reporter.report_error(&format!("⚠️  {}", failure));
        }
        self.progress_reporter.report_completion(&format!(
            "✅ Artifacts: {} downloaded, {} not available, {} failed",
            summary.downloaded,
            summary.not_available,
            summary.failed()
        ));

        summary
    }

    async fn store(&self, location: ArtifactLocation, content: Vec<u8>) -> Result<PathBuf> {
        let store = Arc::clone(&self.artifact_store);
        tokio::task::spawn_blocking(move || {
            store.store(&location.relative_dir, &location.file_name, &content)
        })
        .await?
    }

    /// Expands dependencies into artifact locations
    ///
    /// Dependencies whose name cannot be laid out as a Maven path are
    /// recorded as failures.
    fn plan(
        &self,
        request: &DownloadRequest,
        dependencies: &[DependencyRecord],
        summary: &mut DownloadSummary,
    ) -> Vec<ArtifactLocation> {
        let mut locations = Vec::new();
        for record in dependencies {
            match Coordinate::new(record.name(), record.version()) {
                Ok(coordinate) => locations.extend(ArtifactLayout::locations(
                    &request.repository_url,
                    &coordinate,
                    &request.extensions,
                )),
                Err(e) => summary.failures.push(ScanError::ArtifactDownloadFailed {
                    url: format!("{}@{}", record.name(), record.version()),
                    reason: format!("cannot build repository path: {}", first_line(&e)),
                }),
            }
        }
        locations
    }
}

fn first_line(error: &ScanError) -> String {
    error.to_string().lines().next().unwrap_or_default().to_string()
}
