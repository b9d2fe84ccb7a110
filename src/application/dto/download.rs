use crate::scan::services::DEFAULT_EXTENSIONS;
use crate::shared::error::ScanError;

/// DownloadRequest - where and what to fetch for a set of dependencies
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    pub repository_url: String,
    pub extensions: Vec<String>,
    pub max_concurrency: usize,
}

impl DownloadRequest {
    pub fn new(repository_url: impl Into<String>) -> Self {
        Self {
            repository_url: repository_url.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_concurrency: super::DEFAULT_MAX_CONCURRENCY,
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }
}

/// Outcome counts of one download run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    /// Files the repository does not have (HTTP 404)
    pub not_available: usize,
    /// One `ArtifactDownloadFailed` per failed file, ordered by URL
    pub failures: Vec<ScanError>,
}

impl DownloadSummary {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn attempted(&self) -> usize {
        self.downloaded + self.not_available + self.failed()
    }
}
