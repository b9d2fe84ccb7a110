use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// ArtifactRepository port for fetching binary artifacts (pom, jar, ...)
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// Downloads one artifact file
    ///
    /// # Returns
    /// `Some(bytes)` on success, `None` if the repository does not have the
    /// file (HTTP 404). Most packages publish only some extensions.
    ///
    /// # Errors
    /// Returns an error for any other failed request
    async fn fetch_artifact(&self, url: &str) -> Result<Option<Vec<u8>>>;
}

/// ArtifactStore port for persisting downloaded artifacts
pub trait ArtifactStore: Send + Sync {
    /// Writes `content` to `{root}/{relative_dir}/{file_name}`, creating
    /// directories as needed
    ///
    /// # Returns
    /// The path that was written
    fn store(&self, relative_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf>;
}
