use async_trait::async_trait;
use mvn_vuln_report::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock ArtifactRepository serving in-memory files by URL
///
/// Unknown URLs behave like a 404.
#[derive(Default)]
pub struct MockArtifactRepository {
    files: HashMap<String, Vec<u8>>,
    failing: HashSet<String>,
}

impl MockArtifactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, url: &str, content: &[u8]) -> Self {
        self.files.insert(url.to_string(), content.to_vec());
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }
}

#[async_trait]
impl ArtifactRepository for MockArtifactRepository {
    async fn fetch_artifact(&self, url: &str) -> Result<Option<Vec<u8>>> {
        if self.failing.contains(url) {
            anyhow::bail!("HTTP error code 503 Service Unavailable");
        }
        Ok(self.files.get(url).cloned())
    }
}
