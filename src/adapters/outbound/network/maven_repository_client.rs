use super::http::{build_client, get_with_retry};
use crate::ports::outbound::ArtifactRepository;
use crate::shared::security::MAX_ARTIFACT_SIZE;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

/// Default Maven Central repository
pub const DEFAULT_MAVEN_REPOSITORY_URL: &str = "https://repo1.maven.org/maven2";

/// MavenRepositoryClient adapter for downloading artifacts over HTTP
///
/// A 404 is reported as `Ok(None)`: packages rarely publish every extension.
#[derive(Clone)]
pub struct MavenRepositoryClient {
    client: reqwest::Client,
    max_retries: u32,
    max_size: u64,
}

impl MavenRepositoryClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            max_retries: 2,
            max_size: MAX_ARTIFACT_SIZE,
        })
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Lowers the per-artifact size limit
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size.min(MAX_ARTIFACT_SIZE);
        self
    }
}

fn too_large(size: u64, limit: u64) -> anyhow::Error {
    anyhow::anyhow!(
        "artifact is too large ({} bytes, limit {} bytes)",
        size,
        limit
    )
}

/// Collects a body stream, failing as soon as it grows past `limit`
async fn read_capped<S, B, E>(stream: S, limit: u64) -> Result<Vec<u8>>
where
    S: Stream<Item = std::result::Result<B, E>>,
    B: AsRef<[u8]>,
    E: std::error::Error + Send + Sync + 'static,
{
    let mut stream = std::pin::pin!(stream);
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Failed to read response body")?;
        let chunk = chunk.as_ref();
        let size = body.len() as u64 + chunk.len() as u64;
        if size > limit {
            return Err(too_large(size, limit));
        }
        body.extend_from_slice(chunk);
    }
    Ok(body)
}

#[async_trait]
impl ArtifactRepository for MavenRepositoryClient {
    async fn fetch_artifact(&self, url: &str) -> Result<Option<Vec<u8>>> {
        let response = get_with_retry(&self.client, url, self.max_retries).await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            debug!(url, "artifact not available");
            return Ok(None);
        }
        if !status.is_success() {
            anyhow::bail!("HTTP error code {}", status);
        }
        // Content-Length is advisory; the streamed total is what counts
        if let Some(length) = response.content_length() {
            if length > self.max_size {
                return Err(too_large(length, self.max_size));
            }
        }

        let body = read_capped(response.bytes_stream(), self.max_size).await?;
        Ok(Some(body))
    }
}
