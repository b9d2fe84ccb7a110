use crate::ports::outbound::AdvisoryDetailRepository;
use crate::scan::domain::AdvisoryDetail;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// CachingAdvisoryDetailRepository memoizes advisory details for one run.
///
/// The same advisory id is commonly attached to several dependencies and to
/// several root coordinates of a batch, so each id is fetched at most once
/// unless the fetch fails. Failures are not memoized.
///
/// Concurrent misses for the same id may both reach the inner repository;
/// the later insert wins and both callers get equal values.
pub struct CachingAdvisoryDetailRepository<R: AdvisoryDetailRepository> {
    inner: R,
    cache: Arc<DashMap<String, AdvisoryDetail>>,
}

impl<R: AdvisoryDetailRepository> CachingAdvisoryDetailRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }
}

#[async_trait]
impl<R: AdvisoryDetailRepository> AdvisoryDetailRepository for CachingAdvisoryDetailRepository<R> {
    async fn fetch_advisory_detail(&self, advisory_id: &str) -> Result<AdvisoryDetail> {
        if let Some(cached) = self.cache.get(advisory_id) {
            debug!(advisory_id, "advisory detail served from memo");
            return Ok(cached.clone());
        }

        let detail = self.inner.fetch_advisory_detail(advisory_id).await?;
        self.cache.insert(advisory_id.to_string(), detail.clone());

        Ok(detail)
    }
}
