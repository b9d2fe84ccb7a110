use crate::scan::domain::{AdvisoryDetail, AdvisoryKey};
use crate::shared::Result;
use async_trait::async_trait;

/// AdvisoryRepository port for listing the advisories of a package version
///
/// Implementations must be `Send + Sync`; lookups for different
/// dependencies run concurrently.
#[async_trait]
pub trait AdvisoryRepository: Send + Sync {
    /// Fetches the `advisoryKeys` of one exact package version
    ///
    /// An absent or empty `advisoryKeys` field yields an empty list.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be parsed
    async fn fetch_advisory_keys(&self, name: &str, version: &str) -> Result<Vec<AdvisoryKey>>;
}

/// AdvisoryDetailRepository port for fetching full advisory records
#[async_trait]
pub trait AdvisoryDetailRepository: Send + Sync {
    /// Fetches the detail of one advisory by id
    ///
    /// Missing optional fields are returned as `None`; whether the record is
    /// usable is decided by the caller.
    ///
    /// # Errors
    /// Returns an error if the request fails or the body cannot be parsed
    async fn fetch_advisory_detail(&self, advisory_id: &str) -> Result<AdvisoryDetail>;
}
