/// Network adapters for deps.dev and Maven repository calls
mod caching_advisory_client;
mod deps_dev_client;
mod http;
mod maven_repository_client;

pub use caching_advisory_client::CachingAdvisoryDetailRepository;
pub use deps_dev_client::{DepsDevClient, DEFAULT_ADVISORY_BASE_URL, DEFAULT_DEPS_DEV_BASE_URL};
pub use maven_repository_client::{MavenRepositoryClient, DEFAULT_MAVEN_REPOSITORY_URL};
