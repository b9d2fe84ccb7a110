/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and results back out to the CLI,
/// keeping the domain layer isolated.
mod download;
mod output_format;
mod scan_request;
mod scan_response;

pub use download::{DownloadRequest, DownloadSummary};
pub use output_format::OutputFormat;
pub use scan_request::{ScanRequest, ScanRequestBuilder, DEFAULT_MAX_CONCURRENCY};
pub use scan_response::ScanResponse;
