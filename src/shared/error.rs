use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested coordinate was resolved
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed coordinate, graph fetch failure, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency resolution and advisory correlation.
///
/// The first five variants form the failure taxonomy of the scan pipeline.
/// Each one has a fixed scope:
///
/// | Variant                    | Scope                                   |
/// |----------------------------|-----------------------------------------|
/// | `MalformedCoordinate`      | one input coordinate (aborts it)        |
/// | `GraphFetchFailed`         | one input coordinate (aborts it)        |
/// | `NodeParseSkipped`         | one graph node (skipped)                |
/// | `AdvisoryFetchFailed`      | one dependency (zero advisories)        |
/// | `AdvisoryDetailIncomplete` | one advisory (excluded from the report) |
///
/// Scoped variants are collected as diagnostics rather than propagated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScanError {
    #[error("Malformed coordinate: '{input}'\nReason: {reason}\n\n💡 Hint: Use the form group:artifact@vVERSION (e.g. com.google.guava:guava@v32.1.3-jre)")]
    MalformedCoordinate { input: String, reason: String },

    #[error("Failed to resolve dependency graph for {coordinate}\nDetails: {reason}\n\n💡 Hint: Check the coordinate exists on deps.dev and your network connection")]
    GraphFetchFailed { coordinate: String, reason: String },

    #[error("Skipped graph node #{index} of {coordinate}: {reason}")]
    NodeParseSkipped {
        coordinate: String,
        index: usize,
        reason: String,
    },

    #[error("Failed to fetch advisories for {name}@{version}: {reason}")]
    AdvisoryFetchFailed {
        name: String,
        version: String,
        reason: String,
    },

    #[error("Advisory {advisory_id} for {name} excluded from report: {reason}")]
    AdvisoryDetailIncomplete {
        name: String,
        advisory_id: String,
        reason: String,
    },

    #[error("Failed to download {url}: {reason}")]
    ArtifactDownloadFailed { url: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builders and configuration
    #[error("Validation error: {message}")]
    Validation { message: String },
}
