use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size for a coordinate list file (1 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum size for a single downloaded artifact (512 MB)
pub const MAX_ARTIFACT_SIZE: u64 = 512 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists, is a regular file and is within `max_size`
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than `max_size`
pub fn validate_regular_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, max_size)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Rejects path components that could escape the download root
///
/// Group segments, artifact ids and versions end up as directory names,
/// so `..`, separators and empty segments are refused.
pub fn validate_path_segment(segment: &str, segment_type: &str) -> Result<()> {
    if segment.is_empty() {
        anyhow::bail!("Security: {} must not be empty", segment_type);
    }
    if segment == "." || segment.contains("..") {
        anyhow::bail!(
            "Security: {} '{}' contains '..' which is not allowed",
            segment_type,
            segment
        );
    }
    if segment.contains('/') || segment.contains('\\') {
        anyhow::bail!(
            "Security: {} '{}' contains path separators which are not allowed",
            segment_type,
            segment
        );
    }
    Ok(())
}
