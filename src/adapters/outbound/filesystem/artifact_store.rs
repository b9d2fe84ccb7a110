use crate::ports::outbound::ArtifactStore;
use crate::shared::error::ScanError;
use crate::shared::security::{validate_not_symlink, validate_path_segment};
use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// FileSystemArtifactStore adapter writing artifacts below a download root
///
/// The root is created on first use. Relative directories must stay inside
/// the root; existing symlinked targets are refused.
pub struct FileSystemArtifactStore {
    root: PathBuf,
}

impl FileSystemArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn validate_relative_dir(relative_dir: &Path) -> Result<()> {
        for component in relative_dir.components() {
            match component {
                Component::Normal(segment) => {
                    validate_path_segment(&segment.to_string_lossy(), "Directory segment")?
                }
                other => anyhow::bail!(
                    "Security: artifact directory component {:?} is not allowed",
                    other
                ),
            }
        }
        Ok(())
    }

    fn write_error(path: &Path, details: impl ToString) -> ScanError {
        ScanError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
    }
}

impl ArtifactStore for FileSystemArtifactStore {
    fn store(&self, relative_dir: &Path, file_name: &str, content: &[u8]) -> Result<PathBuf> {
        Self::validate_relative_dir(relative_dir)?;
        validate_path_segment(file_name, "File name")?;

        let dir = self.root.join(relative_dir);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| Self::write_error(&dir, e))?;
            debug!(dir = %dir.display(), "created artifact directory");
        }

        let path = dir.join(file_name);
        if fs::symlink_metadata(&path).is_ok() {
            validate_not_symlink(&path, "write")?;
        }
        fs::write(&path, content).map_err(|e| Self::write_error(&path, e))?;

        Ok(path)
    }
}
