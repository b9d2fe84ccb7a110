use crate::ports::outbound::CoordinateListReader;
use crate::shared::error::ScanError;
use crate::shared::security::{validate_regular_file, MAX_INPUT_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading coordinate list files
///
/// One coordinate per line. Blank lines and lines starting with `#` are
/// ignored, as is anything after a `#` on a line.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| line.split('#').next().unwrap_or("").trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateListReader for FileSystemReader {
    fn read_coordinates(&self, path: &Path) -> Result<Vec<String>> {
        let read_error = |details: String| ScanError::FileReadError {
            path: path.to_path_buf(),
            details,
        };

        validate_regular_file(path, "coordinate list", MAX_INPUT_FILE_SIZE)
            .map_err(|e| read_error(e.to_string()))?;
        let content = fs::read_to_string(path).map_err(|e| read_error(e.to_string()))?;

        Ok(Self::parse_lines(&content))
    }
}
