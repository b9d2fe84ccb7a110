use crate::shared::Result;
use std::path::Path;

/// CoordinateListReader port for reading batch input files
///
/// This port abstracts the file system operations needed to read a
/// newline-separated list of coordinates (e.g., `packages.txt`).
pub trait CoordinateListReader {
    /// Reads the raw coordinate tokens from a list file
    ///
    /// Blank lines and `#` comments are dropped; tokens are trimmed but
    /// otherwise unvalidated.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is a symbolic link or exceeds the size limit
    /// - The file cannot be read
    fn read_coordinates(&self, path: &Path) -> Result<Vec<String>>;
}
