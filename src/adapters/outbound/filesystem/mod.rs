/// Filesystem adapters for file I/O operations
mod artifact_store;
mod coordinate_list_reader;
mod file_writer;

pub use artifact_store::FileSystemArtifactStore;
pub use coordinate_list_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
