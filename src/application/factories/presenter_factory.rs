use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the formatted report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `-` selects stdout; anything else is a file path
    pub fn from_output(output: &str) -> Self {
        if output == "-" {
            PresenterType::Stdout
        } else {
            PresenterType::File(PathBuf::from(output))
        }
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_output() {
        assert_eq!(PresenterType::from_output("-"), PresenterType::Stdout);
        assert_eq!(
            PresenterType::from_output("out/report.csv"),
            PresenterType::File(PathBuf::from("out/report.csv"))
        );
    }

    #[test]
    fn test_create_file_presenter_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");

        PresenterFactory::create(PresenterType::File(path.clone()))
            .present("data")
            .unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "data");
    }

    #[test]
    fn test_create_stdout_presenter() {
        assert!(PresenterFactory::create(PresenterType::Stdout)
            .present("")
            .is_ok());
    }
}
