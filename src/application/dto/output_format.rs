/// Output format enumeration for the vulnerability report
///
/// Understood by the CLI, the config file and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-column CSV table (default)
    #[default]
    Csv,
    /// JSON document with run metadata
    Json,
}

impl OutputFormat {
    /// Report file name used when no output path is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "vulnerability_report.csv",
            OutputFormat::Json => "vulnerability_report.json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'csv' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
