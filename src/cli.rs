use clap::Parser;
use std::path::PathBuf;

use mvn_vuln_report::application::dto::OutputFormat;

/// Resolve Maven dependencies via deps.dev and report their known CVEs
#[derive(Parser, Debug)]
#[command(name = "mvn-vuln-report")]
#[command(version)]
#[command(
    about = "Resolve Maven dependency graphs via deps.dev and report known vulnerabilities",
    long_about = None
)]
pub struct Args {
    /// Root coordinates, e.g. com.example:libfoo@v1.2.3
    #[arg(value_name = "COORDINATE")]
    pub coordinates: Vec<String>,

    /// Read root coordinates from a file (one per line, '#' starts a comment)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Version used for coordinates given without an '@v' part
    #[arg(long, value_name = "VERSION")]
    pub package_version: Option<String>,

    /// Report format: csv or json [default: csv]
    #[arg(short = 'F', long)]
    pub format: Option<OutputFormat>,

    /// Report path, or '-' for stdout [default: vulnerability_report.<format>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory for downloaded artifacts [default: pkg]
    #[arg(short, long, value_name = "DIR")]
    pub download_dir: Option<PathBuf>,

    /// Skip downloading artifacts
    #[arg(long)]
    pub no_download: bool,

    /// Path to a mvn-vuln-report.config.yml file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds [default: 30]
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Maximum concurrent lookups and downloads [default: 8]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_concurrency: Option<u32>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
