mod cli;
mod config;

use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, ScanSettings};
use mvn_vuln_report::adapters::outbound::console::StderrProgressReporter;
use mvn_vuln_report::adapters::outbound::filesystem::{FileSystemArtifactStore, FileSystemReader};
use mvn_vuln_report::adapters::outbound::network::{
    CachingAdvisoryDetailRepository, DepsDevClient, MavenRepositoryClient,
};
use mvn_vuln_report::application::dto::{DownloadRequest, ScanRequest};
use mvn_vuln_report::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use mvn_vuln_report::application::use_cases::{DownloadArtifactsUseCase, ScanPackageUseCase};
use mvn_vuln_report::ports::outbound::{CoordinateListReader, ProgressReporter};
use mvn_vuln_report::scan::domain::{ReportMetadata, Severity, VulnerabilityReport};
use mvn_vuln_report::shared::error::{ExitCode, ScanError};
use mvn_vuln_report::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Coordinate list picked up from the working directory when nothing else is given
const DEFAULT_COORDINATE_FILE: &str = "packages.txt";

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "mvn_vuln_report=debug"
    } else {
        "mvn_vuln_report=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = ScanSettings::resolve(&args, config)?;
    let tokens = collect_tokens(&args, &FileSystemReader::new())?;

    // Create adapters (Dependency Injection)
    let deps_dev = DepsDevClient::new(settings.timeout)?
        .with_base_url(&settings.deps_dev_base_url)
        .with_advisory_base_url(&settings.advisory_base_url)
        .with_max_retries(settings.max_retries);
    let advisory_details = CachingAdvisoryDetailRepository::new(deps_dev.clone());

    let scan = ScanPackageUseCase::new(
        deps_dev.clone(),
        deps_dev,
        advisory_details,
        StderrProgressReporter::new(),
    );

    let download = if settings.download {
        let maven = MavenRepositoryClient::new(settings.timeout)?
            .with_max_retries(settings.max_retries);
        Some(DownloadArtifactsUseCase::new(
            maven,
            FileSystemArtifactStore::new(settings.download_dir.clone()),
            StderrProgressReporter::new(),
        ))
    } else {
        None
    };
    let download_request = DownloadRequest::new(&settings.maven_repository_url)
        .with_extensions(settings.extensions.clone())
        .with_max_concurrency(settings.max_concurrency);

    let console = StderrProgressReporter::new();
    let mut report = VulnerabilityReport::new(ReportMetadata::generate());
    let mut failed_coordinates = 0;

    for token in &tokens {
        let request = match ScanRequest::builder()
            .token(token)
            .fallback_version(args.package_version.clone())
            .max_concurrency(settings.max_concurrency)
            .build()
        {
            Ok(request) => request,
            Err(e) => {
                console.report_error(&format!("❌ {}", e));
                failed_coordinates += 1;
                continue;
            }
        };

        let response = match scan.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                console.report_error(&format!("❌ {}", describe_failure(&e)));
                failed_coordinates += 1;
                continue;
            }
        };

        if let Some(download) = &download {
            download
                .execute(&download_request, &response.dependencies)
                .await;
        }

        report.merge(response.cve_records);
    }

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let formatted_output = FormatterFactory::create(settings.format).format(&report)?;
    PresenterFactory::create(PresenterType::from_output(&settings.output))
        .present(&formatted_output)?;

    if settings.output != "-" {
        eprintln!("💾 Report written to {}", settings.output);
    }
    print_summary(&report, tokens.len(), failed_coordinates);

    Ok(if failed_coordinates > 0 {
        ExitCode::ApplicationError
    } else {
        ExitCode::Success
    })
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(&std::env::current_dir()?)?.unwrap_or_default()),
    }
}

/// Input tokens in order of preference: arguments, `--file`, then `packages.txt`
fn collect_tokens(args: &Args, reader: &impl CoordinateListReader) -> Result<Vec<String>> {
    if !args.coordinates.is_empty() {
        return Ok(args.coordinates.clone());
    }

    if let Some(path) = &args.file {
        return reader.read_coordinates(path);
    }

    let default_file = PathBuf::from(DEFAULT_COORDINATE_FILE);
    if default_file.is_file() {
        return reader.read_coordinates(&default_file);
    }

    Err(ScanError::Validation {
        message: format!(
            "no coordinates given. Pass them as arguments, use --file, or create {}",
            DEFAULT_COORDINATE_FILE
        ),
    }
    .into())
}

/// Typed errors print as-is; anything else keeps its context chain
fn describe_failure(error: &anyhow::Error) -> String {
    match error.downcast_ref::<ScanError>() {
        Some(scan_error) => scan_error.to_string(),
        None => format!("{:#}", error),
    }
}

fn print_summary(report: &VulnerabilityReport, coordinates: usize, failed: usize) {
    eprintln!(
        "\n📊 {} CVE record(s) in {} package(s) from {} of {} coordinate(s)",
        report.len(),
        report.affected_package_count(),
        coordinates - failed,
        coordinates
    );

    for severity in Severity::all() {
        let count = report.count_by_severity(severity);
        if count == 0 {
            continue;
        }
        let label = format!("{:>8}", severity.as_str());
        let label = match severity {
            Severity::Critical => label.red().bold().to_string(),
            Severity::High => label.red().to_string(),
            Severity::Medium => label.yellow().to_string(),
            Severity::Low => label.blue().to_string(),
            Severity::None => label.dimmed().to_string(),
        };
        eprintln!("   {} {}", label, count);
    }

    if failed > 0 {
        eprintln!(
            "{}",
            format!("⚠️  {} coordinate(s) could not be resolved", failed).yellow()
        );
    }
}
