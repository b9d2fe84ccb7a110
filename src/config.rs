//! Configuration file support for mvn-vuln-report.
//!
//! Provides YAML-based configuration through `mvn-vuln-report.config.yml`
//! files, and merges it with command-line options into `ScanSettings`.
//! Precedence: command line > config file > built-in defaults.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::cli::Args;
use mvn_vuln_report::adapters::outbound::network::{
    DEFAULT_ADVISORY_BASE_URL, DEFAULT_DEPS_DEV_BASE_URL, DEFAULT_MAVEN_REPOSITORY_URL,
};
use mvn_vuln_report::application::dto::{OutputFormat, DEFAULT_MAX_CONCURRENCY};
use mvn_vuln_report::scan::services::DEFAULT_EXTENSIONS;
use mvn_vuln_report::shared::Result;

pub const CONFIG_FILENAME: &str = "mvn-vuln-report.config.yml";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 2;
const DEFAULT_DOWNLOAD_DIR: &str = "pkg";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub deps_dev_base_url: Option<String>,
    pub advisory_base_url: Option<String>,
    pub maven_repository_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_concurrency: Option<usize>,
    pub max_retries: Option<u32>,
    pub format: Option<String>,
    pub output: Option<String>,
    pub download_dir: Option<String>,
    pub download: Option<bool>,
    pub extensions: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file parses as YAML null
    let config: ConfigFile = if content.trim().is_empty() {
        ConfigFile::default()
    } else {
        serde_yaml_ng::from_str(&content).with_context(|| {
            format!(
                "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display()
            )
        })?
    };

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    for (field, url) in [
        ("deps_dev_base_url", &config.deps_dev_base_url),
        ("advisory_base_url", &config.advisory_base_url),
        ("maven_repository_url", &config.maven_repository_url),
    ] {
        if let Some(url) = url {
            validate_url(field, url)?;
        }
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be at least 1.");
    }
    if config.max_concurrency == Some(0) {
        bail!("Invalid config: max_concurrency must be at least 1.");
    }
    if let Some(format) = &config.format {
        OutputFormat::from_str(format).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
    }
    if let Some(extensions) = &config.extensions {
        validate_extensions(extensions)?;
    }

    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        bail!(
            "Invalid config: {} must start with http:// or https:// (got '{}').",
            field,
            url
        );
    }
    Ok(())
}

fn validate_extensions(extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        bail!("Invalid config: extensions must not be empty.");
    }
    for extension in extensions {
        if !DEFAULT_EXTENSIONS.contains(&extension.as_str()) {
            bail!(
                "Invalid config: unsupported extension '{}'.\n\n💡 Hint: Allowed extensions are {}.",
                extension,
                DEFAULT_EXTENSIONS.join(", ")
            );
        }
    }
    Ok(())
}

/// Printed directly to stderr, independent of the log filter
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings of one run after merging CLI, config and defaults
#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub deps_dev_base_url: String,
    pub advisory_base_url: String,
    pub maven_repository_url: String,
    pub timeout: Duration,
    pub max_concurrency: usize,
    pub max_retries: u32,
    pub format: OutputFormat,
    /// Report destination; `-` is stdout
    pub output: String,
    pub download_dir: PathBuf,
    pub download: bool,
    pub extensions: Vec<String>,
}

impl ScanSettings {
    pub fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => OutputFormat::from_str(format).map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let output = args
            .output
            .clone()
            .or(config.output)
            .unwrap_or_else(|| format.default_file_name().to_string());

        Ok(Self {
            deps_dev_base_url: config
                .deps_dev_base_url
                .unwrap_or_else(|| DEFAULT_DEPS_DEV_BASE_URL.to_string()),
            advisory_base_url: config
                .advisory_base_url
                .unwrap_or_else(|| DEFAULT_ADVISORY_BASE_URL.to_string()),
            maven_repository_url: config
                .maven_repository_url
                .unwrap_or_else(|| DEFAULT_MAVEN_REPOSITORY_URL.to_string()),
            timeout: Duration::from_secs(
                args.timeout
                    .or(config.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            max_concurrency: args
                .max_concurrency
                .map(|n| n as usize)
                .or(config.max_concurrency)
                .unwrap_or(DEFAULT_MAX_CONCURRENCY),
            max_retries: config.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            format,
            output,
            download_dir: args
                .download_dir
                .clone()
                .or(config.download_dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DOWNLOAD_DIR)),
            download: !args.no_download && config.download.unwrap_or(true),
            extensions: config
                .extensions
                .unwrap_or_else(|| DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()),
        })
    }
}
