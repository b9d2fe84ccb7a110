/// End-to-end tests for config file loading and CLI option merging.
///
/// Runs use a malformed coordinate so they finish without touching the
/// network, then inspect the written report.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG_FILENAME: &str = "mvn-vuln-report.config.yml";

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

mod auto_discovery {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format_and_output() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir.path().join(CONFIG_FILENAME),
            "format: json\noutput: from-config.json\ndownload: false\n",
        );

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .arg("not-a-coordinate")
            .assert()
            .code(3);

        let report = fs::read_to_string(temp_dir.path().join("from-config.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert!(value["records"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_no_config_file_uses_default_report_name() {
        let temp_dir = TempDir::new().unwrap();

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["--no-download", "not-a-coordinate"])
            .assert()
            .code(3);

        assert!(temp_dir.path().join("vulnerability_report.csv").is_file());
    }

    #[test]
    fn test_unknown_field_warns() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir.path().join(CONFIG_FILENAME),
            "download: false\ncheck_cve: true\n",
        );

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["-o", "-", "not-a-coordinate"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains(
                "Unknown config field 'check_cve' will be ignored",
            ));
    }

    #[test]
    fn test_unknown_field_warning_ignores_log_filter() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir.path().join(CONFIG_FILENAME),
            "download: false
check_cve: true
",
        );

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .env("RUST_LOG", "off")
            .args(["-o", "-", "not-a-coordinate"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("check_cve"));
    }
}

mod explicit_path {
    use super::*;

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yml");
        write_config(&config_path, "format: json\ndownload: false\n");

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["-c", "custom.yml", "not-a-coordinate"])
            .assert()
            .code(3);

        assert!(temp_dir.path().join("vulnerability_report.json").is_file());
    }

    #[test]
    fn test_explicit_config_nonexistent_file_error() {
        let temp_dir = TempDir::new().unwrap();

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["--config", "nonexistent.yml", "com.example:libfoo@v1.2.3"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

mod validation {
    use super::*;

    fn assert_rejected(config: &str, expected: &str) {
        let temp_dir = TempDir::new().unwrap();
        write_config(&temp_dir.path().join(CONFIG_FILENAME), config);

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .arg("com.example:libfoo@v1.2.3")
            .assert()
            .code(3)
            .stderr(predicate::str::contains(expected));

        assert!(!temp_dir.path().join("vulnerability_report.csv").exists());
    }

    #[test]
    fn test_zero_max_concurrency_rejected() {
        assert_rejected("max_concurrency: 0\n", "max_concurrency");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert_rejected("timeout_secs: 0\n", "timeout_secs");
    }

    #[test]
    fn test_non_http_url_rejected() {
        assert_rejected("deps_dev_base_url: file:///tmp/deps\n", "deps_dev_base_url");
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        assert_rejected("extensions: [jar, war]\n", "war");
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert_rejected("format: [unclosed\n", "Failed to parse config file");
    }
}

mod precedence {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir.path().join(CONFIG_FILENAME),
            "format: json\ndownload: false\n",
        );

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["--format", "csv", "-o", "-", "not-a-coordinate"])
            .assert()
            .code(3)
            .stdout("CVE Number,Package Name,Version,Title,CVSS Score,CVSS Vector\n");
    }

    #[test]
    fn test_cli_output_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        write_config(
            &temp_dir.path().join(CONFIG_FILENAME),
            "output: from-config.csv\ndownload: false\n",
        );

        cargo_bin_cmd!("mvn-vuln-report")
            .current_dir(temp_dir.path())
            .args(["-o", "from-cli.csv", "not-a-coordinate"])
            .assert()
            .code(3);

        assert!(temp_dir.path().join("from-cli.csv").is_file());
        assert!(!temp_dir.path().join("from-config.csv").exists());
    }
}
