use std::fmt;

/// Sentinel CVE number for advisories without a `CVE-` alias
pub const NO_CVE_FOUND: &str = "No CVE found";

/// Qualitative severity rating derived from a CVSS v3 base score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    None,
}

impl Severity {
    /// Maps a CVSS v3 base score to its rating band
    ///
    /// - 9.0-10.0 -> Critical
    /// - 7.0-8.9 -> High
    /// - 4.0-6.9 -> Medium
    /// - 0.1-3.9 -> Low
    /// - 0.0 -> None
    pub fn from_cvss_score(score: f64) -> Self {
        if score >= 9.0 {
            Severity::Critical
        } else if score >= 7.0 {
            Severity::High
        } else if score >= 4.0 {
            Severity::Medium
        } else if score > 0.0 {
            Severity::Low
        } else {
            Severity::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::None => "NONE",
        }
    }

    pub fn all() -> [Severity; 5] {
        [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
            Severity::None,
        ]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CveRecord - one fully resolved advisory of one dependency
///
/// Only `CveDetailResolver` builds these, and only from complete advisory
/// details, so every field is real data.
#[derive(Debug, Clone, PartialEq)]
pub struct CveRecord {
    cve_number: String,
    package_name: String,
    version: String,
    advisory_id: String,
    title: String,
    cvss_score: f64,
    cvss_vector: String,
}

impl CveRecord {
    pub fn new(
        cve_number: String,
        package_name: String,
        version: String,
        advisory_id: String,
        title: String,
        cvss_score: f64,
        cvss_vector: String,
    ) -> Self {
        Self {
            cve_number,
            package_name,
            version,
            advisory_id,
            title,
            cvss_score,
            cvss_vector,
        }
    }

    pub fn cve_number(&self) -> &str {
        &self.cve_number
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn advisory_id(&self) -> &str {
        &self.advisory_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cvss_score(&self) -> f64 {
        self.cvss_score
    }

    pub fn cvss_vector(&self) -> &str {
        &self.cvss_vector
    }

    pub fn severity(&self) -> Severity {
        Severity::from_cvss_score(self.cvss_score)
    }

    /// Stable ordering key: package name, then version, then advisory id
    pub fn sort_key(&self) -> (String, String, String) {
        (
            self.package_name.clone(),
            self.version.clone(),
            self.advisory_id.clone(),
        )
    }
}
