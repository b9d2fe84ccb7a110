use super::AdvisoryKey;

/// One resolved dependency of a root coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyRecord {
    name: String,
    version: String,
    advisory_keys: Vec<AdvisoryKey>,
}

impl DependencyRecord {
    /// Creates a record with no advisory keys yet
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            advisory_keys: Vec::new(),
        }
    }

    pub fn with_advisory_keys(
        name: impl Into<String>,
        version: impl Into<String>,
        advisory_keys: Vec<AdvisoryKey>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            advisory_keys,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn advisory_keys(&self) -> &[AdvisoryKey] {
        &self.advisory_keys
    }

    pub(crate) fn assign_advisory_keys(&mut self, advisory_keys: Vec<AdvisoryKey>) {
        self.advisory_keys = advisory_keys;
    }
}
