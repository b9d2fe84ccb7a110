/// One entry of a dependency's `advisoryKeys` list, as returned by the
/// version metadata service
///
/// Entries that are not objects with a string `id` are kept as `Malformed`
/// so the correlator can skip them without failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisoryKey {
    Structured { id: String },
    Malformed { raw: String },
}

impl AdvisoryKey {
    pub fn structured(id: impl Into<String>) -> Self {
        AdvisoryKey::Structured { id: id.into() }
    }

    pub fn malformed(raw: impl Into<String>) -> Self {
        AdvisoryKey::Malformed { raw: raw.into() }
    }

    /// The advisory id, if this entry is structured and the id is non-blank
    pub fn id(&self) -> Option<&str> {
        match self {
            AdvisoryKey::Structured { id } if !id.trim().is_empty() => Some(id.as_str()),
            _ => None,
        }
    }
}

/// Correlation key linking a dependency to one of its advisories
///
/// Ordered by dependency name, then advisory id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdvisoryRef {
    dependency_name: String,
    advisory_id: String,
}

impl AdvisoryRef {
    pub fn new(dependency_name: impl Into<String>, advisory_id: impl Into<String>) -> Self {
        Self {
            dependency_name: dependency_name.into(),
            advisory_id: advisory_id.into(),
        }
    }

    pub fn dependency_name(&self) -> &str {
        &self.dependency_name
    }

    pub fn advisory_id(&self) -> &str {
        &self.advisory_id
    }
}

impl std::fmt::Display for AdvisoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.dependency_name, self.advisory_id)
    }
}

/// Advisory detail as published by the advisory service
///
/// Fields the service may omit are optional here; completeness is judged by
/// `CveDetailResolver`, not by the transport layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdvisoryDetail {
    pub aliases: Vec<String>,
    pub title: Option<String>,
    pub cvss3_score: Option<f64>,
    pub cvss3_vector: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_key_id() {
        assert_eq!(AdvisoryKey::structured("GHSA-abcd").id(), Some("GHSA-abcd"));
    }

    #[test]
    fn test_blank_structured_key_has_no_id() {
        assert_eq!(AdvisoryKey::structured("").id(), None);
        assert_eq!(AdvisoryKey::structured("   ").id(), None);
    }

    #[test]
    fn test_malformed_key_has_no_id() {
        assert_eq!(AdvisoryKey::malformed("\"GHSA-abcd\"").id(), None);
    }

    #[test]
    fn test_advisory_ref_ordering() {
        let a = AdvisoryRef::new("com.a:x", "GHSA-2");
        let b = AdvisoryRef::new("com.a:x", "GHSA-10");
        let c = AdvisoryRef::new("com.b:y", "GHSA-1");
        let mut refs = vec![c.clone(), a.clone(), b.clone()];
        refs.sort();
        assert_eq!(refs, vec![b, a, c]);
    }

    #[test]
    fn test_advisory_ref_display() {
        let advisory_ref = AdvisoryRef::new("com.example:libbar", "ADV-1");
        assert_eq!(advisory_ref.to_string(), "com.example:libbar:ADV-1");
    }
}
