use crate::scan::domain::{AdvisoryKey, AdvisoryRef, DependencyRecord};
use std::collections::BTreeSet;

/// An advisory-key entry the correlator refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedAdvisoryKey {
    pub dependency_name: String,
    pub entry: String,
}

/// Result of correlating a set of dependency records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correlation {
    pub advisory_refs: BTreeSet<AdvisoryRef>,
    pub rejected: Vec<RejectedAdvisoryKey>,
}

/// AdvisoryCorrelator service flattening advisory keys into AdvisoryRefs
///
/// Pure function of its input: correlating the same records twice yields
/// the same set.
pub struct AdvisoryCorrelator;

impl AdvisoryCorrelator {
    /// Builds the deduplicated `(dependency name, advisory id)` set
    ///
    /// Only structured keys with a non-blank `id` are admitted. Everything
    /// else is returned in `rejected` for diagnostics.
    pub fn correlate<'a>(records: impl IntoIterator<Item = &'a DependencyRecord>) -> Correlation {
        let mut correlation = Correlation::default();

        for record in records {
            for key in record.advisory_keys() {
                match key.id() {
                    Some(id) => {
                        correlation
                            .advisory_refs
                            .insert(AdvisoryRef::new(record.name(), id));
                    }
                    None => correlation.rejected.push(RejectedAdvisoryKey {
                        dependency_name: record.name().to_string(),
                        entry: describe(key),
                    }),
                }
            }
        }

        correlation
    }
}

fn describe(key: &AdvisoryKey) -> String {
    match key {
        AdvisoryKey::Structured { id } => format!("{{\"id\": {:?}}}", id),
        AdvisoryKey::Malformed { raw } => raw.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DependencyRecord> {
        vec![
            DependencyRecord::with_advisory_keys(
                "com.example:libbar",
                "4.5.6",
                vec![
                    AdvisoryKey::structured("GHSA-2"),
                    AdvisoryKey::structured("GHSA-1"),
                    AdvisoryKey::structured("GHSA-2"),
                ],
            ),
            DependencyRecord::with_advisory_keys(
                "org.other:lib",
                "1.0",
                vec![AdvisoryKey::structured("GHSA-1")],
            ),
            DependencyRecord::new("org.clean:lib", "1.0"),
        ]
    }

    #[test]
    fn test_correlate_deduplicates_per_dependency() {
        let correlation = AdvisoryCorrelator::correlate(&records());

        let refs: Vec<_> = correlation
            .advisory_refs
            .iter()
            .map(|r| (r.dependency_name(), r.advisory_id()))
            .collect();
        assert_eq!(
            refs,
            vec![
                ("com.example:libbar", "GHSA-1"),
                ("com.example:libbar", "GHSA-2"),
                ("org.other:lib", "GHSA-1"),
            ]
        );
        assert!(correlation.rejected.is_empty());
    }

    #[test]
    fn test_correlate_is_idempotent() {
        let input = records();
        let first = AdvisoryCorrelator::correlate(&input);
        let second = AdvisoryCorrelator::correlate(&input);
        assert_eq!(first, second);
    }

    #[test]
    fn test_correlate_skips_malformed_entries() {
        let input = vec![DependencyRecord::with_advisory_keys(
            "com.example:libbar",
            "4.5.6",
            vec![
                AdvisoryKey::malformed("\"GHSA-raw-string\""),
                AdvisoryKey::structured(""),
                AdvisoryKey::malformed("{\"url\":\"https://example.com\"}"),
                AdvisoryKey::structured("ADV-1"),
            ],
        )];

        let correlation = AdvisoryCorrelator::correlate(&input);

        assert_eq!(correlation.advisory_refs.len(), 1);
        assert!(correlation
            .advisory_refs
            .contains(&AdvisoryRef::new("com.example:libbar", "ADV-1")));
        assert_eq!(correlation.rejected.len(), 3);
        assert!(correlation
            .rejected
            .iter()
            .all(|r| r.dependency_name == "com.example:libbar"));
    }

    #[test]
    fn test_correlate_empty_input() {
        let correlation = AdvisoryCorrelator::correlate(&Vec::<DependencyRecord>::new());
        assert!(correlation.advisory_refs.is_empty());
    }
}
