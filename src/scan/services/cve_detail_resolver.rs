use crate::scan::domain::{AdvisoryDetail, AdvisoryRef, CveRecord, NO_CVE_FOUND};
use crate::shared::error::ScanError;

const CVE_PREFIX: &str = "CVE-";

/// CveDetailResolver service turning advisory details into CVE records
pub struct CveDetailResolver;

impl CveDetailResolver {
    /// Picks the first alias starting with `CVE-`, in response order
    ///
    /// Returns `NO_CVE_FOUND` when no alias matches.
    pub fn select_cve(aliases: &[String]) -> &str {
        aliases
            .iter()
            .find(|alias| alias.starts_with(CVE_PREFIX))
            .map(String::as_str)
            .unwrap_or(NO_CVE_FOUND)
    }

    /// Builds the CveRecord for one advisory of one dependency version
    ///
    /// # Errors
    /// Returns `ScanError::AdvisoryDetailIncomplete` naming every missing
    /// field when `title`, `cvss3Score` or `cvss3Vector` is absent.
    pub fn resolve(
        advisory_ref: &AdvisoryRef,
        version: &str,
        detail: AdvisoryDetail,
    ) -> Result<CveRecord, ScanError> {
        let cve_number = Self::select_cve(&detail.aliases).to_string();

        match (detail.title, detail.cvss3_score, detail.cvss3_vector) {
            (Some(title), Some(score), Some(vector)) => Ok(CveRecord::new(
                cve_number,
                advisory_ref.dependency_name().to_string(),
                version.to_string(),
                advisory_ref.advisory_id().to_string(),
                title,
                score,
                vector,
            )),
            (title, score, vector) => {
                let missing: Vec<&str> = [
                    ("title", title.is_none()),
                    ("cvss3Score", score.is_none()),
                    ("cvss3Vector", vector.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, absent)| absent.then_some(field))
                .collect();

                Err(ScanError::AdvisoryDetailIncomplete {
                    name: advisory_ref.dependency_name().to_string(),
                    advisory_id: advisory_ref.advisory_id().to_string(),
                    reason: format!("missing field(s): {}", missing.join(", ")),
                })
            }
        }
    }
}
