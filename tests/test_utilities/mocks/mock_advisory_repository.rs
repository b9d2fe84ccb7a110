use async_trait::async_trait;
use mvn_vuln_report::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mock AdvisoryRepository returning fixed advisory ids per dependency
#[derive(Default)]
pub struct MockAdvisoryRepository {
    keys: HashMap<String, Vec<AdvisoryKey>>,
    failing: HashSet<String>,
}

impl MockAdvisoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_advisories(mut self, name: &str, ids: &[&str]) -> Self {
        self.keys.insert(
            name.to_string(),
            ids.iter().map(|id| AdvisoryKey::structured(*id)).collect(),
        );
        self
    }

    pub fn with_failure_for(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }
}

#[async_trait]
impl AdvisoryRepository for MockAdvisoryRepository {
    async fn fetch_advisory_keys(&self, name: &str, _version: &str) -> Result<Vec<AdvisoryKey>> {
        if self.failing.contains(name) {
            anyhow::bail!("Mock advisory repository failure");
        }
        Ok(self.keys.get(name).cloned().unwrap_or_default())
    }
}

/// Mock AdvisoryDetailRepository; unknown ids fail like a server error
#[derive(Default)]
pub struct MockAdvisoryDetailRepository {
    details: HashMap<String, AdvisoryDetail>,
}

impl MockAdvisoryDetailRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail(
        mut self,
        id: &str,
        aliases: &[&str],
        title: &str,
        score: f64,
        vector: &str,
    ) -> Self {
        self.details.insert(
            id.to_string(),
            AdvisoryDetail {
                aliases: aliases.iter().map(|a| a.to_string()).collect(),
                title: Some(title.to_string()),
                cvss3_score: Some(score),
                cvss3_vector: Some(vector.to_string()),
            },
        );
        self
    }

    pub fn with_raw_detail(mut self, id: &str, detail: AdvisoryDetail) -> Self {
        self.details.insert(id.to_string(), detail);
        self
    }
}

#[async_trait]
impl AdvisoryDetailRepository for MockAdvisoryDetailRepository {
    async fn fetch_advisory_detail(&self, advisory_id: &str) -> Result<AdvisoryDetail> {
        match self.details.get(advisory_id) {
            Some(detail) => Ok(detail.clone()),
            None => anyhow::bail!("HTTP error code 500 Internal Server Error"),
        }
    }
}
