use super::{AdvisoryKey, AdvisoryRef, Coordinate, DependencyRecord};
use crate::shared::error::ScanError;
use std::collections::{BTreeMap, BTreeSet};

/// ResolutionContext - per-coordinate state threaded through the scan stages
///
/// Owned by the caller of the pipeline. Stages read from and merge into it
/// one at a time; nothing in here is shared across concurrent requests.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    coordinate: Coordinate,
    dependencies: BTreeMap<String, DependencyRecord>,
    advisory_refs: BTreeSet<AdvisoryRef>,
    diagnostics: Vec<ScanError>,
}

impl ResolutionContext {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            dependencies: BTreeMap::new(),
            advisory_refs: BTreeSet::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// Records a graph node. A later node with the same name replaces the
    /// earlier record.
    pub fn record_node(&mut self, name: &str, version: &str) {
        self.dependencies
            .insert(name.to_string(), DependencyRecord::new(name, version));
    }

    /// Assigns advisory keys to a recorded dependency
    ///
    /// Returns `false` if no dependency of that name was recorded.
    pub fn record_advisory_keys(&mut self, name: &str, advisory_keys: Vec<AdvisoryKey>) -> bool {
        match self.dependencies.get_mut(name) {
            Some(record) => {
                record.assign_advisory_keys(advisory_keys);
                true
            }
            None => false,
        }
    }

    pub fn set_advisory_refs(&mut self, advisory_refs: BTreeSet<AdvisoryRef>) {
        self.advisory_refs = advisory_refs;
    }

    pub fn push_diagnostic(&mut self, diagnostic: ScanError) {
        self.diagnostics.push(diagnostic);
    }

    /// Dependencies in name order
    pub fn dependencies(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.dependencies.values()
    }

    pub fn dependency(&self, name: &str) -> Option<&DependencyRecord> {
        self.dependencies.get(name)
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn advisory_refs(&self) -> &BTreeSet<AdvisoryRef> {
        &self.advisory_refs
    }

    pub fn diagnostics(&self) -> &[ScanError] {
        &self.diagnostics
    }

    /// Consumes the context into (dependencies, advisory refs, diagnostics)
    pub fn into_parts(self) -> (Vec<DependencyRecord>, Vec<AdvisoryRef>, Vec<ScanError>) {
        (
            self.dependencies.into_values().collect(),
            self.advisory_refs.into_iter().collect(),
            self.diagnostics,
        )
    }
}
