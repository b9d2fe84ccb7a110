use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{
    AdvisoryDetailRepository, AdvisoryRepository, DependencyGraphRepository, ProgressReporter,
};
use crate::scan::domain::{
    AdvisoryKey, AdvisoryRef, CveRecord, DependencyGraph, ReportMetadata, ResolutionContext,
};
use crate::scan::services::{AdvisoryCorrelator, CveDetailResolver};
use crate::shared::error::ScanError;
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use tracing::debug;

/// ScanPackageUseCase - dependency resolution and advisory correlation for
/// one root coordinate
///
/// Pipeline: dependency graph → per-dependency advisory keys → correlation
/// → per-advisory CVE detail. Only a failed graph request aborts the scan;
/// every other failure is scoped to its dependency or advisory and comes
/// back as a diagnostic in the response.
///
/// # Type Parameters
/// * `G` - DependencyGraphRepository implementation
/// * `A` - AdvisoryRepository implementation
/// * `D` - AdvisoryDetailRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct ScanPackageUseCase<G, A, D, PR> {
    graph_repository: G,
    advisory_repository: A,
    detail_repository: D,
    progress_reporter: PR,
}

impl<G, A, D, PR> ScanPackageUseCase<G, A, D, PR>
where
    G: DependencyGraphRepository,
    A: AdvisoryRepository,
    D: AdvisoryDetailRepository,
    PR: ProgressReporter,
{
    pub fn new(
        graph_repository: G,
        advisory_repository: A,
        detail_repository: D,
        progress_reporter: PR,
    ) -> Self {
        Self {
            graph_repository,
            advisory_repository,
            detail_repository,
            progress_reporter,
        }
    }

    /// Scans one root coordinate
    ///
    /// # Errors
    /// Returns `ScanError::GraphFetchFailed` (wrapped in `anyhow::Error`) if
    /// the dependency graph cannot be fetched or parsed. No partial result
    /// is produced in that case.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        let metadata = ReportMetadata::generate();
        let max_concurrency = request.max_concurrency.max(1);
        let mut context = ResolutionContext::new(request.coordinate);

        // Step 1: Resolve the dependency graph
        let graph = self.fetch_graph(&context).await?;

        // Step 2: Record nodes, scoping structural failures to their node
        self.record_graph(&mut context, &graph);

        // Step 3: Advisory keys per dependency
        self.fetch_advisory_keys(&mut context, max_concurrency).await;

        // Step 4: Correlate
        self.correlate(&mut context);

        // Step 5: CVE details per advisory
        let cve_records = self.resolve_cve_details(&mut context, max_concurrency).await;

        // Step 6: Surface diagnostics and build the response
        self.report_diagnostics(&context);
        self.progress_reporter.report_completion(&format!(
            "✅ {}: {} dependencies, {} advisories, {} CVE record(s)",
            context.coordinate(),
            context.dependency_count(),
            context.advisory_refs().len(),
            cve_records.len()
        ));

        let coordinate = context.coordinate().clone();
        let (dependencies, advisory_refs, diagnostics) = context.into_parts();

        Ok(ScanResponse {
            coordinate,
            metadata,
            dependencies,
            advisory_refs,
            cve_records,
            diagnostics,
        })
    }

    async fn fetch_graph(&self, context: &ResolutionContext) -> Result<DependencyGraph> {
        let coordinate = context.coordinate();
        self.progress_reporter
            .report(&format!("🔍 Resolving dependency graph for {}", coordinate));

        self.graph_repository
            .fetch_dependency_graph(coordinate)
            .await
            .map_err(|e| {
                ScanError::GraphFetchFailed {
                    coordinate: coordinate.to_string(),
                    reason: format!("{:#}", e),
                }
                .into()
            })
    }

    fn record_graph(&self, context: &mut ResolutionContext, graph: &DependencyGraph) {
        for node in graph.nodes() {
            context.record_node(&node.name, &node.version);
        }

        let coordinate = context.coordinate().to_string();
        for skipped in graph.skipped() {
            debug!(%coordinate, index = skipped.index, reason = %skipped.reason, "graph node skipped");
            context.push_diagnostic(ScanError::NodeParseSkipped {
                coordinate: coordinate.clone(),
                index: skipped.index,
                reason: skipped.reason.clone(),
            });
        }

        self.progress_reporter.report(&format!(
            "   Resolved {} dependencies ({} node(s) skipped)",
            context.dependency_count(),
            graph.skipped().len()
        ));
    }

    /// Fetches advisory keys for every recorded dependency
    ///
    /// Lookups run concurrently; results are merged into the context here,
    /// after each completes, so the context has a single writer.
    async fn fetch_advisory_keys(&self, context: &mut ResolutionContext, max_concurrency: usize) {
        let targets: Vec<(String, String)> = context
            .dependencies()
            .map(|record| (record.name().to_string(), record.version().to_string()))
            .collect();
        let total = targets.len();
        if total == 0 {
            return;
        }

        let mut lookups = stream::iter(targets)
            .map(|(name, version)| async move {
                let result = self
                    .advisory_repository
                    .fetch_advisory_keys(&name, &version)
                    .await;
                (name, version, result)
            })
            .buffer_unordered(max_concurrency);

        let mut results: Vec<(String, String, Result<Vec<AdvisoryKey>>)> =
            Vec::with_capacity(total);
        while let Some(result) = lookups.next().await {
            results.push(result);
            self.progress_reporter
                .report_progress(results.len(), total, Some("Fetching advisories"));
        }

        // Completion order is arbitrary; merge in name order
        results.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, version, result) in results {
            match result {
                Ok(keys) => {
                    context.record_advisory_keys(&name, keys);
                }
                Err(e) => {
                    debug!(%name, %version, error = %e, "advisory lookup failed");
                    context.record_advisory_keys(&name, Vec::new());
                    context.push_diagnostic(ScanError::AdvisoryFetchFailed {
                        name,
                        version,
                        reason: format!("{:#}", e),
                    });
                }
            }
        }
    }

    fn correlate(&self, context: &mut ResolutionContext) {
        let correlation = AdvisoryCorrelator::correlate(context.dependencies());
        for rejected in &correlation.rejected {
            debug!(
                dependency = %rejected.dependency_name,
                entry = %rejected.entry,
                "advisory key skipped"
            );
        }
        context.set_advisory_refs(correlation.advisory_refs);
    }

    /// Resolves every correlated advisory into a CveRecord
    ///
    /// Incomplete details and failed detail requests become
    /// `AdvisoryDetailIncomplete` diagnostics; the records are sorted.
    async fn resolve_cve_details(
        &self,
        context: &mut ResolutionContext,
        max_concurrency: usize,
    ) -> Vec<CveRecord> {
        let targets: Vec<(AdvisoryRef, String)> = context
            .advisory_refs()
            .iter()
            .filter_map(|advisory_ref| {
                context
                    .dependency(advisory_ref.dependency_name())
                    .map(|record| (advisory_ref.clone(), record.version().to_string()))
            })
            .collect();
        let total = targets.len();
        if total == 0 {
            return Vec::new();
        }

        let mut lookups = stream::iter(targets)
            .map(|(advisory_ref, version)| async move {
                let result = match self
                    .detail_repository
                    .fetch_advisory_detail(advisory_ref.advisory_id())
                    .await
                {
                    Ok(detail) => CveDetailResolver::resolve(&advisory_ref, &version, detail),
                    Err(e) => Err(ScanError::AdvisoryDetailIncomplete {
                        name: advisory_ref.dependency_name().to_string(),
                        advisory_id: advisory_ref.advisory_id().to_string(),
                        reason: format!("detail request failed: {:#}", e),
                    }),
                };
                (advisory_ref, result)
            })
            .buffer_unordered(max_concurrency);

        let mut outcomes = Vec::with_capacity(total);
        while let Some(outcome) = lookups.next().await {
            outcomes.push(outcome);
            self.progress_reporter
                .report_progress(outcomes.len(), total, Some("Resolving CVE details"));
        }
        outcomes.sort_by(|a, b| a.0.cmp(&b.0));

        let mut records = Vec::with_capacity(total);
        for (advisory_ref, outcome) in outcomes {
            match outcome {
                Ok(record) => records.push(record),
                Err(diagnostic) => {
                    debug!(advisory = %advisory_ref, "advisory excluded from report");
                    context.push_diagnostic(diagnostic);
                }
            }
        }

        records.sort_by_key(CveRecord::sort_key);
        records
    }

    fn report_diagnostics(&self, context: &ResolutionContext) {
        for diagnostic in context.diagnostics() {
            self.progress_reporter
                .report_error(&format!("⚠️  {}", diagnostic));
        }
    }
}
