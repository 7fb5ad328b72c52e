use crate::application::dto::VerifyRequest;
use crate::ports::outbound::{
    IndexRepository, ManifestTool, ProgressReporter, RenderResult, SetupStatus,
};
use crate::shared::error::VerifyError;
use crate::shared::Result;
use crate::verification::domain::{ChartIndex, ChartName, ChartOutcome, VerificationReport};
use crate::verification::services::ChartFilter;
use std::path::Path;
use tracing::{debug, info, warn};

/// VerifyChartsUseCase - Checks that every chart of a repository renders
///
/// This use case orchestrates the verification run using generic
/// dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `IR` - IndexRepository implementation
/// * `MT` - ManifestTool implementation
/// * `PR` - ProgressReporter implementation
pub struct VerifyChartsUseCase<IR, MT, PR> {
    index_repository: IR,
    manifest_tool: MT,
    progress_reporter: PR,
}

impl<IR, MT, PR> VerifyChartsUseCase<IR, MT, PR>
where
    IR: IndexRepository,
    MT: ManifestTool,
    PR: ProgressReporter,
{
    /// Creates a new VerifyChartsUseCase with injected dependencies
    pub fn new(index_repository: IR, manifest_tool: MT, progress_reporter: PR) -> Self {
        Self {
            index_repository,
            manifest_tool,
            progress_reporter,
        }
    }

    /// Executes the verification run
    ///
    /// Only an unusable request or index is an error. Chart failures are
    /// collected in the returned report.
    pub async fn execute(&self, request: VerifyRequest) -> Result<VerificationReport> {
        // Step 1: Compile exclude patterns before touching anything external
        let filter = ChartFilter::new(request.exclude_patterns.clone())?;

        // Step 2: Scaffold the throwaway application
        self.provision_app(&request).await;

        // Step 3: Fetch the repository index
        let index = self.fetch_index(&request).await?;

        // Step 4: Drop excluded charts
        let (charts, excluded) = self.apply_exclusions(&filter, index);

        // Step 5: Register the repository with the application, once
        let app_dir = request.app_dir();
        let status = self
            .manifest_tool
            .add_registry(&app_dir, &request.registry_name, &request.repository_url)
            .await;
        discard_setup_status("registry add", None, status);

        // Step 6: Verify each chart in index order
        let mut report = VerificationReport::new();
        report.record_excluded(excluded);

        for (position, key) in charts.iter().enumerate() {
            self.progress_reporter
                .report(&format!("checking {}: {}", position + 1, key));
            let outcome = match ChartName::new(key.as_str()) {
                Ok(chart) => self.verify_chart(&request, &app_dir, &chart).await,
                Err(e) => self.reject_key(key, e),
            };
            report.record(key, &outcome);
        }

        // Step 7: Report
        self.report_results(&report);
        Ok(report)
    }

    /// Runs `init` for the application inside the workspace root
    ///
    /// A failed init is not fatal; every chart will then fail to generate,
    /// which surfaces the problem.
    async fn provision_app(&self, request: &VerifyRequest) {
        let status = self
            .manifest_tool
            .init_app(&request.workspace_root, &request.app_name)
            .await;
        if !status.is_success() {
            warn!(
                app = %request.app_name,
                "application scaffold failed; charts will fail to generate"
            );
        }
        discard_setup_status("init", None, status);
    }

    async fn fetch_index(&self, request: &VerifyRequest) -> Result<ChartIndex> {
        let index = self
            .index_repository
            .fetch_index(&request.repository_url)
            .await?;

        info!(
            url = %request.repository_url,
            charts = index.len(),
            api_version = index.api_version().unwrap_or("-"),
            generated = index.generated().unwrap_or("-"),
            "loaded repository index"
        );
        Ok(index)
    }

    /// Applies the exclude patterns and warns about patterns that matched nothing
    ///
    /// # Returns
    /// Tuple of (charts to verify, number excluded)
    fn apply_exclusions(
        &self,
        filter: &ChartFilter,
        index: ChartIndex,
    ) -> (Vec<String>, usize) {
        if filter.is_empty() {
            return (index.into_charts(), 0);
        }

        let (charts, excluded) = filter.apply(index.into_charts());
        if excluded > 0 {
            info!(excluded, "excluded chart(s) based on patterns");
        }
        for pattern in filter.unmatched_patterns() {
            warn!(pattern, "exclude pattern did not match any chart");
        }

        (charts, excluded)
    }

    /// Reports an index key that is never handed to the manifest tool
    ///
    /// It is shown like a failed generate so it lands on the failure list
    /// without stopping the run.
    fn reject_key(&self, key: &str, error: anyhow::Error) -> ChartOutcome {
        let reason = match error.downcast_ref::<VerifyError>() {
            Some(VerifyError::InvalidChartName { reason, .. }) => reason.clone(),
            _ => error.to_string(),
        };
        warn!(key, %reason, "skipping unusable chart name");

        self.progress_reporter
            .report_error(&format!("generating {} failure:", key));
        self.progress_reporter.report_error(&reason);
        ChartOutcome::Rejected { reason }
    }

    /// Installs the chart and wires up its module and environment
    ///
    /// Every step is best-effort: a failure here only shows up later as
    /// a generate or render failure.
    async fn prepare_chart(&self, request: &VerifyRequest, app_dir: &Path, chart: &ChartName) {
        let tool = &self.manifest_tool;

        let status = tool
            .install_package(app_dir, &request.registry_name, chart)
            .await;
        discard_setup_status("pkg install", Some(chart), status);

        let status = tool.create_module(app_dir, chart).await;
        discard_setup_status("module create", Some(chart), status);

        let status = tool.add_environment(app_dir, chart).await;
        discard_setup_status("env add", Some(chart), status);

        let status = tool.set_environment_targets(app_dir, chart).await;
        discard_setup_status("env targets", Some(chart), status);
    }

    /// Runs the generate -> render pipeline for one chart
    async fn verify_chart(
        &self,
        request: &VerifyRequest,
        app_dir: &Path,
        chart: &ChartName,
    ) -> ChartOutcome {
        self.prepare_chart(request, app_dir, chart).await;

        let generated = self
            .manifest_tool
            .generate(app_dir, &request.registry_name, chart)
            .await;

        if !generated.success {
            self.progress_reporter
                .report_error(&format!("generating {} failure:", chart));
            self.report_stderr(&generated.stderr);
            return ChartOutcome::GenerateFailed {
                stderr: generated.stderr,
            };
        }

        match self
            .manifest_tool
            .show(app_dir, chart, request.render_timeout)
            .await
        {
            RenderResult::Completed(output) if output.success => ChartOutcome::Passed,
            RenderResult::Completed(output) => {
                self.progress_reporter
                    .report_error(&format!("{} failed", chart));
                self.report_stderr(&output.stderr);
                ChartOutcome::RenderFailed {
                    stderr: output.stderr,
                }
            }
            // Reported, but not counted as a failure
            RenderResult::TimedOut => {
                self.progress_reporter
                    .report(&format!("timed out showing {}", chart));
                ChartOutcome::RenderTimedOut
            }
        }
    }

    /// Echoes captured stderr, as an empty line when there was none
    fn report_stderr(&self, stderr: &str) {
        self.progress_reporter.report_error(stderr);
    }

    fn report_results(&self, report: &VerificationReport) {
        self.progress_reporter.report_completion(&report.summary());
        if report.has_failures() {
            self.progress_reporter
                .report_completion(&report.failure_list_literal());
        }
    }
}

/// Consumes the status of a best-effort setup step
///
/// Setup failures never change the outcome of a run; they are only logged.
fn discard_setup_status(step: &str, chart: Option<&ChartName>, status: SetupStatus) {
    if let SetupStatus::Failed(reason) = status {
        debug!(
            step,
            chart = chart.map(ChartName::as_str).unwrap_or("-"),
            %reason,
            "ignoring failed setup step"
        );
    }
}
