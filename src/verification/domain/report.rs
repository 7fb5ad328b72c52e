use super::ChartOutcome;
use crate::shared::error::ExitCode;

/// Accumulated results of one verification run
///
/// The failure list is append-only and keeps the order in which charts
/// were checked. Charts are identified by their index key, which may not
/// be a valid chart name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    checked: usize,
    excluded: usize,
    failures: Vec<String>,
    timed_out: Vec<String>,
}

impl VerificationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for a chart that went through the pipeline
    pub fn record(&mut self, chart: &str, outcome: &ChartOutcome) {
        self.checked += 1;
        if outcome.is_failure() {
            self.failures.push(chart.to_string());
        } else if *outcome == ChartOutcome::RenderTimedOut {
            self.timed_out.push(chart.to_string());
        }
    }

    pub fn record_excluded(&mut self, count: usize) {
        self.excluded += count;
    }

    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn timed_out(&self) -> &[String] {
        &self.timed_out
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Failure list printed as a literal sequence, e.g. `["beta", "gamma"]`
    pub fn failure_list_literal(&self) -> String {
        format!("{:?}", self.failures)
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "checked {} chart(s): {} failed, {} timed out",
            self.checked,
            self.failures.len(),
            self.timed_out.len()
        );
        if self.excluded > 0 {
            summary.push_str(&format!(", {} excluded", self.excluded));
        }
        summary
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::VerificationFailed
        } else {
            ExitCode::Success
        }
    }
}
