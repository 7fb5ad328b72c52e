/// Result of pushing one chart through the generate -> render pipeline
///
/// Each step is terminal on failure: a generate failure means render
/// never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    /// Generate and render both exited zero
    Passed,
    /// The index key cannot be passed to the manifest tool as a chart name
    Rejected { reason: String },
    /// `generate` exited non-zero (or could not be launched)
    GenerateFailed { stderr: String },
    /// `generate` succeeded, `show` exited non-zero
    RenderFailed { stderr: String },
    /// `show` did not finish within the render timeout
    RenderTimedOut,
}

impl ChartOutcome {
    /// Whether the chart belongs on the failure list.
    ///
    /// A render timeout is reported but does not fail the run.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ChartOutcome::Rejected { .. }
                | ChartOutcome::GenerateFailed { .. }
                | ChartOutcome::RenderFailed { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_is_not_failure() {
        assert!(!ChartOutcome::Passed.is_failure());
    }

    #[test]
    fn test_generate_and_render_failures_are_failures() {
        assert!(ChartOutcome::GenerateFailed {
            stderr: "boom".to_string()
        }
        .is_failure());
        assert!(ChartOutcome::RenderFailed {
            stderr: String::new()
        }
        .is_failure());
    }

    #[test]
    fn test_rejected_key_is_failure() {
        assert!(ChartOutcome::Rejected {
            reason: "Chart name cannot start with '-'".to_string()
        }
        .is_failure());
    }

    #[test]
    fn test_timeout_is_not_failure() {
        assert!(!ChartOutcome::RenderTimedOut.is_failure());
    }
}
