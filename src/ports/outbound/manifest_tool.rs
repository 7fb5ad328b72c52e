use crate::verification::domain::ChartName;
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;

/// Status of a best-effort setup invocation
///
/// The verifier never acts on these; they exist so that ignoring a
/// setup failure is a visible decision at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupStatus {
    Succeeded,
    Failed(String),
}

impl SetupStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SetupStatus::Succeeded)
    }
}

/// Exit status and captured stderr of a checked invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stderr: String,
}

impl ToolOutput {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            exit_code: Some(0),
            stderr: String::new(),
        }
    }

    pub fn failed(exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            exit_code,
            stderr: stderr.into(),
        }
    }
}

/// Result of a render bounded by a timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    Completed(ToolOutput),
    TimedOut,
}

/// ManifestTool port for driving the manifest-generation CLI
///
/// Every method runs one invocation. Setup steps report a `SetupStatus`
/// and never fail the caller; `generate` and `show` report exit status
/// and stderr for the verifier to judge.
#[async_trait]
pub trait ManifestTool: Send + Sync {
    /// Scaffolds application `app_name` inside `parent_dir`
    async fn init_app(&self, parent_dir: &Path, app_name: &str) -> SetupStatus;

    /// Registers the chart repository as a package registry
    async fn add_registry(&self, app_dir: &Path, registry: &str, url: &str) -> SetupStatus;

    async fn install_package(&self, app_dir: &Path, registry: &str, chart: &ChartName)
        -> SetupStatus;

    async fn create_module(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus;

    async fn add_environment(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus;

    /// Points the chart's environment at the chart's module
    async fn set_environment_targets(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus;

    /// Generates the chart's component from the registry prototype
    async fn generate(&self, app_dir: &Path, registry: &str, chart: &ChartName) -> ToolOutput;

    /// Renders the chart's environment, giving up after `timeout`
    async fn show(&self, app_dir: &Path, chart: &ChartName, timeout: Duration) -> RenderResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_status() {
        assert!(SetupStatus::Succeeded.is_success());
        assert!(!SetupStatus::Failed("exit status: 1".to_string()).is_success());
    }

    #[test]
    fn test_tool_output_constructors() {
        let ok = ToolOutput::succeeded();
        assert!(ok.success);
        assert_eq!(ok.exit_code, Some(0));

        let failed = ToolOutput::failed(Some(2), "bad prototype");
        assert!(!failed.success);
        assert_eq!(failed.exit_code, Some(2));
        assert_eq!(failed.stderr, "bad prototype");
    }
}
