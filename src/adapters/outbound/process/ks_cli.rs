use crate::ports::outbound::{ManifestTool, RenderResult, SetupStatus, ToolOutput};
use crate::verification::domain::ChartName;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Default binary name of the manifest-generation CLI
pub const DEFAULT_TOOL: &str = "ks";

/// KsCli adapter driving the ksonnet command line
///
/// Arguments are passed as an argument vector, never through a shell, and
/// each invocation runs with an explicit working directory. Setup steps
/// discard stdout and stderr; `generate` and `show` capture stderr only.
pub struct KsCli {
    binary: PathBuf,
}

impl KsCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .kill_on_drop(true);
        command
    }

    async fn run_quiet(&self, dir: &Path, args: &[&str]) -> SetupStatus {
        let status = self.command(dir, args).stderr(Stdio::null()).status().await;

        let result = match status {
            Ok(status) if status.success() => SetupStatus::Succeeded,
            Ok(status) => SetupStatus::Failed(status.to_string()),
            Err(e) => SetupStatus::Failed(format!(
                "failed to launch {}: {}",
                self.binary.display(),
                e
            )),
        };
        debug!(?args, ?result, "setup invocation finished");
        result
    }

    async fn run_captured(&self, dir: &Path, args: &[&str]) -> ToolOutput {
        let output = self.command(dir, args).stderr(Stdio::piped()).output().await;
        let result = self.to_tool_output(output);
        debug!(?args, exit_code = ?result.exit_code, "checked invocation finished");
        result
    }

    fn to_tool_output(&self, output: std::io::Result<Output>) -> ToolOutput {
        match output {
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
                if output.status.success() {
                    ToolOutput {
                        success: true,
                        exit_code: output.status.code(),
                        stderr,
                    }
                } else {
                    ToolOutput::failed(output.status.code(), stderr)
                }
            }
            Err(e) => ToolOutput::failed(
                None,
                format!("failed to launch {}: {}", self.binary.display(), e),
            ),
        }
    }
}

impl Default for KsCli {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL)
    }
}

#[async_trait]
impl ManifestTool for KsCli {
    async fn init_app(&self, parent_dir: &Path, app_name: &str) -> SetupStatus {
        self.run_quiet(parent_dir, &["init", app_name, "--skip-default-registries"])
            .await
    }

    async fn add_registry(&self, app_dir: &Path, registry: &str, url: &str) -> SetupStatus {
        self.run_quiet(app_dir, &["registry", "add", registry, url])
            .await
    }

    async fn install_package(
        &self,
        app_dir: &Path,
        registry: &str,
        chart: &ChartName,
    ) -> SetupStatus {
        let package = format!("{}/{}", registry, chart);
        self.run_quiet(app_dir, &["pkg", "install", &package]).await
    }

    async fn create_module(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.run_quiet(app_dir, &["module", "create", chart.as_str()])
            .await
    }

    async fn add_environment(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.run_quiet(app_dir, &["env", "add", chart.as_str()]).await
    }

    async fn set_environment_targets(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.run_quiet(
            app_dir,
            &["env", "targets", chart.as_str(), "--module", chart.as_str()],
        )
        .await
    }

    async fn generate(&self, app_dir: &Path, registry: &str, chart: &ChartName) -> ToolOutput {
        let prototype = format!("{}-{}", registry, chart);
        let component = chart.qualified_component();
        self.run_captured(app_dir, &["generate", &prototype, &component])
            .await
    }

    async fn show(&self, app_dir: &Path, chart: &ChartName, timeout: Duration) -> RenderResult {
        let args = ["show", chart.as_str()];
        let child = self
            .command(app_dir, &args)
            .stderr(Stdio::piped())
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => return RenderResult::Completed(self.to_tool_output(Err(e))),
        };

        // Dropping the wait future on timeout drops the child, which kills it
        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => {
                let result = self.to_tool_output(output);
                debug!(?args, exit_code = ?result.exit_code, "render finished");
                RenderResult::Completed(result)
            }
            Err(_) => {
                debug!(?args, ?timeout, "render timed out");
                RenderResult::TimedOut
            }
        }
    }
}
