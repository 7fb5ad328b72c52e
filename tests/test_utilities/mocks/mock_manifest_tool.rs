use async_trait::async_trait;
use helm_verify::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock ManifestTool for testing
///
/// `init_app` really creates the application directory so tests can
/// observe the workspace; every other call is only recorded.
#[derive(Default, Clone)]
pub struct MockManifestTool {
    calls: Arc<Mutex<Vec<String>>>,
    dirs: Arc<Mutex<Vec<PathBuf>>>,
    broken_generate: HashSet<String>,
    broken_render: HashSet<String>,
    slow_render: HashSet<String>,
}

impl MockManifestTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broken_generate(mut self, chart: &str) -> Self {
        self.broken_generate.insert(chart.to_string());
        self
    }

    pub fn with_broken_render(mut self, chart: &str) -> Self {
        self.broken_render.insert(chart.to_string());
        self
    }

    pub fn with_slow_render(mut self, chart: &str) -> Self {
        self.slow_render.insert(chart.to_string());
        self
    }

    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Working directories of every call after `init_app`
    pub fn get_dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }

    fn record(&self, dir: &Path, call: String) {
        self.dirs.lock().unwrap().push(dir.to_path_buf());
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ManifestTool for MockManifestTool {
    async fn init_app(&self, parent_dir: &Path, app_name: &str) -> SetupStatus {
        self.calls
            .lock()
            .unwrap()
            .push(format!("init {} --skip-default-registries", app_name));
        match std::fs::create_dir(parent_dir.join(app_name)) {
            Ok(()) => SetupStatus::Succeeded,
            Err(e) => SetupStatus::Failed(e.to_string()),
        }
    }

    async fn add_registry(&self, app_dir: &Path, registry: &str, url: &str) -> SetupStatus {
        self.record(app_dir, format!("registry add {} {}", registry, url));
        SetupStatus::Succeeded
    }

    async fn install_package(
        &self,
        app_dir: &Path,
        registry: &str,
        chart: &ChartName,
    ) -> SetupStatus {
        self.record(app_dir, format!("pkg install {}/{}", registry, chart));
        SetupStatus::Succeeded
    }

    async fn create_module(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.record(app_dir, format!("module create {}", chart));
        SetupStatus::Succeeded
    }

    async fn add_environment(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.record(app_dir, format!("env add {}", chart));
        SetupStatus::Succeeded
    }

    async fn set_environment_targets(&self, app_dir: &Path, chart: &ChartName) -> SetupStatus {
        self.record(app_dir, format!("env targets {} --module {}", chart, chart));
        SetupStatus::Succeeded
    }

    async fn generate(&self, app_dir: &Path, registry: &str, chart: &ChartName) -> ToolOutput {
        self.record(
            app_dir,
            format!(
                "generate {}-{} {}",
                registry,
                chart,
                chart.qualified_component()
            ),
        );
        if self.broken_generate.contains(chart.as_str()) {
            ToolOutput::failed(Some(1), format!("ERROR prototype {} not found", chart))
        } else {
            ToolOutput::succeeded()
        }
    }

    async fn show(&self, app_dir: &Path, chart: &ChartName, _timeout: Duration) -> RenderResult {
        self.record(app_dir, format!("show {}", chart));
        if self.slow_render.contains(chart.as_str()) {
            RenderResult::TimedOut
        } else if self.broken_render.contains(chart.as_str()) {
            RenderResult::Completed(ToolOutput::failed(Some(1), "ERROR rendering failed"))
        } else {
            RenderResult::Completed(ToolOutput::succeeded())
        }
    }
}
