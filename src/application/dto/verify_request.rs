use crate::shared::error::VerifyError;
use crate::shared::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Repository verified when no URL is given
pub const DEFAULT_REPOSITORY_URL: &str =
    "https://kubernetes-charts.storage.googleapis.com/index.yaml";

/// Name the chart repository is registered under in the scaffolded app
pub const DEFAULT_REGISTRY_NAME: &str = "helm";

/// Upper bound on a single render
pub const DEFAULT_RENDER_TIMEOUT: Duration = Duration::from_secs(15);

/// VerifyRequest - Internal request DTO for the chart verification use case
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// URL of the repository `index.yaml`
    pub repository_url: String,
    /// Registry name used for `registry add`, `pkg install` and prototypes
    pub registry_name: String,
    /// How long a single `show` may run before it is abandoned
    pub render_timeout: Duration,
    /// Patterns of chart names to skip
    pub exclude_patterns: Vec<String>,
    /// Directory the application is scaffolded in
    pub workspace_root: PathBuf,
    /// Name of the scaffolded application
    pub app_name: String,
}

impl VerifyRequest {
    pub fn builder() -> VerifyRequestBuilder {
        VerifyRequestBuilder::default()
    }

    /// Directory of the scaffolded application
    pub fn app_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.app_name)
    }
}

/// Builder for [`VerifyRequest`]
///
/// `workspace_root` and `app_name` are required; everything else falls
/// back to the defaults above.
#[derive(Debug, Default)]
pub struct VerifyRequestBuilder {
    repository_url: Option<String>,
    registry_name: Option<String>,
    render_timeout: Option<Duration>,
    exclude_patterns: Vec<String>,
    workspace_root: Option<PathBuf>,
    app_name: Option<String>,
}

impl VerifyRequestBuilder {
    pub fn repository_url(mut self, url: impl Into<String>) -> Self {
        self.repository_url = Some(url.into());
        self
    }

    pub fn registry_name(mut self, name: impl Into<String>) -> Self {
        self.registry_name = Some(name.into());
        self
    }

    pub fn render_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout = Some(timeout);
        self
    }

    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    pub fn workspace_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.workspace_root = Some(root.into());
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn build(self) -> Result<VerifyRequest> {
        let workspace_root = self
            .workspace_root
            .ok_or_else(|| validation("workspace_root is required"))?;
        let app_name = self
            .app_name
            .ok_or_else(|| validation("app_name is required"))?;
        if app_name.is_empty() || app_name.contains(std::path::is_separator) {
            return Err(validation("app_name must be a single non-empty path component").into());
        }

        let repository_url = self
            .repository_url
            .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string());
        if repository_url.trim().is_empty() {
            return Err(validation("repository URL cannot be empty").into());
        }

        let registry_name = self
            .registry_name
            .unwrap_or_else(|| DEFAULT_REGISTRY_NAME.to_string());
        validate_registry_name(&registry_name)?;

        let render_timeout = self.render_timeout.unwrap_or(DEFAULT_RENDER_TIMEOUT);
        if render_timeout.is_zero() {
            return Err(validation("render timeout must be greater than zero").into());
        }

        Ok(VerifyRequest {
            repository_url,
            registry_name,
            render_timeout,
            exclude_patterns: self.exclude_patterns,
            workspace_root,
            app_name,
        })
    }
}

/// Checks that a registry name can be spliced into `ks` arguments
///
/// The name prefixes package and prototype names (`helm/redis`,
/// `helm-redis`), so it may not start with '-' or contain '/' or whitespace.
pub fn validate_registry_name(name: &str) -> Result<()> {
    if name.is_empty()
        || name.starts_with('-')
        || name
            .chars()
            .any(|c| c == '/' || c.is_whitespace() || c.is_control())
    {
        return Err(validation(&format!(
            "invalid registry name {:?}: must be non-empty, not start with '-', and contain no '/' or whitespace",
            name
        ))
        .into());
    }
    Ok(())
}

fn validation(message: &str) -> VerifyError {
    VerifyError::Validation {
        message: message.to_string(),
    }
}
