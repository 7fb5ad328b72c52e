//! Configuration file support for helm-verify.
//!
//! Provides YAML-based configuration through `helm-verify.config.yml` files,
//! and the merge of file values with command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use crate::cli::Args;
use helm_verify::adapters::outbound::process::DEFAULT_TOOL;
use helm_verify::application::dto::{
    validate_registry_name, DEFAULT_REGISTRY_NAME, DEFAULT_RENDER_TIMEOUT, DEFAULT_REPOSITORY_URL,
};
use helm_verify::shared::Result;

pub const CONFIG_FILENAME: &str = "helm-verify.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repository_url: Option<String>,
    pub tool: Option<PathBuf>,
    pub registry_name: Option<String>,
    pub render_timeout_secs: Option<u64>,
    pub exclude_charts: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings for a run after merging CLI, config file and defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub repository_url: String,
    pub tool: PathBuf,
    pub registry_name: String,
    pub render_timeout: Duration,
    pub exclude_patterns: Vec<String>,
}

impl Settings {
    /// Command-line values win over config values, which win over defaults.
    /// Exclude patterns from both sources are combined.
    ///
    /// The tool runs with the workspace as its working directory, so a tool
    /// path with a directory part is anchored to `cwd` here.
    pub fn resolve(args: &Args, config: Option<ConfigFile>, cwd: &Path) -> Self {
        let config = config.unwrap_or_default();

        let mut exclude_patterns = config.exclude_charts.unwrap_or_default();
        exclude_patterns.extend(args.exclude.iter().cloned());

        Self {
            repository_url: args
                .repository_url
                .clone()
                .or(config.repository_url)
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            tool: anchor_tool_path(
                args.tool
                    .clone()
                    .or(config.tool)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_TOOL)),
                cwd,
            ),
            registry_name: args
                .registry_name
                .clone()
                .or(config.registry_name)
                .unwrap_or_else(|| DEFAULT_REGISTRY_NAME.to_string()),
            render_timeout: args
                .render_timeout
                .or(config.render_timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_RENDER_TIMEOUT),
            exclude_patterns,
        }
    }
}

/// Joins a relative tool path that names a directory onto `base`.
///
/// Bare names such as `ks` are left alone for the `PATH` lookup.
fn anchor_tool_path(tool: PathBuf, base: &Path) -> PathBuf {
    if tool.is_relative() && tool.components().count() > 1 {
        base.join(tool)
    } else {
        tool
    }
}

/// Load the explicit config if given, otherwise auto-discover one in `dir`.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(dir),
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    // A relative `tool` is relative to the file that names it
    if let Some(config_dir) = path.parent() {
        config.tool = config.tool.map(|tool| anchor_tool_path(tool, config_dir));
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.render_timeout_secs == Some(0) {
        bail!(
            "Invalid config: render_timeout_secs must be greater than zero.\n\n\
             💡 Hint: The default render timeout is {} seconds.",
            DEFAULT_RENDER_TIMEOUT.as_secs()
        );
    }

    if let Some(url) = &config.repository_url {
        if url.trim().is_empty() {
            bail!("Invalid config: repository_url must not be empty.");
        }
    }

    if let Some(name) = &config.registry_name {
        validate_registry_name(name).with_context(|| {
            format!(
                "Invalid config: registry_name {:?} is not usable.\n\n\
                 💡 Hint: The default registry name is \"{}\".",
                name, DEFAULT_REGISTRY_NAME
            )
        })?;
    }

    if let Some(patterns) = &config.exclude_charts {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_charts[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a chart name pattern such as \"prometheus-*\".",
                    i
                );
            }
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!(field = %key, "unknown config field will be ignored");
    }
}
