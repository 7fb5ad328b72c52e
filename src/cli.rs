use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Verify that every chart in a Helm repository renders with ks
#[derive(Parser, Debug)]
#[command(name = "helm-verify")]
#[command(version)]
#[command(
    about = "Verify that every chart in a Helm repository renders with ks",
    long_about = None
)]
pub struct Args {
    /// URL of the chart repository index.yaml
    #[arg(value_name = "REPOSITORY_URL")]
    pub repository_url: Option<String>,

    /// Manifest-generation CLI to drive
    #[arg(long, env = "HELM_VERIFY_TOOL", value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Name the repository is registered under in the scaffolded app
    #[arg(long, value_name = "NAME", value_parser = parse_registry_name)]
    pub registry_name: Option<String>,

    /// Seconds a single render may take before it is abandoned
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub render_timeout: Option<u64>,

    /// Skip charts matching a pattern (supports wildcards: *)
    /// Can be specified multiple times: -e "mysql" -e "prometheus-*"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to helm-verify.config.yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_registry_name(value: &str) -> Result<String, String> {
    helm_verify::application::dto::validate_registry_name(value)
        .map(|()| value.to_string())
        .map_err(|e| e.to_string())
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
