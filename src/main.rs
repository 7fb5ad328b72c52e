mod cli;
mod config;

use cli::Args;
use config::{load_config, Settings};
use helm_verify::prelude::*;
use owo_colors::OwoColorize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("\n{} An error occurred:\n", "❌".red());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            ExitCode::ApplicationError.into()
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug. `RUST_LOG` wins.
fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "helm_verify=warn",
        1 => "helm_verify=info",
        _ => "helm_verify=debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Runs one verification and returns the exit code to report.
///
/// The workspace lives in this scope, so it is removed before `main`
/// returns on every path, including errors.
async fn run(args: Args) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = load_config(args.config.as_deref(), &cwd)?;
    let settings = Settings::resolve(&args, config, &cwd);
    debug!(?settings, "resolved settings");

    let workspace = Workspace::create()?;
    info!(
        path = %workspace.path().display(),
        app_dir = %workspace.app_dir().display(),
        "created workspace"
    );

    let request = VerifyRequest::builder()
        .repository_url(settings.repository_url)
        .registry_name(settings.registry_name)
        .render_timeout(settings.render_timeout)
        .exclude_patterns(settings.exclude_patterns)
        .workspace_root(workspace.path())
        .app_name(workspace.app_name())
        .build()?;

    let use_case = VerifyChartsUseCase::new(
        HttpIndexRepository::new()?,
        KsCli::new(settings.tool),
        StdoutProgressReporter::new(),
    );

    // Ctrl-C drops the run (and any child it is waiting on) so the
    // workspace still gets removed
    let report = tokio::select! {
        result = use_case.execute(request) => result?,
        _ = tokio::signal::ctrl_c() => anyhow::bail!("Interrupted before verification finished"),
    };

    Ok(report.exit_code())
}
