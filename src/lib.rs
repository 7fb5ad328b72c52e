//! helm-verify - smoke-test every chart of a Helm repository with ks
//!
//! This library downloads a chart repository index, scaffolds a throwaway
//! ksonnet application, and tries to install, generate and render every
//! chart in it, collecting the charts that fail.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`verification`): Chart names, index, outcomes, report
//! - **Application Layer** (`application`): The verification use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP, child process, workspace and console
//! - **Shared** (`shared`): Common error types
//!
//! # Example
//!
//! ```no_run
//! use helm_verify::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let workspace = Workspace::create()?;
//!
//! let use_case = VerifyChartsUseCase::new(
//!     HttpIndexRepository::new()?,
//!     KsCli::default(),
//!     StdoutProgressReporter::new(),
//! );
//!
//! let request = VerifyRequest::builder()
//!     .repository_url("https://charts.example.com/index.yaml")
//!     .workspace_root(workspace.path())
//!     .app_name(workspace.app_name())
//!     .build()?;
//!
//! let report = use_case.execute(request).await?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod verification;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StdoutProgressReporter;
    pub use crate::adapters::outbound::filesystem::Workspace;
    pub use crate::adapters::outbound::network::HttpIndexRepository;
    pub use crate::adapters::outbound::process::KsCli;
    pub use crate::application::dto::VerifyRequest;
    pub use crate::application::use_cases::VerifyChartsUseCase;
    pub use crate::ports::outbound::{
        IndexRepository, ManifestTool, ProgressReporter, RenderResult, SetupStatus, ToolOutput,
    };
    pub use crate::shared::error::{ExitCode, VerifyError};
    pub use crate::shared::Result;
    pub use crate::verification::domain::{
        ChartIndex, ChartName, ChartOutcome, VerificationReport,
    };
    pub use crate::verification::services::ChartFilter;
}
