/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, child processes, console).
pub mod index_repository;
pub mod manifest_tool;
pub mod progress_reporter;

pub use index_repository::IndexRepository;
pub use manifest_tool::{ManifestTool, RenderResult, SetupStatus, ToolOutput};
pub use progress_reporter::ProgressReporter;
