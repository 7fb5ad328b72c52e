/// Mock implementations for testing
mod mock_index_repository;
mod mock_manifest_tool;
mod mock_progress_reporter;

pub use mock_index_repository::MockIndexRepository;
pub use mock_manifest_tool::MockManifestTool;
pub use mock_progress_reporter::MockProgressReporter;
