/// Filesystem adapters for the ephemeral run workspace
mod workspace;

pub use workspace::{generate_app_name, Workspace};
