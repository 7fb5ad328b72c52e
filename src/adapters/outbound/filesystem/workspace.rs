use crate::shared::error::VerifyError;
use crate::shared::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use uuid::Uuid;

/// Prefix of the throwaway directory created for each run
const WORKSPACE_PREFIX: &str = "ks-verify-helm-";

/// Number of letters in the generated application name
const APP_NAME_LENGTH: usize = 12;

/// Workspace - Ephemeral directory that hosts the scaffolded application
///
/// The directory and everything the manifest tool writes into it are
/// removed when the value is dropped, so every exit path that unwinds
/// through the owner cleans up.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    app_name: String,
}

impl Workspace {
    /// Creates a workspace under the system temp root (`TMPDIR` is honoured)
    pub fn create() -> Result<Self> {
        Self::create_in(std::env::temp_dir())
    }

    /// Creates a workspace under `root`
    pub fn create_in(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir_in(root)
            .map_err(|e| VerifyError::WorkspaceError {
                path: root.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(Self {
            dir,
            app_name: generate_app_name(),
        })
    }

    /// Root of the workspace, where the application gets scaffolded
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Directory of the scaffolded application, once `init` has run
    pub fn app_dir(&self) -> PathBuf {
        self.dir.path().join(&self.app_name)
    }
}

/// Generates an uppercase alphabetic application name
///
/// Each nibble of a v4 UUID is mapped onto `A`..=`P`, giving 48 random bits
/// for a 12 letter name.
pub fn generate_app_name() -> String {
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .flat_map(|byte| [byte >> 4, byte & 0x0f])
        .take(APP_NAME_LENGTH)
        .map(|nibble| char::from(b'A' + nibble))
        .collect()
}
