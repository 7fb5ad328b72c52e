use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI pipelines to use the verifier as a pass/fail gate
/// while still distinguishing a broken run from failing charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every checked chart generated and rendered (timeouts included)
    Success = 0,
    /// At least one chart failed to generate or render
    VerificationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (index fetch, index parse, workspace, config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Numeric status reported to the shell
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VerificationFailed => write!(f, "Verification Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code.as_i32() as u8)
    }
}

/// Application-specific errors for chart verification.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping a hint line on every message that reaches the user.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("Failed to fetch chart repository index: {url}\nDetails: {details}\n\n💡 Hint: Check the repository URL and your network connection")]
    IndexFetch { url: String, details: String },

    #[error("Failed to parse chart repository index: {url}\nDetails: {details}\n\n💡 Hint: The URL must point at a Helm index.yaml with a top-level 'entries' mapping")]
    IndexParse { url: String, details: String },

    #[error("Invalid chart name: {name:?}\nReason: {reason}\n\n💡 Hint: Chart names must be non-empty and contain no whitespace")]
    InvalidChartName { name: String, reason: String },

    #[error("Failed to prepare workspace: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the temp directory exists and you have write permissions")]
    WorkspaceError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::VerificationFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::VerificationFailed),
            "Verification Failed (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_exit_code_into_process_exit_code() {
        let code: std::process::ExitCode = ExitCode::VerificationFailed.into();
        assert_eq!(
            format!("{:?}", code),
            format!("{:?}", std::process::ExitCode::from(1))
        );
    }

    #[test]
    fn test_index_fetch_display() {
        let error = VerifyError::IndexFetch {
            url: "https://charts.example.com/index.yaml".to_string(),
            details: "connection refused".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to fetch chart repository index"));
        assert!(display.contains("https://charts.example.com/index.yaml"));
        assert!(display.contains("connection refused"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_index_parse_display() {
        let error = VerifyError::IndexParse {
            url: "https://charts.example.com/index.yaml".to_string(),
            details: "missing 'entries'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse chart repository index"));
        assert!(display.contains("missing 'entries'"));
        assert!(display.contains("'entries' mapping"));
    }

    #[test]
    fn test_invalid_chart_name_display() {
        let error = VerifyError::InvalidChartName {
            name: "bad name".to_string(),
            reason: "contains whitespace".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid chart name: \"bad name\""));
        assert!(display.contains("contains whitespace"));
    }

    #[test]
    fn test_workspace_error_display() {
        let error = VerifyError::WorkspaceError {
            path: PathBuf::from("/tmp"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to prepare workspace"));
        assert!(display.contains("/tmp"));
        assert!(display.contains("Permission denied"));
    }
}
