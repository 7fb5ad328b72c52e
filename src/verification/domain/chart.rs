use crate::shared::error::VerifyError;
use crate::shared::Result;

/// Maximum length for chart names (security limit)
const MAX_CHART_NAME_LENGTH: usize = 253;

/// NewType wrapper for a chart name taken from the repository index
///
/// Chart names end up as positional arguments of the manifest tool,
/// so a name may never look like a flag or split into several words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartName(String);

impl ChartName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("Chart name cannot be empty".to_string())
        } else if name.len() > MAX_CHART_NAME_LENGTH {
            Some(format!(
                "Chart name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_CHART_NAME_LENGTH
            ))
        } else if name.starts_with('-') {
            Some("Chart name cannot start with '-'".to_string())
        } else if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            Some("Chart name contains whitespace or control characters".to_string())
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(VerifyError::InvalidChartName { name, reason }.into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Component path handed to `generate`, of the form `{name}.{name}`
    pub fn qualified_component(&self) -> String {
        format!("{0}.{0}", self.0)
    }
}

impl std::fmt::Display for ChartName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ChartName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
