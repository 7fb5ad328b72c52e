use crate::shared::error::VerifyError;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns accepted in one run
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// ChartFilter - Skips charts whose names match an exclude pattern
///
/// Patterns support `*` as a wildcard for zero or more characters and are
/// anchored at both ends: `mysql*` matches `mysqldump` but not `my-mysql`.
/// Matching is case-sensitive.
#[derive(Debug)]
pub struct ChartFilter {
    patterns: Vec<ExcludePattern>,
}

impl ChartFilter {
    /// Compiles raw pattern strings
    ///
    /// # Errors
    /// - More than `MAX_EXCLUDE_PATTERNS` patterns
    /// - A pattern that is empty, too long, wildcard-only, or contains
    ///   characters a chart name cannot contain
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            return Err(VerifyError::Validation {
                message: format!(
                    "Too many exclude patterns: {} (maximum: {})",
                    patterns.len(),
                    MAX_EXCLUDE_PATTERNS
                ),
            }
            .into());
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Splits charts into those to verify, keeping index order, and the
    /// number excluded
    pub fn apply<T: AsRef<str>>(&self, charts: Vec<T>) -> (Vec<T>, usize) {
        let total = charts.len();
        let kept: Vec<T> = charts
            .into_iter()
            .filter(|chart| !self.matches(chart.as_ref()))
            .collect();
        let excluded = total - kept.len();
        (kept, excluded)
    }

    fn matches(&self, chart_name: &str) -> bool {
        // Evaluate every pattern so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(chart_name) || hit)
    }

    /// Patterns that did not match any chart so far
    pub fn unmatched_patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.as_str())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let segments = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            original: pattern,
            segments,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, chart_name: &str) -> bool {
        let is_match = self.glob_match(chart_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn glob_match(&self, chart_name: &str) -> bool {
        if !self.original.contains('*') {
            return chart_name == self.original;
        }

        let mut rest = chart_name;
        let last = self.segments.len().saturating_sub(1);

        for (i, segment) in self.segments.iter().enumerate() {
            if i == 0 && self.anchored_start {
                match rest.strip_prefix(segment.as_str()) {
                    Some(stripped) => rest = stripped,
                    None => return false,
                }
            } else if i == last && self.anchored_end {
                return rest.len() >= segment.len() && rest.ends_with(segment.as_str());
            } else {
                match rest.find(segment.as_str()) {
                    Some(pos) => rest = &rest[pos + segment.len()..],
                    None => return false,
                }
            }
        }

        // Only patterns with a trailing '*' get here; it absorbs the rest.
        true
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    let invalid = |message: String| -> Result<()> {
        Err(VerifyError::Validation { message }.into())
    };

    if pattern.is_empty() {
        return invalid("Exclude pattern cannot be empty".to_string());
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        return invalid(format!(
            "Exclude pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    }

    if let Some(ch) = pattern
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return invalid(format!(
            "Exclude pattern contains invalid character {:?} in pattern '{}'",
            ch, pattern
        ));
    }

    if pattern.chars().all(|c| c == '*') {
        return invalid(format!(
            "Exclude pattern cannot contain only wildcards: '{}'",
            pattern
        ));
    }

    Ok(())
}
