use async_trait::async_trait;
use helm_verify::prelude::*;

/// Mock IndexRepository for testing
///
/// Serves a fixed list of chart names, or fails like an unreachable
/// repository when built with `unreachable`.
pub struct MockIndexRepository {
    charts: Vec<String>,
    should_fail: bool,
}

impl MockIndexRepository {
    pub fn new(charts: &[&str]) -> Self {
        Self {
            charts: charts.iter().map(|c| c.to_string()).collect(),
            should_fail: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            charts: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl IndexRepository for MockIndexRepository {
    async fn fetch_index(&self, url: &str) -> Result<ChartIndex> {
        if self.should_fail {
            return Err(VerifyError::IndexFetch {
                url: url.to_string(),
                details: "connection refused".to_string(),
            }
            .into());
        }

        Ok(ChartIndex::new(self.charts.clone()).with_api_version(Some("v1".to_string())))
    }
}
