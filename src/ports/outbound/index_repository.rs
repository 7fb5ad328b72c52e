use crate::shared::Result;
use crate::verification::domain::ChartIndex;
use async_trait::async_trait;

/// IndexRepository port for retrieving a chart repository index
///
/// This port abstracts where the `index.yaml` comes from (HTTP in
/// production, canned data in tests).
#[async_trait]
pub trait IndexRepository: Send + Sync {
    /// Fetches and parses the index published at `url`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request fails or returns a non-success status
    /// - The body is not YAML with a top-level `entries` mapping
    /// - A key in `entries` is not a scalar
    async fn fetch_index(&self, url: &str) -> Result<ChartIndex>;
}
