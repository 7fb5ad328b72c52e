use super::index_parser::parse_index;
use crate::ports::outbound::IndexRepository;
use crate::shared::error::VerifyError;
use crate::shared::Result;
use crate::verification::domain::ChartIndex;
use async_trait::async_trait;
use tracing::debug;

/// HttpIndexRepository adapter for downloading a chart repository index
///
/// Issues exactly one unauthenticated GET per call, with
/// no retry and no request timeout. A broken repository ends the run.
pub struct HttpIndexRepository {
    client: reqwest::Client,
}

impl HttpIndexRepository {
    pub fn new() -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("helm-verify/{}", version);
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self { client })
    }

    async fn download(&self, url: &str) -> Result<String> {
        let fetch_error = |details: String| VerifyError::IndexFetch {
            url: url.to_string(),
            details,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("Server returned status code {}", status)).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(format!("Failed to read response body: {}", e)))?;

        debug!(url, bytes = body.len(), "downloaded repository index");
        Ok(body)
    }
}

#[async_trait]
impl IndexRepository for HttpIndexRepository {
    async fn fetch_index(&self, url: &str) -> Result<ChartIndex> {
        let body = self.download(url).await?;

        let index = parse_index(&body).map_err(|e| VerifyError::IndexParse {
            url: url.to_string(),
            details: format!("{:#}", e),
        })?;

        debug!(
            charts = index.len(),
            api_version = index.api_version().unwrap_or("-"),
            "parsed repository index"
        );
        Ok(index)
    }
}
