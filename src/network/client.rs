use crate::network::errors::NetworkError;
use crate::network::identity::IdentityProfile;
use crate::network::search::{SearchRequest, SearchResponse};
use crate::network::{GuildSearch, PageFetcher};
use crate::ops::telemetry;
use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

// * The HTTP engine behind both collaborator traits.
pub struct FastClient {
    inner: Client,
    search_url: String,
}

impl FastClient {
    // * Initializes the client with the bot identity and a bounded per-request timeout.
    pub fn new(search_url: &str, timeout: Duration) -> Result<Self, NetworkError> {
        let mut headers = HeaderMap::new();
        IdentityProfile::bot().apply_to_headers(&mut headers);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        url::Url::parse(search_url)
            .map_err(|e| NetworkError::InvalidUrl(format!("{} ({})", search_url, e)))?;

        Ok(Self {
            inner: client,
            search_url: search_url.to_string(),
        })
    }

    fn check_status(resp: &reqwest::Response, url: &str) -> Result<(), NetworkError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PageFetcher for FastClient {
    // * Fetches a URL and returns the body text. No retries.
    async fn fetch(&self, url: &str) -> Result<String, NetworkError> {
        let result = async {
            let resp = self.inner.get(url).send().await?;
            Self::check_status(&resp, url)?;
            Ok::<_, NetworkError>(resp.text().await?)
        }
        .await;

        match &result {
            Ok(body) => {
                tracing::debug!(url, bytes = body.len(), "Fetched page");
                telemetry::record_fetch("page", true);
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Page fetch failed");
                telemetry::record_fetch("page", false);
            }
        }
        result
    }
}

#[async_trait]
impl GuildSearch for FastClient {
    async fn search(&self, query: &str) -> Result<SearchResponse, NetworkError> {
        let result = async {
            let resp = self
                .inner
                .post(&self.search_url)
                .json(&SearchRequest { search: query })
                .send()
                .await?;
            Self::check_status(&resp, &self.search_url)?;
            let body = resp.bytes().await?;
            Ok::<_, NetworkError>(serde_json::from_slice::<SearchResponse>(&body)?)
        }
        .await;

        match &result {
            Ok(resp) => {
                tracing::info!(query, hits = resp.result.len(), "Crew search completed");
                telemetry::record_fetch("search", true);
            }
            Err(e) => {
                tracing::warn!(query, error = %e, "Crew search failed");
                telemetry::record_fetch("search", false);
            }
        }
        result
    }
}
