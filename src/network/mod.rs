// * Network collaborators: page fetching and crew search.
// * The engine only sees the `PageFetcher` and `GuildSearch` traits.

pub mod client;
pub mod errors;
pub mod identity;
pub mod search;

use async_trait::async_trait;

pub use client::FastClient;
pub use errors::NetworkError;
pub use search::{SearchEntry, SearchHit, SearchResponse};

/// Generic HTTP GET returning the response body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, NetworkError>;
}

/// Fuzzy crew search by name
#[async_trait]
pub trait GuildSearch: Send + Sync {
    async fn search(&self, query: &str) -> Result<SearchResponse, NetworkError>;
}

// * Builds a concrete URL from a `{id}` template and validates it.
pub fn expand_template(template: &str, id: &str) -> Result<String, NetworkError> {
    let raw = template.replace(crate::config::constants::ID_PLACEHOLDER, id.trim());
    url::Url::parse(&raw)
        .map(|u| u.to_string())
        .map_err(|e| NetworkError::InvalidUrl(format!("{} ({})", raw, e)))
}
