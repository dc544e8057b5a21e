// * Guild Resolver
// * Turns a free-text crew name into at most MAX_CANDIDATES candidates.

use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::config::constants::MAX_CANDIDATES;
use crate::engine::numfmt::format_with_separators;
use crate::network::{GuildSearch, NetworkError, SearchHit};

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no crew matches '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Network(#[from] NetworkError),
}

/// A crew's result in one past event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventStanding {
    pub event_number: i64,
    pub name: String,
    pub rank: i64,
    /// `None` until the event has a recorded score
    pub points: Option<i64>,
}

impl EventStanding {
    /// One summary line, or `None` when there is no score to show
    pub fn summary_line(&self) -> Option<String> {
        let points = self.points?;
        Some(format!(
            "{} - Ranked #{} in GW #{} with {} points",
            self.name,
            self.rank,
            self.event_number,
            format_with_separators(points)
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildCandidate {
    pub id: String,
    pub display_name: String,
    pub recent_events: Vec<EventStanding>,
}

impl GuildCandidate {
    fn from_hit(hit: SearchHit) -> Self {
        let recent_events: Vec<EventStanding> = hit
            .data
            .into_iter()
            .map(|entry| EventStanding {
                event_number: entry.gw_num,
                name: entry.name,
                rank: entry.rank,
                points: entry.points,
            })
            .collect();

        // * Latest event carries the crew's current name
        let display_name = recent_events
            .iter()
            .max_by_key(|s| s.event_number)
            .map(|s| s.name.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| hit.id.clone());

        Self {
            id: hit.id,
            display_name,
            recent_events,
        }
    }

    /// Summary lines in source order, skipping events without points
    pub fn summary(&self) -> Vec<String> {
        self.recent_events
            .iter()
            .filter_map(EventStanding::summary_line)
            .collect()
    }
}

/// Outcome of one search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub candidates: Vec<GuildCandidate>,
    /// Number of crews the endpoint matched before capping
    pub total_matches: usize,
}

impl Resolution {
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.candidates.len()
    }

    /// User-facing note when some matches were dropped
    pub fn truncation_notice(&self) -> Option<String> {
        if !self.is_truncated() {
            return None;
        }
        Some(format!(
            "Found {} crews. Showing only the {} most relevant ones.",
            format_with_separators(self.total_matches as i64),
            self.candidates.len()
        ))
    }
}

pub struct GuildResolver {
    search: Arc<dyn GuildSearch>,
}

impl GuildResolver {
    pub fn new(search: Arc<dyn GuildSearch>) -> Self {
        Self { search }
    }

    pub async fn resolve(&self, name: &str) -> Result<Resolution, ResolveError> {
        let response = self.search.search(name).await?;
        let total_matches = response.result.len();

        if total_matches == 0 {
            info!(query = name, "No crew matched");
            return Err(ResolveError::NotFound(name.to_string()));
        }

        let candidates: Vec<GuildCandidate> = response
            .result
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(GuildCandidate::from_hit)
            .collect();

        info!(
            query = name,
            total = total_matches,
            kept = candidates.len(),
            "Resolved crew candidates"
        );

        Ok(Resolution {
            candidates,
            total_matches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{SearchEntry, SearchResponse};
    use async_trait::async_trait;

    struct CannedSearch(SearchResponse);

    #[async_trait]
    impl GuildSearch for CannedSearch {
        async fn search(&self, _query: &str) -> Result<SearchResponse, NetworkError> {
            Ok(self.0.clone())
        }
    }

    fn hit(id: &str, entries: Vec<(&str, i64, i64, Option<i64>)>) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            data: entries
                .into_iter()
                .map(|(name, rank, gw_num, points)| SearchEntry {
                    name: name.to_string(),
                    rank,
                    gw_num,
                    points,
                })
                .collect(),
        }
    }

    fn resolver_with(hits: Vec<SearchHit>) -> GuildResolver {
        GuildResolver::new(Arc::new(CannedSearch(SearchResponse { result: hits })))
    }

    #[tokio::test]
    async fn test_empty_result_is_not_found() {
        let err = resolver_with(vec![]).resolve("nobody").await.unwrap_err();
        assert!(matches!(err, ResolveError::NotFound(ref q) if q == "nobody"));
    }

    #[tokio::test]
    async fn test_caps_at_five_candidates() {
        let hits = (0..7).map(|i| hit(&i.to_string(), vec![])).collect();
        let resolution = resolver_with(hits).resolve("crew").await.unwrap();

        assert_eq!(resolution.candidates.len(), 5);
        assert_eq!(resolution.total_matches, 7);
        let notice = resolution.truncation_notice().unwrap();
        assert!(notice.contains("Showing only the 5 most relevant ones."));
    }

    #[tokio::test]
    async fn test_no_notice_when_everything_fits() {
        let resolution = resolver_with(vec![hit("1", vec![])]).resolve("crew").await.unwrap();
        assert!(!resolution.is_truncated());
        assert!(resolution.truncation_notice().is_none());
    }

    #[test]
    fn test_summary_skips_unscored_events() {
        let candidate = GuildCandidate::from_hit(hit(
            "99",
            vec![
                ("Old Name", 1500, 52, Some(1_234_567_890)),
                ("New Name", 800, 53, None),
            ],
        ));

        assert_eq!(candidate.display_name, "New Name");
        assert_eq!(
            candidate.summary(),
            vec!["Old Name - Ranked #1500 in GW #52 with 1,234,567,890 points".to_string()]
        );
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let candidate = GuildCandidate::from_hit(hit("12345", vec![]));
        assert_eq!(candidate.display_name, "12345");
        assert!(candidate.summary().is_empty());
    }
}
