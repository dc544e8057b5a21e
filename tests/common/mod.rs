// * In-memory collaborators shared by the integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use gw_scout::engine::ReportBlock;
use gw_scout::network::{
    GuildSearch, NetworkError, PageFetcher, SearchEntry, SearchHit, SearchResponse,
};
use gw_scout::sink::{EmitError, ReportSink};

pub const HISTORY_URL: &str = "http://test.local/history/{id}";
pub const MEMBERS_URL: &str = "http://test.local/members/{id}";

pub fn history_url(id: &str) -> String {
    HISTORY_URL.replace("{id}", id)
}

pub fn members_url(id: &str) -> String {
    MEMBERS_URL.replace("{id}", id)
}

/// Serves canned pages by URL; unknown URLs fail like a dead host
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn page(mut self, url: String, body: String) -> Self {
        self.pages.insert(url, body);
        self
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, NetworkError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| NetworkError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

pub enum FakeSearch {
    Hits(Vec<SearchHit>),
    Down,
}

#[async_trait]
impl GuildSearch for FakeSearch {
    async fn search(&self, _query: &str) -> Result<SearchResponse, NetworkError> {
        match self {
            FakeSearch::Hits(hits) => Ok(SearchResponse { result: hits.clone() }),
            FakeSearch::Down => Err(NetworkError::Status {
                status: 503,
                url: "http://test.local/search".into(),
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub texts: Mutex<Vec<String>>,
    pub blocks: Mutex<Vec<ReportBlock>>,
    /// Titles whose send should fail
    pub fail_titles: Vec<String>,
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn send_text(&self, text: &str) -> Result<(), EmitError> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn send_block(&self, block: &ReportBlock) -> Result<(), EmitError> {
        if self.fail_titles.iter().any(|t| block.title.starts_with(t.as_str())) {
            return Err(EmitError::Send("channel rate limited".into()));
        }
        self.blocks.lock().unwrap().push(block.clone());
        Ok(())
    }
}

pub fn hit(id: &str, name: &str) -> SearchHit {
    SearchHit {
        id: id.to_string(),
        data: vec![
            SearchEntry {
                name: name.to_string(),
                rank: 1200,
                gw_num: 53,
                points: Some(2_345_678_901),
            },
            SearchEntry {
                name: name.to_string(),
                rank: 900,
                gw_num: 54,
                points: None,
            },
        ],
    }
}

/// Round history page; rows are (event, date, rank, daily, total)
pub fn history_page(rows: &[(&str, &str, &str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(ev, date, rank, daily, total)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                ev, date, rank, daily, total
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="gw-history"><table><tbody>{}</tbody></table></div></body></html>"#,
        body
    )
}

/// Member roster page; rows are (name, server rank, event rank, honor)
pub fn members_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(name, server, event, honor)| {
            format!(
                r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr><tr class="spacer"><td colspan="4"></td></tr>"#,
                name, server, event, honor
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="crew-members"><table><tbody>{}</tbody></table></div></body></html>"#,
        body
    )
}
