mod common;

use common::*;
use std::sync::Arc;
use std::time::Duration;

use gw_scout::commands::{
    CommandHandler, FAILURE_REPLY, HELP_TEXT, MISSING_NAME_REPLY, NOT_FOUND_REPLY,
};
use gw_scout::config::ScoutConfig;
use gw_scout::engine::ReportAssembler;

fn handler(search: FakeSearch, fetcher: FakeFetcher, sink: Arc<RecordingSink>) -> CommandHandler {
    let config = ScoutConfig {
        history_url: HISTORY_URL.to_string(),
        members_url: MEMBERS_URL.to_string(),
        ..ScoutConfig::default()
    }
    .with_pacing(Duration::ZERO);
    CommandHandler::new(ReportAssembler::new(config, Arc::new(fetcher), Arc::new(search), sink))
}

#[tokio::test]
async fn test_help_reply() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Hits(vec![]), FakeFetcher::default(), sink.clone());

    assert_eq!(h.handle("$help").await.unwrap(), None);
    assert_eq!(sink.texts.lock().unwrap().as_slice(), [HELP_TEXT.to_string()]);
}

#[tokio::test]
async fn test_missing_crew_name() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Hits(vec![hit("1", "A")]), FakeFetcher::default(), sink.clone());

    h.handle("$gw   ").await.unwrap();
    assert_eq!(sink.texts.lock().unwrap().as_slice(), [MISSING_NAME_REPLY.to_string()]);
    assert!(sink.blocks.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_crew_not_found_reply() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Hits(vec![]), FakeFetcher::default(), sink.clone());

    assert_eq!(h.handle("$gw Nobody").await.unwrap(), None);
    assert_eq!(sink.texts.lock().unwrap().as_slice(), [NOT_FOUND_REPLY.to_string()]);
}

#[tokio::test]
async fn test_search_failure_reply() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Down, FakeFetcher::default(), sink.clone());

    assert_eq!(h.handle("$gw Anyone").await.unwrap(), None);
    assert_eq!(sink.texts.lock().unwrap().as_slice(), [FAILURE_REPLY.to_string()]);
}

#[tokio::test]
async fn test_report_runs_for_crew() {
    let sink = Arc::new(RecordingSink::default());
    let fetcher = FakeFetcher::default()
        .page(history_url("7"), history_page(&[("54", "03/11", "5", "800", "4,500")]))
        .page(members_url("7"), members_page(&[("Io", "Member", "3", "1,000")]));
    let h = handler(FakeSearch::Hits(vec![hit("7", "Grandcypher")]), fetcher, sink.clone());

    let summary = h.handle("$gw Grandcypher").await.unwrap().unwrap();
    assert_eq!(summary.blocks_emitted, 1);

    let rendered = sink.blocks.lock().unwrap()[0].render();
    assert!(rendered.starts_with("**Grandcypher (ID 7)**"));
    assert!(rendered.contains("4,500"));
}

#[tokio::test]
async fn test_ignores_non_commands() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Down, FakeFetcher::default(), sink.clone());

    assert_eq!(h.handle("good morning").await.unwrap(), None);
    assert!(sink.texts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_time_reply() {
    let sink = Arc::new(RecordingSink::default());
    let h = handler(FakeSearch::Down, FakeFetcher::default(), sink.clone());

    assert!(h.handle("$time").await.unwrap().is_none());
    let texts = sink.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert!(texts[0].starts_with("It is `"), "{}", texts[0]);
    assert!(texts[0].ends_with("` in Japan right now."), "{}", texts[0]);
}
