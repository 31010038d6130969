//! Session phases from first keystroke to teardown.

use crate::common::{campus_index, ids, library_index};
use sitesearch::{SearchConfig, SearchOutcome, SearchSession, SessionPhase};
use std::sync::Arc;
use std::time::Duration;

fn session(index: sitesearch::ContentIndex) -> SearchSession {
    SearchSession::new(Arc::new(index), &SearchConfig::default())
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn test_full_cycle() {
    let mut session = session(library_index());
    assert_eq!(session.phase(), SessionPhase::Idle);

    for query in ["б", "бі", "біб", "бібліот"] {
        session.input(query);
        advance(50).await;
        assert_eq!(session.phase(), SessionPhase::Debouncing);
        assert!(session.outcome().is_searching);
    }

    let outcome = session.settled().await;
    assert_eq!(session.phase(), SessionPhase::Results);
    assert_eq!(ids(&outcome.results), vec!["a1", "a2"]);
    assert!(!outcome.is_searching);
}

#[tokio::test(start_paused = true)]
async fn test_stale_results_visible_while_debouncing() {
    let mut session = session(library_index());
    session.input("контакти");
    session.settled().await;

    session.input("бібліот");
    let during = session.outcome();
    assert!(during.is_searching);
    assert_eq!(during.query, "контакти");
    assert_eq!(ids(&during.results), vec!["a3"]);

    let after = session.settled().await;
    assert_eq!(after.query, "бібліот");
}

#[tokio::test(start_paused = true)]
async fn test_short_query_settles_to_not_searching() {
    let mut session = session(campus_index());
    session.input(" п ");
    assert!(session.outcome().is_searching);

    let outcome = session.settled().await;
    assert_eq!(outcome, SearchOutcome::empty(" п "));
    assert_eq!(session.phase(), SessionPhase::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_no_results_then_results() {
    let mut session = session(campus_index());
    session.input("астрономія");
    let empty = session.settled().await;
    assert_eq!(session.phase(), SessionPhase::NoResults);
    assert!(empty.suggestions.len() <= 5);
    assert!(!empty.suggestions.is_empty());

    session.input("право");
    let found = session.settled().await;
    assert_eq!(session.phase(), SessionPhase::Results);
    assert!(found.suggestions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_close_discards_pending_query() {
    let mut session = session(library_index());
    session.input("контакти");
    session.settled().await;

    session.input("бібліот");
    advance(100).await;
    session.close();
    advance(1000).await;

    let outcome = session.outcome();
    assert!(!outcome.is_searching);
    assert_eq!(outcome.query, "контакти");
    assert_eq!(session.phase(), SessionPhase::Results);
}

#[tokio::test(start_paused = true)]
async fn test_sessions_share_one_index() {
    let index = Arc::new(campus_index());
    let mut a = SearchSession::with_delay(Arc::clone(&index), Duration::from_millis(100));
    let mut b = SearchSession::with_delay(Arc::clone(&index), Duration::from_millis(300));

    a.input("право");
    b.input("вступ");
    let (oa, ob) = tokio::join!(a.settled(), b.settled());

    assert_eq!(ids(&oa.results), vec!["c-law"]);
    assert_eq!(ids(&ob.results), vec!["d-rules", "n-open-day"]);
    assert_eq!(*index, campus_index());
}
