//! Drives the note form controller against the real router over HTTP.
#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;

use async_trait::async_trait;
use smart_notes::analysis::{AnalysisError, AnalysisKind, TextAnalyzer};
use smart_notes::form::{
    Field, FormController, FormView, HttpAnalysisClient, MemoryView, Outcome, Region,
    SENTIMENT_CONNECT_ERROR_TEXT, SENTIMENT_STATUS_ERROR_TEXT, SUMMARY_ERROR_TEXT,
};
use smart_notes::notes::NoteStore;
use smart_notes::{router, AppState, ClientError};

struct StubAnalyzer {
    fail: bool,
}

#[async_trait]
impl TextAnalyzer for StubAnalyzer {
    async fn analyze(&self, kind: AnalysisKind, content: &str) -> Result<String, AnalysisError> {
        if self.fail {
            return Err(AnalysisError::MissingApiKey);
        }
        Ok(match kind {
            AnalysisKind::Category => "Work".to_string(),
            AnalysisKind::Summary => format!("Summary: {}", content.trim()),
            AnalysisKind::Sentiment => "Negative".to_string(),
        })
    }
}

async fn spawn_server(fail: bool) -> String {
    let db = sled::Config::new().temporary(true).open().unwrap();
    let store = NoteStore::open(&db).unwrap();
    let state = Arc::new(AppState::new(store, Arc::new(StubAnalyzer { fail })));
    let app = router(state, "pkg");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> HttpAnalysisClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpAnalysisClient::with_client(http, base_url).unwrap()
}

fn note_view() -> MemoryView {
    MemoryView::new(3)
        .with_value(Field::Title, "Retro")
        .with_value(Field::Content, "  The deploy went badly again.  ")
}

#[tokio::test]
async fn test_category_round_trip() {
    let base = spawn_server(false).await;
    let controller = FormController::new(note_view(), client(&base));
    assert!(!controller.view().buttons_enabled());

    let outcome = controller.request_category().await.unwrap();

    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(controller.view().value(Field::Category), "Work");
    assert!(controller.view().buttons_enabled());
}

#[tokio::test]
async fn test_summary_round_trip() {
    let base = spawn_server(false).await;
    let controller = FormController::new(note_view(), client(&base));

    let outcome = controller.request_summary().await;

    assert_eq!(outcome, Outcome::Rendered);
    assert_eq!(
        controller.view().text(Region::Summary),
        "Summary: The deploy went badly again."
    );
    assert_eq!(
        controller.view().value(Field::Summary),
        "Summary: The deploy went badly again."
    );
}

#[tokio::test]
async fn test_sentiment_round_trip() {
    let base = spawn_server(false).await;
    let controller = FormController::new(note_view(), client(&base));

    controller.request_sentiment().await;

    assert_eq!(controller.view().text(Region::Sentiment), "Negative");
    assert_eq!(
        controller.view().classes(Region::Sentiment),
        vec!["sentiment".to_string(), "negative".to_string()]
    );
    assert_eq!(controller.view().value(Field::Sentiment), "Negative");
}

#[tokio::test]
async fn test_server_errors() {
    let base = spawn_server(true).await;
    let controller = FormController::new(note_view(), client(&base));

    assert_eq!(controller.request_sentiment().await, Outcome::Failed);
    assert_eq!(
        controller.view().text(Region::Sentiment),
        SENTIMENT_STATUS_ERROR_TEXT
    );
    assert_eq!(controller.view().value(Field::Sentiment), "");

    // The summary path reads the 500 as a failure too
    assert_eq!(controller.request_summary().await, Outcome::Failed);
    assert_eq!(controller.view().text(Region::Summary), SUMMARY_ERROR_TEXT);

    let result = controller.request_category().await;
    assert!(matches!(result, Err(ClientError::Status(500))));
    assert_eq!(controller.view().value(Field::Category), "");
}

#[tokio::test]
async fn test_unreachable_server() {
    // Reserve a port, then close it so nothing is listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let controller = FormController::new(note_view(), client(&format!("http://{}", addr)));

    controller.request_sentiment().await;
    assert_eq!(
        controller.view().text(Region::Sentiment),
        SENTIMENT_CONNECT_ERROR_TEXT
    );

    controller.request_summary().await;
    assert_eq!(controller.view().text(Region::Summary), SUMMARY_ERROR_TEXT);
}
