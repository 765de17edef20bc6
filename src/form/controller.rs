//! Note form controller.
//!
//! Derives action-button enablement from the form fields and mediates the
//! categorize/summarize/sentiment round trips, rendering loading, result and
//! error states into the page.
//!
//! Each display region carries a generation counter. Starting a request bumps
//! the counter; when the response arrives it is only applied if no newer
//! request for the same region has started since. In-flight requests are
//! never aborted, so an older response may still arrive, but it is dropped.

use std::cell::Cell;

use super::client::{AnalysisClient, ClientError};
use super::sentiment::{SentimentClass, BASE_CLASS};
use super::view::{Field, FormView, Region};

/// Placeholder shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading...";
pub const SUMMARY_ERROR_TEXT: &str = "Error fetching summary.";
pub const SENTIMENT_STATUS_ERROR_TEXT: &str = "Error: Unable to determine sentiment.";
pub const SENTIMENT_CONNECT_ERROR_TEXT: &str = "Error: Unable to connect to server.";

/// Notes of this many characters or fewer (after trimming) are not sent for
/// categorization.
pub const MIN_CATEGORIZE_CHARS: usize = 5;

/// What a request operation did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered.
    Rendered,
    /// The request failed and an error state was rendered.
    Failed,
    /// No request was sent.
    Skipped,
    /// A newer request for the same region started first; the response was dropped.
    Superseded,
}

#[derive(Debug, Default)]
struct Generation(Cell<u64>);

impl Generation {
    fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Context object for one note form, built once when the page is ready.
pub struct FormController<V, C> {
    view: V,
    client: C,
    category_generation: Generation,
    summary_generation: Generation,
    sentiment_generation: Generation,
}

impl<V: FormView, C: AnalysisClient> FormController<V, C> {
    /// Binds to a form and computes the initial button state, which matters
    /// for pre-filled edit forms.
    pub fn new(view: V, client: C) -> Self {
        let controller = Self {
            view,
            client,
            category_generation: Generation::default(),
            summary_generation: Generation::default(),
            sentiment_generation: Generation::default(),
        };
        controller.compute_enablement();
        controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Enables the action buttons iff title, content and category are all
    /// non-blank. Cheap and idempotent; runs on every keystroke.
    pub fn compute_enablement(&self) {
        let complete = [Field::Title, Field::Content, Field::Category]
            .iter()
            .all(|&field| !self.view.value(field).trim().is_empty());
        self.view.set_buttons_disabled(!complete);
    }

    /// Asks the server to categorize the note and fills in the category field.
    ///
    /// Errors are returned to the caller and leave the field untouched.
    pub async fn request_category(&self) -> Result<Outcome, ClientError> {
        let content = self.view.value(Field::Content);
        let content = content.trim();
        if content.chars().count() <= MIN_CATEGORIZE_CHARS {
            return Ok(Outcome::Skipped);
        }

        let ticket = self.category_generation.begin();
        let result = self.client.categorize(content).await;
        if !self.category_generation.is_current(ticket) {
            tracing::debug!("dropping superseded category response");
            return Ok(Outcome::Superseded);
        }

        let category = result?;
        self.view.set_value(Field::Category, &category);
        self.compute_enablement();
        Ok(Outcome::Rendered)
    }

    /// Fetches a summary of the note into the summary display and the hidden
    /// `summary` input.
    pub async fn request_summary(&self) -> Outcome {
        let content = self.view.value(Field::Content);
        self.view.set_text(Region::Summary, LOADING_TEXT);

        let ticket = self.summary_generation.begin();
        let result = self.client.summarize(&content).await;
        if !self.summary_generation.is_current(ticket) {
            tracing::debug!("dropping superseded summary response");
            return Outcome::Superseded;
        }

        match result {
            Ok(summary) => {
                self.view.replace_with_span(Region::Summary, &summary);
                self.view.set_value(Field::Summary, &summary);
                Outcome::Rendered
            }
            Err(e) => {
                self.view.set_text(Region::Summary, SUMMARY_ERROR_TEXT);
                tracing::error!(error = %e, "Error fetching summary");
                Outcome::Failed
            }
        }
    }

    /// Analyzes the note's sentiment into the sentiment display and the
    /// hidden `sentiment` input.
    pub async fn request_sentiment(&self) -> Outcome {
        let content = self.view.value(Field::Content);
        self.view.set_text(Region::Sentiment, LOADING_TEXT);

        let ticket = self.sentiment_generation.begin();
        let result = self.client.sentiment(&content).await;
        if !self.sentiment_generation.is_current(ticket) {
            tracing::debug!("dropping superseded sentiment response");
            return Outcome::Superseded;
        }

        match result {
            Ok(label) => {
                let class = SentimentClass::from_label(&label);
                self.view.set_text(Region::Sentiment, &label);
                self.view
                    .set_classes(Region::Sentiment, &[BASE_CLASS, class.as_class()]);
                self.view.set_value(Field::Sentiment, &label);
                Outcome::Rendered
            }
            Err(e @ (ClientError::Transport(_) | ClientError::Url(_))) => {
                self.view.set_text(Region::Sentiment, SENTIMENT_CONNECT_ERROR_TEXT);
                tracing::warn!(error = %e, "sentiment request failed");
                Outcome::Failed
            }
            Err(e) => {
                self.view.set_text(Region::Sentiment, SENTIMENT_STATUS_ERROR_TEXT);
                tracing::warn!(error = %e, "sentiment request rejected");
                Outcome::Failed
            }
        }
    }

    /// Clears the search query and submits the search form.
    pub fn reset_search(&self) {
        self.view.set_value(Field::Query, "");
        self.view.submit_search();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::form::memory::MemoryView;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::{HashMap, VecDeque};
    use tokio::sync::oneshot;

    type Reply = Result<String, ClientError>;

    enum Scripted {
        Now(Reply),
        Later(oneshot::Receiver<Reply>),
    }

    /// Client that answers from per-endpoint queues and records every call.
    #[derive(Default)]
    struct ScriptedClient {
        replies: RefCell<HashMap<&'static str, VecDeque<Scripted>>>,
        calls: RefCell<Vec<(&'static str, String)>>,
    }

    impl ScriptedClient {
        fn reply(self, endpoint: &'static str, reply: Reply) -> Self {
            self.push(endpoint, Scripted::Now(reply));
            self
        }

        fn reply_later(&self, endpoint: &'static str) -> oneshot::Sender<Reply> {
            let (tx, rx) = oneshot::channel();
            self.push(endpoint, Scripted::Later(rx));
            tx
        }

        fn push(&self, endpoint: &'static str, scripted: Scripted) {
            self.replies
                .borrow_mut()
                .entry(endpoint)
                .or_default()
                .push_back(scripted);
        }

        fn calls(&self) -> Vec<(&'static str, String)> {
            self.calls.borrow().clone()
        }

        async fn answer(&self, endpoint: &'static str, content: &str) -> Reply {
            self.calls.borrow_mut().push((endpoint, content.to_string()));
            let scripted = self
                .replies
                .borrow_mut()
                .get_mut(endpoint)
                .and_then(|queue| queue.pop_front())
                .expect("no scripted reply");
            match scripted {
                Scripted::Now(reply) => reply,
                Scripted::Later(rx) => rx.await.expect("reply sender dropped"),
            }
        }
    }

    #[async_trait(?Send)]
    impl AnalysisClient for ScriptedClient {
        async fn categorize(&self, content: &str) -> Reply {
            self.answer("categorize", content).await
        }

        async fn summarize(&self, content: &str) -> Reply {
            self.answer("summarize", content).await
        }

        async fn sentiment(&self, content: &str) -> Reply {
            self.answer("sentiment", content).await
        }
    }

    fn filled_view() -> MemoryView {
        MemoryView::new(3)
            .with_value(Field::Title, "Standup")
            .with_value(Field::Content, "  Discussed the release plan.  ")
            .with_value(Field::Category, "Work")
    }

    // ---- enablement ----

    #[test]
    fn test_enablement_requires_all_three_fields() {
        let values = ["", "   ", "x"];
        for title in values {
            for content in values {
                for category in values {
                    let view = MemoryView::new(2)
                        .with_value(Field::Title, title)
                        .with_value(Field::Content, content)
                        .with_value(Field::Category, category);
                    let controller = FormController::new(view, ScriptedClient::default());
                    let expected = title == "x" && content == "x" && category == "x";
                    assert_eq!(
                        controller.view().buttons_enabled(),
                        expected,
                        "title={:?} content={:?} category={:?}",
                        title,
                        content,
                        category
                    );
                }
            }
        }
    }

    #[test]
    fn test_enablement_tracks_edits() {
        let controller = FormController::new(filled_view(), ScriptedClient::default());
        assert!(controller.view().buttons_enabled());

        controller.view().set_value(Field::Title, "  ");
        controller.compute_enablement();
        assert_eq!(controller.view().buttons_disabled(), vec![true, true, true]);

        controller.compute_enablement();
        assert_eq!(controller.view().buttons_disabled(), vec![true, true, true]);

        controller.view().set_value(Field::Title, "Standup");
        controller.compute_enablement();
        assert!(controller.view().buttons_enabled());
    }

    // ---- categorize ----

    #[tokio::test]
    async fn test_short_content_is_not_categorized() {
        let view = MemoryView::new(1)
            .with_value(Field::Content, "  hello   ")
            .with_value(Field::Category, "Old");
        let controller = FormController::new(view, ScriptedClient::default());

        let outcome = controller.request_category().await.unwrap();

        assert_eq!(outcome, Outcome::Skipped);
        assert!(controller.client().calls().is_empty());
        assert_eq!(controller.view().value(Field::Category), "Old");
    }

    #[tokio::test]
    async fn test_category_fills_field_and_enables_buttons() {
        let view = MemoryView::new(2)
            .with_value(Field::Title, "Standup")
            .with_value(Field::Content, "  Discussed the release plan.  ");
        let client = ScriptedClient::default().reply("categorize", Ok("Work".to_string()));
        let controller = FormController::new(view, client);
        assert!(!controller.view().buttons_enabled());

        let outcome = controller.request_category().await.unwrap();

        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(controller.view().value(Field::Category), "Work");
        assert!(controller.view().buttons_enabled());
        // Categorization sends trimmed content
        assert_eq!(
            controller.client().calls(),
            vec![("categorize", "Discussed the release plan.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_category_failure_is_returned() {
        let client = ScriptedClient::default().reply("categorize", Err(ClientError::Status(500)));
        let controller = FormController::new(filled_view(), client);

        let result = controller.request_category().await;

        assert!(matches!(result, Err(ClientError::Status(500))));
        assert_eq!(controller.view().value(Field::Category), "Work");
    }

    #[tokio::test]
    async fn test_stale_category_is_discarded() {
        let view = filled_view().with_value(Field::Category, "");
        let controller = FormController::new(view, ScriptedClient::default());
        let first = controller.client().reply_later("categorize");
        let second = controller.client().reply_later("categorize");

        let (older, newer, ()) = tokio::join!(
            controller.request_category(),
            controller.request_category(),
            async {
                second.send(Ok("Work".to_string())).unwrap();
                tokio::task::yield_now().await;
                first.send(Ok("Personal".to_string())).unwrap();
            }
        );

        assert_eq!(older.unwrap(), Outcome::Superseded);
        assert_eq!(newer.unwrap(), Outcome::Rendered);
        assert_eq!(controller.view().value(Field::Category), "Work");
    }

    #[tokio::test]
    async fn test_stale_category_error_is_discarded() {
        let view = filled_view().with_value(Field::Category, "");
        let controller = FormController::new(view, ScriptedClient::default());
        let first = controller.client().reply_later("categorize");
        let second = controller.client().reply_later("categorize");

        let (older, newer, ()) = tokio::join!(
            controller.request_category(),
            controller.request_category(),
            async {
                second.send(Ok("Work".to_string())).unwrap();
                tokio::task::yield_now().await;
                first.send(Err(ClientError::Status(500))).unwrap();
            }
        );

        assert!(matches!(older, Ok(Outcome::Superseded)));
        assert_eq!(newer.unwrap(), Outcome::Rendered);
        assert_eq!(controller.view().value(Field::Category), "Work");
    }

    // ---- summarize ----

    #[tokio::test]
    async fn test_summary_shows_loading_then_result() {
        let controller = FormController::new(filled_view(), ScriptedClient::default());
        let tx = controller.client().reply_later("summarize");

        let (outcome, ()) = tokio::join!(controller.request_summary(), async {
            tokio::task::yield_now().await;
            assert_eq!(controller.view().text(Region::Summary), LOADING_TEXT);
            tx.send(Ok("A short note.".to_string())).unwrap();
        });

        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(controller.view().text(Region::Summary), "A short note.");
        assert!(controller.view().has_span(Region::Summary));
        assert_eq!(controller.view().value(Field::Summary), "A short note.");
        // Summaries are requested with the raw content
        assert_eq!(
            controller.client().calls(),
            vec![("summarize", "  Discussed the release plan.  ".to_string())]
        );
    }

    #[tokio::test]
    async fn test_summary_failure_keeps_hidden_field() {
        let view = filled_view().with_value(Field::Summary, "previous");
        let client = ScriptedClient::default().reply(
            "summarize",
            Err(ClientError::Transport("connection refused".to_string())),
        );
        let controller = FormController::new(view, client);

        let outcome = controller.request_summary().await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(controller.view().text(Region::Summary), SUMMARY_ERROR_TEXT);
        assert_eq!(controller.view().value(Field::Summary), "previous");
    }

    #[tokio::test]
    async fn test_stale_summary_is_discarded() {
        let controller = FormController::new(filled_view(), ScriptedClient::default());
        let first = controller.client().reply_later("summarize");
        let second = controller.client().reply_later("summarize");

        let (older, newer, ()) = tokio::join!(
            controller.request_summary(),
            controller.request_summary(),
            async {
                second.send(Ok("newer".to_string())).unwrap();
                tokio::task::yield_now().await;
                first.send(Ok("older".to_string())).unwrap();
            }
        );

        assert_eq!(older, Outcome::Superseded);
        assert_eq!(newer, Outcome::Rendered);
        assert_eq!(controller.view().text(Region::Summary), "newer");
        assert_eq!(controller.view().value(Field::Summary), "newer");
    }

    // ---- sentiment ----

    #[tokio::test]
    async fn test_sentiment_renders_label_and_class() {
        let client = ScriptedClient::default().reply("sentiment", Ok("Positive".to_string()));
        let controller = FormController::new(filled_view(), client);

        let outcome = controller.request_sentiment().await;

        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(controller.view().text(Region::Sentiment), "Positive");
        assert_eq!(
            controller.view().classes(Region::Sentiment),
            vec!["sentiment".to_string(), "positive".to_string()]
        );
        assert_eq!(controller.view().value(Field::Sentiment), "Positive");
    }

    #[tokio::test]
    async fn test_unrecognized_sentiment_gets_unknown_class() {
        let client = ScriptedClient::default().reply("sentiment", Ok("Mixed".to_string()));
        let controller = FormController::new(filled_view(), client);

        controller.request_sentiment().await;

        assert_eq!(
            controller.view().classes(Region::Sentiment),
            vec!["sentiment".to_string(), "unknown".to_string()]
        );
    }

    #[tokio::test]
    async fn test_sentiment_status_error() {
        let view = filled_view().with_value(Field::Sentiment, "Neutral");
        let client = ScriptedClient::default().reply("sentiment", Err(ClientError::Status(500)));
        let controller = FormController::new(view, client);

        let outcome = controller.request_sentiment().await;

        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(
            controller.view().text(Region::Sentiment),
            SENTIMENT_STATUS_ERROR_TEXT
        );
        assert_eq!(controller.view().value(Field::Sentiment), "Neutral");
    }

    #[tokio::test]
    async fn test_sentiment_connection_error() {
        let client = ScriptedClient::default().reply(
            "sentiment",
            Err(ClientError::Transport("connection refused".to_string())),
        );
        let controller = FormController::new(filled_view(), client);

        controller.request_sentiment().await;

        assert_eq!(
            controller.view().text(Region::Sentiment),
            SENTIMENT_CONNECT_ERROR_TEXT
        );
        assert_eq!(controller.view().value(Field::Sentiment), "");
    }

    #[tokio::test]
    async fn test_sentiment_malformed_body_is_not_a_connection_error() {
        let client = ScriptedClient::default().reply(
            "sentiment",
            Err(ClientError::Decode("missing field `sentiment`".to_string())),
        );
        let controller = FormController::new(filled_view(), client);

        controller.request_sentiment().await;

        assert_eq!(
            controller.view().text(Region::Sentiment),
            SENTIMENT_STATUS_ERROR_TEXT
        );
    }

    #[tokio::test]
    async fn test_stale_sentiment_is_discarded() {
        let controller = FormController::new(filled_view(), ScriptedClient::default());
        let first = controller.client().reply_later("sentiment");
        let second = controller.client().reply_later("sentiment");

        let (older, newer, ()) = tokio::join!(
            controller.request_sentiment(),
            controller.request_sentiment(),
            async {
                second.send(Ok("Negative".to_string())).unwrap();
                tokio::task::yield_now().await;
                first.send(Ok("Positive".to_string())).unwrap();
            }
        );

        assert_eq!(older, Outcome::Superseded);
        assert_eq!(newer, Outcome::Rendered);
        assert_eq!(controller.view().text(Region::Sentiment), "Negative");
        assert_eq!(
            controller.view().classes(Region::Sentiment),
            vec!["sentiment".to_string(), "negative".to_string()]
        );
        assert_eq!(controller.view().value(Field::Sentiment), "Negative");
    }

    // ---- search ----

    #[test]
    fn test_reset_search_clears_query_and_submits() {
        let view = MemoryView::new(0).with_value(Field::Query, "meeting");
        let controller = FormController::new(view, ScriptedClient::default());

        controller.reset_search();

        assert_eq!(controller.view().value(Field::Query), "");
        assert_eq!(controller.view().submissions(), 1);
    }
}
