//! Smart notes library.
//!
//! The `form` module is the browser-side note form controller; it builds for
//! both native targets and `wasm32` (with the `wasm` feature). Everything else
//! is the notes server and only builds natively.

pub mod form;
pub mod models;

#[cfg(not(target_arch = "wasm32"))]
pub mod analysis;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod handlers;
#[cfg(not(target_arch = "wasm32"))]
pub mod notes;
#[cfg(not(target_arch = "wasm32"))]
pub mod templates;

#[cfg(not(target_arch = "wasm32"))]
pub use server::{router, AppState};

#[cfg(not(target_arch = "wasm32"))]
mod server {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{
        routing::{get, post},
        Router,
    };
    use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

    use crate::analysis::TextAnalyzer;
    use crate::handlers;
    use crate::notes::NoteStore;

    // ========================================================================
    // Application State
    // ========================================================================

    #[derive(Clone)]
    pub struct AppState {
        pub store: NoteStore,
        pub analyzer: Arc<dyn TextAnalyzer>,
    }

    impl AppState {
        pub fn new(store: NoteStore, analyzer: Arc<dyn TextAnalyzer>) -> Self {
            Self { store, analyzer }
        }
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// All routes. `static_dir` holds the wasm-pack output served at `/pkg`.
    pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
        Router::new()
            // Note routes
            .route("/", get(handlers::index).post(handlers::search))
            .route("/add_note", post(handlers::add_note))
            .route(
                "/edit_note/{id}",
                get(handlers::edit_note_page).post(handlers::edit_note),
            )
            .route("/delete_note/{id}", get(handlers::delete_note))
            .route("/view_note/{id}", get(handlers::view_note))
            // Analysis routes
            .route("/categorize", post(handlers::categorize))
            .route("/summarize", post(handlers::summarize))
            .route("/sentiment", post(handlers::sentiment))
            // Browser form controller bundle
            .nest_service("/pkg", ServeDir::new(static_dir.as_ref()))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

pub use form::{
    AnalysisClient, ClientError, Field, FormController, FormView, HttpAnalysisClient, MemoryView,
    Outcome, Region,
};
pub use models::{
    CategoryResponse, ContentRequest, ErrorResponse, Note, NoteForm, SearchForm,
    SentimentResponse, SummaryResponse,
};
