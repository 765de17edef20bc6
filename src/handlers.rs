//! HTTP route handlers for the web application.
//!
//! Page routes render HTML and redirect back to the index after a write, the
//! analysis routes speak JSON to the browser form controller.

use std::sync::Arc;

use axum::{
    extract::{Form, Json, Path, State},
    response::{Html, Redirect},
};

use crate::analysis::AnalysisKind;
use crate::error::{AppError, AppResult};
use crate::models::{
    CategoryResponse, ContentRequest, NoteForm, SearchForm, SentimentResponse, SummaryResponse,
};
use crate::templates::{render_edit, render_index, render_view};
use crate::AppState;

// ============================================================================
// Index and Search Handlers
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let notes = state.store.list()?;
    Ok(Html(render_index(&notes, "")))
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let notes = state.store.search(&form.query)?;
    tracing::debug!(query = %form.query, results = notes.len(), "search");
    Ok(Html(render_index(&notes, &form.query)))
}

// ============================================================================
// Note Handlers
// ============================================================================

pub async fn add_note(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NoteForm>,
) -> AppResult<Redirect> {
    state.store.insert(form)?;
    Ok(Redirect::to("/"))
}

pub async fn edit_note_page(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Html<String>> {
    let note = state.store.get(id)?.ok_or(AppError::NotFound(id))?;
    Ok(Html(render_edit(&note)))
}

pub async fn edit_note(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
    Form(form): Form<NoteForm>,
) -> AppResult<Redirect> {
    state.store.update(id, form)?.ok_or(AppError::NotFound(id))?;
    Ok(Redirect::to("/"))
}

pub async fn delete_note(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Redirect> {
    if !state.store.delete(id)? {
        tracing::debug!(id, "delete of missing note");
    }
    Ok(Redirect::to("/"))
}

pub async fn view_note(
    Path(id): Path<u64>,
    State(state): State<Arc<AppState>>,
) -> AppResult<Html<String>> {
    let note = state.store.get(id)?.ok_or(AppError::NotFound(id))?;
    Ok(Html(render_view(&note)))
}

// ============================================================================
// Analysis Handlers
// ============================================================================

async fn analyze(state: &AppState, kind: AnalysisKind, content: &str) -> AppResult<String> {
    state
        .analyzer
        .analyze(kind, content)
        .await
        .map_err(|source| AppError::Analysis { kind, source })
}

pub async fn categorize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContentRequest>,
) -> AppResult<Json<CategoryResponse>> {
    let category = analyze(&state, AnalysisKind::Category, &body.content).await?;
    Ok(Json(CategoryResponse { category }))
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContentRequest>,
) -> AppResult<Json<SummaryResponse>> {
    let summary = analyze(&state, AnalysisKind::Summary, &body.content).await?;
    Ok(Json(SummaryResponse { summary }))
}

pub async fn sentiment(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ContentRequest>,
) -> AppResult<Json<SentimentResponse>> {
    let sentiment = analyze(&state, AnalysisKind::Sentiment, &body.content).await?;
    Ok(Json(SentimentResponse { sentiment }))
}

// ============================================================================
// Tests
// ============================================================================
