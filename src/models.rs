//! Data models for the smart notes application.
//!
//! Contains the persisted note record, the form payloads posted by the note
//! pages, and the JSON bodies exchanged with the analysis endpoints. The wire
//! types are shared by the server handlers and the browser form controller.

use serde::{Deserialize, Serialize};

// ============================================================================
// Core Note Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Creation time formatted with [`DATE_FORMAT`]; kept as posted on edit.
    pub date: String,
    pub sentiment: String,
    pub summary: String,
}

/// Format used for the `date` column of a note.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Form Payloads
// ============================================================================

/// Fields posted by the add/edit note forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub sentiment: String,
    #[serde(default)]
    pub summary: String,
    /// Only present on the edit form, where the original date is retained.
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub query: String,
}

// ============================================================================
// Analysis Wire Types
// ============================================================================

/// Body of every analysis request: `{"content": "..."}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContentRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryResponse {
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentResponse {
    pub sentiment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
