//! Note storage and search.
//!
//! Notes are JSON records in the `notes` sled tree, keyed by their id in
//! big-endian order so that iteration follows creation order.

use chrono::Local;
use rayon::prelude::*;
use sled::{Db, Tree};

use crate::models::{Note, NoteForm, DATE_FORMAT};

const NOTES_TREE: &str = "notes";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sled(#[from] sled::Error),

    #[error("corrupt note record: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct NoteStore {
    db: Db,
    tree: Tree,
}

impl NoteStore {
    pub fn open(db: &Db) -> Result<Self, StoreError> {
        let tree = db.open_tree(NOTES_TREE)?;
        Ok(Self {
            db: db.clone(),
            tree,
        })
    }

    /// Stores a new note dated now. Any `date` in the form is ignored.
    pub fn insert(&self, form: NoteForm) -> Result<Note, StoreError> {
        let id = self.db.generate_id()?;
        let date = Local::now().format(DATE_FORMAT).to_string();
        let note = note_from_form(id, form, date);
        self.write(&note)?;
        tracing::info!(id, title = %note.title, "note added");
        Ok(note)
    }

    pub fn get(&self, id: u64) -> Result<Option<Note>, StoreError> {
        match self.tree.get(id.to_be_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Replaces every field of an existing note. The date comes from the form
    /// when present, otherwise the stored date is kept. Returns `None` if the
    /// note does not exist.
    pub fn update(&self, id: u64, form: NoteForm) -> Result<Option<Note>, StoreError> {
        let Some(existing) = self.get(id)? else {
            return Ok(None);
        };
        let date = form
            .date
            .clone()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(existing.date);
        let note = note_from_form(id, form, date);
        self.write(&note)?;
        tracing::info!(id, "note updated");
        Ok(Some(note))
    }

    /// Returns whether a note was removed.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let removed = self.tree.remove(id.to_be_bytes())?.is_some();
        if removed {
            self.tree.flush()?;
            tracing::info!(id, "note deleted");
        }
        Ok(removed)
    }

    /// All notes, newest first.
    pub fn list(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes = Vec::new();
        for entry in self.tree.iter().rev() {
            let (_, bytes) = entry?;
            notes.push(serde_json::from_slice(&bytes)?);
        }
        Ok(notes)
    }

    /// Notes whose title, content or category contain `query`, ignoring case.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<Note>, StoreError> {
        let notes = self.list()?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(notes);
        }
        Ok(notes
            .into_par_iter()
            .filter(|note| note_matches(note, &query))
            .collect())
    }

    fn write(&self, note: &Note) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec(note)?;
        self.tree.insert(note.id.to_be_bytes(), bytes)?;
        self.tree.flush()?;
        Ok(())
    }
}

fn note_from_form(id: u64, form: NoteForm, date: String) -> Note {
    Note {
        id,
        title: form.title,
        content: form.content,
        category: form.category,
        date,
        sentiment: form.sentiment,
        summary: form.summary,
    }
}

fn note_matches(note: &Note, query_lower: &str) -> bool {
    [&note.title, &note.content, &note.category]
        .iter()
        .any(|field| field.to_lowercase().contains(query_lower))
}

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Tests
// ============================================================================
