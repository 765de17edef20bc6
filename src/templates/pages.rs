//! Full pages: note list, edit form, read-only view and not-found.

use crate::models::Note;
use crate::notes::html_escape;

use super::components::{base_html, note_form, search_form};

pub const APP_TITLE: &str = "Smart Notes Organizer";

// ============================================================================
// Index
// ============================================================================

/// The note list with the search and new-note forms. `query` is echoed into
/// the search box when the list is a search result.
pub fn render_index(notes: &[Note], query: &str) -> String {
    let mut list_html = String::new();

    if notes.is_empty() {
        let message = if query.trim().is_empty() {
            "No notes yet."
        } else {
            "No notes match your search."
        };
        list_html.push_str(&format!("<p class=\"empty\">{}</p>", message));
    } else {
        list_html.push_str("<ul class=\"note-list\">");
        for note in notes {
            list_html.push_str(&note_item(note));
        }
        list_html.push_str("</ul>");
    }

    let body = format!(
        r#"<h1>{app_title}</h1>
        {search}
        <h2>New Note</h2>
        {form}
        <h2>Notes</h2>
        {list}"#,
        app_title = APP_TITLE,
        search = search_form(query),
        form = note_form("/add_note", None, "Add Note"),
        list = list_html,
    );

    base_html(APP_TITLE, &body, true)
}

fn note_item(note: &Note) -> String {
    let category = if note.category.is_empty() {
        String::new()
    } else {
        format!(
            "<span class=\"category-badge\">{}</span>",
            html_escape(&note.category)
        )
    };

    format!(
        r#"<li class="note-item">
            <span>
                {category}
                <a href="/view_note/{id}" class="title">{title}</a>
            </span>
            <span>
                <span class="meta">{date}</span>
                <span class="actions">
                    <a href="/edit_note/{id}">Edit</a>
                    <a href="/delete_note/{id}" onclick="return confirm('Delete this note?')">Delete</a>
                </span>
            </span>
        </li>"#,
        category = category,
        id = note.id,
        title = html_escape(&note.title),
        date = html_escape(&note.date),
    )
}

// ============================================================================
// Edit
// ============================================================================

pub fn render_edit(note: &Note) -> String {
    let body = format!(
        r#"<p><a href="/">&larr; All notes</a></p>
        <h1>Edit Note</h1>
        {form}"#,
        form = note_form(&format!("/edit_note/{}", note.id), Some(note), "Save Note"),
    );

    base_html(&format!("Edit: {}", note.title), &body, true)
}

// ============================================================================
// View
// ============================================================================

pub fn render_view(note: &Note) -> String {
    let or_empty = |value: &str| {
        if value.is_empty() {
            "<span class=\"empty\">none</span>".to_string()
        } else {
            html_escape(value)
        }
    };

    let body = format!(
        r#"<p><a href="/">&larr; All notes</a> &middot; <a href="/edit_note/{id}">Edit</a></p>
        <h1>{title}</h1>
        <p class="meta">{date} &middot; Category: {category}</p>
        <div class="note-content">{content}</div>
        <h2>Summary</h2>
        <p>{summary}</p>
        <h2>Sentiment</h2>
        <p>{sentiment}</p>"#,
        id = note.id,
        title = html_escape(&note.title),
        date = html_escape(&note.date),
        category = or_empty(&note.category),
        content = html_escape(&note.content),
        summary = or_empty(&note.summary),
        sentiment = or_empty(&note.sentiment),
    );

    base_html(&note.title, &body, false)
}

// ============================================================================
// Not Found
// ============================================================================

pub fn render_not_found(id: u64) -> String {
    base_html(
        "Note not found",
        &format!(
            r#"<h1>Note not found</h1><p>There is no note with id {}.</p><p><a href="/">&larr; All notes</a></p>"#,
            id
        ),
        false,
    )
}
