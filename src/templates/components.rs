//! Shared HTML components for the smart notes pages.
//!
//! Contains the base HTML template, the search form and the note form the
//! browser form controller binds to.

use crate::form::{SentimentClass, BASE_CLASS};
use crate::models::Note;
use crate::notes::html_escape;

use super::styles::STYLE;

/// Loads the wasm bundle built by `wasm-pack build --target web --features wasm`.
const FORM_SCRIPT: &str = r#"<script type="module">
        import init from '/pkg/smart_notes.js';
        init();
    </script>"#;

// ============================================================================
// Base Template
// ============================================================================

pub fn base_html(title: &str, content: &str, with_form_script: bool) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{style}</style>
</head>
<body>
    {content}
    {script}
</body>
</html>"#,
        title = html_escape(title),
        style = STYLE,
        content = content,
        script = if with_form_script { FORM_SCRIPT } else { "" },
    )
}

// ============================================================================
// Search Form
// ============================================================================

pub fn search_form(query: &str) -> String {
    format!(
        r#"<form id="search-form" class="search-box" action="/" method="post">
            <input type="text" name="query" placeholder="Search notes..." value="{}">
            <button type="submit">Search</button>
            <button type="button" class="secondary" data-action="reset-search">Reset</button>
        </form>"#,
        html_escape(query)
    )
}

// ============================================================================
// Note Form
// ============================================================================

/// The add/edit form. Buttons in `.button-container` are enabled by the form
/// controller once title, content and category are filled in.
pub fn note_form(action: &str, note: Option<&Note>, submit_label: &str) -> String {
    let title = escaped_field(note, |n| n.title.as_str());
    let content = escaped_field(note, |n| n.content.as_str());
    let category = escaped_field(note, |n| n.category.as_str());
    let summary = escaped_field(note, |n| n.summary.as_str());
    let sentiment = escaped_field(note, |n| n.sentiment.as_str());

    let date_input = match note {
        Some(n) => format!(
            r#"<input type="hidden" name="date" value="{}">"#,
            html_escape(&n.date)
        ),
        None => String::new(),
    };

    let summary_display = if summary.is_empty() {
        String::new()
    } else {
        format!("<span>{}</span>", summary)
    };

    let sentiment_class = note
        .filter(|n| !n.sentiment.is_empty())
        .map(|n| SentimentClass::from_label(&n.sentiment).as_class())
        .unwrap_or("");

    format!(
        r#"<form class="note-form" action="{action}" method="post">
            <input type="text" name="title" placeholder="Title" value="{title}">
            <textarea id="content" name="content" placeholder="Write your note..." data-action="categorize" data-event="blur">{content}</textarea>
            <input type="text" id="category" name="category" placeholder="Category" value="{category}">
            <input type="hidden" name="summary" value="{summary}">
            <input type="hidden" name="sentiment" value="{sentiment}">
            {date_input}
            <div class="analysis">
                <div class="analysis-row"><strong>Summary:</strong> <div id="summary">{summary_display}</div></div>
                <div class="analysis-row"><strong>Sentiment:</strong> <span id="sentiment-status" class="{base_class} {sentiment_class}">{sentiment}</span></div>
            </div>
            <div class="button-container">
                <button type="button" data-action="summarize" disabled>Summarize</button>
                <button type="button" data-action="sentiment" disabled>Analyze Sentiment</button>
                <button type="submit" disabled>{submit_label}</button>
            </div>
        </form>"#,
        action = action,
        title = title,
        content = content,
        category = category,
        summary = summary,
        sentiment = sentiment,
        date_input = date_input,
        summary_display = summary_display,
        base_class = BASE_CLASS,
        sentiment_class = sentiment_class,
        submit_label = html_escape(submit_label),
    )
}

fn escaped_field(note: Option<&Note>, field: impl Fn(&Note) -> &str) -> String {
    note.map(|n| html_escape(field(n))).unwrap_or_default()
}
