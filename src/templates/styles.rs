//! CSS styles for the smart notes pages.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --yellow: #b58900;
    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
}

* { box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    max-width: 860px;
    margin: 0 auto;
    padding: 1.5rem;
    background: var(--bg);
    color: var(--fg);
    line-height: 1.5;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); }

h1 { color: var(--base01); font-weight: 600; }

input[type="text"], textarea {
    width: 100%;
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: white;
    color: var(--fg);
    font: inherit;
    margin-bottom: 0.75rem;
}

textarea { min-height: 10rem; resize: vertical; }

button {
    padding: 0.45rem 0.9rem;
    border: 1px solid var(--blue);
    border-radius: 4px;
    background: var(--blue);
    color: white;
    cursor: pointer;
    font: inherit;
}

button:disabled {
    background: var(--border);
    border-color: var(--border);
    color: var(--muted);
    cursor: not-allowed;
}

button.secondary { background: transparent; color: var(--blue); }

/* Search */
.search-box { display: flex; gap: 0.5rem; margin-bottom: 1.5rem; }
.search-box input { margin-bottom: 0; }

/* Note form */
.note-form { border: 1px solid var(--border); border-radius: 6px; padding: 1rem; margin-bottom: 2rem; }
.button-container { display: flex; gap: 0.5rem; flex-wrap: wrap; }
.analysis { margin-bottom: 1rem; font-size: 0.95rem; }
.analysis-row { margin-bottom: 0.5rem; }
#summary span { display: block; white-space: pre-wrap; }

.sentiment { font-weight: 600; }
.sentiment.positive { color: var(--green); }
.sentiment.negative { color: var(--red); }
.sentiment.neutral { color: var(--yellow); }
.sentiment.unknown { color: var(--muted); }

/* Note list */
.note-list { list-style: none; padding: 0; }
.note-item {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    padding: 0.5rem 0;
    border-bottom: 1px solid var(--border);
}
.note-item .meta { color: var(--muted); font-size: 0.85rem; }
.note-item .actions a { margin-left: 0.75rem; font-size: 0.85rem; }
.category-badge {
    background: var(--border);
    border-radius: 3px;
    padding: 0 0.4rem;
    font-size: 0.8rem;
    margin-right: 0.4rem;
}

/* Note view */
.note-content { white-space: pre-wrap; }
.empty { color: var(--muted); font-style: italic; }
"#;
