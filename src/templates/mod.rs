//! HTML templates and styling for the smart notes pages.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants
//! - `components` - base template, search form and the note form
//! - `pages` - index, edit, view and not-found pages

mod components;
mod pages;
mod styles;

pub use components::{base_html, note_form, search_form};
pub use pages::{render_edit, render_index, render_not_found, render_view, APP_TITLE};
pub use styles::STYLE;
