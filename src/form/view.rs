//! The page surface the form controller reads from and writes to.

/// Form inputs the controller touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `input[name="title"]`
    Title,
    /// `#content`
    Content,
    /// `#category`
    Category,
    /// Hidden `input[name="summary"]`, submitted with the note.
    Summary,
    /// Hidden `input[name="sentiment"]`, submitted with the note.
    Sentiment,
    /// `input[name="query"]` inside `#search-form`.
    Query,
}

/// Display elements that show loading, result and error states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// `#summary`
    Summary,
    /// `#sentiment-status`
    Sentiment,
}

/// Access to the elements of a note form.
///
/// Methods take `&self`: page elements are shared, mutable state owned by the
/// page, and every write is immediately visible to later reads. Implementors
/// silently ignore writes to elements the page does not contain.
pub trait FormView {
    /// Current value of an input, untrimmed.
    fn value(&self, field: Field) -> String;

    fn set_value(&self, field: Field, value: &str);

    /// Sets `disabled` on every action button.
    fn set_buttons_disabled(&self, disabled: bool);

    /// Replaces the region's content with plain text.
    fn set_text(&self, region: Region, text: &str);

    /// Clears the region and renders `text` inside a fresh child span, so
    /// earlier markup is discarded rather than appended to.
    fn replace_with_span(&self, region: Region, text: &str);

    /// Replaces the region's class list.
    fn set_classes(&self, region: Region, classes: &[&str]);

    /// Submits the search form. In a browser this navigates away.
    fn submit_search(&self);
}
