//! Headless [`FormView`] that keeps the form in memory.
//!
//! Used to drive the controller outside a browser, e.g. from tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::view::{Field, FormView, Region};

#[derive(Debug, Default, Clone, PartialEq)]
struct RegionState {
    text: String,
    span: Option<String>,
    classes: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryView {
    values: RefCell<HashMap<Field, String>>,
    buttons: RefCell<Vec<bool>>,
    regions: RefCell<HashMap<Region, RegionState>>,
    submissions: Cell<usize>,
}

impl MemoryView {
    /// A form with `buttons` action buttons, all initially enabled.
    pub fn new(buttons: usize) -> Self {
        Self {
            buttons: RefCell::new(vec![false; buttons]),
            ..Self::default()
        }
    }

    pub fn with_value(self, field: Field, value: &str) -> Self {
        self.set_value(field, value);
        self
    }

    /// `disabled` state of each action button.
    pub fn buttons_disabled(&self) -> Vec<bool> {
        self.buttons.borrow().clone()
    }

    pub fn buttons_enabled(&self) -> bool {
        self.buttons.borrow().iter().all(|disabled| !disabled)
    }

    /// Rendered text of a region, as a browser's `innerText` would report it.
    pub fn text(&self, region: Region) -> String {
        let regions = self.regions.borrow();
        match regions.get(&region) {
            Some(RegionState {
                span: Some(span), ..
            }) => span.clone(),
            Some(state) => state.text.clone(),
            None => String::new(),
        }
    }

    /// Whether the region's content is a span created by
    /// [`FormView::replace_with_span`].
    pub fn has_span(&self, region: Region) -> bool {
        self.regions
            .borrow()
            .get(&region)
            .map(|state| state.span.is_some())
            .unwrap_or(false)
    }

    pub fn classes(&self, region: Region) -> Vec<String> {
        self.regions
            .borrow()
            .get(&region)
            .map(|state| state.classes.clone())
            .unwrap_or_default()
    }

    /// Number of times the search form was submitted.
    pub fn submissions(&self) -> usize {
        self.submissions.get()
    }
}

impl FormView for MemoryView {
    fn value(&self, field: Field) -> String {
        self.values.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&self, field: Field, value: &str) {
        self.values.borrow_mut().insert(field, value.to_string());
    }

    fn set_buttons_disabled(&self, disabled: bool) {
        for button in self.buttons.borrow_mut().iter_mut() {
            *button = disabled;
        }
    }

    fn set_text(&self, region: Region, text: &str) {
        let mut regions = self.regions.borrow_mut();
        let state = regions.entry(region).or_default();
        state.text = text.to_string();
        state.span = None;
    }

    fn replace_with_span(&self, region: Region, text: &str) {
        let mut regions = self.regions.borrow_mut();
        let state = regions.entry(region).or_default();
        state.text.clear();
        state.span = Some(text.to_string());
    }

    fn set_classes(&self, region: Region, classes: &[&str]) {
        let mut regions = self.regions.borrow_mut();
        let state = regions.entry(region).or_default();
        state.classes = classes.iter().map(|c| c.to_string()).collect();
    }

    fn submit_search(&self) {
        self.submissions.set(self.submissions.get() + 1);
    }
}
