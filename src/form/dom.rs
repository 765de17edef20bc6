//! `web-sys` binding of the note form controller.
//!
//! On page ready the elements of the note form are located once and wrapped
//! in a [`DomView`]; the resulting controller lives in a thread-local slot for
//! the lifetime of the page. Listeners are registered explicitly:
//!
//! - `input` on the title, content and category fields recomputes enablement
//! - any element with `data-action="categorize|summarize|sentiment|reset-search"`
//!   runs that action on its `data-event` (default `click`)
//!
//! The same actions are exported as `categorizeNote`, `summarizeNote`,
//! `analyzeSentiment` and `resetSearch` for pages that call them from script.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlElement,
    HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

use super::client::HttpAnalysisClient;
use super::controller::FormController;
use super::view::{Field, FormView, Region};

type PageController = FormController<DomView, HttpAnalysisClient>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<PageController>>> = RefCell::new(None);
}

// ============================================================================
// DOM View
// ============================================================================

pub struct DomView {
    document: Document,
    summary: HtmlElement,
    sentiment: HtmlElement,
    title: Element,
    content: Element,
    category: Element,
    buttons: Vec<HtmlButtonElement>,
}

impl DomView {
    /// Looks up the note form's elements. Hidden inputs and the search form
    /// are looked up when written, since not every page has them.
    pub fn locate(document: Document) -> Result<Self, JsValue> {
        let summary = required(&document, "#summary")?.dyn_into::<HtmlElement>()?;
        let sentiment = required(&document, "#sentiment-status")?.dyn_into::<HtmlElement>()?;
        let category = required(&document, "#category")?;
        let title = required(&document, r#"input[name="title"]"#)?;
        let content = required(&document, "#content")?;

        let nodes = document.query_selector_all(".button-container button")?;
        let mut buttons = Vec::new();
        for i in 0..nodes.length() {
            if let Some(button) = nodes
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlButtonElement>().ok())
            {
                buttons.push(button);
            }
        }

        Ok(Self {
            document,
            summary,
            sentiment,
            title,
            content,
            category,
            buttons,
        })
    }

    fn field(&self, field: Field) -> Option<Element> {
        let selector = match field {
            Field::Title => return Some(self.title.clone()),
            Field::Content => return Some(self.content.clone()),
            Field::Category => return Some(self.category.clone()),
            Field::Summary => r#"input[name="summary"]"#,
            Field::Sentiment => r#"input[name="sentiment"]"#,
            Field::Query => r#"#search-form input[name="query"]"#,
        };
        self.document.query_selector(selector).ok().flatten()
    }

    fn region(&self, region: Region) -> &HtmlElement {
        match region {
            Region::Summary => &self.summary,
            Region::Sentiment => &self.sentiment,
        }
    }
}

fn required(document: &Document, selector: &str) -> Result<Element, JsValue> {
    document
        .query_selector(selector)?
        .ok_or_else(|| JsValue::from_str(&format!("missing element {}", selector)))
}

fn read_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn write_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

impl FormView for DomView {
    fn value(&self, field: Field) -> String {
        self.field(field).map(|el| read_value(&el)).unwrap_or_default()
    }

    fn set_value(&self, field: Field, value: &str) {
        match self.field(field) {
            Some(el) => write_value(&el, value),
            None => tracing::debug!(?field, "field not on this page"),
        }
    }

    fn set_buttons_disabled(&self, disabled: bool) {
        for button in &self.buttons {
            button.set_disabled(disabled);
        }
    }

    fn set_text(&self, region: Region, text: &str) {
        self.region(region).set_inner_text(text);
    }

    fn replace_with_span(&self, region: Region, text: &str) {
        let el = self.region(region);
        el.set_inner_html("");
        let span = match self
            .document
            .create_element("span")
            .and_then(|span| span.dyn_into::<HtmlElement>().map_err(JsValue::from))
        {
            Ok(span) => span,
            Err(e) => {
                tracing::warn!(error = ?e, "failed to create span");
                el.set_inner_text(text);
                return;
            }
        };
        span.set_inner_text(text);
        if let Err(e) = el.append_child(&span) {
            tracing::warn!(error = ?e, "failed to append span");
        }
    }

    fn set_classes(&self, region: Region, classes: &[&str]) {
        self.region(region).set_class_name(&classes.join(" "));
    }

    fn submit_search(&self) {
        let form = self
            .document
            .get_element_by_id("search-form")
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        match form {
            Some(form) => {
                if let Err(e) = form.submit() {
                    tracing::warn!(error = ?e, "search form submission failed");
                }
            }
            None => tracing::debug!("no search form on this page"),
        }
    }
}

// ============================================================================
// Actions
// ============================================================================

#[derive(Debug, Clone, Copy)]
enum Action {
    Enablement,
    Categorize,
    Summarize,
    Sentiment,
    ResetSearch,
}

impl Action {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "categorize" => Some(Action::Categorize),
            "summarize" => Some(Action::Summarize),
            "sentiment" => Some(Action::Sentiment),
            "reset-search" => Some(Action::ResetSearch),
            _ => None,
        }
    }
}

fn dispatch(action: Action) {
    let Some(controller) = CONTROLLER.with(|slot| slot.borrow().clone()) else {
        tracing::warn!(?action, "note form is not ready");
        return;
    };

    match action {
        Action::Enablement => controller.compute_enablement(),
        Action::ResetSearch => controller.reset_search(),
        Action::Categorize => spawn_local(async move {
            if let Err(e) = controller.request_category().await {
                tracing::error!(error = %e, "Error categorizing note");
            }
        }),
        Action::Summarize => spawn_local(async move {
            controller.request_summary().await;
        }),
        Action::Sentiment => spawn_local(async move {
            controller.request_sentiment().await;
        }),
    }
}

fn listen(target: &EventTarget, event: &str, action: Action) -> Result<(), JsValue> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| dispatch(action));
    target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())?;
    // Listeners live as long as the page
    handler.forget();
    Ok(())
}

// ============================================================================
// Bootstrap
// ============================================================================

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = page_document()?;
    if document.ready_state() == "loading" {
        let ready = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            if let Err(e) = bootstrap() {
                tracing::warn!(error = ?e, "note form controller not started");
            }
        });
        document
            .add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else if let Err(e) = bootstrap() {
        tracing::warn!(error = ?e, "note form controller not started");
    }
    Ok(())
}

fn page_document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn bootstrap() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = page_document()?;

    let origin = window.location().origin()?;
    let client =
        HttpAnalysisClient::new(&origin).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let view = DomView::locate(document.clone())?;

    for field in [&view.title, &view.content, &view.category] {
        listen(field, "input", Action::Enablement)?;
    }

    let targets = document.query_selector_all("[data-action]")?;
    for i in 0..targets.length() {
        let Some(el) = targets.item(i).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };
        let name = el.get_attribute("data-action").unwrap_or_default();
        let Some(action) = Action::from_name(&name) else {
            tracing::warn!(action = %name, "unknown data-action");
            continue;
        };
        let event = el
            .get_attribute("data-event")
            .unwrap_or_else(|| "click".to_string());
        listen(&el, &event, action)?;
    }

    let controller = Rc::new(FormController::new(view, client));
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    tracing::info!("note form controller ready");
    Ok(())
}

// ============================================================================
// Exported Handlers
// ============================================================================

#[wasm_bindgen(js_name = categorizeNote)]
pub fn categorize_note() {
    dispatch(Action::Categorize);
}

#[wasm_bindgen(js_name = summarizeNote)]
pub fn summarize_note() {
    dispatch(Action::Summarize);
}

#[wasm_bindgen(js_name = analyzeSentiment)]
pub fn analyze_sentiment() {
    dispatch(Action::Sentiment);
}

#[wasm_bindgen(js_name = resetSearch)]
pub fn reset_search() {
    dispatch(Action::ResetSearch);
}

// ============================================================================
// Tests
// ============================================================================
