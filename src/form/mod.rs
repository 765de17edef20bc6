//! Browser-side controller for the note form.
//!
//! ## Module Structure
//!
//! - `view` - the page surface (`FormView`) the controller works against
//! - `controller` - enablement and the three analysis round trips
//! - `client` - `reqwest` client for `/categorize`, `/summarize`, `/sentiment`
//! - `sentiment` - style classes for the sentiment display
//! - `memory` - headless in-memory view
//! - `dom` - `web-sys` view and page bootstrap (`wasm` feature, wasm32 only)

mod client;
mod controller;
mod memory;
mod sentiment;
mod view;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub mod dom;

pub use client::{
    AnalysisClient, ClientError, HttpAnalysisClient, CATEGORIZE_PATH, SENTIMENT_PATH,
    SUMMARIZE_PATH,
};
pub use controller::{
    FormController, Outcome, LOADING_TEXT, MIN_CATEGORIZE_CHARS, SENTIMENT_CONNECT_ERROR_TEXT,
    SENTIMENT_STATUS_ERROR_TEXT, SUMMARY_ERROR_TEXT,
};
pub use memory::MemoryView;
pub use sentiment::{SentimentClass, BASE_CLASS};
pub use view::{Field, FormView, Region};
