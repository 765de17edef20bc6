//! HTTP client for the note analysis endpoints.
//!
//! Each endpoint takes `{"content": ...}` and answers with a single-field JSON
//! object. No timeout and no retry is applied: a failed call is reported once
//! and the user re-triggers it.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

use crate::models::{CategoryResponse, ContentRequest, SentimentResponse, SummaryResponse};

pub const CATEGORIZE_PATH: &str = "categorize";
pub const SUMMARIZE_PATH: &str = "summarize";
pub const SENTIMENT_PATH: &str = "sentiment";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),

    /// The server answered 2xx but the body was not the expected JSON.
    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),
}

/// The three analysis round trips the form controller performs.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single page thread.
#[async_trait(?Send)]
pub trait AnalysisClient {
    async fn categorize(&self, content: &str) -> Result<String, ClientError>;
    async fn summarize(&self, content: &str) -> Result<String, ClientError>;
    async fn sentiment(&self, content: &str) -> Result<String, ClientError>;
}

// ============================================================================
// reqwest Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpAnalysisClient {
    /// Creates a client for the server at `base_url` (e.g. the page origin).
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        // Url::join replaces the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { http, base })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, content: &str) -> Result<T, ClientError> {
        let url = self.endpoint(path)?;
        let body = ContentRequest {
            content: content.to_string(),
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(e.to_string())
            } else {
                ClientError::Transport(e.to_string())
            }
        })
    }
}

#[async_trait(?Send)]
impl AnalysisClient for HttpAnalysisClient {
    async fn categorize(&self, content: &str) -> Result<String, ClientError> {
        let data: CategoryResponse = self.post(CATEGORIZE_PATH, content).await?;
        Ok(data.category)
    }

    async fn summarize(&self, content: &str) -> Result<String, ClientError> {
        let data: SummaryResponse = self.post(SUMMARIZE_PATH, content).await?;
        Ok(data.summary)
    }

    async fn sentiment(&self, content: &str) -> Result<String, ClientError> {
        let data: SentimentResponse = self.post(SENTIMENT_PATH, content).await?;
        Ok(data.sentiment)
    }
}
