//! Text analysis behind the `/categorize`, `/summarize` and `/sentiment`
//! endpoints.
//!
//! The default analyzer asks an OpenAI-compatible chat-completions API for a
//! one-shot answer and returns the trimmed reply.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    Summary,
    Category,
    Sentiment,
}

impl AnalysisKind {
    pub fn system_prompt(self) -> &'static str {
        match self {
            AnalysisKind::Summary => "You are a helpful assistant that summarizes notes.",
            AnalysisKind::Category => {
                "You are a helpful assistant that categorizes notes in a single word category."
            }
            AnalysisKind::Sentiment => {
                "You are a helpful assistant that analyzes the sentiment of notes in a single word (e.g., Positive, Neutral, Negative)."
            }
        }
    }

    pub fn user_prompt(self, content: &str) -> String {
        match self {
            AnalysisKind::Summary => format!("Generate a concise summary for: {}", content),
            AnalysisKind::Category => format!("Categorize this note: {}", content),
            AnalysisKind::Sentiment => {
                format!("Detect and display the sentiment of this note: {}", content)
            }
        }
    }

    /// Message returned to the browser when the analysis fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            AnalysisKind::Summary => "Failed to summarize note",
            AnalysisKind::Category => "Failed to categorize note",
            AnalysisKind::Sentiment => "Failed to analyze sentiment",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("OPENAI_API_KEY is not set")]
    MissingApiKey,

    #[error("chat request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("chat API responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat API returned no reply")]
    EmptyReply,
}

#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn analyze(&self, kind: AnalysisKind, content: &str) -> Result<String, AnalysisError>;
}

// ============================================================================
// Chat Completions
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub struct ChatAnalyzer {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl ChatAnalyzer {
    pub fn new(api_key: Option<String>, model: &str, base_url: &str) -> Result<Self, AnalysisError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;
        Ok(Self {
            http,
            api_key,
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AnalysisError> {
        Self::new(
            config.openai_api_key.clone(),
            &config.openai_model,
            &config.openai_base_url,
        )
    }

    fn request<'a>(&'a self, kind: AnalysisKind, content: &str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: kind.system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: kind.user_prompt(content),
                },
            ],
        }
    }
}

/// Extracts the first choice's text, trimmed. A blank reply is passed through
/// as an empty string; only a response without choices is an error.
fn first_reply(response: ChatResponse) -> Result<String, AnalysisError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.trim().to_string())
        .ok_or(AnalysisError::EmptyReply)
}

#[async_trait]
impl TextAnalyzer for ChatAnalyzer {
    async fn analyze(&self, kind: AnalysisKind, content: &str) -> Result<String, AnalysisError> {
        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingApiKey)?;

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&self.request(kind, content))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply = first_reply(response.json::<ChatResponse>().await?)?;
        tracing::debug!(?kind, reply = %reply, "analysis complete");
        Ok(reply)
    }
}
