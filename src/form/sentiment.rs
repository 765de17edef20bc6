//! Style classes for the sentiment display.

/// Class always present on the sentiment display.
pub const BASE_CLASS: &str = "sentiment";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentClass {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl SentimentClass {
    /// Maps a label returned by the server, case-insensitively.
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "positive" => SentimentClass::Positive,
            "negative" => SentimentClass::Negative,
            "neutral" => SentimentClass::Neutral,
            _ => SentimentClass::Unknown,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            SentimentClass::Positive => "positive",
            SentimentClass::Negative => "negative",
            SentimentClass::Neutral => "neutral",
            SentimentClass::Unknown => "unknown",
        }
    }
}
