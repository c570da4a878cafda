use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

pub type AttemptId = u64;

/// Shown when the analysis service could not be reached or answered with
/// something that cannot be classified.
pub const ANALYSIS_FAILED_MESSAGE: &str = "Unable to analyze chat. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Presentation order used by every chart and card.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Exact, case-sensitive match against the labels the service emits.
    pub fn from_label(label: &str) -> Option<Self> {
        Sentiment::ALL
            .into_iter()
            .find(|sentiment| sentiment.label() == label)
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-category message tallies. Absent or `null` keys deserialize to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct SentimentCounts {
    #[serde(rename = "Positive", default, deserialize_with = "null_as_default")]
    pub positive: u64,
    #[serde(rename = "Neutral", default, deserialize_with = "null_as_default")]
    pub neutral: u64,
    #[serde(rename = "Negative", default, deserialize_with = "null_as_default")]
    pub negative: u64,
}

impl SentimentCounts {
    pub fn get(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// Per-category share of all messages in `[0, 100]`. Absent or `null` keys
/// deserialize to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct SentimentPercentages {
    #[serde(rename = "Positive", default, deserialize_with = "null_as_default")]
    pub positive: f64,
    #[serde(rename = "Neutral", default, deserialize_with = "null_as_default")]
    pub neutral: f64,
    #[serde(rename = "Negative", default, deserialize_with = "null_as_default")]
    pub negative: f64,
}

impl SentimentPercentages {
    pub fn get(&self, sentiment: Sentiment) -> f64 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NegativeMessage {
    pub message: String,
    pub sentiment: Option<String>,
    pub confidence: Option<f64>,
}

impl NegativeMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sentiment: None,
            confidence: None,
        }
    }
}

/// A successful analysis as returned by the remote service.
///
/// Immutable once received; the workflow replaces it wholesale on the next
/// successful attempt.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisResult {
    pub sentiment_counts: SentimentCounts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sentiment_percentages: SentimentPercentages,
    /// Raw mood text; anything other than the three known labels is rendered
    /// with the neutral presentation. Non-string values read as `None`.
    #[serde(default, deserialize_with = "text_or_none")]
    pub overall_mood: Option<String>,
    #[serde(default)]
    pub health_score: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_negative_messages: Vec<NegativeMessage>,
    #[serde(default)]
    pub total_messages: Option<u64>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrAny {
    Text(String),
    Other(IgnoredAny),
}

fn text_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TextOrAny::deserialize(deserializer)? {
        TextOrAny::Text(text) => Some(text),
        TextOrAny::Other(_) => None,
    })
}

/// A chat export picked by the user, ready to upload.
#[derive(Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl AnalysisRequest {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for AnalysisRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisRequest")
            .field("filename", &self.filename)
            .field("byte_len", &self.bytes.len())
            .finish()
    }
}

/// Closed classification of one settled analysis attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Success(AnalysisResult),
    /// The service answered with an `error` field; carries it verbatim.
    SoftError(String),
    /// Transport, status or decoding failure. The cause is logged, never shown.
    HardError,
}
