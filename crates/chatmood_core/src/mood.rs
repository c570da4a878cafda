use crate::Sentiment;

pub const POSITIVE_COLOR: &str = "#4CAF50";
pub const NEUTRAL_COLOR: &str = "#FFC107";
pub const NEGATIVE_COLOR: &str = "#F44336";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodPresentation {
    pub sentiment: Sentiment,
    pub color: &'static str,
    /// Badge fill: `color` with a low alpha suffix.
    pub background: &'static str,
    pub icon: &'static str,
}

/// Maps a raw mood label to its presentation.
///
/// Unknown or missing labels fall back to the neutral presentation.
pub fn classify_mood(mood: Option<&str>) -> MoodPresentation {
    let sentiment = mood
        .and_then(Sentiment::from_label)
        .unwrap_or(Sentiment::Neutral);
    presentation(sentiment)
}

pub fn presentation(sentiment: Sentiment) -> MoodPresentation {
    MoodPresentation {
        sentiment,
        color: sentiment_color(sentiment),
        background: match sentiment {
            Sentiment::Positive => "#4CAF5022",
            Sentiment::Neutral => "#FFC10722",
            Sentiment::Negative => "#F4433622",
        },
        icon: sentiment_icon(sentiment),
    }
}

pub fn sentiment_color(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => POSITIVE_COLOR,
        Sentiment::Neutral => NEUTRAL_COLOR,
        Sentiment::Negative => NEGATIVE_COLOR,
    }
}

pub fn sentiment_icon(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Neutral => "😐",
        Sentiment::Negative => "😞",
    }
}
