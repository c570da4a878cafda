//! Chart-ready transformations of an [`AnalysisResult`](crate::AnalysisResult).
//!
//! Everything here is pure and recomputed on each render from the stored
//! result.
use crate::mood::{sentiment_color, sentiment_icon, NEGATIVE_COLOR, POSITIVE_COLOR};
use crate::{NegativeMessage, Sentiment, SentimentCounts, SentimentPercentages};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarPoint {
    pub sentiment: Sentiment,
    pub label: &'static str,
    pub value: u64,
    pub color: &'static str,
}

/// Always `[Positive, Neutral, Negative]`, whatever the magnitudes.
pub fn bar_series(counts: &SentimentCounts) -> [BarPoint; 3] {
    Sentiment::ALL.map(|sentiment| BarPoint {
        sentiment,
        label: sentiment.label(),
        value: counts.get(sentiment),
        color: sentiment_color(sentiment),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoughnutSlice {
    pub label: &'static str,
    pub value: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthDoughnut {
    /// Clamped score shown in the middle of the ring.
    pub center: f64,
    pub slices: [DoughnutSlice; 2],
}

pub const HEALTH_MAX: f64 = 100.0;

pub fn health_doughnut(score: f64) -> HealthDoughnut {
    let center = clamp_score(score);
    HealthDoughnut {
        center,
        slices: [
            DoughnutSlice {
                label: "Healthy",
                value: center,
                color: POSITIVE_COLOR,
            },
            DoughnutSlice {
                label: "Unhealthy",
                value: HEALTH_MAX - center,
                color: NEGATIVE_COLOR,
            },
        ],
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, HEALTH_MAX)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageCard {
    pub sentiment: Sentiment,
    pub label: &'static str,
    pub icon: &'static str,
    pub percent: f64,
}

pub fn percentage_cards(percentages: &SentimentPercentages) -> [PercentageCard; 3] {
    Sentiment::ALL.map(|sentiment| PercentageCard {
        sentiment,
        label: sentiment.label(),
        icon: sentiment_icon(sentiment),
        percent: percentages.get(sentiment),
    })
}

/// Message texts in the order the service sent them, without any filtering.
pub fn negative_message_list(messages: &[NegativeMessage]) -> Vec<&str> {
    messages.iter().map(|entry| entry.message.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_scores_clamp_to_bounds() {
        assert_eq!(health_doughnut(f64::INFINITY).center, 100.0);
        assert_eq!(health_doughnut(f64::NEG_INFINITY).center, 0.0);
    }

    #[test]
    fn nan_score_renders_as_zero() {
        let doughnut = health_doughnut(f64::NAN);
        assert_eq!(doughnut.center, 0.0);
        assert_eq!(doughnut.slices[1].value, 100.0);
    }

    #[test]
    fn slices_always_sum_to_max() {
        for score in [-1.5, 0.0, 12.25, 99.9, 250.0] {
            let doughnut = health_doughnut(score);
            assert_eq!(doughnut.slices[0].value + doughnut.slices[1].value, HEALTH_MAX);
        }
    }
}
