use chatmood_core::{AnalysisResult, NegativeMessage, SentimentCounts, SentimentPercentages};

#[test]
fn full_service_payload_parses() {
    let body = r#"{
        "total_messages": 18,
        "overall_mood": "Negative",
        "sentiment_counts": {"Positive": 10, "Neutral": 5, "Negative": 3},
        "sentiment_percentages": {"Positive": 55.56, "Neutral": 27.78, "Negative": 16.67},
        "health_score": 42,
        "top_negative_messages": [
            {"message": "I hate this", "sentiment": "Negative", "confidence": 0.91},
            {"message": "so annoying", "sentiment": "Negative", "confidence": 0.77}
        ]
    }"#;

    let result: AnalysisResult = serde_json::from_str(body).unwrap();
    assert_eq!(
        result.sentiment_counts,
        SentimentCounts {
            positive: 10,
            neutral: 5,
            negative: 3
        }
    );
    assert_eq!(result.total_messages, Some(18));
    assert_eq!(result.overall_mood.as_deref(), Some("Negative"));
    assert_eq!(result.health_score, Some(42.0));
    assert_eq!(result.top_negative_messages.len(), 2);
    assert_eq!(result.top_negative_messages[0].confidence, Some(0.91));
    assert_eq!(result.sentiment_percentages.neutral, 27.78);
}

#[test]
fn optional_fields_may_be_absent() {
    let body = r#"{"sentiment_counts": {"Positive": 1}, "extra": true}"#;
    let result: AnalysisResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.sentiment_counts.positive, 1);
    assert_eq!(result.sentiment_counts.negative, 0);
    assert_eq!(result.overall_mood, None);
    assert_eq!(result.health_score, None);
    assert_eq!(result.total_messages, None);
    assert!(result.top_negative_messages.is_empty());
    assert_eq!(result.sentiment_percentages.positive, 0.0);
}

#[test]
fn counts_are_required() {
    let body = r#"{"overall_mood": "Positive"}"#;
    assert!(serde_json::from_str::<AnalysisResult>(body).is_err());
}

#[test]
fn negative_message_keeps_only_text_when_bare() {
    let parsed: NegativeMessage = serde_json::from_str(r#"{"message": "meh"}"#).unwrap();
    assert_eq!(parsed, NegativeMessage::new("meh"));
}

#[test]
fn null_percentages_and_messages_read_as_empty() {
    let body = r#"{
        "sentiment_counts": {"Positive": 2, "Neutral": null},
        "sentiment_percentages": {"Positive": 100.0, "Neutral": null},
        "top_negative_messages": null
    }"#;
    let result: AnalysisResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.sentiment_counts.neutral, 0);
    assert_eq!(result.sentiment_percentages.positive, 100.0);
    assert_eq!(result.sentiment_percentages.neutral, 0.0);
    assert!(result.top_negative_messages.is_empty());
}

#[test]
fn null_percentage_block_reads_as_zeroes() {
    let body = r#"{"sentiment_counts": {"Negative": 1}, "sentiment_percentages": null}"#;
    let result: AnalysisResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.sentiment_percentages, SentimentPercentages::default());
}

#[test]
fn non_text_mood_reads_as_absent() {
    for mood in ["7", "{}", "[\"Positive\"]", "null", "true"] {
        let body = format!(r#"{{"sentiment_counts": {{"Positive": 1}}, "overall_mood": {mood}}}"#);
        let result: AnalysisResult = serde_json::from_str(&body).unwrap();
        assert_eq!(result.overall_mood, None, "overall_mood = {mood}");
    }
}
