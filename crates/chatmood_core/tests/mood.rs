use chatmood_core::{classify_mood, Sentiment, NEGATIVE_COLOR, NEUTRAL_COLOR, POSITIVE_COLOR};

#[test]
fn known_moods_map_to_their_presentation() {
    let positive = classify_mood(Some("Positive"));
    assert_eq!(positive.sentiment, Sentiment::Positive);
    assert_eq!(positive.color, POSITIVE_COLOR);
    assert_eq!(positive.background, "#4CAF5022");

    let neutral = classify_mood(Some("Neutral"));
    assert_eq!(neutral.sentiment, Sentiment::Neutral);
    assert_eq!(neutral.color, NEUTRAL_COLOR);

    let negative = classify_mood(Some("Negative"));
    assert_eq!(negative.sentiment, Sentiment::Negative);
    assert_eq!(negative.color, NEGATIVE_COLOR);
    assert_eq!(negative.background, "#F4433622");
}

#[test]
fn unknown_or_missing_mood_falls_back_to_neutral() {
    let neutral = classify_mood(Some("Neutral"));

    assert_eq!(classify_mood(Some("Unknown")), neutral);
    assert_eq!(classify_mood(Some("positive")), neutral);
    assert_eq!(classify_mood(Some("")), neutral);
    assert_eq!(classify_mood(None), neutral);
}
