use tonal_classifier::error::ClassifierError;
use tonal_classifier::{Classification, Verdict};
use tonal_core::models::sentiment::Sentiment;

fn classification(label: &str, score: f64) -> Classification {
    Classification {
        label: label.to_string(),
        score,
    }
}

#[test]
fn positive_label_is_capitalized() {
    let verdict = Verdict::try_from(classification("POSITIVE", 0.9998)).unwrap();
    assert_eq!(verdict.sentiment, Sentiment::Positive);
    assert_eq!(verdict.confidence, 0.9998);
}

#[test]
fn negative_label_is_capitalized() {
    let verdict = Verdict::try_from(classification("NEGATIVE", 0.61)).unwrap();
    assert_eq!(verdict.sentiment, Sentiment::Negative);
}

#[test]
fn raw_score_is_kept_unrounded() {
    let verdict = Verdict::try_from(classification("POSITIVE", 0.987654321)).unwrap();
    assert_eq!(verdict.confidence, 0.987654321);
}

#[test]
fn labels_beyond_binary_are_rejected() {
    let err = Verdict::try_from(classification("NEUTRAL", 0.7)).unwrap_err();
    assert!(matches!(err, ClassifierError::UnknownLabel(ref l) if l == "NEUTRAL"));

    let err = Verdict::try_from(classification("LABEL_0", 0.7)).unwrap_err();
    assert!(matches!(err, ClassifierError::UnknownLabel(_)));
}

#[test]
fn scores_outside_unit_interval_are_rejected() {
    for score in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let err = Verdict::try_from(classification("POSITIVE", score)).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidScore(_)), "score {score}");
    }
}
