//! 결과 타입 속성 기반 테스트

use goksori_core::{round_dp, Grade, SentimentLabel, SentimentResult, StockSentimentSummary, Trend};
use proptest::prelude::*;

proptest! {
    #[test]
    fn from_score_is_clamped(raw in -10.0f64..10.0) {
        let result = SentimentResult::from_score(raw);
        prop_assert!((-1.0..=1.0).contains(&result.score));
        prop_assert!((0.0..=100.0).contains(&result.normalized_score));
        prop_assert!((0.3..=1.0).contains(&result.confidence));
        prop_assert_eq!(result.label, SentimentLabel::from_score(result.score));
    }

    #[test]
    fn grade_is_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        // A가 가장 높은 등급이므로 Ord 순서는 반대
        prop_assert!(Grade::from_normalized(high) <= Grade::from_normalized(low));
    }

    #[test]
    fn round_dp_is_within_half_step(value in -1000.0f64..1000.0) {
        let rounded = round_dp(value, 1);
        prop_assert!((rounded - value).abs() <= 0.05 + 1e-9);
        prop_assert_eq!(round_dp(rounded, 1), rounded);
    }

    #[test]
    fn trend_follows_thresholds(score in 0.0f64..=100.0) {
        let trend = Trend::from_score(score);
        match trend {
            Trend::Up => prop_assert!(score > 55.0),
            Trend::Down => prop_assert!(score < 45.0),
            Trend::Neutral => prop_assert!((45.0..=55.0).contains(&score)),
        }
    }
}

#[test]
fn empty_summary_is_neutral_default() {
    let summary = StockSentimentSummary::empty();
    assert_eq!(summary.score, 50.0);
    assert_eq!(summary.total_count, 0);
    assert_eq!(summary.trend, Trend::Neutral);
    assert_eq!(summary.grade(), Grade::C);
}
