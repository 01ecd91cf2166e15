//! 댓글별 감성 결과를 종목 단위로 집계합니다.
//!
//! 점수는 신뢰도 가중 평균 `Σ(normalized_score × confidence) / Σ(confidence)`를
//! 소수점 1자리로 반올림한 값이고, 추세는 반올림된 점수로 판정합니다.
//! 입력 순서는 결과에 영향을 주지 않습니다.

use goksori_core::{round_dp, SentimentLabel, SentimentResult, StockSentimentSummary, Trend};
use tracing::debug;

/// 가중치 합이 0일 때 사용하는 점수.
pub const FALLBACK_SCORE: f64 = 50.0;

/// 종목 감성 집계기.
pub struct SentimentAggregator;

impl SentimentAggregator {
    /// 결과 목록을 집계합니다.
    ///
    /// 빈 목록이면 [`StockSentimentSummary::EMPTY`]를 반환합니다.
    pub fn aggregate(results: &[SentimentResult]) -> StockSentimentSummary {
        if results.is_empty() {
            return StockSentimentSummary::empty();
        }

        let mut positive_count = 0;
        let mut negative_count = 0;
        let mut neutral_count = 0;
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        for result in results {
            match result.label {
                SentimentLabel::Positive => positive_count += 1,
                SentimentLabel::Negative => negative_count += 1,
                SentimentLabel::Neutral => neutral_count += 1,
            }
            weighted_sum += result.normalized_score * result.confidence;
            weight_total += result.confidence;
        }

        // 분석기가 만든 결과라면 신뢰도는 항상 0.3 이상이다
        let average = if weight_total > 0.0 {
            weighted_sum / weight_total
        } else {
            FALLBACK_SCORE
        };
        let score = round_dp(average, 1);

        let summary = StockSentimentSummary {
            score,
            positive_count,
            negative_count,
            neutral_count,
            total_count: results.len(),
            trend: Trend::from_score(score),
        };

        debug!(
            total = summary.total_count,
            positive = summary.positive_count,
            negative = summary.negative_count,
            score = summary.score,
            "Sentiment aggregated"
        );

        summary
    }
}
