//! 표시/전송용 분석 리포트.

use serde::{Deserialize, Serialize};

use super::sentiment::{Grade, SentimentLabel, SentimentResult};

/// 텍스트 한 건의 분석 리포트.
///
/// 이모지와 등급은 생성 시점에 `SentimentResult`에서 다시 계산됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SentimentReport {
    /// 분석한 원문
    pub text: String,
    /// 원점수 (-1.0 ~ 1.0)
    pub score: f64,
    /// 정규화 점수 (0 ~ 100)
    pub normalized_score: f64,
    /// 라벨
    pub label: SentimentLabel,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
    /// 이모지
    pub emoji: String,
    /// 등급
    pub grade: Grade,
}

impl SentimentReport {
    pub fn new(text: impl Into<String>, result: &SentimentResult) -> Self {
        Self {
            text: text.into(),
            score: result.score,
            normalized_score: result.normalized_score,
            label: result.label,
            confidence: result.confidence,
            emoji: result.emoji().to_string(),
            grade: result.grade(),
        }
    }
}
