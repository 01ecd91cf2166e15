//! 댓글 단위 감성분석 결과.
//!
//! 원점수(`score`)는 -1.0 ~ +1.0, 표시용 정규화 점수는 0 ~ 100 입니다.
//! 라벨, 신뢰도, 정규화 점수는 모두 원점수에서 파생되며, 이모지와 등급은
//! 저장하지 않고 읽을 때마다 정규화 점수로부터 계산합니다.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 긍정 라벨 하한 (초과).
pub const POSITIVE_THRESHOLD: f64 = 0.15;

/// 부정 라벨 상한 (미만).
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

/// 감성 라벨.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// 긍정
    Positive,
    /// 부정
    Negative,
    /// 중립
    #[default]
    Neutral,
}

impl SentimentLabel {
    /// 원점수에서 라벨을 결정합니다.
    ///
    /// `score > 0.15` → 긍정, `score < -0.15` → 부정, 그 외 중립.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// 직렬화 문자열.
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }

    /// 한국어 표시명.
    pub fn display_name(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "긍정",
            SentimentLabel::Negative => "부정",
            SentimentLabel::Neutral => "중립",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A~E 표시 등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// 정규화 점수(0~100)에서 등급을 결정합니다.
    ///
    /// ≥80 A, ≥65 B, ≥45 C, ≥30 D, 그 외 E.
    pub fn from_normalized(normalized_score: f64) -> Self {
        if normalized_score >= 80.0 {
            Grade::A
        } else if normalized_score >= 65.0 {
            Grade::B
        } else if normalized_score >= 45.0 {
            Grade::C
        } else if normalized_score >= 30.0 {
            Grade::D
        } else {
            Grade::E
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 정규화 점수(0~100)에 대응하는 이모지.
///
/// ≥70 🔥, ≥55 📈, ≥45 😐, ≥30 📉, 그 외 💀.
pub fn sentiment_emoji(normalized_score: f64) -> &'static str {
    if normalized_score >= 70.0 {
        "🔥"
    } else if normalized_score >= 55.0 {
        "📈"
    } else if normalized_score >= 45.0 {
        "😐"
    } else if normalized_score >= 30.0 {
        "📉"
    } else {
        "💀"
    }
}

/// 소수점 `dp` 자리로 반올림합니다 (half-to-even).
///
/// Decimal에서 반올림한 뒤 문자열을 거쳐 f64로 되돌리므로 결과는 해당 소수의
/// 가장 가까운 f64 값입니다. 변환할 수 없는 값(NaN, 무한대)은 그대로 반환합니다.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(value)
}

/// 댓글 단위 감성분석 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct SentimentResult {
    /// 원점수 (-1.0 매우 부정 ~ +1.0 매우 긍정)
    pub score: f64,
    /// 라벨
    pub label: SentimentLabel,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
    /// 정규화 점수 (0 ~ 100, 소수점 1자리)
    pub normalized_score: f64,
}

impl SentimentResult {
    /// 빈 입력에 대한 고정 중립 결과.
    pub const NEUTRAL: SentimentResult = SentimentResult {
        score: 0.0,
        label: SentimentLabel::Neutral,
        confidence: 0.5,
        normalized_score: 50.0,
    };

    /// 빈 입력에 대한 고정 중립 결과를 반환합니다.
    pub fn neutral() -> Self {
        Self::NEUTRAL
    }

    /// 원점수에서 결과를 만듭니다.
    ///
    /// 점수는 [-1.0, 1.0]으로 클램프되고, 라벨/신뢰도/정규화 점수가 파생됩니다.
    /// - 신뢰도: `min(|score| * 1.5 + 0.3, 1.0)`
    /// - 정규화 점수: `round((score + 1) / 2 * 100, 1)`
    pub fn from_score(raw_score: f64) -> Self {
        let score = raw_score.clamp(-1.0, 1.0);
        Self {
            score,
            label: SentimentLabel::from_score(score),
            confidence: (score.abs() * 1.5 + 0.3).min(1.0),
            normalized_score: normalize_score(score),
        }
    }

    /// 표시용 이모지.
    pub fn emoji(&self) -> &'static str {
        sentiment_emoji(self.normalized_score)
    }

    /// 표시용 등급.
    pub fn grade(&self) -> Grade {
        Grade::from_normalized(self.normalized_score)
    }
}

impl Default for SentimentResult {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// -1 ~ 1 범위를 0 ~ 100으로 변환합니다.
fn normalize_score(score: f64) -> f64 {
    round_dp((score + 1.0) / 2.0 * 100.0, 1)
}
