//! 종목 단위 감성 집계 결과.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::sentiment::{sentiment_emoji, Grade};

/// 상승 추세 하한 (초과).
pub const TREND_UP_THRESHOLD: f64 = 55.0;

/// 하락 추세 상한 (미만).
pub const TREND_DOWN_THRESHOLD: f64 = 45.0;

/// 집계 점수의 추세 분류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    /// 상승
    Up,
    /// 하락
    Down,
    /// 보합
    #[default]
    Neutral,
}

impl Trend {
    /// 집계 점수(0~100)에서 추세를 결정합니다.
    ///
    /// `> 55` 상승, `< 45` 하락, 그 외 보합.
    pub fn from_score(score: f64) -> Self {
        if score > TREND_UP_THRESHOLD {
            Trend::Up
        } else if score < TREND_DOWN_THRESHOLD {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Neutral => "neutral",
        }
    }

    /// 추세 화살표 (CLI 표시용).
    pub fn arrow(self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Neutral => "-",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 종목 단위 감성 집계.
///
/// `total_count`는 항상 세 라벨 카운트의 합입니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa-support", derive(utoipa::ToSchema))]
pub struct StockSentimentSummary {
    /// 신뢰도 가중 평균 점수 (0 ~ 100, 소수점 1자리)
    pub score: f64,
    /// 긍정 댓글 수
    pub positive_count: usize,
    /// 부정 댓글 수
    pub negative_count: usize,
    /// 중립 댓글 수
    pub neutral_count: usize,
    /// 전체 댓글 수
    pub total_count: usize,
    /// 추세
    pub trend: Trend,
}

impl StockSentimentSummary {
    /// 댓글이 하나도 없을 때의 고정 기본값.
    pub const EMPTY: StockSentimentSummary = StockSentimentSummary {
        score: 50.0,
        positive_count: 0,
        negative_count: 0,
        neutral_count: 0,
        total_count: 0,
        trend: Trend::Neutral,
    };

    pub fn empty() -> Self {
        Self::EMPTY
    }

    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// 집계 점수의 표시 등급.
    pub fn grade(&self) -> Grade {
        Grade::from_normalized(self.score)
    }

    /// 집계 점수의 표시 이모지.
    pub fn emoji(&self) -> &'static str {
        sentiment_emoji(self.score)
    }

    /// 긍정 댓글 비율 (0.0 ~ 1.0). 댓글이 없으면 0.
    pub fn positive_ratio(&self) -> f64 {
        if self.total_count == 0 {
            0.0
        } else {
            self.positive_count as f64 / self.total_count as f64
        }
    }
}

impl Default for StockSentimentSummary {
    fn default() -> Self {
        Self::EMPTY
    }
}
