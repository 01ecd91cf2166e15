//! 한국어 주식 댓글 감성분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 가중치가 붙은 한국어 감성 사전 ([`lexicon`])
//! - 텍스트 → 감성 점수 규칙 기반 분석기 ([`scorer`])
//! - 댓글 결과 → 종목 집계기 ([`aggregator`])
//!
//! 모든 연산은 상태가 없는 순수 함수이며, 사전은 읽기 전용으로 공유됩니다.
//!
//! ```
//! use goksori_analytics::{RuleBasedSentimentAnalyzer, SentimentAggregator};
//! use goksori_core::{SentimentLabel, Trend};
//!
//! let analyzer = RuleBasedSentimentAnalyzer::new();
//! let result = analyzer.analyze("삼성전자 급등 예상! 상한가 갈듯 매수 기회");
//! assert_eq!(result.label, SentimentLabel::Positive);
//!
//! let results = analyzer.analyze_batch(["급등예상", "매수기회", "상한가갈듯"]);
//! let summary = SentimentAggregator::aggregate(&results);
//! assert_eq!(summary.trend, Trend::Up);
//! ```

pub mod aggregator;
pub mod lexicon;
pub mod scorer;

pub use aggregator::SentimentAggregator;
pub use lexicon::{Lexicon, Tier, CRYING_PENALTY, KOREAN_STOCK_LEXICON, LAUGHING_BONUS};
pub use scorer::{MatchedTerm, RuleBasedSentimentAnalyzer, ScoreBreakdown, NEGATION_FACTOR};
