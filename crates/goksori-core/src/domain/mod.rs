//! 감성분석 도메인 모델.
//!
//! - [`sentiment`]: 댓글 단위 결과, 라벨, 등급, 이모지
//! - [`summary`]: 종목 단위 집계 결과와 추세
//! - [`report`]: 표시/전송용 분석 리포트

pub mod report;
pub mod sentiment;
pub mod summary;

pub use report::SentimentReport;
pub use sentiment::{round_dp, sentiment_emoji, Grade, SentimentLabel, SentimentResult};
pub use summary::{StockSentimentSummary, Trend};
