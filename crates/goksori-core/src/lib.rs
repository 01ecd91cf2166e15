//! # Goksori Core
//!
//! 한국어 주식 토론 감성분석 시스템의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 시스템 전반에서 사용되는 기본 타입을 제공합니다:
//! - 댓글 단위 감성분석 결과 (`SentimentResult`)
//! - 종목 단위 집계 결과 (`StockSentimentSummary`)
//! - 라벨, 등급, 추세 분류
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
