//! API 라우트.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/sentiment/analyze` - 텍스트 한 건 분석
//! - `/api/sentiment/explain` - 점수 계산 내역 포함 분석
//! - `/api/sentiment/aggregate` - 종목 댓글 집계

pub mod health;
pub mod sentiment;

pub use health::{health_router, ComponentHealth, ComponentStatus, HealthResponse};
pub use sentiment::{
    sentiment_router, AggregateRequest, AnalyzeRequest, ExplainResponse, StockSentimentResponse,
};

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

/// 전체 API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api/sentiment", sentiment_router())
}
