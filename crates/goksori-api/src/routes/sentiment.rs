//! 감성분석 endpoint.
//!
//! 텍스트 한 건 분석과 종목 댓글 집계를 제공합니다.
//! 분석기 자체는 실패하지 않으므로 에러는 요청 검증에서만 발생합니다.

use axum::{
    extract::{OriginalUri, State},
    http::Method,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use utoipa::ToSchema;

use goksori_analytics::{ScoreBreakdown, SentimentAggregator};
use goksori_core::{sentiment_span, AnalysisConfig, Grade, SentimentReport, StockSentimentSummary, Trend};

use crate::error::{bad_request, ApiErrorResponse, ApiResult, ValidationError};
use crate::metrics::{record_aggregation, record_analysis};
use crate::state::AppState;

// ==================== 요청/응답 타입 ====================

/// 텍스트 분석 요청.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// 분석할 텍스트
    #[schema(example = "삼성전자 급등 예상! 상한가 갈듯 매수 기회")]
    pub text: String,
}

/// 점수 계산 내역 포함 분석 응답.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExplainResponse {
    pub report: SentimentReport,
    /// 매칭 용어, 부정어 여부, 이모티콘 보정치, 클램프 전 점수
    #[schema(value_type = Object)]
    pub breakdown: ScoreBreakdown,
}

/// 종목 댓글 집계 요청.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AggregateRequest {
    /// 종목 코드 (예: "005930")
    #[schema(example = "005930")]
    pub stock_code: String,
    /// 댓글 목록
    #[serde(default)]
    pub comments: Vec<String>,
}

/// 종목 감성 집계 응답.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StockSentimentResponse {
    pub stock_code: String,
    /// 0 ~ 100 감성 점수
    pub score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub total_count: usize,
    pub trend: Trend,
    pub grade: Grade,
    pub emoji: String,
}

impl StockSentimentResponse {
    pub fn new(stock_code: impl Into<String>, summary: &StockSentimentSummary) -> Self {
        Self {
            stock_code: stock_code.into(),
            score: summary.score,
            positive_count: summary.positive_count,
            negative_count: summary.negative_count,
            neutral_count: summary.neutral_count,
            total_count: summary.total_count,
            trend: summary.trend,
            grade: summary.grade(),
            emoji: summary.emoji().to_string(),
        }
    }
}

// ==================== 검증 ====================

/// 분석 대상 텍스트 검증.
///
/// 글자 수는 바이트가 아니라 유니코드 스칼라 기준입니다.
pub fn validate_text(text: &str, limits: &AnalysisConfig) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let actual = text.chars().count();
    if actual > limits.max_text_chars {
        return Err(ValidationError::TextTooLong {
            max: limits.max_text_chars,
            actual,
        });
    }

    Ok(())
}

/// 집계 요청의 댓글 수 검증.
pub fn validate_comments(comments: &[String], limits: &AnalysisConfig) -> Result<(), ValidationError> {
    if comments.len() > limits.max_comments_per_stock {
        return Err(ValidationError::TooManyComments {
            max: limits.max_comments_per_stock,
            actual: comments.len(),
        });
    }
    Ok(())
}

// ==================== 핸들러 ====================

/// 텍스트 한 건 감성분석.
///
/// POST /api/sentiment/analyze
#[utoipa::path(
    post,
    path = "/api/sentiment/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "분석 성공", body = SentimentReport),
        (status = 400, description = "빈 텍스트 또는 길이 초과", body = ApiErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<SentimentReport>> {
    validate_text(&request.text, state.limits()).map_err(|e| {
        warn!(code = e.code(), "텍스트 분석 요청 거부");
        bad_request(e, &method, &uri)
    })?;

    let result = state.analyzer.analyze(&request.text);
    record_analysis(result.label);

    debug!(label = %result.label, score = result.score, "텍스트 분석 완료");

    Ok(Json(SentimentReport::new(request.text, &result)))
}

/// 점수 계산 내역 포함 감성분석.
///
/// POST /api/sentiment/explain
#[utoipa::path(
    post,
    path = "/api/sentiment/explain",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "분석 성공", body = ExplainResponse),
        (status = 400, description = "빈 텍스트 또는 길이 초과", body = ApiErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn explain_text(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<ExplainResponse>> {
    validate_text(&request.text, state.limits()).map_err(|e| {
        warn!(code = e.code(), "텍스트 분석 요청 거부");
        bad_request(e, &method, &uri)
    })?;

    let breakdown = state.analyzer.explain(&request.text);
    record_analysis(breakdown.result.label);

    Ok(Json(ExplainResponse {
        report: SentimentReport::new(request.text, &breakdown.result),
        breakdown,
    }))
}

/// 종목 댓글 집계.
///
/// 댓글이 없으면 기본 요약(50점, 중립)을 반환합니다.
/// POST /api/sentiment/aggregate
#[utoipa::path(
    post,
    path = "/api/sentiment/aggregate",
    request_body = AggregateRequest,
    responses(
        (status = 200, description = "집계 성공", body = StockSentimentResponse),
        (status = 400, description = "댓글 수 초과", body = ApiErrorResponse)
    ),
    tag = "sentiment"
)]
pub async fn aggregate_comments(
    State(state): State<Arc<AppState>>,
    method: Method,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<AggregateRequest>,
) -> ApiResult<Json<StockSentimentResponse>> {
    validate_comments(&request.comments, state.limits()).map_err(|e| {
        warn!(code = e.code(), stock_code = %request.stock_code, "집계 요청 거부");
        bad_request(e, &method, &uri)
    })?;

    let summary = sentiment_span!("aggregate", request.stock_code).in_scope(|| {
        let results = state.analyzer.analyze_batch(&request.comments);
        for result in &results {
            record_analysis(result.label);
        }
        SentimentAggregator::aggregate(&results)
    });
    record_aggregation(summary.trend);

    Ok(Json(StockSentimentResponse::new(request.stock_code, &summary)))
}

/// 감성분석 라우터 생성.
pub fn sentiment_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyze", post(analyze_text))
        .route("/explain", post(explain_text))
        .route("/aggregate", post(aggregate_comments))
}
