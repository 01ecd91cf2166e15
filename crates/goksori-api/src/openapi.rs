//! OpenAPI 스펙과 Swagger UI.
//!
//! 핸들러의 `#[utoipa::path]`는 아래 `paths(...)`에 등록해야 문서에 나타납니다.

use axum::Router;
use goksori_core::{Grade, SentimentLabel, SentimentReport, Trend};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ApiErrorResponse;
use crate::routes::{
    AggregateRequest, AnalyzeRequest, ComponentHealth, ComponentStatus, ExplainResponse,
    HealthResponse, StockSentimentResponse,
};

/// Goksori API 문서.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Goksori Sentiment API",
        description = r#"
# 곡소리 감성분석 REST API

한국어 주식 토론 댓글의 감성을 사전 기반 규칙으로 분석합니다.

## 주요 기능

- **분석**: 텍스트 한 건의 점수(-1 ~ 1), 라벨, 신뢰도, 0 ~ 100 정규화 점수
- **집계**: 종목 댓글들의 신뢰도 가중 평균 점수와 추세
"#,
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "로컬 개발 서버"),
    ),
    tags(
        (name = "health", description = "헬스 체크 - 서버 상태 확인"),
        (name = "sentiment", description = "감성분석 - 텍스트 분석 및 종목 집계")
    ),
    components(
        schemas(
            // ===== Health =====
            HealthResponse,
            ComponentHealth,
            ComponentStatus,

            // ===== Common =====
            ApiErrorResponse,

            // ===== Sentiment =====
            AnalyzeRequest,
            AggregateRequest,
            ExplainResponse,
            StockSentimentResponse,
            SentimentReport,
            SentimentLabel,
            Grade,
            Trend,
        )
    ),
    paths(
        // ===== Health =====
        crate::routes::health::health_check,
        crate::routes::health::health_ready,

        // ===== Sentiment =====
        crate::routes::sentiment::analyze_text,
        crate::routes::sentiment::explain_text,
        crate::routes::sentiment::aggregate_comments,
    )
)]
pub struct ApiDoc;

/// Swagger UI 라우터 생성.
///
/// - `/swagger-ui` - Swagger UI 대화형 문서
/// - `/api-docs/openapi.json` - OpenAPI JSON 스펙
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
