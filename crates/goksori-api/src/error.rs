//! 통합 API 에러 응답 타입.
//!
//! 모든 API 엔드포인트에서 일관된 에러 형식을 제공합니다.

use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// 통합 API 에러 응답.
///
/// # 예시
///
/// ```json
/// {
///   "code": "EMPTY_TEXT",
///   "message": "분석할 텍스트가 비어 있습니다",
///   "timestamp": 1738300800
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// 에러 코드 (예: "EMPTY_TEXT", "TEXT_TOO_LONG", "TOO_MANY_COMMENTS")
    pub code: String,
    /// 사람이 읽을 수 있는 에러 메시지
    pub message: String,
    /// 추가 에러 상세 정보 (선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    /// 에러 발생 타임스탬프 (Unix timestamp, 선택적)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    /// HTTP 메서드 (GET, POST 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// 요청 경로
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ApiErrorResponse {
    /// 기본 에러 생성 (타임스탬프 포함).
    ///
    /// # Example
    ///
    /// ```
    /// use goksori_api::error::ApiErrorResponse;
    ///
    /// let error = ApiErrorResponse::new("EMPTY_TEXT", "text is empty");
    /// assert!(error.timestamp.is_some());
    /// ```
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            timestamp: Some(chrono::Utc::now().timestamp()),
            method: None,
            path: None,
        }
    }

    /// 상세 정보 포함 에러 생성.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::new(code, message)
        }
    }

    /// 요청 정보(메서드, 경로)를 추가합니다.
    #[must_use]
    pub fn with_request_info(mut self, method: &Method, uri: &Uri) -> Self {
        self.method = Some(method.to_string());
        self.path = Some(uri.path().to_string());
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ApiErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiErrorResponse {}

/// 요청 본문 검증 실패.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("분석할 텍스트가 비어 있습니다")]
    EmptyText,

    #[error("텍스트가 너무 깁니다: {actual}자 (최대 {max}자)")]
    TextTooLong { max: usize, actual: usize },

    #[error("댓글이 너무 많습니다: {actual}개 (최대 {max}개)")]
    TooManyComments { max: usize, actual: usize },
}

impl ValidationError {
    /// 응답 본문에 실리는 에러 코드.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyText => "EMPTY_TEXT",
            ValidationError::TextTooLong { .. } => "TEXT_TOO_LONG",
            ValidationError::TooManyComments { .. } => "TOO_MANY_COMMENTS",
        }
    }

    fn details(&self) -> Option<Value> {
        match self {
            ValidationError::EmptyText => None,
            ValidationError::TextTooLong { max, actual }
            | ValidationError::TooManyComments { max, actual } => {
                Some(serde_json::json!({ "max": max, "actual": actual }))
            }
        }
    }
}

impl From<ValidationError> for ApiErrorResponse {
    fn from(err: ValidationError) -> Self {
        match err.details() {
            Some(details) => ApiErrorResponse::with_details(err.code(), err.to_string(), details),
            None => ApiErrorResponse::new(err.code(), err.to_string()),
        }
    }
}

/// API 핸들러 Result 타입 별칭.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ApiErrorResponse>)>;

/// 검증 실패를 요청 정보가 담긴 400 응답으로 변환합니다.
pub fn bad_request(
    err: ValidationError,
    method: &Method,
    uri: &Uri,
) -> (StatusCode, Json<ApiErrorResponse>) {
    let body = ApiErrorResponse::from(err).with_request_info(method, uri);
    (StatusCode::BAD_REQUEST, Json(body))
}
