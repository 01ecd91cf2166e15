//! CORS 정책.
//!
//! `CORS_ORIGINS`(쉼표 구분)에 유효한 origin이 하나라도 있으면 그 목록만 허용하고,
//! 없으면 모든 origin을 허용합니다. 후자는 로컬 개발용입니다.

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// origin 목록 환경변수 이름.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";

/// 쉼표로 구분된 origin 문자열을 헤더 값으로 변환합니다.
///
/// 공백은 잘라내고 헤더 값으로 쓸 수 없는 항목은 건너뜁니다.
pub fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect()
}

/// origin 목록으로 CORS 레이어를 만듭니다. 목록이 비면 any.
pub fn build_cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        warn!("no CORS origins configured, allowing any origin");
        AllowOrigin::any()
    } else {
        info!(count = origins.len(), "CORS origins restricted");
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// 환경변수에서 CORS 레이어 구성.
pub fn cors_layer_from_env() -> CorsLayer {
    let origins = std::env::var(CORS_ORIGINS_ENV)
        .map(|raw| parse_origins(&raw))
        .unwrap_or_default();
    build_cors_layer(origins)
}
