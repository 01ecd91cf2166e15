//! Prometheus 메트릭.
//!
//! `/metrics`로 노출되는 시계열:
//! - `http_requests_total{method, path}`
//! - `http_responses_total{method, path, status}`
//! - `http_request_duration_seconds{method, path}` 히스토그램
//! - `sentiment_analyses_total{label}`
//! - `sentiment_aggregations_total{trend}`

use std::time::Duration;

use axum::http::{Method, StatusCode};
use goksori_core::{SentimentLabel, Trend};
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

/// 요청 처리 시간 히스토그램 이름.
pub const HTTP_REQUEST_DURATION: &str = "http_request_duration_seconds";

/// 분석은 CPU 연산뿐이라 밀리초 이하 구간을 촘촘히 둡니다.
const LATENCY_BUCKETS: &[f64] = &[0.0005, 0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.5, 1.0];

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(HTTP_REQUEST_DURATION.to_string()), LATENCY_BUCKETS)
}

/// 전역 Prometheus 레코더를 설치하고 렌더링 핸들을 반환합니다.
///
/// # Errors
///
/// 레코더가 이미 설치되어 있으면 에러를 반환합니다.
pub fn setup_metrics_recorder() -> Result<PrometheusHandle, BuildError> {
    builder()?.install_recorder()
}

/// 요청 한 건의 메트릭 라벨.
///
/// 경로의 숫자 세그먼트(종목 코드 등)는 `:id`로 접어 카디널리티를 제한합니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteLabels {
    method: String,
    path: String,
}

impl RouteLabels {
    pub fn new(method: &Method, raw_path: &str) -> Self {
        Self {
            method: method.as_str().to_string(),
            path: normalize_path(raw_path),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 요청 수신.
    pub fn on_request(&self) {
        counter!(
            "http_requests_total",
            "method" => self.method.clone(),
            "path" => self.path.clone()
        )
        .increment(1);
    }

    /// 응답 완료.
    pub fn on_response(&self, status: StatusCode, elapsed: Duration) {
        counter!(
            "http_responses_total",
            "method" => self.method.clone(),
            "path" => self.path.clone(),
            "status" => status.as_str().to_string()
        )
        .increment(1);

        histogram!(
            HTTP_REQUEST_DURATION,
            "method" => self.method.clone(),
            "path" => self.path.clone()
        )
        .record(elapsed.as_secs_f64());
    }
}

/// 분석한 텍스트 수를 라벨별로 기록.
pub fn record_analysis(label: SentimentLabel) {
    counter!("sentiment_analyses_total", "label" => label.as_str()).increment(1);
}

/// 종목 집계 수를 추세별로 기록.
pub fn record_aggregation(trend: Trend) {
    counter!("sentiment_aggregations_total", "trend" => trend.as_str()).increment(1);
}

/// 숫자로만 된 경로 세그먼트를 `:id`로 바꿉니다.
///
/// 예: `/api/sentiment/stocks/005930` → `/api/sentiment/stocks/:id`
pub fn normalize_path(path: &str) -> String {
    let mut normalized = String::with_capacity(path.len());
    for (i, segment) in path.split('/').enumerate() {
        if i > 0 {
            normalized.push('/');
        }
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            normalized.push_str(":id");
        } else {
            normalized.push_str(segment);
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_code_segment_collapses() {
        assert_eq!(
            normalize_path("/api/sentiment/stocks/005930"),
            "/api/sentiment/stocks/:id"
        );
        assert_eq!(normalize_path("/a/123/b/45x"), "/a/:id/b/45x");
    }

    #[test]
    fn static_paths_unchanged() {
        assert_eq!(normalize_path("/api/sentiment/analyze"), "/api/sentiment/analyze");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn counters_render_in_exposition() {
        let recorder = builder().unwrap().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let labels = RouteLabels::new(&Method::POST, "/api/sentiment/analyze");
            labels.on_request();
            labels.on_response(StatusCode::BAD_REQUEST, Duration::from_millis(2));
            record_analysis(SentimentLabel::Negative);
            record_analysis(SentimentLabel::Negative);
            record_aggregation(Trend::Up);
        });

        let rendered = handle.render();
        assert!(rendered.contains(
            r#"http_requests_total{method="POST",path="/api/sentiment/analyze"} 1"#
        ));
        assert!(rendered.contains(r#"status="400""#));
        assert!(rendered.contains(r#"sentiment_analyses_total{label="negative"} 2"#));
        assert!(rendered.contains(r#"sentiment_aggregations_total{trend="up"} 1"#));
        assert!(rendered.contains(HTTP_REQUEST_DURATION));
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        record_analysis(SentimentLabel::Positive);
        RouteLabels::new(&Method::GET, "/health").on_request();
    }
}
