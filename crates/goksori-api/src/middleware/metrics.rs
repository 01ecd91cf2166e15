//! 요청/응답 메트릭 수집 middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::metrics::RouteLabels;

/// 모든 요청의 수, 상태 코드, 처리 시간을 기록합니다.
pub async fn metrics_layer(request: Request, next: Next) -> Response {
    let labels = RouteLabels::new(request.method(), request.uri().path());
    labels.on_request();

    let started = Instant::now();
    let response = next.run(request).await;
    labels.on_response(response.status(), started.elapsed());

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware::from_fn,
        routing::post,
        Router,
    };
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/api/sentiment/analyze", post(|| async { "ok" }))
            .layer(from_fn(metrics_layer))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn response_passes_through() {
        assert_eq!(status_of("POST", "/api/sentiment/analyze").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn method_mismatch_still_answers() {
        assert_eq!(
            status_of("GET", "/api/sentiment/analyze").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
