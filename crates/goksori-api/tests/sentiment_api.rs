//! 감성분석 API 통합 테스트.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use goksori_analytics::RuleBasedSentimentAnalyzer;
use goksori_api::{create_api_router, AppState};
use goksori_core::{AnalysisConfig, AppConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app_with(analysis: AnalysisConfig) -> Router {
    let config = AppConfig {
        analysis,
        ..AppConfig::default()
    };
    let state = AppState::new(RuleBasedSentimentAnalyzer::new(), config);
    create_api_router().with_state(Arc::new(state))
}

fn app() -> Router {
    app_with(AnalysisConfig::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_analyze_strong_positive() {
    let (status, body) = post_json(
        app(),
        "/api/sentiment/analyze",
        json!({ "text": "삼성전자 급등 예상! 상한가 갈듯 매수 기회" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "positive");
    assert_eq!(body["score"], 1.0);
    assert_eq!(body["normalized_score"], 100.0);
    assert_eq!(body["confidence"], 1.0);
    assert_eq!(body["emoji"], "🔥");
    assert_eq!(body["grade"], "A");
    assert_eq!(body["text"], "삼성전자 급등 예상! 상한가 갈듯 매수 기회");
}

#[tokio::test]
async fn test_analyze_negated_positive() {
    let (status, body) = post_json(
        app(),
        "/api/sentiment/analyze",
        json!({ "text": "절대 안 오른다" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "negative");
    assert!((body["score"].as_f64().unwrap() - (-0.56)).abs() < 1e-9);
    assert_eq!(body["normalized_score"], 22.0);
}

#[tokio::test]
async fn test_analyze_empty_text_rejected() {
    let (status, body) = post_json(app(), "/api/sentiment/analyze", json!({ "text": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "EMPTY_TEXT");
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/api/sentiment/analyze");
}

#[tokio::test]
async fn test_analyze_too_long_rejected() {
    let app = app_with(AnalysisConfig {
        max_comments_per_stock: 100,
        max_text_chars: 4,
    });
    let (status, body) = post_json(app, "/api/sentiment/analyze", json!({ "text": "급등급등급" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "TEXT_TOO_LONG");
    assert_eq!(body["details"]["max"], 4);
    assert_eq!(body["details"]["actual"], 5);
}

#[tokio::test]
async fn test_explain_matches_analyze() {
    let text = "급락 ㅠㅠ 손절각";
    let (_, analyzed) = post_json(app(), "/api/sentiment/analyze", json!({ "text": text })).await;
    let (status, explained) = post_json(app(), "/api/sentiment/explain", json!({ "text": text })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(explained["report"], analyzed);
    assert_eq!(explained["breakdown"]["negated"], false);
    assert_eq!(explained["breakdown"]["emoticon_adjustment"], -0.1);

    let terms: Vec<&str> = explained["breakdown"]["matched_terms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["term"].as_str().unwrap())
        .collect();
    assert!(terms.contains(&"급락"));
    assert!(terms.contains(&"손절"));
}

#[tokio::test]
async fn test_aggregate_all_positive() {
    let (status, body) = post_json(
        app(),
        "/api/sentiment/aggregate",
        json!({
            "stock_code": "005930",
            "comments": ["급등예상", "매수기회", "상한가갈듯"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock_code"], "005930");
    assert_eq!(body["trend"], "up");
    assert_eq!(body["positive_count"], 3);
    assert_eq!(body["total_count"], 3);
    assert!(body["score"].as_f64().unwrap() > 55.0);
}

#[tokio::test]
async fn test_aggregate_empty_comments_default_summary() {
    let (status, body) = post_json(
        app(),
        "/api/sentiment/aggregate",
        json!({ "stock_code": "000660", "comments": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 50.0);
    assert_eq!(body["total_count"], 0);
    assert_eq!(body["trend"], "neutral");
    assert_eq!(body["grade"], "C");
    assert_eq!(body["emoji"], "😐");
}

#[tokio::test]
async fn test_aggregate_too_many_comments_rejected() {
    let app = app_with(AnalysisConfig {
        max_comments_per_stock: 2,
        max_text_chars: 2000,
    });
    let (status, body) = post_json(
        app,
        "/api/sentiment/aggregate",
        json!({ "stock_code": "005930", "comments": ["a", "b", "c"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "TOO_MANY_COMMENTS");
    assert_eq!(body["details"]["actual"], 3);
}

#[tokio::test]
async fn test_health_ready_through_api_router() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health/ready")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
