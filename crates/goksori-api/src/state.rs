//! 모든 핸들러에서 공유되는 애플리케이션 상태.
//!
//! Arc로 래핑되어 여러 요청 간에 안전하게 공유됩니다.

use std::sync::Arc;

use goksori_analytics::RuleBasedSentimentAnalyzer;
use goksori_core::{AnalysisConfig, AppConfig};

/// 애플리케이션 공유 상태.
///
/// Axum의 State extractor를 통해 핸들러에 주입됩니다.
#[derive(Debug, Clone)]
pub struct AppState {
    /// 감성분석기 - 상태가 없으므로 요청 간 공유
    pub analyzer: Arc<RuleBasedSentimentAnalyzer>,

    /// 로드된 애플리케이션 설정
    pub config: Arc<AppConfig>,

    /// 서버 시작 시간
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(analyzer: RuleBasedSentimentAnalyzer, config: AppConfig) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config: Arc::new(config),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 요청 크기 제한.
    pub fn limits(&self) -> &AnalysisConfig {
        &self.config.analysis
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

/// 테스트용 AppState 생성.
///
/// 기본 사전과 기본 설정을 사용합니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    AppState::new(RuleBasedSentimentAnalyzer::new(), AppConfig::default())
}
