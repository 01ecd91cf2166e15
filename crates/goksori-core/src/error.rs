//! 감성분석 시스템의 에러 타입.
//!
//! 스코어러와 집계기는 실패하지 않습니다. 이 에러는 설정 로딩, CLI 입력,
//! API 요청 검증 같은 외곽 계층에서만 사용됩니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum GoksoriError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 입출력 에러
    #[error("입출력 에러: {0}")]
    Io(String),

    /// 직렬화 에러
    #[error("직렬화 에러: {0}")]
    Serialization(String),

    /// 내부 에러
    #[error("내부 에러: {0}")]
    Internal(String),
}

/// 감성분석 작업을 위한 Result 타입.
pub type GoksoriResult<T> = Result<T, GoksoriError>;

impl GoksoriError {
    /// 호출자가 입력을 고쳐서 다시 시도할 수 있는 에러인지 확인합니다.
    pub fn is_client_error(&self) -> bool {
        matches!(self, GoksoriError::InvalidInput(_))
    }
}

impl From<serde_json::Error> for GoksoriError {
    fn from(err: serde_json::Error) -> Self {
        GoksoriError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for GoksoriError {
    fn from(err: std::io::Error) -> Self {
        GoksoriError::Io(err.to_string())
    }
}

impl From<config::ConfigError> for GoksoriError {
    fn from(err: config::ConfigError) -> Self {
        GoksoriError::Config(err.to_string())
    }
}
