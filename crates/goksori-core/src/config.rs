//! 설정 관리.
//!
//! 설정 로딩 순서는 기본값 → TOML 파일(선택) → `GOKSORI__` 접두사 환경 변수입니다.
//! 감성 사전은 정적 상수이므로 여기서 다루지 않습니다.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 서버 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 분석 요청 제한
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// 소켓 주소 반환.
    ///
    /// # Errors
    /// `host:port` 형식이 유효하지 않으면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 분석 요청 크기 제한.
///
/// API와 CLI 입력 검증에만 쓰이며 스코어러 동작에는 영향이 없습니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// 종목당 집계할 최대 댓글 수
    pub max_comments_per_stock: usize,
    /// 댓글 하나의 최대 글자 수
    pub max_text_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_comments_per_stock: 100,
            max_text_chars: 2000,
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();

        let builder = config::Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("logging.format", defaults.logging.format)?
            .set_default(
                "analysis.max_comments_per_stock",
                defaults.analysis.max_comments_per_stock as i64,
            )?
            .set_default(
                "analysis.max_text_chars",
                defaults.analysis.max_text_chars as i64,
            )?
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("GOKSORI")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.analysis.max_comments_per_stock, 100);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:8000");

        let bad = ServerConfig {
            host: "not a host".to_string(),
            port: 1,
        };
        assert!(bad.socket_addr().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = AppConfig::load("does/not/exist.toml").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.analysis.max_text_chars, 2000);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let parsed: AppConfig = toml_like("[server]\nhost = \"0.0.0.0\"\nport = 9000\n");
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.analysis.max_comments_per_stock, 100);
    }

    fn toml_like(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
