//! 감성분석 CLI 도구 모음.
//!
//! - 텍스트 한 건 분석
//! - 댓글 파일 집계
//! - 감성 사전 조회

pub mod commands;

pub use commands::OutputFormat;
