//! 로깅 초기화.

use tarot_core::error::CoreError;
use tracing_subscriber::EnvFilter;

/// 크레이트별 로그 필터 문자열
pub fn default_filter(level: &str) -> String {
    ["tarot_core", "tarot_vision", "tarot_network", "tarot_page"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// tracing fmt 구독자 설치.
///
/// `RUST_LOG`가 설정되어 있으면 그 값을 우선한다. 이미 설치되어 있으면 에러.
pub fn init(level: &str) -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(level))),
        )
        .try_init()
        .map_err(|e| CoreError::Internal(format!("로깅 초기화 실패: {e}")))
}
