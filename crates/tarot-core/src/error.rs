//! 타로 카드 렌더러 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 외부 라이브러리 에러를 `CoreError` 변형으로 매핑한다.

use thiserror::Error;

/// 코어 레이어 에러.
///
/// 카드 한 장의 렌더링 실패는 해당 카드에만 영향을 준다.
/// 호출자는 에러를 로그로 남기고 다음 추천 항목으로 진행한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// 필드 유효성 검증 실패
    #[error("유효성 검증 실패 — {field}: {message}")]
    Validation {
        /// 검증 실패한 필드명
        field: String,
        /// 실패 사유
        message: String,
    },

    /// 네트워크 에러 (연결 실패, 비정상 상태 코드)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 이미지 디코딩 실패
    #[error("이미지 디코딩 실패: {0}")]
    Decode(String),

    /// 객체 탐지 모델 호출 실패
    #[error("객체 탐지 실패: {0}")]
    Detection(String),

    /// 스타일 필터 호출 실패
    #[error("스타일 변환 실패: {0}")]
    StyleTransfer(String),

    /// 호스트 페이지 구조를 찾을 수 없음
    #[error("페이지 구조 미발견: {0}")]
    PageStructure(String),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}

impl CoreError {
    /// `Validation` 에러 생성 헬퍼
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
