//! 객체 탐지 포트.
//!
//! 모델 로딩은 어댑터 생성 시점에 1회 수행되며 이후 읽기 전용으로 공유된다.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::detection::{DetectedObject, DetectionInput};

/// 객체 탐지기 — 블랙박스 모델 호출
///
/// 재시도 정책 없음: 실패는 그대로 전파된다.
#[async_trait]
pub trait ObjectDetector: Send + Sync {
    /// 정규화된 정사각형 입력에서 객체 목록 추출 (캔버스 좌표).
    ///
    /// 빈 목록은 에러가 아니다 — 호출자가 카드를 건너뛴다.
    async fn detect(&self, input: &DetectionInput) -> Result<Vec<DetectedObject>, CoreError>;

    /// 탐지기 이름 (로그용)
    fn name(&self) -> &str {
        "object-detector"
    }
}
