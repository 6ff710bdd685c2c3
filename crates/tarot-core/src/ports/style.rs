//! 스타일 필터 포트.
//!
//! 스타일 참조 이미지와 스타일 비율은 모델 로드 시점에 한 번 주어진다.

use async_trait::async_trait;
use image::RgbaImage;

use crate::error::CoreError;
use crate::models::style::StyleReference;

/// 스타일 필터 — 신경망 스타일 변환 블랙박스
#[async_trait]
pub trait StyleFilter: Send + Sync {
    /// 모델 1회 로드. 렌더링 시작 전에 정확히 한 번 호출된다.
    async fn load_models(&mut self, reference: &StyleReference) -> Result<(), CoreError>;

    /// 전체 해상도 이미지에 스타일 적용. 출력 크기는 입력과 같아야 한다.
    async fn stylize(&self, full: &RgbaImage) -> Result<RgbaImage, CoreError>;
}
