//! 스타일 참조 모델.

use image::RgbaImage;

/// 스타일 필터에 넘기는 참조 입력.
///
/// 번들 에셋에서 시작 시 한 번 만들어지고, 모델 로드 시 필터에 전달된다.
#[derive(Debug, Clone)]
pub struct StyleReference {
    /// 스타일 참조 이미지 (디코딩된 RGBA)
    pub image: RgbaImage,
    /// 스타일 강도 (0.0 초과 ~ 1.0 이하)
    pub ratio: f32,
}
