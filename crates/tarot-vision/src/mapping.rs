//! 캔버스 좌표 → 원본 이미지 좌표 변환.
//!
//! 탐지 캔버스는 높이 기준으로 정규화된 정사각형이고 원본의 중앙 정사각형에 해당한다.
//! 높이 비율로 확대한 뒤 좌우 여백 `(W − H) / 2`를 left/right에 더한다.

use tarot_core::config::ClampMode;
use tarot_core::models::bbox::{BBox, CanvasSpace, ImageSpace};

/// 캔버스 좌표 박스를 `full_width × full_height` 원본 좌표로 변환
pub fn canvas_to_image(
    bbox: &BBox<CanvasSpace>,
    full_width: u32,
    full_height: u32,
    canvas_size: u32,
    clamp: ClampMode,
) -> BBox<ImageSpace> {
    let canvas = canvas_size as f32;
    let width = full_width as f32;
    let height = full_height as f32;
    let side_offset = (width - height) / 2.0;

    let bottom_ratio = match clamp {
        ClampMode::Corrected => (bbox.bottom / canvas).min(1.0),
        // 정규화 비율과 절대 비율을 섞는 기존 동작
        ClampMode::Legacy => (bbox.bottom / canvas).min(canvas / height),
    };

    BBox::new(
        bbox.top / canvas * height,
        bbox.left / canvas * height + side_offset,
        bottom_ratio * height,
        bbox.right / canvas * height + side_offset,
    )
}
