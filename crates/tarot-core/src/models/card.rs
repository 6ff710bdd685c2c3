//! 카드 렌더링 산출물 모델.
//!
//! 이미지 로더가 만드는 두 가지 뷰, 카드 조립 결과, 호스트 페이지에 붙일 카드 요소.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::bbox::{BBox, ImageSpace};
use super::recommendation::Recommendation;

/// 디코딩된 썸네일의 두 가지 뷰.
///
/// 카드 한 장의 파이프라인이 독점 소유하며 렌더링 후 폐기된다.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// 높이가 탐지 캔버스 크기에 맞춰진 사본 (너비는 비례 축소/확대)
    pub detection_view: RgbaImage,
    /// 원본 해상도 그대로의 픽셀
    pub full_view: RgbaImage,
}

/// 카드 프레임 장식 필터 (CSS `saturate` + `hue-rotate`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameTint {
    /// 채도 (%) — 80 이상 140 미만
    pub saturate_percent: f32,
    /// 색상 회전 (deg) — -5 이상 5 미만
    pub hue_rotate_deg: f32,
}

impl FrameTint {
    /// [0, 1) 범위의 두 난수로 틴트 생성
    pub fn from_unit(saturate: f32, hue: f32) -> Self {
        Self {
            saturate_percent: saturate * 60.0 + 80.0,
            hue_rotate_deg: hue * 10.0 - 5.0,
        }
    }

    /// CSS `filter` 속성 값
    pub fn css_filter(&self) -> String {
        format!(
            "saturate({:.1}%) hue-rotate({:.2}deg)",
            self.saturate_percent, self.hue_rotate_deg
        )
    }
}

impl Default for FrameTint {
    fn default() -> Self {
        Self {
            saturate_percent: 100.0,
            hue_rotate_deg: 0.0,
        }
    }
}

/// 카드 한 장의 조립 결과.
///
/// DOM 카드를 만드는 데 한 번 쓰이고 폐기된다.
#[derive(Debug, Clone)]
pub struct CardDescriptor {
    /// 카드가 연결될 추천 항목
    pub recommendation: Recommendation,
    /// 캡션 (예: "three of cats", "the dog")
    pub caption: String,
    /// 원본 이미지 좌표의 선택 영역
    pub bbox: BBox<ImageSpace>,
    /// 스타일이 적용되고 선택 영역으로 잘린 픽셀
    pub styled_cropped: RgbaImage,
    /// 프레임 장식 필터
    pub frame_tint: FrameTint,
}

/// 호스트 페이지에 추가할 카드 요소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardElement {
    /// 링크 주소 (원본 추천)
    pub href: String,
    /// 카드 제목
    pub caption: String,
    /// 프레임 이미지 주소
    pub frame_src: String,
    /// 프레임 CSS 필터
    pub frame_filter: String,
    /// PNG 인코딩된 카드 이미지
    #[serde(with = "png_base64")]
    pub image_png: Vec<u8>,
    /// 카드 이미지 너비 (픽셀)
    pub image_width: u32,
    /// 카드 이미지 높이 (픽셀)
    pub image_height: u32,
}

mod png_base64 {
    use base64::{engine::general_purpose::STANDARD as B64, Engine};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&B64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        B64.decode(text.as_bytes())
            .map_err(|e| serde::de::Error::custom(format!("잘못된 base64: {e}")))
    }
}
