//! 객체 탐지 결과 모델.

use serde::{Deserialize, Serialize};

use super::bbox::{BBox, CanvasSpace};

/// 탐지된 객체 하나 (탐지 캔버스 좌표)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// 클래스 레이블 (예: "cat")
    pub class_label: String,
    /// 캔버스 좌표 바운딩 박스
    pub bbox: BBox<CanvasSpace>,
    /// 탐지 신뢰도 (모델이 제공하는 경우)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

impl DetectedObject {
    /// 신뢰도 없는 탐지 결과 생성
    pub fn new(class_label: impl Into<String>, bbox: BBox<CanvasSpace>) -> Self {
        Self {
            class_label: class_label.into(),
            bbox,
            score: None,
        }
    }
}

/// 탐지 모델 입력 텐서.
///
/// 탐지 뷰의 중앙 정사각형을 `size × size`로 맞춘 RGB 값.
/// 각 채널은 0.0 ~ 1.0으로 정규화되어 있고 행 우선(HWC) 순서다.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionInput {
    /// 한 변의 크기 (픽셀)
    pub size: u32,
    /// `size × size × 3` 개의 정규화된 채널 값
    pub data: Vec<f32>,
}

impl DetectionInput {
    /// 텐서 형상 `[1, size, size, 3]`
    pub fn shape(&self) -> [usize; 4] {
        let side = self.size as usize;
        [1, side, side, 3]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_object_serde_skips_missing_score() {
        let obj = DetectedObject::new("cat", BBox::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_string(&obj).unwrap();
        assert!(!json.contains("score"));

        let restored: DetectedObject = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, obj);
    }

    #[test]
    fn detection_input_shape() {
        let input = DetectionInput {
            size: 4,
            data: vec![0.0; 4 * 4 * 3],
        };
        assert_eq!(input.shape(), [1, 4, 4, 3]);
    }
}
