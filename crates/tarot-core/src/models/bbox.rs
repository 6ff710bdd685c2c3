//! 좌표 공간이 태깅된 바운딩 박스.
//!
//! 탐지 캔버스 좌표와 원본 이미지 좌표는 타입으로 구분된다.
//! 두 공간 사이의 변환은 `tarot-vision::mapping`을 통해서만 이뤄진다.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// 탐지 캔버스 좌표 공간 (한 변 = `canvas_size`인 정사각형)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpace;

/// 원본(전체 해상도) 이미지 픽셀 좌표 공간
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpace;

/// 바운딩 박스 `{ top, left, bottom, right }`.
///
/// 불변식: `top ≤ bottom`, `left ≤ right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct BBox<S> {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    #[serde(skip)]
    space: PhantomData<S>,
}

impl<S> BBox<S> {
    /// 네 변으로 박스 생성
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
            space: PhantomData,
        }
    }

    /// 한 점으로 이루어진 퇴화 박스
    pub fn point(y: f32, x: f32) -> Self {
        Self::new(y, x, y, x)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// `top ≤ bottom`, `left ≤ right` 여부
    pub fn is_well_formed(&self) -> bool {
        self.top <= self.bottom && self.left <= self.right
    }

    /// 두 박스를 모두 포함하는 최소 박스 (성분별 min/max)
    pub fn join(self, other: &Self) -> Self {
        Self::new(
            self.top.min(other.top),
            self.left.min(other.left),
            self.bottom.max(other.bottom),
            self.right.max(other.right),
        )
    }

    /// `boxes`를 모두 포함하는 최소 박스.
    ///
    /// `seed`는 항등원으로 취급되어 `boxes`가 비어 있을 때만 반환된다.
    /// 따라서 박스 하나를 합치면 그 박스가 그대로 나온다.
    pub fn fold<'a, I>(seed: Self, boxes: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        S: Copy + 'a,
    {
        let mut iter = boxes.into_iter();
        match iter.next() {
            Some(first) => iter.fold(*first, |acc, b| acc.join(b)),
            None => seed,
        }
    }
}

impl BBox<CanvasSpace> {
    /// 캔버스 중앙 한 점 — 박스 합치기의 시작값 (항등원)
    pub fn canvas_center(canvas_size: u32) -> Self {
        let center = canvas_size as f32 / 2.0;
        Self::point(center, center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type CanvasBox = BBox<CanvasSpace>;

    #[test]
    fn canvas_center_is_point() {
        let seed = CanvasBox::canvas_center(416);
        assert_eq!(seed, CanvasBox::new(208.0, 208.0, 208.0, 208.0));
        assert!(seed.is_well_formed());
        assert_eq!(seed.width(), 0.0);
    }

    #[test]
    fn folding_single_box_preserves_it() {
        let seed = CanvasBox::canvas_center(416);
        let b = CanvasBox::new(100.0, 50.0, 300.0, 350.0);
        assert_eq!(CanvasBox::fold(seed, [&b]), b);

        // 중앙을 포함하지 않는 박스도 그대로
        let corner = CanvasBox::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(CanvasBox::fold(seed, [&corner]), corner);
    }

    #[test]
    fn fold_is_order_independent() {
        let seed = CanvasBox::canvas_center(416);
        let a = CanvasBox::new(10.0, 20.0, 220.0, 230.0);
        let b = CanvasBox::new(150.0, 5.0, 400.0, 210.0);
        let c = CanvasBox::new(200.0, 200.0, 260.0, 410.0);

        let abc = CanvasBox::fold(seed, [&a, &b, &c]);
        let cba = CanvasBox::fold(seed, [&c, &b, &a]);
        let nested = CanvasBox::fold(seed, [&CanvasBox::fold(seed, [&b, &c]), &a]);

        assert_eq!(abc, cba);
        assert_eq!(abc, nested);
        assert_eq!(abc, CanvasBox::new(10.0, 5.0, 400.0, 410.0));
    }

    #[test]
    fn fold_of_nothing_is_seed() {
        let seed = CanvasBox::canvas_center(416);
        assert_eq!(CanvasBox::fold(seed, std::iter::empty()), seed);
    }

    #[test]
    fn serde_omits_space_marker() {
        let b = BBox::<ImageSpace>::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "top": 1.0, "left": 2.0, "bottom": 3.0, "right": 4.0 })
        );
    }
}
