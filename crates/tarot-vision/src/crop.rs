//! 선택 영역 크롭.

use image::{imageops, RgbaImage};
use tarot_core::error::CoreError;
use tarot_core::models::bbox::{BBox, ImageSpace};

/// 원본 이미지 안의 크롭 영역 (픽셀)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// 박스에 bottom/right 여백을 더한 크롭 영역을 이미지 경계 안으로 클램프.
///
/// 너비와 높이는 최소 1 픽셀. 이미지 크기가 0이면 `None`.
pub fn crop_region(
    bbox: &BBox<ImageSpace>,
    image_width: u32,
    image_height: u32,
    margin: u32,
) -> Option<CropRegion> {
    if image_width == 0 || image_height == 0 {
        return None;
    }

    let margin = margin as f32;
    // f32 → u32 `as` 변환은 음수/NaN을 0으로 포화시킨다
    let x = (bbox.left.floor() as u32).min(image_width - 1);
    let y = (bbox.top.floor() as u32).min(image_height - 1);
    let right = ((bbox.right + margin).ceil() as u32).min(image_width);
    let bottom = ((bbox.bottom + margin).ceil() as u32).min(image_height);

    Some(CropRegion {
        x,
        y,
        width: right.saturating_sub(x).max(1),
        height: bottom.saturating_sub(y).max(1),
    })
}

/// 스타일 적용된 이미지를 박스(+여백)로 자른다
pub fn crop_to_bbox(
    image: &RgbaImage,
    bbox: &BBox<ImageSpace>,
    margin: u32,
) -> Result<RgbaImage, CoreError> {
    let region = crop_region(bbox, image.width(), image.height(), margin)
        .ok_or_else(|| CoreError::Internal("크롭 대상 이미지 크기 0".to_string()))?;
    Ok(imageops::crop_imm(image, region.x, region.y, region.width, region.height).to_image())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn region_adds_margin_on_bottom_right() {
        let b = BBox::new(10.0, 20.0, 50.0, 80.0);
        let region = crop_region(&b, 200, 100, 10).unwrap();
        assert_eq!(
            region,
            CropRegion {
                x: 20,
                y: 10,
                width: 70,
                height: 50
            }
        );
    }

    #[test]
    fn region_clamps_to_bounds() {
        let b = BBox::new(-5.0, -30.0, 120.0, 500.0);
        let region = crop_region(&b, 200, 100, 10).unwrap();
        assert_eq!(
            region,
            CropRegion {
                x: 0,
                y: 0,
                width: 200,
                height: 100
            }
        );
    }

    #[test]
    fn region_outside_image_is_one_pixel() {
        let b = BBox::new(300.0, 300.0, 400.0, 400.0);
        let region = crop_region(&b, 200, 100, 10).unwrap();
        assert_eq!(region.x, 199);
        assert_eq!(region.y, 99);
        assert_eq!((region.width, region.height), (1, 1));
    }

    #[test]
    fn empty_image_has_no_region() {
        let b = BBox::new(0.0, 0.0, 1.0, 1.0);
        assert!(crop_region(&b, 0, 0, 10).is_none());
    }

    #[test]
    fn crop_copies_pixels() {
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
        img.put_pixel(30, 40, Rgba([255, 0, 0, 255]));

        let b = BBox::new(40.0, 30.0, 60.0, 50.0);
        let cropped = crop_to_bbox(&img, &b, 10).unwrap();
        assert_eq!(cropped.dimensions(), (30, 30));
        assert_eq!(cropped.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
    }
}
