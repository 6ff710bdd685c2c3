//! 썸네일 로더.
//!
//! 다운로드 → 디코딩(RGBA) → 탐지 뷰(높이 = 캔버스 크기) + 원본 뷰.
//! 리사이즈는 fast_image_resize 기반이며 `Resizer`를 카드 간에 재사용한다.

use fast_image_resize::{images::Image as FirImage, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::{imageops, RgbaImage};
use tarot_core::error::CoreError;
use tarot_core::models::card::LoadedImage;
use tarot_core::models::detection::DetectionInput;
use tarot_core::ports::fetcher::ThumbnailFetcher;
use tracing::debug;

/// 썸네일 로더 — 파이프라인 컨텍스트의 재사용 스크래치 상태
pub struct ImageLoader {
    canvas_size: u32,
    resizer: Resizer,
}

impl ImageLoader {
    /// 탐지 캔버스 크기로 로더 생성
    pub fn new(canvas_size: u32) -> Self {
        Self {
            canvas_size,
            resizer: Resizer::new(),
        }
    }

    /// 탐지 캔버스 한 변의 크기
    pub fn canvas_size(&self) -> u32 {
        self.canvas_size
    }

    /// URL에서 썸네일을 받아 두 가지 뷰로 디코딩
    pub async fn load(
        &mut self,
        fetcher: &dyn ThumbnailFetcher,
        url: &str,
    ) -> Result<LoadedImage, CoreError> {
        let bytes = fetcher.fetch(url).await?;
        debug!("썸네일 다운로드: {url} ({} bytes)", bytes.len());

        let full_view = tokio::task::spawn_blocking(move || decode(&bytes))
            .await
            .map_err(|e| CoreError::Internal(format!("디코딩 작업 실패: {e}")))??;

        self.views(full_view)
    }

    /// 디코딩된 원본에서 탐지 뷰를 만들어 `LoadedImage` 구성
    pub fn views(&mut self, full_view: RgbaImage) -> Result<LoadedImage, CoreError> {
        let detection_view = self.detection_view(&full_view)?;
        Ok(LoadedImage {
            detection_view,
            full_view,
        })
    }

    /// 높이가 캔버스 크기가 되도록 비례 리사이즈.
    ///
    /// 가로가 긴 이미지는 탐지 뷰의 너비가 캔버스 크기를 넘는다.
    pub fn detection_view(&mut self, full: &RgbaImage) -> Result<RgbaImage, CoreError> {
        let (w, h) = full.dimensions();
        if w == 0 || h == 0 {
            return Err(CoreError::Decode("이미지 크기 0".to_string()));
        }

        let scale = self.canvas_size as f64 / h as f64;
        let target_w = ((w as f64 * scale).round() as u32).max(1);
        self.resize(full, target_w, self.canvas_size)
    }

    /// 탐지 뷰의 중앙 정사각형을 캔버스 크기로 맞춰 0..1 RGB 텐서로 변환
    pub fn detection_input(&mut self, view: &RgbaImage) -> Result<DetectionInput, CoreError> {
        let (w, h) = view.dimensions();
        if w == 0 || h == 0 {
            return Err(CoreError::Decode("탐지 뷰 크기 0".to_string()));
        }

        let side = w.min(h);
        let square = imageops::crop_imm(view, (w - side) / 2, (h - side) / 2, side, side).to_image();
        let square = self.resize(&square, self.canvas_size, self.canvas_size)?;

        let data = square
            .pixels()
            .flat_map(|p| [p[0], p[1], p[2]])
            .map(|c| c as f32 / 255.0)
            .collect();

        Ok(DetectionInput {
            size: self.canvas_size,
            data,
        })
    }

    /// 고속 리사이즈 (동일 크기면 복제 반환)
    fn resize(&mut self, src: &RgbaImage, width: u32, height: u32) -> Result<RgbaImage, CoreError> {
        let (src_w, src_h) = src.dimensions();
        if src_w == width && src_h == height {
            return Ok(src.clone());
        }
        if width == 0 || height == 0 {
            return Err(CoreError::Internal("목표 이미지 크기 0".to_string()));
        }

        let src_image = FirImage::from_vec_u8(src_w, src_h, src.as_raw().clone(), PixelType::U8x4)
            .map_err(|e| CoreError::Internal(format!("소스 이미지 생성 실패: {e}")))?;
        let mut dst_image = FirImage::new(width, height, PixelType::U8x4);

        let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(
            fast_image_resize::FilterType::Bilinear,
        ));
        self.resizer
            .resize(&src_image, &mut dst_image, &options)
            .map_err(|e| CoreError::Internal(format!("리사이즈 실패: {e}")))?;

        debug!("리사이즈: {}x{} → {}x{}", src_w, src_h, width, height);

        RgbaImage::from_raw(width, height, dst_image.into_vec())
            .ok_or_else(|| CoreError::Internal("결과 이미지 생성 실패".to_string()))
    }
}

/// 이미지 바이트(JPEG/PNG/WebP 등)를 RGBA로 디코딩
pub fn decode(bytes: &[u8]) -> Result<RgbaImage, CoreError> {
    let image = image::load_from_memory(bytes).map_err(|e| CoreError::Decode(e.to_string()))?;
    let rgba = image.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(CoreError::Decode("이미지 크기 0".to_string()));
    }
    Ok(rgba)
}
