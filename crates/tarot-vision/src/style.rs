//! 스타일 참조 준비.
//!
//! 번들 에셋에서 스타일 참조 이미지를 읽어 디코딩하고, 설정의 스타일 강도와 묶는다.
//! 렌더링 시작 전 한 번만 수행한다.

use tarot_core::config::StyleConfig;
use tarot_core::error::CoreError;
use tarot_core::models::style::StyleReference;
use tarot_core::ports::assets::AssetSource;
use tracing::debug;

use crate::loader::decode;

/// 설정된 스타일 에셋을 읽어 `StyleReference` 생성
pub async fn load_style_reference(
    assets: &dyn AssetSource,
    config: &StyleConfig,
) -> Result<StyleReference, CoreError> {
    if !(config.style_ratio > 0.0 && config.style_ratio <= 1.0) {
        return Err(CoreError::validation(
            "style.style_ratio",
            format!("0 초과 1 이하여야 합니다: {}", config.style_ratio),
        ));
    }

    let bytes = assets.load(&config.style_asset).await?;
    let image = tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| CoreError::Internal(format!("스타일 이미지 디코딩 작업 실패: {e}")))??;

    debug!(
        "스타일 참조 로드: {} ({}x{}, ratio {})",
        config.style_asset,
        image.width(),
        image.height(),
        config.style_ratio
    );

    Ok(StyleReference {
        image,
        ratio: config.style_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MemoryAssets {
        files: HashMap<String, Vec<u8>>,
        loads: AtomicUsize,
    }

    impl MemoryAssets {
        fn with(name: &str, bytes: Vec<u8>) -> Self {
            Self {
                files: HashMap::from([(name.to_string(), bytes)]),
                loads: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AssetSource for MemoryAssets {
        async fn load(&self, name: &str) -> Result<Vec<u8>, CoreError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.files
                .get(name)
                .cloned()
                .ok_or_else(|| CoreError::Internal(format!("no asset {name}")))
        }

        fn url_for(&self, name: &str) -> String {
            name.to_string()
        }
    }

    fn png(w: u32, h: u32) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        RgbaImage::from_pixel(w, h, Rgba([250, 200, 40, 255]))
            .write_to(&mut buffer, ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[tokio::test]
    async fn loads_configured_asset_with_ratio() {
        let config = StyleConfig::default();
        let assets = MemoryAssets::with(&config.style_asset, png(12, 8));

        let reference = load_style_reference(&assets, &config).await.unwrap();

        assert_eq!(reference.image.dimensions(), (12, 8));
        assert_eq!(reference.image.get_pixel(0, 0), &Rgba([250, 200, 40, 255]));
        assert!((reference.ratio - 0.1).abs() < f32::EPSILON);
        assert_eq!(assets.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_asset_propagates() {
        let assets = MemoryAssets::with("other.jpg", png(2, 2));
        let result = load_style_reference(&assets, &StyleConfig::default()).await;
        assert!(matches!(result, Err(CoreError::Internal(_))));
    }

    #[tokio::test]
    async fn undecodable_asset_is_decode_error() {
        let config = StyleConfig::default();
        let assets = MemoryAssets::with(&config.style_asset, b"not an image".to_vec());
        let result = load_style_reference(&assets, &config).await;
        assert!(matches!(result, Err(CoreError::Decode(_))));
    }

    #[tokio::test]
    async fn out_of_range_ratio_is_rejected_before_loading() {
        let config = StyleConfig {
            style_ratio: 0.0,
            ..StyleConfig::default()
        };
        let assets = MemoryAssets::with(&config.style_asset, png(2, 2));
        let result = load_style_reference(&assets, &config).await;
        assert!(matches!(result, Err(CoreError::Validation { .. })));
        assert_eq!(assets.loads.load(Ordering::SeqCst), 0);
    }
}
