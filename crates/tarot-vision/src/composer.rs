//! 카드 조립 오케스트레이터.
//!
//! 추천 항목 하나에 대해 로드 → 탐지 → 선택 → 좌표 변환 → 스타일 → 크롭을 순서대로 수행한다.
//! `CardComposer`는 로드된 모델과 재사용 리사이즈 상태를 소유하는 파이프라인 컨텍스트다.

use std::sync::Arc;

use tarot_core::config::{StyleConfig, VisionConfig};
use tarot_core::error::CoreError;
use tarot_core::models::card::{CardDescriptor, FrameTint, LoadedImage};
use tarot_core::models::recommendation::Recommendation;
use tarot_core::models::style::StyleReference;
use tarot_core::ports::assets::AssetSource;
use tarot_core::ports::detector::ObjectDetector;
use tarot_core::ports::fetcher::ThumbnailFetcher;
use tarot_core::ports::random::RandomSource;
use tarot_core::ports::style::StyleFilter;
use tracing::{debug, info, warn};

use crate::crop;
use crate::loader::ImageLoader;
use crate::mapping;
use crate::random::StdRandom;
use crate::selection;
use crate::style::load_style_reference;

/// 카드 조립기 — 파이프라인 컨텍스트
pub struct CardComposer {
    detector: Arc<dyn ObjectDetector>,
    style: Box<dyn StyleFilter>,
    fetcher: Arc<dyn ThumbnailFetcher>,
    rng: Box<dyn RandomSource>,
    loader: ImageLoader,
    config: VisionConfig,
}

impl CardComposer {
    /// 스타일 참조로 스타일 모델을 1회 로드하고 조립기 생성.
    ///
    /// 탐지기는 이미 로드된 상태로 전달된다. 이후 모델은 재로드되지 않는다.
    pub async fn prepare(
        detector: Arc<dyn ObjectDetector>,
        mut style: Box<dyn StyleFilter>,
        fetcher: Arc<dyn ThumbnailFetcher>,
        reference: &StyleReference,
        config: VisionConfig,
    ) -> Result<Self, CoreError> {
        if config.canvas_size == 0 {
            return Err(CoreError::validation(
                "vision.canvas_size",
                "0보다 커야 합니다",
            ));
        }

        style.load_models(reference).await?;
        info!(
            "스타일 모델 로드 완료 (ratio {}, 탐지기: {})",
            reference.ratio,
            detector.name()
        );

        Ok(Self {
            detector,
            style,
            fetcher,
            rng: Box::new(StdRandom::from_entropy()),
            loader: ImageLoader::new(config.canvas_size),
            config,
        })
    }

    /// 번들 에셋에서 스타일 참조를 읽은 뒤 `prepare`
    pub async fn bootstrap(
        detector: Arc<dyn ObjectDetector>,
        style: Box<dyn StyleFilter>,
        fetcher: Arc<dyn ThumbnailFetcher>,
        assets: &dyn AssetSource,
        style_config: &StyleConfig,
        config: VisionConfig,
    ) -> Result<Self, CoreError> {
        let reference = load_style_reference(assets, style_config).await?;
        Self::prepare(detector, style, fetcher, &reference, config).await
    }

    /// 난수 소스 교체 (테스트/재현용)
    pub fn with_random(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// 비전 설정
    pub fn config(&self) -> &VisionConfig {
        &self.config
    }

    /// 추천 항목 하나로 카드 조립.
    ///
    /// 탐지 결과가 없으면 경고 로그 후 `Ok(None)` — 에러가 아니다.
    /// 네트워크/디코딩/모델 실패는 이 카드에 한해 에러로 전파된다.
    pub async fn compose(
        &mut self,
        recommendation: &Recommendation,
    ) -> Result<Option<CardDescriptor>, CoreError> {
        let image = self
            .loader
            .load(self.fetcher.as_ref(), &recommendation.thumbnail_url)
            .await?;
        self.compose_loaded(recommendation, image).await
    }

    /// 이미 디코딩된 이미지로 카드 조립
    pub async fn compose_loaded(
        &mut self,
        recommendation: &Recommendation,
        image: LoadedImage,
    ) -> Result<Option<CardDescriptor>, CoreError> {
        let input = self.loader.detection_input(&image.detection_view)?;
        let detections = self.detector.detect(&input).await?;
        debug!(
            "탐지 결과 {}개: {}",
            detections.len(),
            recommendation.title
        );

        if detections.is_empty() {
            warn!("카드에서 객체를 찾지 못함: {}", recommendation.title);
            return Ok(None);
        }

        let selection =
            selection::select_objects(&detections, self.config.canvas_size, self.rng.as_mut())?;

        let (full_w, full_h) = image.full_view.dimensions();
        let bbox = mapping::canvas_to_image(
            &selection.bbox,
            full_w,
            full_h,
            self.config.canvas_size,
            self.config.clamp_mode,
        );
        debug!("{} {:?}", selection.caption, bbox);

        let styled = self.style.stylize(&image.full_view).await?;
        if styled.dimensions() != (full_w, full_h) {
            return Err(CoreError::StyleTransfer(format!(
                "출력 크기 불일치: {:?} != {:?}",
                styled.dimensions(),
                (full_w, full_h)
            )));
        }

        let styled_cropped = crop::crop_to_bbox(&styled, &bbox, self.config.crop_margin)?;
        let frame_tint = FrameTint::from_unit(self.rng.unit(), self.rng.unit());

        info!(
            "카드 조립 완료: \"{}\" ({}x{})",
            selection.caption,
            styled_cropped.width(),
            styled_cropped.height()
        );

        Ok(Some(CardDescriptor {
            recommendation: recommendation.clone(),
            caption: selection.caption,
            bbox,
            styled_cropped,
            frame_tint,
        }))
    }
}
