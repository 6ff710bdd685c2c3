//! 페이지 연동 오케스트레이터.
//!
//! 추천 섹션 탐색 → 항목 파싱 → 원래 항목 제거 → 카드를 하나씩 순차 렌더링.
//! 카드 하나의 실패는 로그만 남기고 다음 카드로 넘어간다.

use serde::Serialize;
use tarot_core::config::TarotConfig;
use tarot_core::models::recommendation::Recommendation;
use tarot_core::ports::assets::AssetSource;
use tarot_core::ports::page::HostPage;
use tarot_vision::CardComposer;
use tracing::{debug, info, warn};

use crate::markup;
use crate::recommendation::parse_recommendation;

/// 실행 결과 집계
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// 추천 섹션을 찾았는지 (못 찾으면 아무것도 하지 않음)
    pub section_found: bool,
    /// 페이지에 추가된 카드 수
    pub rendered: usize,
    /// 탐지 결과가 없어 건너뛴 항목 수
    pub skipped: usize,
    /// 파싱/다운로드/모델 실패로 건너뛴 항목 수
    pub failed: usize,
}

impl RunSummary {
    /// 섹션을 찾지 못해 중단된 실행
    pub fn aborted() -> Self {
        Self::default()
    }
}

/// 호스트 페이지에 카드를 렌더링하는 연동기
pub struct PageIntegrator<P: HostPage> {
    page: P,
    heading_text: String,
    thumbnail_template: String,
    frame_src: String,
}

impl<P: HostPage> PageIntegrator<P> {
    /// 새 연동기 생성
    pub fn new(
        page: P,
        heading_text: impl Into<String>,
        thumbnail_template: impl Into<String>,
        frame_src: impl Into<String>,
    ) -> Self {
        Self {
            page,
            heading_text: heading_text.into(),
            thumbnail_template: thumbnail_template.into(),
            frame_src: frame_src.into(),
        }
    }

    /// 전체 설정과 에셋 소스로 생성 (프레임 URL은 에셋 소스가 결정)
    pub fn from_config(page: P, config: &TarotConfig, assets: &dyn AssetSource) -> Self {
        Self::new(
            page,
            config.page.heading_text.clone(),
            config.network.thumbnail_url_template.clone(),
            assets.url_for(&config.style.frame_asset),
        )
    }

    /// 호스트 페이지
    pub fn page(&self) -> &P {
        &self.page
    }

    /// 카드 프레임 이미지 주소
    pub fn frame_src(&self) -> &str {
        &self.frame_src
    }

    /// 호스트 페이지 반환
    pub fn into_page(self) -> P {
        self.page
    }

    /// 추천 섹션의 모든 항목을 카드로 교체.
    ///
    /// 카드는 엄격히 순차 처리된다 — 한 카드가 끝나야 다음 카드의 로드가 시작된다.
    pub async fn run(&mut self, composer: &mut CardComposer) -> RunSummary {
        self.page.expand_items();

        let links = match self.page.recommendation_links(&self.heading_text) {
            Some(links) if !links.is_empty() => links,
            _ => {
                info!("추천 섹션 없음 — 카드 렌더링 중단");
                return RunSummary::aborted();
            }
        };

        let mut summary = RunSummary {
            section_found: true,
            ..RunSummary::default()
        };

        let recommendations: Vec<Recommendation> = links
            .iter()
            .filter_map(|link| match parse_recommendation(link, &self.thumbnail_template) {
                Ok(rec) => Some(rec),
                Err(e) => {
                    warn!("추천 항목 파싱 실패 ({}): {e}", link.href);
                    summary.failed += 1;
                    None
                }
            })
            .collect();

        self.page.remove_items();
        info!("추천 {}개 카드 렌더링 시작", recommendations.len());

        for rec in &recommendations {
            match self.render_one(composer, rec).await {
                Ok(true) => summary.rendered += 1,
                Ok(false) => summary.skipped += 1,
                Err(e) => {
                    warn!("카드 렌더링 실패 ({}): {e}", rec.title);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "카드 렌더링 완료: {} 렌더링, {} 건너뜀, {} 실패",
            summary.rendered, summary.skipped, summary.failed
        );
        summary
    }

    async fn render_one(
        &mut self,
        composer: &mut CardComposer,
        rec: &Recommendation,
    ) -> Result<bool, tarot_core::error::CoreError> {
        let Some(card) = composer.compose(rec).await? else {
            return Ok(false);
        };
        let element = markup::card_element(&card, &self.frame_src)?;
        self.page.append_card(element)?;
        debug!("카드 추가: {} ({})", card.caption, rec.url);
        Ok(true)
    }
}
