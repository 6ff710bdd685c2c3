//! scraper 기반 호스트 페이지.
//!
//! 페이지 HTML 문자열에서 추천 섹션을 찾고, 추가된 카드를 마크업으로 모은다.
//! 호스트가 결과를 문자열로 렌더링하는 경우와 테스트에서 사용한다.

use scraper::{ElementRef, Html, Selector};
use tarot_core::config::PageConfig;
use tarot_core::error::CoreError;
use tarot_core::models::card::CardElement;
use tarot_core::models::recommendation::RecommendationLink;
use tarot_core::ports::page::HostPage;
use tracing::debug;
use url::Url;

use crate::markup::{escape, render_card_markup};

/// HTML 문서 위의 `HostPage` 구현.
///
/// `scraper::Html`은 `Send`가 아니므로 원본 문자열만 보관하고 조회 시마다 파싱한다.
#[derive(Debug, Clone)]
pub struct HtmlHostPage {
    source: String,
    base_url: Url,
    config: PageConfig,
    items_removed: bool,
    cards: Vec<CardElement>,
}

impl HtmlHostPage {
    /// 페이지 HTML과 링크 기준 URL로 생성 (선택자 검증 포함)
    pub fn new(source: impl Into<String>, base_url: &str, config: PageConfig) -> Result<Self, CoreError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CoreError::validation("base_url", format!("{base_url}: {e}")))?;
        selector(&config.items_selector)?;
        selector(&config.link_selector)?;

        Ok(Self {
            source: source.into(),
            base_url,
            config,
            items_removed: false,
            cards: Vec::new(),
        })
    }

    /// 원래 추천 항목이 제거되었는지
    pub fn items_removed(&self) -> bool {
        self.items_removed
    }

    /// 추가된 카드 (추가 순서)
    pub fn cards(&self) -> &[CardElement] {
        &self.cards
    }

    /// 카드 컨테이너 마크업
    pub fn container_markup(&self) -> String {
        let cards: String = self.cards.iter().map(render_card_markup).collect();
        format!(
            r#"<div class="{}">{}</div>"#,
            escape(&self.config.container_class),
            cards
        )
    }

    fn find_links(&self, document: &Html, heading_text: &str) -> Result<Option<Vec<RecommendationLink>>, CoreError> {
        let headings = selector("h2")?;
        let items_selector = selector(&self.config.items_selector)?;
        let link_selector = selector(&self.config.link_selector)?;

        let Some(heading) = document
            .select(&headings)
            .find(|h| h.text().collect::<String>().trim() == heading_text)
        else {
            debug!("추천 제목 없음: {heading_text}");
            return Ok(None);
        };

        let Some(section) = heading
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().classes().any(|c| c == self.config.section_class))
        else {
            debug!("추천 섹션 없음: .{}", self.config.section_class);
            return Ok(None);
        };

        let Some(items) = section.select(&items_selector).next() else {
            debug!("추천 항목 목록 없음: {}", self.config.items_selector);
            return Ok(None);
        };

        let children: Vec<ElementRef> = items.children().filter_map(ElementRef::wrap).collect();
        let anchors: Vec<Option<ElementRef>> = children
            .iter()
            .map(|item| item.select(&link_selector).next())
            .collect();
        if anchors.iter().all(Option::is_none) {
            debug!("추천 링크 없음: {}", self.config.link_selector);
            return Ok(None);
        }

        // 링크가 없거나 해석할 수 없는 항목도 빈 href로 남겨 호출자가 실패로 집계한다
        let links = anchors
            .into_iter()
            .map(|anchor| match anchor {
                Some(link) => RecommendationLink {
                    title: link.text().collect::<String>().trim().to_string(),
                    href: link
                        .value()
                        .attr("href")
                        .and_then(|href| self.base_url.join(href).ok())
                        .map(|url| url.to_string())
                        .unwrap_or_default(),
                },
                None => RecommendationLink {
                    title: String::new(),
                    href: String::new(),
                },
            })
            .collect();

        Ok(Some(links))
    }
}

impl HostPage for HtmlHostPage {
    fn recommendation_links(&self, heading_text: &str) -> Option<Vec<RecommendationLink>> {
        let document = Html::parse_document(&self.source);
        // 선택자는 생성 시 검증됨
        self.find_links(&document, heading_text).ok().flatten()
    }

    fn remove_items(&mut self) {
        self.items_removed = true;
    }

    fn append_card(&mut self, card: CardElement) -> Result<(), CoreError> {
        self.cards.push(card);
        Ok(())
    }
}

fn selector(css: &str) -> Result<Selector, CoreError> {
    Selector::parse(css).map_err(|e| CoreError::Config(format!("잘못된 선택자 '{css}': {e}")))
}
