//! 호스트 페이지 포트.
//!
//! 페이지 구조 읽기와 카드 삽입을 추상화한다.
//! DOM 접근은 대기 지점이 아니므로 동기 trait이다.

use crate::error::CoreError;
use crate::models::card::CardElement;
use crate::models::recommendation::RecommendationLink;

/// 추천 섹션이 있는 호스트 페이지
pub trait HostPage: Send {
    /// 접힌 추천 목록 펼치기 ("더 보기" 버튼 등). 기본 구현은 아무것도 하지 않는다.
    fn expand_items(&mut self) {}

    /// `heading_text` 제목을 가진 섹션의 추천 링크 목록.
    ///
    /// 섹션이나 항목 목록이 없으면 `None` — 기능 전체를 조용히 중단한다.
    fn recommendation_links(&self, heading_text: &str) -> Option<Vec<RecommendationLink>>;

    /// 원래 추천 항목 제거
    fn remove_items(&mut self);

    /// 카드 컨테이너 끝에 카드 추가
    fn append_card(&mut self, card: CardElement) -> Result<(), CoreError>;
}
