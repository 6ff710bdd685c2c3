//! # tarot-page
//!
//! 호스트 페이지 연동 크레이트.
//! 추천 섹션을 찾아 항목을 파싱하고, 원래 항목을 제거한 뒤
//! 추천 항목마다 카드를 순차적으로 조립해 컨테이너에 추가한다.
//!
//! ## 구조
//!
//! - [`recommendation`] — 추천 링크 → `Recommendation` 변환
//! - [`html_page`] — scraper 기반 `HostPage` 구현
//! - [`markup`] — 카드 요소 생성 및 HTML 마크업
//! - [`integrator`] — 순차 렌더링 오케스트레이터
//! - [`logging`] — tracing 구독자 초기화

pub mod html_page;
pub mod integrator;
pub mod logging;
pub mod markup;
pub mod recommendation;

pub use html_page::HtmlHostPage;
pub use integrator::{PageIntegrator, RunSummary};
