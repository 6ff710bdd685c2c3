//! 포트 인터페이스 (trait).
//!
//! Hexagonal Architecture의 포트 레이어.
//! 탐지 모델, 스타일 필터, 썸네일 다운로드, 호스트 페이지는 외부 협력자이며
//! 각 어댑터가 이 trait들을 구현한다.
//!
//! 비동기 trait은 `async_trait` 매크로를 사용하여
//! `Arc<dyn T>` / `Box<dyn T>`로 보관할 수 있게 한다.

pub mod assets;
pub mod detector;
pub mod fetcher;
pub mod page;
pub mod random;
pub mod style;
