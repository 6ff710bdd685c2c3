//! # tarot-vision
//!
//! 카드 이미지 처리 크레이트.
//! 썸네일 디코딩과 탐지 뷰 생성, 탐지 결과에서 캡션/영역 선택,
//! 캔버스 → 원본 좌표 변환, 스타일 참조 준비, 스타일 적용 후 크롭까지
//! 카드 한 장의 파이프라인을 담당한다.

pub mod composer;
pub mod crop;
pub mod loader;
pub mod mapping;
pub mod random;
pub mod selection;
pub mod style;

pub use composer::CardComposer;
pub use loader::ImageLoader;
pub use selection::{cardinal_word, select_objects, Selection};
pub use style::load_style_reference;
