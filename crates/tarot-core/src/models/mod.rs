//! 도메인 모델.
//!
//! 추천 항목, 탐지 결과, 좌표 공간이 태깅된 바운딩 박스, 카드 산출물을 정의한다.

pub mod bbox;
pub mod card;
pub mod detection;
pub mod recommendation;
pub mod style;
