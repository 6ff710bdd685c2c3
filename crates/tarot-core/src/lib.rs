//! # tarot-core
//!
//! 타로 카드 렌더러의 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (추천 항목, 바운딩 박스, 카드)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 파이프라인 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::config::{ClampMode, TarotConfig};

    #[test]
    fn config_defaults() {
        let config = TarotConfig::default_config();
        assert_eq!(config.vision.canvas_size, 416);
        assert_eq!(config.vision.crop_margin, 10);
        assert_eq!(config.vision.clamp_mode, ClampMode::Corrected);
        assert!((config.style.style_ratio - 0.1).abs() < f32::EPSILON);
        assert_eq!(config.page.heading_text, "Recommended");
    }

    #[test]
    fn config_serde_roundtrip() {
        let config = TarotConfig::default_config();
        let json = serde_json::to_string(&config).unwrap();
        let restored: TarotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.vision.canvas_size, config.vision.canvas_size);
        assert_eq!(
            restored.network.thumbnail_url_template,
            config.network.thumbnail_url_template
        );
    }
}
