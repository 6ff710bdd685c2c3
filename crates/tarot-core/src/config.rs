//! 파이프라인 설정 구조체.
//!
//! 탐지 캔버스 크기, 크롭 여백, 스타일 비율, 썸네일 URL 템플릿,
//! 호스트 페이지 셀렉터 등 런타임 설정을 정의한다.
//! `ConfigManager`를 통해 JSON 파일에서 로드.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// 최상위 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TarotConfig {
    /// 비전(탐지/크롭) 설정
    #[serde(default)]
    pub vision: VisionConfig,
    /// 스타일 필터 설정
    #[serde(default)]
    pub style: StyleConfig,
    /// 썸네일 다운로드 설정
    #[serde(default)]
    pub network: NetworkConfig,
    /// 호스트 페이지 설정
    #[serde(default)]
    pub page: PageConfig,
}

// ============================================================
// 비전 설정
// ============================================================

/// 캔버스 좌표 → 이미지 좌표 변환 시 `bottom` 클램프 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClampMode {
    /// `min(bottom / canvas, 1) × height` — 나머지 세 좌표와 단위가 일치
    #[default]
    Corrected,
    /// `min(bottom / canvas, canvas / height) × height` — 기존 동작과 비트 단위 호환
    Legacy,
}

/// 비전 설정 — 탐지 입력 크기와 크롭 여백
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionConfig {
    /// 탐지 모델 입력 캔버스 한 변의 크기 (픽셀)
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
    /// 크롭 시 bottom/right 방향으로 더하는 여백 (픽셀)
    #[serde(default = "default_crop_margin")]
    pub crop_margin: u32,
    /// `bottom` 좌표 클램프 방식
    #[serde(default)]
    pub clamp_mode: ClampMode,
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            canvas_size: default_canvas_size(),
            crop_margin: default_crop_margin(),
            clamp_mode: ClampMode::default(),
        }
    }
}

fn default_canvas_size() -> u32 {
    416
}

fn default_crop_margin() -> u32 {
    10
}

// ============================================================
// 스타일 설정
// ============================================================

/// 스타일 필터 설정 — 생성 시점에 필터 어댑터로 전달된다
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// 스타일 강도 (0.0 초과 ~ 1.0 이하)
    #[serde(default = "default_style_ratio")]
    pub style_ratio: f32,
    /// 스타일 참조 이미지 에셋 이름
    #[serde(default = "default_style_asset")]
    pub style_asset: String,
    /// 카드 장식 프레임 에셋 이름
    #[serde(default = "default_frame_asset")]
    pub frame_asset: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            style_ratio: default_style_ratio(),
            style_asset: default_style_asset(),
            frame_asset: default_frame_asset(),
        }
    }
}

fn default_style_ratio() -> f32 {
    0.1
}

fn default_style_asset() -> String {
    "tarot3_thesun.jpg".to_string()
}

fn default_frame_asset() -> String {
    "tarot_frame.png".to_string()
}

// ============================================================
// 네트워크 설정
// ============================================================

/// 썸네일 다운로드 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// 썸네일 URL 템플릿 (`{id}`가 영상 ID로 치환됨)
    #[serde(default = "default_thumbnail_url_template")]
    pub thumbnail_url_template: String,
    /// HTTP 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// User-Agent 헤더
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            thumbnail_url_template: default_thumbnail_url_template(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_thumbnail_url_template() -> String {
    "https://img.youtube.com/vi/{id}/0.jpg".to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    concat!("tarot-cards/", env!("CARGO_PKG_VERSION")).to_string()
}

// ============================================================
// 페이지 설정
// ============================================================

/// 호스트 페이지 설정 — 추천 섹션 탐색 및 카드 클래스 이름
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// 추천 섹션 제목 (h2 텍스트와 정확히 일치해야 함)
    #[serde(default = "default_heading_text")]
    pub heading_text: String,
    /// 섹션 컨테이너 클래스
    #[serde(default = "default_section_class")]
    pub section_class: String,
    /// 추천 항목 목록 셀렉터 (섹션 기준)
    #[serde(default = "default_items_selector")]
    pub items_selector: String,
    /// 추천 항목 내 제목 링크 셀렉터
    #[serde(default = "default_link_selector")]
    pub link_selector: String,
    /// 카드 컨테이너 클래스
    #[serde(default = "default_container_class")]
    pub container_class: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            heading_text: default_heading_text(),
            section_class: default_section_class(),
            items_selector: default_items_selector(),
            link_selector: default_link_selector(),
            container_class: default_container_class(),
        }
    }
}

fn default_heading_text() -> String {
    "Recommended".to_string()
}

fn default_section_class() -> String {
    "ytd-item-section-renderer".to_string()
}

fn default_items_selector() -> String {
    "#items".to_string()
}

fn default_link_selector() -> String {
    "a#video-title".to_string()
}

fn default_container_class() -> String {
    "tarot-container".to_string()
}

impl TarotConfig {
    /// 기본 설정
    pub fn default_config() -> Self {
        Self {
            vision: VisionConfig::default(),
            style: StyleConfig::default(),
            network: NetworkConfig::default(),
            page: PageConfig::default(),
        }
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.vision.canvas_size == 0 {
            return Err(CoreError::validation(
                "vision.canvas_size",
                "0보다 커야 합니다",
            ));
        }
        if !(self.style.style_ratio > 0.0 && self.style.style_ratio <= 1.0) {
            return Err(CoreError::validation(
                "style.style_ratio",
                format!("0.0 초과 1.0 이하여야 합니다: {}", self.style.style_ratio),
            ));
        }
        if !self.network.thumbnail_url_template.contains("{id}") {
            return Err(CoreError::validation(
                "network.thumbnail_url_template",
                "{id} 자리표시자가 필요합니다",
            ));
        }
        if self.page.heading_text.trim().is_empty() {
            return Err(CoreError::validation(
                "page.heading_text",
                "비어 있을 수 없습니다",
            ));
        }
        Ok(())
    }
}

impl Default for TarotConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
