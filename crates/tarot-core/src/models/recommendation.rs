//! 추천 항목 모델.

use serde::{Deserialize, Serialize};

/// 호스트 페이지의 추천 항목 하나.
///
/// 추천 DOM 노드 하나를 파싱해 생성되며 렌더링 1회에 한 번 소비된다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 영상 제목
    pub title: String,
    /// 원본 추천 링크 (카드가 이 주소로 연결됨)
    pub url: String,
    /// 썸네일 이미지 URL
    pub thumbnail_url: String,
}

/// 호스트 페이지에서 읽은 추천 링크 (파싱 전 원시 값)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLink {
    /// 링크 텍스트
    pub title: String,
    /// 링크 href
    pub href: String,
}
