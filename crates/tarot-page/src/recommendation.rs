//! 추천 링크 파싱.

use tarot_core::error::CoreError;
use tarot_core::models::recommendation::{Recommendation, RecommendationLink};
use tarot_network::thumbnail::thumbnail_url_for_id;
use url::Url;

/// 영상 ID가 담긴 쿼리 파라미터
const VIDEO_ID_PARAM: &str = "v";

/// 링크의 `v` 쿼리 파라미터에서 영상 ID 추출
pub fn video_id(href: &str) -> Result<String, CoreError> {
    let url = Url::parse(href).map_err(|e| CoreError::validation("href", format!("{href}: {e}")))?;
    url.query_pairs()
        .find(|(key, _)| key == VIDEO_ID_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| CoreError::validation("href", format!("영상 ID 없음: {href}")))
}

/// 추천 링크 → `Recommendation` (썸네일 URL은 템플릿에서 생성)
pub fn parse_recommendation(
    link: &RecommendationLink,
    thumbnail_template: &str,
) -> Result<Recommendation, CoreError> {
    let id = video_id(&link.href)?;
    Ok(Recommendation {
        title: link.title.clone(),
        url: link.href.clone(),
        thumbnail_url: thumbnail_url_for_id(thumbnail_template, &id),
    })
}
