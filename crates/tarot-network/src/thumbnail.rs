//! 썸네일 URL 규칙.

/// 템플릿의 `{id}`를 영상 ID로 치환
pub fn thumbnail_url_for_id(template: &str, video_id: &str) -> String {
    template.replace("{id}", video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template() {
        assert_eq!(
            thumbnail_url_for_id("https://img.youtube.com/vi/{id}/0.jpg", "dQw4w9WgXcQ"),
            "https://img.youtube.com/vi/dQw4w9WgXcQ/0.jpg"
        );
    }

    #[test]
    fn template_without_placeholder_is_unchanged() {
        assert_eq!(
            thumbnail_url_for_id("https://example.com/a.jpg", "x"),
            "https://example.com/a.jpg"
        );
    }
}
