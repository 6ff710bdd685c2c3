//! 카드 요소 생성 및 HTML 마크업.
//!
//! 카드 구조:
//!
//! ```text
//! a.tarot-card[href]
//! ├── img.tarot-bg          (프레임, saturate/hue-rotate 필터)
//! ├── h3.tarot-card__label  (캡션)
//! └── div.tarot-image       (크롭된 이미지, PNG data URL)
//! ```

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use image::ImageFormat;
use tarot_core::error::CoreError;
use tarot_core::models::card::{CardDescriptor, CardElement};

/// 카드 앵커 클래스
pub const CARD_CLASS: &str = "tarot-card";
/// 프레임 이미지 클래스
pub const FRAME_CLASS: &str = "tarot-bg";
/// 캡션 클래스
pub const LABEL_CLASS: &str = "tarot-card__label";
/// 크롭 이미지 래퍼 클래스
pub const IMAGE_CLASS: &str = "tarot-image";

/// 조립 결과 → 페이지에 붙일 카드 요소 (크롭 이미지를 PNG로 인코딩)
pub fn card_element(card: &CardDescriptor, frame_src: &str) -> Result<CardElement, CoreError> {
    let mut buffer = Cursor::new(Vec::new());
    card.styled_cropped
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("카드 PNG 인코딩 실패: {e}")))?;

    Ok(CardElement {
        href: card.recommendation.url.clone(),
        caption: card.caption.clone(),
        frame_src: frame_src.to_string(),
        frame_filter: card.frame_tint.css_filter(),
        image_png: buffer.into_inner(),
        image_width: card.styled_cropped.width(),
        image_height: card.styled_cropped.height(),
    })
}

/// 카드 이미지의 `data:` URL
pub fn image_data_url(card: &CardElement) -> String {
    format!("data:image/png;base64,{}", B64.encode(&card.image_png))
}

/// 카드 요소 → HTML 조각
pub fn render_card_markup(card: &CardElement) -> String {
    format!(
        concat!(
            r#"<a class="{card}" href="{href}">"#,
            r#"<img class="{frame}" src="{frame_src}" style="filter: {filter}">"#,
            r#"<h3 class="{label}">{caption}</h3>"#,
            r#"<div class="{image}">"#,
            r#"<img src="{data}" width="{w}" height="{h}" alt="{caption}">"#,
            r#"</div></a>"#,
        ),
        card = CARD_CLASS,
        href = escape(&card.href),
        frame = FRAME_CLASS,
        frame_src = escape(&card.frame_src),
        filter = escape(&card.frame_filter),
        label = LABEL_CLASS,
        caption = escape(&card.caption),
        image = IMAGE_CLASS,
        data = image_data_url(card),
        w = card.image_width,
        h = card.image_height,
    )
}

/// 텍스트/속성 값 HTML 이스케이프
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use scraper::{Html, Selector};
    use tarot_core::models::bbox::BBox;
    use tarot_core::models::card::FrameTint;
    use tarot_core::models::recommendation::Recommendation;

    fn descriptor(caption: &str) -> CardDescriptor {
        CardDescriptor {
            recommendation: Recommendation {
                title: "t".to_string(),
                url: "https://www.youtube.com/watch?v=abc&t=1".to_string(),
                thumbnail_url: "https://img.youtube.com/vi/abc/0.jpg".to_string(),
            },
            caption: caption.to_string(),
            bbox: BBox::new(0.0, 0.0, 4.0, 6.0),
            styled_cropped: RgbaImage::from_pixel(6, 4, Rgba([200, 10, 10, 255])),
            frame_tint: FrameTint::from_unit(0.5, 0.5),
        }
    }

    #[test]
    fn card_element_encodes_png() {
        let element = card_element(&descriptor("the cat"), "tarot_frame.png").unwrap();
        assert_eq!(element.href, "https://www.youtube.com/watch?v=abc&t=1");
        assert_eq!(element.caption, "the cat");
        assert_eq!((element.image_width, element.image_height), (6, 4));
        assert_eq!(element.frame_filter, "saturate(110.0%) hue-rotate(0.00deg)");

        let decoded = image::load_from_memory(&element.image_png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (6, 4));
        assert_eq!(decoded.get_pixel(0, 0), &Rgba([200, 10, 10, 255]));
    }

    #[test]
    fn markup_has_card_structure() {
        let element = card_element(&descriptor("two of cats"), "tarot_frame.png").unwrap();
        let html = Html::parse_fragment(&render_card_markup(&element));

        let anchor = html.select(&Selector::parse("a.tarot-card").unwrap()).next().unwrap();
        assert_eq!(
            anchor.value().attr("href"),
            Some("https://www.youtube.com/watch?v=abc&t=1")
        );

        let frame = html.select(&Selector::parse("img.tarot-bg").unwrap()).next().unwrap();
        assert_eq!(frame.value().attr("src"), Some("tarot_frame.png"));
        assert_eq!(
            frame.value().attr("style"),
            Some("filter: saturate(110.0%) hue-rotate(0.00deg)")
        );

        let label = html
            .select(&Selector::parse("h3.tarot-card__label").unwrap())
            .next()
            .unwrap();
        assert_eq!(label.text().collect::<String>(), "two of cats");

        let image = html
            .select(&Selector::parse("div.tarot-image img").unwrap())
            .next()
            .unwrap();
        assert!(image
            .value()
            .attr("src")
            .unwrap()
            .starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn markup_escapes_caption() {
        let element = card_element(&descriptor("<script>&"), "frame.png").unwrap();
        let markup = render_card_markup(&element);
        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;&amp;"));
    }

    #[test]
    fn escape_quotes() {
        assert_eq!(escape(r#"a"b'c"#), "a&quot;b&#39;c");
        assert_eq!(escape("plain"), "plain");
    }
}
