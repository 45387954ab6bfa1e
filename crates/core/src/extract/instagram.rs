//! Instagram blockquote extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::{Document, decode};
use crate::post::InstagramPost;
use crate::validate::{parse_int_into, parse_reference, require_host, require_present};
use crate::walk::Walk;
use crate::{EmbedError, Result};

const CAPTION_MARKER: &str = " data-instgrm-captioned";

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p/([^/\s]+)/").expect("shortcode pattern is valid"));

/// Extracts an Instagram post from its `blockquote.instagram-media` embed.
///
/// The shortcode is taken from the `/p/<code>/` segment of the
/// `data-instgrm-permalink` attribute.
pub fn extract(html: &[u8]) -> Result<InstagramPost> {
    let text = decode(html)?;
    let doc = Document::parse(text);
    let mut post = InstagramPost::default();

    doc.walk("blockquote", |el| {
        for (name, value) in el.attrs() {
            match name {
                "data-instgrm-permalink" => post.src = value.to_string(),
                "width" => parse_int_into(value, &mut post.width),
                "height" => parse_int_into(value, &mut post.height),
                _ => {}
            }
        }

        if post.src.is_empty() { Walk::Continue } else { Walk::Stop }
    });

    require_present(&post.src, "data-instgrm-permalink")?;

    let url = parse_reference(&post.src)?;
    require_host(&url, "instagram.com")?;

    post.is_captioned = text.contains(CAPTION_MARKER);

    let code = SHORTCODE
        .captures(url.path())
        .ok_or_else(|| EmbedError::MalformedReference(format!("no shortcode in {}", post.src)))?;
    post.shortcode = code[1].to_string();

    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const CAPTIONED: &str = r#"<blockquote class="instagram-media" data-instgrm-captioned data-instgrm-permalink="https://www.instagram.com/p/B2cYeJJhPnB/?utm_source=ig_embed&amp;utm_campaign=loading" data-instgrm-version="12" style="background:#FFF;"><div><a href="https://www.instagram.com/p/B2cYeJJhPnB/">View this post</a></div></blockquote> <script async src="//www.instagram.com/embed.js"></script>"#;

    #[test]
    fn test_extract_captioned() {
        let post = extract(CAPTIONED.as_bytes()).unwrap();

        assert!(post.is_captioned);
        assert_eq!(post.shortcode, "B2cYeJJhPnB");
        assert_eq!((post.width, post.height), (0, 0));
    }

    #[test]
    fn test_extract_dimensions() {
        let html = r#"<blockquote class="instagram-media" width="500" data-instgrm-permalink="https://www.instagram.com/p/B2cYeJJhPnB/"></blockquote>"#;
        let post = extract(html.as_bytes()).unwrap();

        assert!(!post.is_captioned);
        assert_eq!((post.width, post.height), (500, 0));
    }

    #[test]
    fn test_first_permalink_wins() {
        let html = r#"<blockquote data-instgrm-permalink="https://www.instagram.com/p/FIRST/"></blockquote>
            <blockquote data-instgrm-permalink="https://www.instagram.com/p/SECOND/"></blockquote>"#;
        let post = extract(html.as_bytes()).unwrap();

        assert_eq!(post.shortcode, "FIRST");
    }

    #[test]
    fn test_protocol_relative_permalink() {
        let html = r#"<blockquote data-instgrm-permalink="//www.instagram.com/p/B2cYeJJhPnB/"></blockquote>"#;
        assert_eq!(extract(html.as_bytes()).unwrap().shortcode, "B2cYeJJhPnB");
    }

    #[test]
    fn test_not_instagram() {
        let html = r#"<blockquote data-instgrm-permalink="https://example.com/p/B2cYeJJhPnB/"></blockquote>"#;
        assert_eq!(extract(html.as_bytes()).unwrap_err().kind(), ErrorKind::UnsupportedOrigin);
    }

    #[test]
    fn test_profile_link() {
        let html = r#"<blockquote data-instgrm-permalink="https://www.instagram.com/instagram/"></blockquote>"#;
        assert_eq!(extract(html.as_bytes()).unwrap_err().kind(), ErrorKind::MalformedReference);
    }

    #[test]
    fn test_plain_blockquote() {
        let err = extract(b"<blockquote>quoted</blockquote>").unwrap_err();
        assert_eq!(err, EmbedError::MissingField("data-instgrm-permalink"));
    }
}
