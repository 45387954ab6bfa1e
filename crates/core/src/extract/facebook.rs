//! Facebook plugin iframe extraction.

use crate::parse::Document;
use crate::post::FacebookPost;
use crate::validate::{parse_reference, require_host, require_present};
use crate::{EmbedError, Result};

use super::collect_frame;

/// Extracts a Facebook post or video plugin from iframe markup.
///
/// The embedded content is named by the plugin URL's `href` query
/// parameter, which is returned decoded.
pub fn extract(html: &[u8]) -> Result<FacebookPost> {
    let doc = Document::from_bytes(html)?;
    let frame = collect_frame(&doc);

    require_present(&frame.src, "iframe src")?;

    let url = parse_reference(&frame.src)?;
    require_host(&url, "facebook.com")?;

    let href = url
        .query_pairs()
        .find(|(key, _)| key == "href")
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default();

    if href.is_empty() {
        return Err(EmbedError::MissingField("plugin href"));
    }

    Ok(FacebookPost {
        is_video: url.path().contains("video.php"),
        width: frame.width,
        height: frame.height,
        href,
        src: frame.src,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const VIDEO: &str = r#"<iframe src="https://www.facebook.com/plugins/video.php?href=https%3A%2F%2Fwww.facebook.com%2Ffacebook%2Fvideos%2F10153231379946729%2F&width=560&show_text=false" width="560" height="373" style="border:none;overflow:hidden" scrolling="no" frameborder="0" allowTransparency="true" allowFullScreen="true"></iframe>"#;

    #[test]
    fn test_extract_video() {
        let post = extract(VIDEO.as_bytes()).unwrap();

        assert!(post.is_video);
        assert_eq!(post.width, 560);
        assert_eq!(post.height, 373);
        assert_eq!(post.href, "https://www.facebook.com/facebook/videos/10153231379946729/");
    }

    #[test]
    fn test_extract_post() {
        let html = r#"<iframe src="https://www.facebook.com/plugins/post.php?href=https%3A%2F%2Fwww.facebook.com%2F20531316728%2Fposts%2F10154009990506729%2F"></iframe>"#;
        let post = extract(html.as_bytes()).unwrap();

        assert!(!post.is_video);
        assert_eq!((post.width, post.height), (0, 0));
        assert_eq!(post.href, "https://www.facebook.com/20531316728/posts/10154009990506729/");
    }

    #[test]
    fn test_other_host() {
        let err = extract(br#"<iframe src="https://www.youtube.com/embed/TVakXOkE2G4"></iframe>"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOrigin);
    }

    #[test]
    fn test_missing_href() {
        let err = extract(br#"<iframe src="https://www.facebook.com/plugins/post.php?width=500"></iframe>"#).unwrap_err();
        assert_eq!(err, EmbedError::MissingField("plugin href"));
    }

    #[test]
    fn test_empty_src() {
        let err = extract(br#"<iframe src=""></iframe>"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }
}
