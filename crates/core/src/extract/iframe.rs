//! Generic iframe extraction.
//!
//! Accepts any iframe whose source uses the `https` scheme. It is the
//! least specific extractor and sits near the end of both dispatch orders.

use crate::Result;
use crate::parse::Document;
use crate::post::IframePost;
use crate::validate::{require_present, require_scheme};

use super::collect_frame;

/// Extracts the first iframe with a source, which must be an `https` URL.
pub fn extract(html: &[u8]) -> Result<IframePost> {
    let doc = Document::from_bytes(html)?;
    let frame = collect_frame(&doc);

    require_present(&frame.src, "iframe src")?;
    require_scheme(&frame.src, "https")?;

    Ok(IframePost {
        src: frame.src,
        allow_fullscreen: frame.allow_fullscreen,
        frameborder: frame.frameborder,
        width: frame.width,
        height: frame.height,
    })
}
