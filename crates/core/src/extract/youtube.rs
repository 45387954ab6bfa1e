//! YouTube iframe extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::Document;
use crate::post::YoutubePost;
use crate::validate::{parse_reference, require_host, require_present};
use crate::{EmbedError, Result};

use super::collect_frame;

static VIDEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"embed/([A-Za-z0-9_-]{11})(?:/|$)").expect("video id pattern is valid"));

/// Extracts a YouTube video from embed iframe markup.
///
/// The video id is the 11-character segment following `embed/` in the
/// iframe path.
pub fn extract(html: &[u8]) -> Result<YoutubePost> {
    let doc = Document::from_bytes(html)?;
    let frame = collect_frame(&doc);

    require_present(&frame.src, "iframe src")?;

    let url = parse_reference(&frame.src)?;
    require_host(&url, "youtube.com")?;

    let id = VIDEO_ID
        .captures(url.path())
        .ok_or_else(|| EmbedError::MalformedReference(format!("no video id in {}", frame.src)))?;

    Ok(YoutubePost {
        allow_fullscreen: frame.allow_fullscreen,
        frameborder: frame.frameborder,
        width: frame.width,
        height: frame.height,
        video_id: id[1].to_string(),
        src: frame.src,
    })
}
