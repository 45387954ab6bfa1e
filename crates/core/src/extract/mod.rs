//! Per-platform field extractors.
//!
//! Each submodule exposes `extract(html: &[u8])`, which returns the
//! platform's record or the specific reason the input was rejected. Call
//! these directly when the reason matters; the dispatcher only reports
//! whether any of them succeeded.

pub mod facebook;
pub mod iframe;
pub mod instagram;
pub mod playbuzz;
pub mod twitter;
pub mod vk;
pub mod youtube;

use crate::Result;
use crate::parse::Document;
use crate::platform::Platform;
use crate::post::Post;
use crate::validate::parse_int_into;
use crate::walk::Walk;

/// Runs the extractor for `platform` and wraps its record in [`Post`].
pub fn extract(platform: Platform, html: &[u8]) -> Result<Post> {
    match platform {
        Platform::Vkontakte => vk::extract(html).map(Post::Vkontakte),
        Platform::Facebook => facebook::extract(html).map(Post::Facebook),
        Platform::Instagram => instagram::extract(html).map(Post::Instagram),
        Platform::Twitter => twitter::extract(html).map(Post::Twitter),
        Platform::Youtube => youtube::extract(html).map(Post::Youtube),
        Platform::Iframe => iframe::extract(html).map(Post::Iframe),
        Platform::Playbuzz => playbuzz::extract(html).map(Post::Playbuzz),
    }
}

/// Attributes collected from the first `<iframe>` carrying a source.
#[derive(Debug, Default)]
pub(crate) struct Frame {
    pub src: String,
    pub width: i64,
    pub height: i64,
    pub allow_fullscreen: bool,
    pub frameborder: i64,
}

/// Walks iframes in document order, accumulating their attributes until
/// one with a non-empty `src` has been seen.
pub(crate) fn collect_frame(doc: &Document) -> Frame {
    let mut frame = Frame::default();

    doc.walk("iframe", |el| {
        for (name, value) in el.attrs() {
            match name {
                "src" => frame.src = value.to_string(),
                "width" => parse_int_into(value, &mut frame.width),
                "height" => parse_int_into(value, &mut frame.height),
                "frameborder" => parse_int_into(value, &mut frame.frameborder),
                "allowfullscreen" => frame.allow_fullscreen = true,
                _ => {}
            }
        }

        if frame.src.is_empty() { Walk::Continue } else { Walk::Stop }
    });

    frame
}
