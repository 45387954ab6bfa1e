//! Playbuzz item extraction.

use crate::Result;
use crate::parse::Document;
use crate::post::PlaybuzzPost;
use crate::validate::{parse_int_into, require_present};
use crate::walk::Walk;

/// Extracts the item id from a `<div class="playbuzz" data-id="...">` embed.
///
/// Older snippets name the item with `data-id`, newer ones with
/// `data-item`; the first non-empty one is used.
pub fn extract(html: &[u8]) -> Result<PlaybuzzPost> {
    let doc = Document::from_bytes(html)?;
    let mut post = PlaybuzzPost::default();

    doc.walk("div", |el| {
        if !el.has_class("playbuzz") {
            return Walk::Continue;
        }
        let item = el.attr("data-id").filter(|v| !v.is_empty());
        if let Some(item) = item.or_else(|| el.attr("data-item").filter(|v| !v.is_empty())) {
            post.item = item.to_string();
        }
        if let Some(height) = el.attr("data-height") {
            parse_int_into(height, &mut post.height);
        }

        if post.item.is_empty() { Walk::Continue } else { Walk::Stop }
    });

    require_present(&post.item, "playbuzz data-id")?;

    Ok(post)
}
