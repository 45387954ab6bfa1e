//! VKontakte widget post extraction.
//!
//! VK embeds are a script call rather than markup:
//!
//! ```text
//! VK.Widgets.Post("vk_post_-175249128_1156", -175249128, 1156, 'HmCFKRSM81NEzJ8mY9gzgXOlEFM', {width: 500});
//! ```
//!
//! The owner and post ids appear twice, once inside the container id and
//! once as arguments. Both copies must agree.

use std::sync::LazyLock;

use regex::Regex;

use crate::parse::decode;
use crate::post::VkPost;
use crate::validate::parse_int_into;
use crate::{EmbedError, Result};

const WIDGET_MARKER: &str = "VK.Widgets.Post";

static WIDGET_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"VK\.Widgets\.Post\("vk_post_(-?\d+)_(-?\d+)", (-?\d+), (-?\d+), '(\S+?)'"#)
        .expect("widget call pattern is valid")
});

static WIDGET_OPTIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"VK\.Widgets\.Post\(.+?\{width: (\d+)(?:, height: (\d+))?\}\)").expect("widget options pattern is valid")
});

/// Extracts a widget post from script markup.
///
/// # Errors
///
/// - [`EmbedError::MissingField`] if there is no `VK.Widgets.Post` call, or an id is zero
/// - [`EmbedError::MalformedReference`] if the call does not match the expected signature
/// - [`EmbedError::ConsistencyViolation`] if the container id and arguments disagree
pub fn extract(html: &[u8]) -> Result<VkPost> {
    let text = decode(html)?;

    if !text.contains(WIDGET_MARKER) {
        return Err(EmbedError::MissingField("VK.Widgets.Post call"));
    }

    let call = WIDGET_CALL
        .captures(text)
        .ok_or_else(|| EmbedError::MalformedReference("cannot parse VK widget call".to_string()))?;

    if call[1] != call[3] {
        return Err(EmbedError::ConsistencyViolation(format!(
            "owner id {} in container does not match argument {}",
            &call[1], &call[3]
        )));
    }
    if call[2] != call[4] {
        return Err(EmbedError::ConsistencyViolation(format!(
            "post id {} in container does not match argument {}",
            &call[2], &call[4]
        )));
    }

    let owner_id = parse_id(&call[1], "owner id")?;
    let post_id = parse_id(&call[2], "post id")?;

    if owner_id == 0 {
        return Err(EmbedError::MissingField("owner id"));
    }
    if post_id == 0 {
        return Err(EmbedError::MissingField("post id"));
    }

    let mut post = VkPost { owner_id, post_id, hash: call[5].to_string(), ..Default::default() };

    if let Some(options) = WIDGET_OPTIONS.captures(text) {
        if let Some(width) = options.get(1) {
            parse_int_into(width.as_str(), &mut post.width);
        }
        if let Some(height) = options.get(2) {
            parse_int_into(height.as_str(), &mut post.height);
        }
    }

    Ok(post)
}

fn parse_id(value: &str, what: &str) -> Result<i64> {
    value
        .parse()
        .map_err(|e| EmbedError::MalformedReference(format!("cannot parse {} {}: {}", what, value, e)))
}
