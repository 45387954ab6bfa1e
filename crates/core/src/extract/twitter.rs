//! Twitter status extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::parse::Document;
use crate::post::TwitterPost;
use crate::validate::require_present;
use crate::walk::Walk;

static STATUS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://twitter\.com/[A-Za-z0-9_]{1,15}/status/(\d+)").expect("status url pattern is valid")
});

/// Extracts the status id from the first anchor linking to a tweet.
///
/// Embedded tweets carry several links (profile, hashtags, the status
/// itself); only an href starting with
/// `https://twitter.com/<handle>/status/<id>` qualifies.
pub fn extract(html: &[u8]) -> Result<TwitterPost> {
    let doc = Document::from_bytes(html)?;
    let mut post = TwitterPost::default();

    doc.walk("a", |el| {
        let Some(href) = el.attr("href") else {
            return Walk::Continue;
        };
        match STATUS_URL.captures(href) {
            Some(status) => {
                post.status_id = status[1].to_string();
                post.src = href.to_string();
                Walk::Stop
            }
            None => Walk::Continue,
        }
    });

    require_present(&post.src, "twitter status link")?;

    Ok(post)
}
