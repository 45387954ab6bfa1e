//! Structured post records.
//!
//! Each extractor produces one record type. Records are created fresh per
//! extraction, filled field by field while the markup is walked, and handed
//! to a renderer. Dimensions and frame borders are `0` when the source did
//! not supply a parseable value; renderers never emit a zero dimension.

use serde::Serialize;

use crate::platform::Platform;

/// VKontakte widget post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VkPost {
    pub owner_id: i64,
    pub post_id: i64,
    pub hash: String,
    pub width: i64,
    pub height: i64,
}

/// Facebook post or video plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacebookPost {
    pub is_video: bool,
    pub width: i64,
    pub height: i64,
    /// Decoded `href` query parameter of the plugin URL.
    pub href: String,
    pub src: String,
}

/// Instagram post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstagramPost {
    pub is_captioned: bool,
    /// Code from the `/p/<code>/` permalink segment.
    pub shortcode: String,
    pub width: i64,
    pub height: i64,
    pub src: String,
}

/// Twitter status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TwitterPost {
    /// Numeric status id, kept as its decimal digits.
    pub status_id: String,
    pub width: i64,
    pub height: i64,
    pub src: String,
}

/// YouTube video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct YoutubePost {
    pub allow_fullscreen: bool,
    pub frameborder: i64,
    pub width: i64,
    pub height: i64,
    /// 11-character video id.
    pub video_id: String,
    pub src: String,
}

/// Generic https iframe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IframePost {
    pub src: String,
    pub allow_fullscreen: bool,
    pub frameborder: i64,
    pub width: i64,
    pub height: i64,
}

/// Playbuzz item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybuzzPost {
    pub item: String,
    pub height: i64,
}

/// Any extracted record, tagged by platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum Post {
    Vkontakte(VkPost),
    Facebook(FacebookPost),
    Instagram(InstagramPost),
    Twitter(TwitterPost),
    Youtube(YoutubePost),
    Iframe(IframePost),
    Playbuzz(PlaybuzzPost),
}

impl Post {
    /// The platform this record was extracted for.
    pub fn platform(&self) -> Platform {
        match self {
            Self::Vkontakte(_) => Platform::Vkontakte,
            Self::Facebook(_) => Platform::Facebook,
            Self::Instagram(_) => Platform::Instagram,
            Self::Twitter(_) => Platform::Twitter,
            Self::Youtube(_) => Platform::Youtube,
            Self::Iframe(_) => Platform::Iframe,
            Self::Playbuzz(_) => Platform::Playbuzz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_of_record() {
        let post = Post::Youtube(YoutubePost { video_id: "TVakXOkE2G4".to_string(), ..Default::default() });
        assert_eq!(post.platform(), Platform::Youtube);
    }

    #[test]
    fn test_serialize_tagged() {
        let post = Post::Twitter(TwitterPost { status_id: "1".to_string(), ..Default::default() });
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["platform"], "twitter");
        assert_eq!(json["status_id"], "1");
    }
}
