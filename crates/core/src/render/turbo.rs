//! Turbo rendering.
//!
//! Turbo pages accept a small set of plain HTML constructs, so every
//! platform is normalized into either a bare `<iframe>` or the platform's
//! canonical blockquote.

use url::form_urlencoded;

use crate::config::DimensionPolicy;
use crate::platform::{Dialect, Platform};
use crate::post::{FacebookPost, IframePost, InstagramPost, Post, TwitterPost, VkPost, YoutubePost};
use crate::{EmbedError, Result};

use super::amp::{FACEBOOK_DEFAULT, VK_DEFAULT};
use super::tag::Tag;

/// Renders any post as Turbo markup.
///
/// # Errors
///
/// Returns [`EmbedError::UnsupportedDialect`] for platforms Turbo cannot
/// display (Playbuzz).
pub fn render(post: &Post, dims: DimensionPolicy) -> Result<String> {
    match post {
        Post::Vkontakte(p) => Ok(vk(p, dims)),
        Post::Facebook(p) => Ok(facebook(p, dims)),
        Post::Instagram(p) => Ok(instagram(p)),
        Post::Twitter(p) => Ok(twitter(p)),
        Post::Youtube(p) => Ok(youtube(p, dims)),
        Post::Iframe(p) => Ok(iframe(p, dims)),
        Post::Playbuzz(_) => Err(EmbedError::UnsupportedDialect {
            platform: Platform::Playbuzz.to_string(),
            dialect: Dialect::Turbo.to_string(),
        }),
    }
}

pub fn vk(post: &VkPost, dims: DimensionPolicy) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("owner_id", &post.owner_id.to_string())
        .append_pair("post_id", &post.post_id.to_string())
        .append_pair("hash", &post.hash)
        .finish();
    let src = format!("https://vk.com/widget_post.php?{}", query);

    Tag::open("iframe")
        .attr("src", src)
        .dim("width", dims.resolve(post.width, VK_DEFAULT.0))
        .dim("height", dims.resolve(post.height, VK_DEFAULT.1))
        .attr("frameborder", 0)
        .close()
}

pub fn facebook(post: &FacebookPost, dims: DimensionPolicy) -> String {
    Tag::open("iframe")
        .attr("src", &post.src)
        .dim("width", dims.resolve(post.width, FACEBOOK_DEFAULT.0))
        .dim("height", dims.resolve(post.height, FACEBOOK_DEFAULT.1))
        .attr("frameborder", 0)
        .flag("allowfullscreen", post.is_video)
        .close()
}

/// Blockquotes are sized by the embed script, so dimensions are not written.
pub fn instagram(post: &InstagramPost) -> String {
    let permalink = format!("https://www.instagram.com/p/{}/", post.shortcode);

    Tag::open("blockquote")
        .attr("class", "instagram-media")
        .flag("data-instgrm-captioned", post.is_captioned)
        .attr("data-instgrm-permalink", permalink)
        .close()
}

pub fn twitter(post: &TwitterPost) -> String {
    let link = Tag::open("a").attr("href", &post.src).close();

    Tag::open("blockquote").attr("class", "twitter-tweet").close_with(&link)
}

pub fn youtube(post: &YoutubePost, dims: DimensionPolicy) -> String {
    let src = format!("https://www.youtube.com/embed/{}", post.video_id);

    Tag::open("iframe")
        .dim("width", dims.resolve(post.width, 0))
        .dim("height", dims.resolve(post.height, 0))
        .attr("src", src)
        .attr("frameborder", post.frameborder)
        .flag("allowfullscreen", post.allow_fullscreen)
        .close()
}

pub fn iframe(post: &IframePost, dims: DimensionPolicy) -> String {
    Tag::open("iframe")
        .dim("width", dims.resolve(post.width, 0))
        .dim("height", dims.resolve(post.height, 0))
        .attr("src", &post.src)
        .attr("frameborder", post.frameborder)
        .flag("allowfullscreen", post.allow_fullscreen)
        .close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::PlaybuzzPost;

    #[test]
    fn test_vk_widget_iframe() {
        let post = VkPost { owner_id: -1, post_id: 2, hash: "h".to_string(), width: 500, height: 0 };
        assert_eq!(
            vk(&post, DimensionPolicy::Omit),
            r#"<iframe src="https://vk.com/widget_post.php?owner_id=-1&amp;post_id=2&amp;hash=h" width="500" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn test_vk_hash_is_query_encoded() {
        let post = VkPost { owner_id: 1, post_id: 2, hash: "a&b#c%d".to_string(), ..Default::default() };
        assert_eq!(
            vk(&post, DimensionPolicy::Omit),
            r#"<iframe src="https://vk.com/widget_post.php?owner_id=1&amp;post_id=2&amp;hash=a%26b%23c%25d" frameborder="0"></iframe>"#
        );
    }

    #[test]
    fn test_facebook_plugin_iframe() {
        let post = FacebookPost {
            is_video: true,
            width: 560,
            height: 0,
            href: "https://www.facebook.com/facebook/videos/1/".to_string(),
            src: "https://www.facebook.com/plugins/video.php?href=x&width=560".to_string(),
        };
        assert_eq!(
            facebook(&post, DimensionPolicy::Omit),
            r#"<iframe src="https://www.facebook.com/plugins/video.php?href=x&amp;width=560" width="560" frameborder="0" allowfullscreen></iframe>"#
        );
        assert!(facebook(&post, DimensionPolicy::PlatformDefaults).contains(r#"width="560" height="500""#));
    }

    #[test]
    fn test_blockquotes_ignore_dimensions() {
        let post = Post::Instagram(InstagramPost {
            shortcode: "B2cYeJJhPnB".to_string(),
            width: 500,
            height: 600,
            ..Default::default()
        });
        let html = render(&post, DimensionPolicy::PlatformDefaults).unwrap();

        assert!(!html.contains("width"));
        assert!(!html.contains("height"));
    }

    #[test]
    fn test_youtube_iframe() {
        let post = YoutubePost {
            allow_fullscreen: true,
            video_id: "TVakXOkE2G4".to_string(),
            width: 560,
            height: 315,
            ..Default::default()
        };
        assert_eq!(
            youtube(&post, DimensionPolicy::Omit),
            r#"<iframe width="560" height="315" src="https://www.youtube.com/embed/TVakXOkE2G4" frameborder="0" allowfullscreen></iframe>"#
        );
    }

    #[test]
    fn test_instagram_blockquote() {
        let post = InstagramPost { is_captioned: true, shortcode: "B2cYeJJhPnB".to_string(), ..Default::default() };
        assert_eq!(
            instagram(&post),
            r#"<blockquote class="instagram-media" data-instgrm-captioned data-instgrm-permalink="https://www.instagram.com/p/B2cYeJJhPnB/"></blockquote>"#
        );
    }

    #[test]
    fn test_twitter_blockquote() {
        let post = TwitterPost {
            status_id: "1".to_string(),
            src: "https://twitter.com/a/status/1".to_string(),
            ..Default::default()
        };
        assert_eq!(
            twitter(&post),
            r#"<blockquote class="twitter-tweet"><a href="https://twitter.com/a/status/1"></a></blockquote>"#
        );
    }

    #[test]
    fn test_playbuzz_unsupported() {
        let post = Post::Playbuzz(PlaybuzzPost { item: "abc".to_string(), height: 0 });
        assert!(matches!(render(&post, DimensionPolicy::Omit), Err(EmbedError::UnsupportedDialect { .. })));
    }
}
