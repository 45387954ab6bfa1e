//! AMP rendering.
//!
//! Every platform maps onto its AMP component. Attributes follow a fixed
//! order: layout and structure, dimensions (width before height),
//! platform data attributes, then the identifying attribute last.

use crate::config::DimensionPolicy;
use crate::post::{FacebookPost, IframePost, InstagramPost, PlaybuzzPost, Post, TwitterPost, VkPost, YoutubePost};

use super::tag::Tag;

/// Size of an `amp-iframe` whose source gave no dimensions.
pub const IFRAME_SIZE: (i64, i64) = (480, 315);

pub const VK_DEFAULT: (i64, i64) = (500, 300);
pub const FACEBOOK_DEFAULT: (i64, i64) = (500, 500);
pub const INSTAGRAM_DEFAULT: (i64, i64) = (400, 400);
pub const TWITTER_DEFAULT: (i64, i64) = (380, 480);
pub const PLAYBUZZ_DEFAULT_HEIGHT: i64 = 500;

/// Renders any post as AMP markup.
pub fn render(post: &Post, dims: DimensionPolicy) -> String {
    match post {
        Post::Vkontakte(p) => vk(p, dims),
        Post::Facebook(p) => facebook(p, dims),
        Post::Instagram(p) => instagram(p, dims),
        Post::Twitter(p) => twitter(p, dims),
        Post::Youtube(p) => youtube(p, dims),
        Post::Iframe(p) => iframe(p),
        Post::Playbuzz(p) => playbuzz(p, dims),
    }
}

pub fn vk(post: &VkPost, dims: DimensionPolicy) -> String {
    Tag::open("amp-vk")
        .dim("width", dims.resolve(post.width, VK_DEFAULT.0))
        .dim("height", dims.resolve(post.height, VK_DEFAULT.1))
        .attr("data-embedtype", "post")
        .attr("layout", "responsive")
        .attr("data-owner-id", post.owner_id)
        .attr("data-post-id", post.post_id)
        .attr("data-hash", &post.hash)
        .close()
}

pub fn facebook(post: &FacebookPost, dims: DimensionPolicy) -> String {
    let tag = Tag::open("amp-facebook")
        .dim("width", dims.resolve(post.width, FACEBOOK_DEFAULT.0))
        .dim("height", dims.resolve(post.height, FACEBOOK_DEFAULT.1))
        .attr("layout", "responsive");
    let tag = if post.is_video { tag.attr("data-embed-as", "video") } else { tag };

    tag.attr("data-href", &post.href).close()
}

pub fn instagram(post: &InstagramPost, dims: DimensionPolicy) -> String {
    Tag::open("amp-instagram")
        .attr("layout", "responsive")
        .dim("width", dims.resolve(post.width, INSTAGRAM_DEFAULT.0))
        .dim("height", dims.resolve(post.height, INSTAGRAM_DEFAULT.1))
        .flag("data-captioned", post.is_captioned)
        .attr("data-shortcode", &post.shortcode)
        .close()
}

pub fn twitter(post: &TwitterPost, dims: DimensionPolicy) -> String {
    Tag::open("amp-twitter")
        .attr("layout", "responsive")
        .dim("width", dims.resolve(post.width, TWITTER_DEFAULT.0))
        .dim("height", dims.resolve(post.height, TWITTER_DEFAULT.1))
        .attr("data-tweetid", &post.status_id)
        .close()
}

pub fn youtube(post: &YoutubePost, dims: DimensionPolicy) -> String {
    Tag::open("amp-youtube")
        .attr("layout", "responsive")
        .dim("width", dims.resolve(post.width, 0))
        .dim("height", dims.resolve(post.height, 0))
        .attr("data-videoid", &post.video_id)
        .close()
}

/// `amp-iframe` requires explicit dimensions, so it always carries them
/// regardless of the dimension policy.
pub fn iframe(post: &IframePost) -> String {
    let (width, height) =
        if post.width > 0 && post.height > 0 { (post.width, post.height) } else { IFRAME_SIZE };

    Tag::open("amp-iframe")
        .attr("width", width)
        .attr("height", height)
        .attr("sandbox", "allow-scripts allow-same-origin")
        .attr("layout", "responsive")
        .attr("frameborder", post.frameborder)
        .flag("allowfullscreen", post.allow_fullscreen)
        .attr("src", &post.src)
        .close()
}

pub fn playbuzz(post: &PlaybuzzPost, dims: DimensionPolicy) -> String {
    Tag::open("amp-playbuzz")
        .attr("layout", "responsive")
        .dim("height", dims.resolve(post.height, PLAYBUZZ_DEFAULT_HEIGHT))
        .attr("data-item", &post.item)
        .close()
}
