pub mod config;
pub mod dispatch;
pub mod error;
pub mod extract;
pub mod parse;
pub mod platform;
pub mod post;
pub mod render;
pub mod validate;
pub mod walk;

pub use config::{ConvertConfig, ConvertConfigBuilder, DimensionPolicy};
pub use dispatch::{AMP_ORDER, Conversion, Converter, TURBO_ORDER, amp, order, turbo};
pub use error::{EmbedError, ErrorKind, Result};
pub use extract::{facebook, iframe, instagram, playbuzz, twitter, vk, youtube};
pub use parse::Document;
pub use platform::{Dialect, Platform};
pub use post::{FacebookPost, IframePost, InstagramPost, PlaybuzzPost, Post, TwitterPost, VkPost, YoutubePost};
pub use render::render;
#[doc(hidden)]
pub use walk::{Walk, walk};
