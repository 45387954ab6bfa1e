//! Output renderers for the two target dialects.
//!
//! Renderers are pure formatting: a record and a dialect in, a markup
//! fragment out. Zero dimensions are never written; whether a platform
//! default replaces them is decided by
//! [`DimensionPolicy`](crate::DimensionPolicy).

pub mod amp;
pub mod tag;
pub mod turbo;

use crate::Result;
use crate::config::ConvertConfig;
use crate::platform::Dialect;
use crate::post::Post;

/// Renders `post` in `dialect`.
pub fn render(post: &Post, dialect: Dialect, config: &ConvertConfig) -> Result<String> {
    match dialect {
        Dialect::Amp => Ok(amp::render(post, config.dimensions)),
        Dialect::Turbo => turbo::render(post, config.dimensions),
    }
}
