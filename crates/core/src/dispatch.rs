//! Ordered-fallback dispatch.
//!
//! Embed snippets are not mutually exclusive at the markup level: a
//! YouTube embed is also a perfectly good https iframe. The dispatcher
//! therefore tries extractors in a fixed order, most specific first, and
//! keeps the first success.
//!
//! # Example
//!
//! ```rust
//! use embedkit_core::{Platform, amp};
//!
//! let html = r#"<iframe src="https://www.youtube.com/embed/TVakXOkE2G4"></iframe>"#;
//! let conversion = amp(html).unwrap();
//!
//! assert_eq!(conversion.platform, Platform::Youtube);
//! assert_eq!(
//!     conversion.output,
//!     r#"<amp-youtube layout="responsive" data-videoid="TVakXOkE2G4"></amp-youtube>"#
//! );
//! ```

use serde::Serialize;

use crate::config::ConvertConfig;
use crate::extract::extract;
use crate::platform::{Dialect, Platform};
use crate::post::Post;
use crate::render::render;
use crate::{EmbedError, Result};

/// Extractor order for AMP output.
pub const AMP_ORDER: &[Platform] = &[
    Platform::Vkontakte,
    Platform::Facebook,
    Platform::Instagram,
    Platform::Twitter,
    Platform::Youtube,
    Platform::Iframe,
    Platform::Playbuzz,
];

/// Extractor order for Turbo output.
pub const TURBO_ORDER: &[Platform] = &[
    Platform::Vkontakte,
    Platform::Facebook,
    Platform::Instagram,
    Platform::Twitter,
    Platform::Youtube,
    Platform::Iframe,
];

/// Returns the extractor order for `dialect`.
pub fn order(dialect: Dialect) -> &'static [Platform] {
    match dialect {
        Dialect::Amp => AMP_ORDER,
        Dialect::Turbo => TURBO_ORDER,
    }
}

/// A successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Platform whose extractor accepted the input.
    pub platform: Platform,
    /// Dialect the output is written in.
    pub dialect: Dialect,
    /// Rendered markup fragment.
    pub output: String,
    /// The record the output was rendered from.
    pub post: Post,
}

/// Converts embed snippets with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use embedkit_core::{ConvertConfig, Converter, Dialect, DimensionPolicy};
///
/// let config = ConvertConfig::builder().dimensions(DimensionPolicy::PlatformDefaults).build();
/// let converter = Converter::with_config(config);
///
/// let html = r#"<blockquote class="instagram-media" data-instgrm-permalink="https://www.instagram.com/p/B2cYeJJhPnB/"></blockquote>"#;
/// let conversion = converter.convert(html, Dialect::Amp).unwrap();
/// assert!(conversion.output.contains(r#"width="400" height="400""#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Creates a converter with default settings.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Creates a converter with a custom configuration.
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration in use.
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Tries every extractor for `dialect` in order and renders the first
    /// record produced.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::UnrecognizedInput`] if every extractor fails.
    /// Individual reasons are logged at debug level but not returned; use
    /// [`Converter::convert_as`] to see why a given platform rejected the
    /// input.
    pub fn convert(&self, html: impl AsRef<[u8]>, dialect: Dialect) -> Result<Conversion> {
        let html = html.as_ref();

        for &platform in order(dialect) {
            match self.convert_as(platform, html, dialect) {
                Ok(conversion) => {
                    tracing::debug!(%platform, %dialect, "embed recognized");
                    return Ok(conversion);
                }
                Err(e) => tracing::debug!(%platform, reason = %e.kind(), error = %e, "extractor rejected input"),
            }
        }

        Err(EmbedError::UnrecognizedInput)
    }

    /// Converts with a single platform's extractor, reporting its own
    /// failure reason.
    pub fn convert_as(&self, platform: Platform, html: impl AsRef<[u8]>, dialect: Dialect) -> Result<Conversion> {
        if !platform.supports(dialect) {
            return Err(EmbedError::UnsupportedDialect { platform: platform.to_string(), dialect: dialect.to_string() });
        }

        let post = extract(platform, html.as_ref())?;
        let output = render(&post, dialect, &self.config)?;

        Ok(Conversion { platform, dialect, output, post })
    }

    /// Converts to AMP.
    pub fn amp(&self, html: impl AsRef<[u8]>) -> Result<Conversion> {
        self.convert(html, Dialect::Amp)
    }

    /// Converts to Turbo.
    pub fn turbo(&self, html: impl AsRef<[u8]>) -> Result<Conversion> {
        self.convert(html, Dialect::Turbo)
    }
}

/// Convenience function for one-liner AMP conversion with defaults.
pub fn amp(html: impl AsRef<[u8]>) -> Result<Conversion> {
    Converter::new().amp(html)
}

/// Convenience function for one-liner Turbo conversion with defaults.
pub fn turbo(html: impl AsRef<[u8]>) -> Result<Conversion> {
    Converter::new().turbo(html)
}
