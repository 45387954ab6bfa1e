//! Platform and dialect identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::EmbedError;

/// An embed family the converter recognizes.
///
/// The string form (see [`Platform::as_str`]) is the tag reported next to
/// every successful conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// VKontakte `VK.Widgets.Post` script widget.
    Vkontakte,
    /// Facebook post or video plugin iframe.
    Facebook,
    /// Instagram blockquote embed.
    Instagram,
    /// Twitter blockquote with a status link.
    Twitter,
    /// YouTube embed iframe.
    Youtube,
    /// Any https iframe.
    Iframe,
    /// Playbuzz item div.
    Playbuzz,
}

impl Platform {
    /// Every platform, in AMP dispatch order.
    pub const ALL: [Platform; 7] = [
        Self::Vkontakte,
        Self::Facebook,
        Self::Instagram,
        Self::Twitter,
        Self::Youtube,
        Self::Iframe,
        Self::Playbuzz,
    ];

    /// Short tag naming this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vkontakte => "vkontakte",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Iframe => "iframe",
            Self::Playbuzz => "playbuzz",
        }
    }

    /// Whether this platform has a rendering in `dialect`.
    pub fn supports(&self, dialect: Dialect) -> bool {
        !matches!((self, dialect), (Self::Playbuzz, Dialect::Turbo))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.to_lowercase().as_str() {
            "vk" => "vkontakte".to_string(),
            "fb" => "facebook".to_string(),
            "insta" => "instagram".to_string(),
            "yt" => "youtube".to_string(),
            other => other.to_string(),
        };

        Self::ALL.into_iter().find(|p| p.as_str() == tag).ok_or_else(|| {
            let valid: Vec<_> = Self::ALL.iter().map(Platform::as_str).collect();
            EmbedError::InvalidConfig(format!("Invalid platform: {}. Valid options: {}", s, valid.join(", ")))
        })
    }
}

/// Target markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Accelerated Mobile Pages custom elements.
    Amp,
    /// Yandex Turbo validator-friendly markup.
    Turbo,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amp => "amp",
            Self::Turbo => "turbo",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amp" => Ok(Self::Amp),
            "turbo" => Ok(Self::Turbo),
            _ => Err(EmbedError::InvalidConfig(format!("Invalid dialect: {}. Valid options: amp, turbo", s))),
        }
    }
}
