//! Conversion configuration.
//!
//! # Example
//!
//! ```rust
//! use embedkit_core::{ConvertConfig, DimensionPolicy};
//!
//! let config = ConvertConfig::builder()
//!     .dimensions(DimensionPolicy::PlatformDefaults)
//!     .build();
//! assert_eq!(config.dimensions, DimensionPolicy::PlatformDefaults);
//! ```

use std::str::FromStr;

use crate::EmbedError;

/// How renderers treat dimensions the source did not supply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DimensionPolicy {
    /// Leave missing dimensions out of the output.
    #[default]
    Omit,
    /// Substitute the platform's default size for missing dimensions.
    PlatformDefaults,
}

impl DimensionPolicy {
    /// Resolves the value to render for a dimension.
    ///
    /// Zero or negative values count as missing. A result of `0` means the
    /// attribute is omitted.
    pub fn resolve(&self, value: i64, default: i64) -> i64 {
        match self {
            _ if value > 0 => value,
            Self::Omit => 0,
            Self::PlatformDefaults => default,
        }
    }
}

impl FromStr for DimensionPolicy {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "omit" => Ok(Self::Omit),
            "defaults" | "platform-defaults" => Ok(Self::PlatformDefaults),
            _ => Err(EmbedError::InvalidConfig(format!(
                "Invalid dimension policy: {}. Valid options: omit, defaults",
                s
            ))),
        }
    }
}

/// Configuration for [`Converter`](crate::Converter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Missing-dimension handling (default: omit).
    pub dimensions: DimensionPolicy,
}

impl ConvertConfig {
    /// Creates a new builder for ConvertConfig.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }
}

/// Builder for ConvertConfig.
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Sets the dimension policy.
    pub fn dimensions(mut self, value: DimensionPolicy) -> Self {
        self.config.dimensions = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

impl Default for ConvertConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
