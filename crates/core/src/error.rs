//! Error types for embed conversion.
//!
//! This module defines [`EmbedError`], which carries the reason an extractor
//! rejected its input, and [`ErrorKind`], the fixed vocabulary those reasons
//! are reported in.
//!
//! # Example
//!
//! ```rust
//! use embedkit_core::{ErrorKind, youtube};
//!
//! match youtube::extract(b"<iframe src=\"\"></iframe>") {
//!     Ok(post) => println!("video {}", post.video_id),
//!     Err(e) => assert_eq!(e.kind(), ErrorKind::MissingField),
//! }
//! ```

use thiserror::Error;

/// Main error type for extraction, rendering and dispatch.
///
/// Every variant is an ordinary outcome signal. None of them is retried:
/// all failures are deterministic functions of the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmbedError {
    /// The input could not be read as markup (e.g. it is not UTF-8).
    #[error("Failed to parse markup: {0}")]
    ParseFailure(String),

    /// Required identifying data was absent after traversal.
    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),

    /// A URL or pattern was present but not in the expected shape.
    #[error("Malformed reference: {0}")]
    MalformedReference(String),

    /// The hostname or scheme is not allowed for the platform.
    #[error("Unsupported origin: {0}")]
    UnsupportedOrigin(String),

    /// Duplicated structural identifiers disagree.
    #[error("Inconsistent identifiers: {0}")]
    ConsistencyViolation(String),

    /// No extractor in the dispatch order accepted the input.
    #[error("unknown embed")]
    UnrecognizedInput,

    /// The platform has no rendering in the requested dialect.
    #[error("{platform} embeds cannot be rendered as {dialect}")]
    UnsupportedDialect { platform: String, dialect: String },

    /// A configuration value could not be understood.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),
}

/// Fixed vocabulary of failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ParseFailure,
    MissingField,
    MalformedReference,
    UnsupportedOrigin,
    ConsistencyViolation,
    UnrecognizedInput,
    UnsupportedDialect,
    InvalidConfig,
}

impl ErrorKind {
    /// Stable reason string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ParseFailure => "parse-failure",
            Self::MissingField => "missing-mandatory-field",
            Self::MalformedReference => "malformed-reference",
            Self::UnsupportedOrigin => "unsupported-origin",
            Self::ConsistencyViolation => "consistency-violation",
            Self::UnrecognizedInput => "unrecognized-input",
            Self::UnsupportedDialect => "unsupported-dialect",
            Self::InvalidConfig => "invalid-config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EmbedError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ParseFailure(_) => ErrorKind::ParseFailure,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::MalformedReference(_) => ErrorKind::MalformedReference,
            Self::UnsupportedOrigin(_) => ErrorKind::UnsupportedOrigin,
            Self::ConsistencyViolation(_) => ErrorKind::ConsistencyViolation,
            Self::UnrecognizedInput => ErrorKind::UnrecognizedInput,
            Self::UnsupportedDialect { .. } => ErrorKind::UnsupportedDialect,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }
}

/// Result type alias for EmbedError.
pub type Result<T> = std::result::Result<T, EmbedError>;
