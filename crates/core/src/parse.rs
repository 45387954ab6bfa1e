//! Markup parsing.
//!
//! This module provides the [`Document`] and [`Element`] types that every
//! tree-walking extractor reads embed snippets through.
//!
//! # Example
//!
//! ```rust
//! use embedkit_core::parse::Document;
//!
//! use embedkit_core::Walk;
//!
//! let doc = Document::from_bytes(br#"<iframe src="https://example.com/frame"></iframe>"#).unwrap();
//! let mut src = None;
//! doc.walk("iframe", |el| {
//!     src = el.attr("src");
//!     Walk::Stop
//! });
//! assert_eq!(src, Some("https://example.com/frame"));
//! ```

use scraper::{ElementRef, Html};

use crate::walk::{Walk, walk};
use crate::{EmbedError, Result};

/// Decodes raw snippet bytes as UTF-8 text.
///
/// # Errors
///
/// Returns [`EmbedError::ParseFailure`] when the bytes are not valid UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| EmbedError::ParseFailure(e.to_string()))
}

/// A parsed embed snippet.
///
/// Snippets are parsed as full documents, so a bare `<iframe>` ends up
/// inside a synthesized `<html><body>` wrapper.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses markup from a string.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses markup from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::ParseFailure`] if the bytes are not UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode(bytes).map(Self::parse)
    }

    /// Visits every `tag` element in document order until `visit` stops.
    ///
    /// Returns `true` if the visitor asked to stop.
    pub fn walk<'a, F>(&'a self, tag: &str, visit: F) -> bool
    where
        F: FnMut(&Element<'a>) -> Walk,
    {
        walk(self.html.root_element(), tag, visit)
    }
}

/// A wrapper around scraper's ElementRef exposing the attribute access
/// the extractors need.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> From<ElementRef<'a>> for Element<'a> {
    fn from(element: ElementRef<'a>) -> Self {
        Self { element }
    }
}

impl<'a> Element<'a> {
    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Iterates over `(name, value)` attribute pairs.
    pub fn attrs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.element.value().attrs()
    }

    /// Checks whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.element.value().classes().any(|c| c == class)
    }
}
