//! Validation rules shared by the extractors.
//!
//! Structural checks (a mandatory field is present) always run before
//! semantic ones (hostname, scheme, path shape), so an empty source never
//! reaches URL parsing.

use url::{ParseError, Url};

use crate::{EmbedError, Result};

/// Fails with [`EmbedError::MissingField`] if `value` is empty.
pub fn require_present(value: &str, field: &'static str) -> Result<()> {
    if value.is_empty() { Err(EmbedError::MissingField(field)) } else { Ok(()) }
}

/// Parses an embed reference, resolving protocol-relative URLs
/// (`//host/path`) against `https:`.
pub fn parse_reference(src: &str) -> Result<Url> {
    match Url::parse(src) {
        Ok(url) => Ok(url),
        Err(ParseError::RelativeUrlWithoutBase) if src.starts_with("//") => {
            Url::parse(&format!("https:{}", src)).map_err(|e| EmbedError::MalformedReference(format!("{}: {}", src, e)))
        }
        Err(e) => Err(EmbedError::MalformedReference(format!("{}: {}", src, e))),
    }
}

/// Checks that the URL host is `domain` or one of its subdomains.
pub fn require_host(url: &Url, domain: &str) -> Result<()> {
    let host = url.host_str().unwrap_or_default().to_ascii_lowercase();
    let matches = host == domain || host.strip_suffix(domain).is_some_and(|prefix| prefix.ends_with('.'));

    if matches { Ok(()) } else { Err(EmbedError::UnsupportedOrigin(format!("{} is not a {} host", host, domain))) }
}

/// Parses `src` and checks its scheme is exactly `scheme`.
///
/// Scheme-less references are rejected as an origin problem rather than
/// a malformed one, since the only thing wrong with them is the scheme.
pub fn require_scheme(src: &str, scheme: &str) -> Result<Url> {
    match Url::parse(src) {
        Ok(url) if url.scheme() == scheme => Ok(url),
        Ok(url) => Err(EmbedError::UnsupportedOrigin(format!(
            "scheme {} is not allowed, expected {}",
            url.scheme(),
            scheme
        ))),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Err(EmbedError::UnsupportedOrigin(format!("{} has no scheme, expected {}", src, scheme)))
        }
        Err(e) => Err(EmbedError::MalformedReference(format!("{}: {}", src, e))),
    }
}

/// Parses a dimension-like integer attribute into `slot`.
///
/// Values that do not parse leave `slot` untouched; a bad width never
/// aborts an extraction.
pub fn parse_int_into(value: &str, slot: &mut i64) {
    if let Ok(parsed) = value.parse::<i64>() {
        *slot = parsed;
    }
}
