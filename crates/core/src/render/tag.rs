//! Single-element markup builder shared by both renderers.

use std::fmt::{Display, Write};

/// Escape a string for use inside a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    let needs_escape = s.contains(['&', '"', '<', '>']);
    if !needs_escape {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds a single element with attributes in insertion order
pub struct Tag {
    name: &'static str,
    out: String,
}

impl Tag {
    pub fn open(name: &'static str) -> Self {
        Self { name, out: format!("<{}", name) }
    }

    /// Adds `key="value"`, escaping the value
    pub fn attr(mut self, key: &str, value: impl Display) -> Self {
        let _ = write!(self.out, r#" {}="{}""#, key, escape_attr(&value.to_string()));
        self
    }

    /// Adds a dimension attribute unless it is zero
    pub fn dim(self, key: &str, value: i64) -> Self {
        if value > 0 { self.attr(key, value) } else { self }
    }

    /// Adds a bare boolean attribute when `on`
    pub fn flag(mut self, key: &str, on: bool) -> Self {
        if on {
            self.out.push(' ');
            self.out.push_str(key);
        }
        self
    }

    /// Closes the element with no content
    pub fn close(self) -> String {
        self.close_with("")
    }

    /// Closes the element around already-rendered inner markup
    pub fn close_with(mut self, inner: &str) -> String {
        let _ = write!(self.out, ">{}</{}>", inner, self.name);
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("plain"), "plain");
        assert_eq!(escape_attr(r#"a&b"c<d>"#), "a&amp;b&quot;c&lt;d&gt;");
    }

    #[test]
    fn test_tag_order() {
        let html = Tag::open("amp-test").attr("layout", "responsive").dim("width", 0).dim("height", 10).flag("x", true).close();
        assert_eq!(html, r#"<amp-test layout="responsive" height="10" x></amp-test>"#);
    }

    #[test]
    fn test_close_with_inner() {
        let html = Tag::open("blockquote").attr("class", "q").close_with("<a></a>");
        assert_eq!(html, r#"<blockquote class="q"><a></a></blockquote>"#);
    }
}
