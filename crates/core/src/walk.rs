//! Depth-first markup traversal.
//!
//! Every tree-based extractor locates its target element through [`walk`]:
//! elements are visited in document order (pre-order) and the visitor
//! decides after each match whether to keep going. Returning
//! [`Walk::Stop`] ends the traversal entirely, so the first qualifying
//! element wins and later elements with the same tag cannot override it.

use scraper::ElementRef;

use crate::parse::Element;

/// Visitor decision after a matching element has been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Keep visiting descendants and following elements.
    Continue,
    /// End the traversal.
    Stop,
}

/// Visits each element named `tag` (ASCII case-insensitive) below and
/// including `root`, in document order.
///
/// Returns `true` if the visitor stopped the traversal early.
pub fn walk<'a, F>(root: ElementRef<'a>, tag: &str, mut visit: F) -> bool
where
    F: FnMut(&Element<'a>) -> Walk,
{
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        if let Some(element) = ElementRef::wrap(node)
            && element.value().name().eq_ignore_ascii_case(tag)
        {
            tracing::trace!(tag, "visiting element");
            if visit(&Element::from(element)) == Walk::Stop {
                return true;
            }
        }

        let children: Vec<_> = node.children().collect();
        stack.extend(children.into_iter().rev());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    #[test]
    fn test_document_order() {
        let doc = Document::parse(
            r#"<div id="a"><div id="b"></div></div><p><div id="c"></div></p><div id="d"></div>"#,
        );
        let mut seen = Vec::new();
        doc.walk("div", |el| {
            seen.push(el.attr("id").unwrap_or_default().to_string());
            Walk::Continue
        });

        assert_eq!(seen, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_stop_ends_traversal() {
        let doc = Document::parse(r#"<iframe src="first"></iframe><div><iframe src="second"></iframe></div>"#);
        let mut seen = Vec::new();
        let stopped = doc.walk("iframe", |el| {
            seen.push(el.attr("src").unwrap_or_default());
            Walk::Stop
        });

        assert!(stopped);
        assert_eq!(seen, vec!["first"]);
    }

    #[test]
    fn test_no_match() {
        let doc = Document::parse("<p>nothing here</p>");
        let mut visits = 0;
        let stopped = doc.walk("iframe", |_| {
            visits += 1;
            Walk::Stop
        });

        assert!(!stopped);
        assert_eq!(visits, 0);
    }

    #[test]
    fn test_walk_from_root() {
        let html = scraper::Html::parse_document("<blockquote></blockquote><BLOCKQUOTE></BLOCKQUOTE>");
        let mut visits = 0;
        walk(html.root_element(), "blockquote", |_| {
            visits += 1;
            Walk::Continue
        });

        assert_eq!(visits, 2);
    }
}
