// src/link/extract.rs
// =============================================================================
// This module extracts hyperlinks from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM tree (built on html5ever, Mozilla's HTML parser)
// - Recovers from broken markup the way browsers do
// - Supports CSS selectors for finding elements
//
// For every <a> element that has an href we produce a Link holding:
// - href: the attribute exactly as written (relative or absolute)
// - text: the visible label, even when it sits inside <b>, <span>, etc.
//
// Rust concepts:
// - Recursion: the label of an element is built from its children's labels
// - Enums + match: scraper's Node is an enum (Text, Element, Comment, ...)
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};
use serde::Serialize;

use crate::error::ParseError;

/// A hyperlink found in a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// The raw href value as written in the document
    pub href: String,
    /// Whitespace-collapsed text of every text node under the anchor
    pub text: String,
}

// Extracts every <a href="..."> from an HTML byte stream
//
// Parameters:
//   html: the raw response body
//
// Returns: Vec<Link> in document order (depth-first, the order a reader sees
// them), or a ParseError if the anchor selector cannot be built
//
// Bytes that are not valid UTF-8 (an old Latin-1 page, say) are replaced with
// U+FFFD instead of failing, so every anchor still yields a Link.
//
// Example:
//   html = b"<a href='/docs'>Read <b>the</b> docs</a>"
//   result = [Link { href: "/docs", text: "Read the docs" }]
pub fn extract_links(html: &[u8]) -> Result<Vec<Link>, ParseError> {
    let source = String::from_utf8_lossy(html);

    // Parse the HTML into a document tree
    let document = Html::parse_document(&source);

    // "a[href]" means "all <a> tags that have an href attribute".
    // select() visits matches in tree order, which is a depth-first walk.
    let selector = Selector::parse("a[href]").map_err(|e| ParseError::Selector(e.to_string()))?;

    let links = document
        .select(&selector)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href")?;
            Some(Link {
                href: href.to_string(),
                text: label(anchor),
            })
        })
        .collect();

    Ok(links)
}

// Builds the visible label of an element
//
// Each child contributes its own text followed by a space, so sibling
// subtrees never run together ("<a>foo<b>bar</b></a>" -> "foo bar").
// Comments and other non-text nodes contribute nothing.
fn label(element: ElementRef<'_>) -> String {
    let mut raw = String::new();

    for child in element.children() {
        match child.value() {
            Node::Text(text) => raw.push_str(text),
            Node::Element(_) => {
                if let Some(nested) = ElementRef::wrap(child) {
                    raw.push_str(&label(nested));
                }
            }
            _ => {}
        }
        raw.push(' ');
    }

    collapse_whitespace(&raw)
}

// Collapses runs of whitespace into one space and trims both ends
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why take &[u8] instead of &str?
//    - A web page is just bytes until something decides how to read them
//    - String::from_utf8_lossy() borrows the bytes when they are already
//      valid UTF-8 and only copies them when a byte has to be replaced
//    - It returns Cow<str> ("clone on write"), which derefs to &str
//
// 2. What is a Node?
//    - scraper stores the document as a tree of Nodes
//    - Node is an enum: Text, Element, Comment, Doctype, ...
//    - match lets us handle the kinds we care about and ignore the rest (_)
//
// 3. Why ElementRef::wrap()?
//    - children() yields plain tree nodes
//    - wrap() turns a node into an ElementRef only if it really is an element,
//      which is what label() needs to recurse
//
// 4. What does the ? inside filter_map do?
//    - attr("href") returns Option<&str>
//    - ? on an Option returns None early, and filter_map drops Nones
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn links(html: &str) -> Vec<Link> {
        extract_links(html.as_bytes()).unwrap()
    }

    fn link(href: &str, text: &str) -> Link {
        Link {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_single_link() {
        let found = links(r#"<a href="/dog">A link to a dog page</a>"#);
        assert_eq!(found, vec![link("/dog", "A link to a dog page")]);
    }

    #[test]
    fn test_href_kept_as_written() {
        let found = links(
            r#"
            <a href="https://www.twitter.com/joncalhoun">Twitter</a>
            <a href="../up">Up</a>
            <a href="//cdn.example/x">CDN</a>
            "#,
        );
        let hrefs: Vec<_> = found.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["https://www.twitter.com/joncalhoun", "../up", "//cdn.example/x"]);
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let found = links(r#"<a name="top">Top</a><a href="/a">A</a><a>None</a>"#);
        assert_eq!(found, vec![link("/a", "A")]);
    }

    #[test]
    fn test_empty_href_still_counts() {
        let found = links(r#"<a href="">Self</a>"#);
        assert_eq!(found, vec![link("", "Self")]);
    }

    #[test]
    fn test_nested_formatting_text() {
        let found = links(
            r#"<a href="https://github.com/gophercises">
                Check me out on <strong>github</strong>
                <i class="fa fa-github"></i>
            </a>"#,
        );
        assert_eq!(found, vec![link("https://github.com/gophercises", "Check me out on github")]);
    }

    #[test]
    fn test_sibling_subtrees_are_separated() {
        let found = links(r#"<a href="/x">foo<b>bar</b><i>baz</i></a>"#);
        assert_eq!(found[0].text, "foo bar baz");
    }

    #[test]
    fn test_comments_are_ignored() {
        let found = links(r#"<a href="/dog-cat">dog cat <!-- commented text SHOULD NOT be included! --></a>"#);
        assert_eq!(found, vec![link("/dog-cat", "dog cat")]);
    }

    #[test]
    fn test_links_in_document_order() {
        let found = links(
            r#"<html><body>
                <div><a href="/one">One</a><p><a href="/two">Two</a></p></div>
                <a href="/three">Three</a>
            </body></html>"#,
        );
        let hrefs: Vec<_> = found.iter().map(|l| l.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/one", "/two", "/three"]);
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        let found = links(r#"<title>t</title><p><a href="/open">Unclosed <b>bold"#);
        assert_eq!(found, vec![link("/open", "Unclosed bold")]);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let html = br#"<p><a href="/a"> A  <em>one</em></a> <a href="/b">B</a></p>"#;
        let first = extract_links(html).unwrap();
        let second = extract_links(html).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_latin1_body_keeps_every_link() {
        let html = b"<meta charset=\"iso-8859-1\"><a href=\"/a\">Caf\xe9</a><a href=\"/b\">B</a>";
        let found = extract_links(html).unwrap();
        assert_eq!(found, vec![link("/a", "Caf\u{fffd}"), link("/b", "B")]);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b   c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
