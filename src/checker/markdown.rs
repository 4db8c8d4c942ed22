// src/checker/markdown.rs
// =============================================================================
// This module extracts link targets from the raw text of a README file.
//
// Four syntactic forms are recognised:
// - [label](target)      markdown text links      (regex, this file)
// - ![alt](target)       markdown images          (regex, this file)
// - <a href="target">    HTML anchors             (scraper, html.rs)
// - <img src="target">   HTML images              (scraper, html.rs)
//
// Every `[x](y)` in the file counts, including ones inside tables, code
// spans or raw HTML blocks.
//
// Labels and alt text are matched but thrown away; only targets come out.
// =============================================================================

use super::html::extract_html_links;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

// [label](target) - the label must be non-empty. A label may itself be an
// image, as in badges: [![build](badge.svg)](ci-job-url)
static TEXT_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:!\[[^\]]*\]\([^)]+\)|[^\]]+)\]\(([^)]+)\)")
        .expect("text link pattern is valid")
});

// ![alt](target) - alt text may be empty
static IMAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image link pattern is valid")
});

// Extracts every link target from one file's text content
//
// Order: text links, image links, HTML anchors, HTML images. Within each
// form targets appear in document order, so identical input always gives
// identical output.
//
// Example:
//   "See [docs](./docs/README.md) and ![logo](https://example.com/logo.png)"
//   -> ["./docs/README.md", "https://example.com/logo.png"]
pub fn extract_links(content: &str) -> Vec<String> {
    let mut links = extract_markdown_links(content);
    links.extend(extract_html_links(content));
    links
}

// Extracts targets of the two markdown forms
pub fn extract_markdown_links(content: &str) -> Vec<String> {
    let mut links = Vec::new();

    for captures in TEXT_LINK.captures_iter(content) {
        let (Some(whole), Some(target)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        // `![alt](x)` also matches the text pattern starting at `[`.
        // The image pass below owns it. For a badge the whole
        // `[![alt](img)](link)` is one match, so only `link` comes out here.
        if content[..whole.start()].ends_with('!') {
            continue;
        }

        links.push(target.as_str().to_string());
    }

    for captures in IMAGE_LINK.captures_iter(content) {
        if let Some(target) = captures.get(2) {
            links.push(target.as_str().to_string());
        }
    }

    links
}

// Turns raw file bytes into text without ever failing
//
// UTF-8 is tried first. Anything else is decoded as Latin-1, where every
// byte maps to the code point with the same value, so no input is rejected.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            warn!("File is not valid UTF-8 ({}), decoding as Latin-1", e.utf8_error());
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_simple_link() {
        let markdown = "Check out [Rust](https://www.rust-lang.org)!";
        let links = extract_links(markdown);
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_extract_multiple_links() {
        let markdown = r#"
# Resources

- [Rust](https://www.rust-lang.org)
- [Guide](./docs/guide.md)
- [Home](/README.md#install)
        "#;
        let links = extract_links(markdown);
        assert_eq!(
            links,
            vec![
                "https://www.rust-lang.org",
                "./docs/guide.md",
                "/README.md#install"
            ]
        );
    }

    #[test]
    fn test_image_counted_once() {
        let markdown = "![logo](https://example.com/logo.png)";
        let links = extract_links(markdown);
        assert_eq!(links, vec!["https://example.com/logo.png"]);
    }

    #[test]
    fn test_badge_yields_link_and_image_once() {
        let markdown = "[![build](https://ci.example.com/badge.svg)](https://ci.example.com/job)";
        let links = extract_links(markdown);
        assert_eq!(
            links,
            vec!["https://ci.example.com/job", "https://ci.example.com/badge.svg"]
        );
    }

    #[test]
    fn test_badge_row() {
        let markdown = "[![a](a.svg)](a.md) [![b](b.svg)](b.md) [plain](c.md)";
        let links = extract_markdown_links(markdown);
        assert_eq!(links, vec!["a.md", "b.md", "c.md", "a.svg", "b.svg"]);
    }

    #[test]
    fn test_image_with_empty_alt() {
        let links = extract_markdown_links("![](img/diagram.png)");
        assert_eq!(links, vec!["img/diagram.png"]);
    }

    #[test]
    fn test_empty_label_is_not_a_text_link() {
        let links = extract_markdown_links("[](nowhere.md)");
        assert!(links.is_empty());
    }

    #[test]
    fn test_anchors_and_mailto_are_still_extracted() {
        // Filtering happens in the classifier, not here
        let markdown = "[top](#top) [mail](mailto:someone@example.com)";
        let links = extract_links(markdown);
        assert_eq!(links, vec!["#top", "mailto:someone@example.com"]);
    }

    #[test]
    fn test_mixed_forms_order() {
        let markdown = r#"<img src="a.png"> [b](b.md) <a href="c.md">c</a> ![d](d.png)"#;
        let links = extract_links(markdown);
        assert_eq!(links, vec!["b.md", "d.png", "c.md", "a.png"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let markdown = "[a](a.md) ![b](b.png) <a href=\"c\">c</a> <img src=\"d\">";
        assert_eq!(extract_links(markdown), extract_links(markdown));
    }

    #[test]
    fn test_decode_utf8() {
        let text = decode_text("héllo [x](y)".as_bytes().to_vec());
        assert_eq!(text, "héllo [x](y)");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // 0xE9 alone is invalid UTF-8 but is 'é' in Latin-1
        let bytes = vec![b'[', b'c', 0xE9, b']', b'(', b'x', b'.', b'm', b'd', b')'];
        let text = decode_text(bytes);
        assert_eq!(text, "[cé](x.md)");
        assert_eq!(extract_links(&text), vec!["x.md"]);
    }

    #[test]
    fn test_decode_every_byte_value() {
        let bytes: Vec<u8> = (0..=255).collect();
        let text = decode_text(bytes);
        assert_eq!(text.chars().count(), 256);
    }
}
