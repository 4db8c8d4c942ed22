// src/checker/html.rs
// =============================================================================
// This module extracts link targets from HTML tags embedded in markdown.
//
// README files often contain raw HTML, e.g. centered logos:
//   <p align="center"><img src="docs/logo.png"></p>
//
// How it works:
// 1. A regex finds every candidate opening tag: <a ...> or <img ...>
// 2. Each tag is parsed ON ITS OWN with `scraper` to read the attribute
//
// Parsing tag by tag matters: the surrounding markdown is not HTML, and a
// mention like `<title>` or `<textarea>` would make an HTML parser treat
// the rest of the file as plain text.
// =============================================================================

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;

// Opening <a> or <img> tag with at least one attribute
static CANDIDATE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(a|img)\s[^>]*>").expect("tag pattern is valid")
});

// Extracts href values of <a> tags, then src values of <img> tags
//
// Targets are returned as written (after HTML entity decoding). Empty
// values are dropped. No resolution happens here; the classifier decides
// what they mean.
//
// Example:
//   r#"<a href="../guide.md">Guide</a> <img src="logo.png">"#
//   -> ["../guide.md", "logo.png"]
pub fn extract_html_links(content: &str) -> Vec<String> {
    // Both selectors are constants known to be valid, so a failure here
    // would be a programmer error.
    let anchors = Selector::parse("a[href]").expect("anchor selector is valid");
    let images = Selector::parse("img[src]").expect("image selector is valid");

    let mut hrefs = Vec::new();
    let mut srcs = Vec::new();

    for captures in CANDIDATE_TAG.captures_iter(content) {
        let (Some(tag), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        let (selector, attribute, targets) = if name.as_str().eq_ignore_ascii_case("a") {
            (&anchors, "href", &mut hrefs)
        } else {
            (&images, "src", &mut srcs)
        };

        if let Some(value) = tag_attribute(tag.as_str(), selector, attribute) {
            targets.push(value);
        }
    }

    hrefs.append(&mut srcs);
    hrefs
}

// Reads one attribute from a single, isolated tag
fn tag_attribute(tag: &str, selector: &Selector, attribute: &str) -> Option<String> {
    let fragment = Html::parse_fragment(tag);
    let element = fragment.select(selector).next()?;
    let value = element.value().attr(attribute)?;

    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let links = extract_html_links(html);
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_extract_image() {
        let html = r#"<img alt="logo" src='docs/logo.png' width="200">"#;
        let links = extract_html_links(html);
        assert_eq!(links, vec!["docs/logo.png"]);
    }

    #[test]
    fn test_anchor_fragment_kept_verbatim() {
        let html = r##"<a href="#section">Jump</a>"##;
        let links = extract_html_links(html);
        assert_eq!(links, vec!["#section"]);
    }

    #[test]
    fn test_tags_inside_markdown() {
        let markdown = r#"
# Project

<p align="center">
  <img src="assets/banner.png">
</p>

Read the [guide](guide.md) or <a href="CONTRIBUTING.md">contribute</a>.
"#;
        let links = extract_html_links(markdown);
        assert_eq!(links, vec!["CONTRIBUTING.md", "assets/banner.png"]);
    }

    #[test]
    fn test_tags_without_attribute_ignored() {
        let html = r#"<a name="top">Top</a><img alt="missing">"#;
        assert!(extract_html_links(html).is_empty());
    }

    #[test]
    fn test_rawtext_element_mention_does_not_hide_later_tags() {
        let markdown = "Set the page name with the `<title>` element.\n\n\
                        <img src=\"missing.png\">\n<a href=\"gone.md\">x</a>";
        let links = extract_html_links(markdown);
        assert_eq!(links, vec!["gone.md", "missing.png"]);
    }

    #[test]
    fn test_textarea_and_open_comment_do_not_hide_later_tags() {
        let markdown = "Use a <textarea> for input.\n<!-- unfinished\n<a href=\"docs.md\">docs</a>";
        assert_eq!(extract_html_links(markdown), vec!["docs.md"]);
    }

    #[test]
    fn test_uppercase_tags() {
        let html = r#"<A HREF="upper.md">x</A><IMG SRC="upper.png">"#;
        assert_eq!(extract_html_links(html), vec!["upper.md", "upper.png"]);
    }

    #[test]
    fn test_empty_values_dropped() {
        let html = r#"<a href="">empty</a><img src=" "><a href="ok.md">ok</a>"#;
        assert_eq!(extract_html_links(html), vec!["ok.md"]);
    }

    #[test]
    fn test_other_tags_ignored() {
        let html = r#"<abbr title="x">y</abbr><link href="style.css"><image src="z.png">"#;
        assert!(extract_html_links(html).is_empty());
    }
}
