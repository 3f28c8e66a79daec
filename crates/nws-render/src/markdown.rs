//! # Header Markdown
//!
//! The page header's prose is maintained as CommonMark in `header.md`. It
//! is site-owner content, so its HTML is trusted and inserted verbatim.

use pulldown_cmark::{html, Options, Parser};

use crate::html::Html;

/// Convert CommonMark to HTML, with smart quotes and dashes.
pub fn markdown_to_html(source: &str) -> Html {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    Html::trusted(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraphs_and_links() {
        let html = markdown_to_html("Hello.\n\nSee [the list](https://example.com).\n");
        assert_eq!(
            html.as_str(),
            "<p>Hello.</p>\n<p>See <a href=\"https://example.com\">the list</a>.</p>\n"
        );
    }

    #[test]
    fn test_smart_punctuation() {
        let html = markdown_to_html("Don't \"panic\" -- really.");
        assert!(html.as_str().contains("Don’t"), "{html}");
        assert!(html.as_str().contains("“panic”"), "{html}");
        assert!(html.as_str().contains("–"), "{html}");
    }

    #[test]
    fn test_empty_source() {
        assert!(markdown_to_html("").is_empty());
    }
}
