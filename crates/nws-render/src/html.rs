//! # HTML Fragments
//!
//! [`Html`] is markup that is safe to concatenate. There is no way to append
//! a runtime `&str` to it without escaping. URLs must additionally pass
//! [`AttrUrl`]; a [`nws_core::Anchor`] is limited to `[a-z-]` and goes in as is.

use std::fmt;

use nws_core::Anchor;

use crate::error::RenderError;

/// Escape text for element content or a double-quoted attribute value.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// A trusted markup fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    /// An empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding escaped text.
    pub fn from_text(text: &str) -> Self {
        Self(escape(text))
    }

    /// Wrap markup produced by a trusted generator inside this crate.
    pub(crate) fn trusted(markup: String) -> Self {
        Self(markup)
    }

    /// Append literal markup.
    pub fn raw(&mut self, markup: &'static str) -> &mut Self {
        self.0.push_str(markup);
        self
    }

    /// Append escaped text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.0.push_str(&escape(text));
        self
    }

    /// Append another fragment.
    pub fn fragment(&mut self, other: &Html) -> &mut Self {
        self.0.push_str(&other.0);
        self
    }

    /// Append a checked URL, escaped for a double-quoted attribute.
    pub fn url(&mut self, url: &AttrUrl) -> &mut Self {
        self.0.push_str(&escape(&url.0));
        self
    }

    /// Append an anchor identifier, unescaped.
    pub fn anchor(&mut self, anchor: &Anchor) -> &mut Self {
        self.0.push_str(anchor.as_str());
        self
    }

    /// The markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the fragment has no markup.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the fragment, returning the markup.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An absolute `http`/`https` URL that is safe to place in an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrUrl(String);

impl AttrUrl {
    /// Check `url` and wrap it.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnsafeUrl`] if the scheme is not `http` or
    /// `https`, or if the URL contains quotes, angle brackets, backticks,
    /// whitespace, or control characters.
    pub fn parse(url: &str) -> Result<Self, RenderError> {
        let has_scheme = url.starts_with("https://") || url.starts_with("http://");
        let has_unsafe_char = url.chars().any(|c| {
            matches!(c, '"' | '\'' | '<' | '>' | '`') || c.is_whitespace() || c.is_control()
        });
        if !has_scheme || has_unsafe_char {
            return Err(RenderError::UnsafeUrl {
                url: url.to_string(),
            });
        }
        Ok(Self(url.to_string()))
    }

    /// The URL text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
