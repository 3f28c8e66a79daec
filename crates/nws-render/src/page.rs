//! # Listing Page
//!
//! Assembles the complete document: head, header prose, a "Jump To"
//! navigation bar, and one list item per entry with its widths table.
//! Entries are sorted by name here, and every entry's anchor is assigned
//! once and used for both its navigation link and its element id.

use nws_core::{sort_by_name, AnchorSet, Entry, EntrySource};
use nws_schema::SiteSchema;

use crate::error::RenderError;
use crate::format::{CellContext, ColumnPlan, FormatterRegistry};
use crate::html::{AttrUrl, Html};

/// Fixed page chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteChrome {
    /// Document title and top-level heading.
    pub title: String,
    /// Stylesheet hrefs, in order.
    pub stylesheets: Vec<String>,
    /// Prefix for "edit this entry" links; the entry's relative path is appended.
    pub edit_base: String,
}

impl Default for SiteChrome {
    fn default() -> Self {
        Self {
            title: "Narrow-Width Shoes".to_string(),
            stylesheets: vec![
                "https://css.kemitchell.com/readable.css".to_string(),
                "styles.css".to_string(),
            ],
            edit_base: "https://github.com/kemitchell/narrowwidthshoes.kemitchell.com/edit/main/"
                .to_string(),
        }
    }
}

/// An entry plus where it came from.
#[derive(Debug, Clone)]
pub struct RenderEntry {
    /// The retailer record.
    pub entry: Entry,
    /// Source file and last-modified time.
    pub source: EntrySource,
}

/// Renders the listing page for one schema.
#[derive(Debug, Clone)]
pub struct PageRenderer<'a> {
    chrome: &'a SiteChrome,
    columns: Vec<ColumnPlan>,
}

impl<'a> PageRenderer<'a> {
    /// Renderer using the standard formatter rules.
    pub fn new(schema: &SiteSchema, chrome: &'a SiteChrome) -> Self {
        Self::with_registry(schema, chrome, &FormatterRegistry::default())
    }

    /// Renderer using custom formatter rules.
    pub fn with_registry(
        schema: &SiteSchema,
        chrome: &'a SiteChrome,
        registry: &FormatterRegistry,
    ) -> Self {
        Self {
            chrome,
            columns: registry.plan(schema.columns()),
        }
    }

    /// Columns and their resolved formats, in schema order.
    pub fn columns(&self) -> &[ColumnPlan] {
        &self.columns
    }

    /// Render the complete document.
    ///
    /// `header` is trusted markup placed under the page title.
    ///
    /// # Errors
    ///
    /// Fails on the first entry that cannot be rendered, or if two entries
    /// share an anchor. No partial document is returned.
    pub fn render(&self, entries: &[RenderEntry], header: &Html) -> Result<String, RenderError> {
        let mut sorted: Vec<&RenderEntry> = entries.iter().collect();
        sort_by_name(&mut sorted, |e| e.entry.name.as_str());

        let anchors = AnchorSet::assign(sorted.iter().map(|e| e.entry.name.as_str()))?;

        let mut page = Html::new();
        self.render_head(&mut page);

        page.raw("<body>\n<header>\n<h1>")
            .text(&self.chrome.title)
            .raw("</h1>\n")
            .fragment(header)
            .raw("</header>\n<nav>\nJump To:\n");
        for (item, anchor) in sorted.iter().zip(anchors.as_slice()) {
            page.raw("<a href=\"#")
                .anchor(anchor)
                .raw("\">")
                .text(&item.entry.name)
                .raw("</a>\n");
        }
        page.raw("</nav>\n<main>\n<ol class=entries>\n");

        for (item, anchor) in sorted.iter().zip(anchors.as_slice()) {
            page.raw("<li id=\"").anchor(anchor).raw("\">\n");
            self.render_entry(&mut page, item)?;
            page.raw("</li>\n");
        }

        page.raw("</ol>\n</main>\n</body>\n</html>\n");

        tracing::debug!(
            entries = sorted.len(),
            columns = self.columns.len(),
            bytes = page.as_str().len(),
            "rendered listing page"
        );
        Ok(page.into_string())
    }

    fn render_head(&self, page: &mut Html) {
        page.raw("<!doctype html>\n<html lang=en-US>\n<head>\n")
            .raw("<meta charset=UTF-8>\n")
            .raw("<meta name=viewport content=\"width=device-width, initial-scale=1\">\n")
            .raw("<title>")
            .text(&self.chrome.title)
            .raw("</title>\n");
        for href in &self.chrome.stylesheets {
            page.raw("<link rel=stylesheet href=\"").text(href).raw("\">\n");
        }
        page.raw("</head>\n");
    }

    fn render_entry(&self, page: &mut Html, item: &RenderEntry) -> Result<(), RenderError> {
        let entry = &item.entry;
        // The schema restricts homepage to a hostname; AttrUrl still guards
        // against anything that would leave the attribute.
        let homepage = AttrUrl::parse(&format!("https://{}", entry.homepage))?;

        page.raw("<h2>")
            .text(&entry.name)
            .raw("</h2>\n<a href=\"")
            .url(&homepage)
            .raw("\">")
            .text(&entry.homepage)
            .raw("</a>\n<ul class=tags>");
        for tag in &entry.tags {
            page.raw("<li>").text(tag).raw("</li>");
        }
        page.raw("</ul>\n");

        self.render_widths(page, entry)?;

        if let Some(updated) = item.source.updated {
            page.raw("<p class=updated>Last Updated ")
                .text(&updated.to_long_date())
                .raw("</p>\n");
        }

        let edit = AttrUrl::parse(&format!("{}{}", self.chrome.edit_base, edit_path(&item.source)))?;
        page.raw("<p class=edit><a href=\"")
            .url(&edit)
            .raw("\">Edit data file on GitHub</a></p>\n");
        Ok(())
    }

    fn render_widths(&self, page: &mut Html, entry: &Entry) -> Result<(), RenderError> {
        page.raw("<table class=widths>\n<thead>\n<tr><th>Width</th>");
        for plan in &self.columns {
            page.raw("<th>").text(&plan.column.title).raw("</th>");
        }
        page.raw("</tr>\n</thead>\n<tbody>\n");

        for width in &entry.widths {
            page.raw("<tr><td>").text(&width.name).raw("</td>");
            for plan in &self.columns {
                let ctx = CellContext {
                    entry: &entry.name,
                    width: &width.name,
                    column: &plan.column.key,
                };
                let cell = plan.format.format(&ctx, width.attribute(&plan.column.key))?;
                page.raw("<td>").fragment(&cell).raw("</td>");
            }
            page.raw("</tr>\n");
        }

        page.raw("</tbody>\n</table>\n");
        Ok(())
    }
}

/// Entry file path for an edit URL, each segment percent-encoded.
fn edit_path(source: &EntrySource) -> String {
    source
        .segments()
        .iter()
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
