//! # Build Subcommand
//!
//! Validates every entry, renders the listing page, and writes it in one
//! step. Any failure aborts the build before `index.html` is touched.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use nws_core::{Entry, EntrySource};
use nws_render::{markdown_to_html, PageRenderer, RenderEntry, SiteChrome};

use crate::history::RevisionHistory;
use crate::output::write_atomic;
use crate::site::SiteLayout;
use crate::validate::{print_report, validate_entries};

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of entries on the page.
    pub entries: usize,
    /// Size of the page in bytes.
    pub bytes: usize,
    /// Where the page was written.
    pub output: PathBuf,
}

/// Execute the build subcommand.
///
/// # Errors
///
/// Fails if the schema cannot be loaded, any entry is invalid, a revision
/// history lookup fails, the header cannot be read, rendering fails, or the
/// page cannot be written.
pub fn run_build(
    layout: &SiteLayout,
    chrome: &SiteChrome,
    history: &dyn RevisionHistory,
) -> Result<BuildSummary> {
    let (schema, report) = validate_entries(layout)?;
    if !report.is_success() {
        print_report(&report, layout);
        bail!(
            "{} of {} entries failed validation",
            report.failures.len(),
            report.total()
        );
    }

    let mut entries = Vec::with_capacity(report.passed.len());
    for doc in report.passed {
        let relative = layout.relative(&doc.path).to_path_buf();
        let entry = Entry::from_value(doc.document, &relative.display().to_string())?;
        let updated = history.last_modified(&relative)?;
        tracing::debug!(
            entry = %entry.name,
            path = %relative.display(),
            updated = ?updated.map(|t| t.to_iso8601()),
            "loaded entry"
        );
        entries.push(RenderEntry {
            entry,
            source: EntrySource::new(relative).with_updated(updated),
        });
    }

    let header_source = std::fs::read_to_string(&layout.header)
        .with_context(|| format!("cannot read {}", layout.header.display()))?;
    let header = markdown_to_html(&header_source);

    let page = PageRenderer::new(&schema, chrome)
        .render(&entries, &header)
        .context("failed to render page")?;

    write_atomic(&layout.output, &page)?;

    tracing::info!(
        entries = entries.len(),
        bytes = page.len(),
        output = %layout.output.display(),
        "wrote page"
    );

    Ok(BuildSummary {
        entries: entries.len(),
        bytes: page.len(),
        output: layout.output.clone(),
    })
}
