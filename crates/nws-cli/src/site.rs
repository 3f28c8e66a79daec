//! # Site Layout
//!
//! Every input and output lives at a fixed path under the site root:
//!
//! | Path            | Role                               |
//! |-----------------|------------------------------------|
//! | `schema.yml`    | entry schema and column metadata   |
//! | `entries/*.yml` | one retailer per file              |
//! | `header.md`     | page header prose (CommonMark)     |
//! | `index.html`    | generated page                     |

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Schema file, relative to the site root.
pub const SCHEMA_FILE: &str = "schema.yml";
/// Entry file pattern, relative to the site root.
pub const ENTRIES_PATTERN: &str = "entries/*.yml";
/// Header Markdown, relative to the site root.
pub const HEADER_FILE: &str = "header.md";
/// Output page, relative to the site root.
pub const OUTPUT_FILE: &str = "index.html";

/// Resolved input and output paths for one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Site root directory.
    pub root: PathBuf,
    /// Path to the schema file.
    pub schema: PathBuf,
    /// Path to the header Markdown file.
    pub header: PathBuf,
    /// Path the page is written to.
    pub output: PathBuf,
}

impl SiteLayout {
    /// Standard layout under `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        Self {
            schema: root.join(SCHEMA_FILE),
            header: root.join(HEADER_FILE),
            output: root.join(OUTPUT_FILE),
            root,
        }
    }

    /// Walk up from `start` to the first directory containing both
    /// `schema.yml` and `entries/`.
    pub fn discover(start: &Path) -> Option<Self> {
        let mut dir = start;
        loop {
            if dir.join(SCHEMA_FILE).is_file() && dir.join("entries").is_dir() {
                return Some(Self::new(dir));
            }
            dir = dir.parent()?;
        }
    }

    /// Entry files, sorted by path.
    ///
    /// # Errors
    ///
    /// Fails if the root path cannot be turned into a glob pattern or a
    /// directory entry cannot be read.
    pub fn entry_files(&self) -> Result<Vec<PathBuf>> {
        let root = self
            .root
            .to_str()
            .with_context(|| format!("site root is not valid UTF-8: {}", self.root.display()))?;
        let pattern = format!("{}/{ENTRIES_PATTERN}", glob::Pattern::escape(root));

        let mut files = glob::glob(&pattern)
            .with_context(|| format!("invalid entry pattern: {pattern}"))?
            .collect::<Result<Vec<_>, _>>()
            .context("failed to list entry files")?;
        files.sort();
        Ok(files)
    }

    /// `path` relative to the site root, or unchanged if outside it.
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
