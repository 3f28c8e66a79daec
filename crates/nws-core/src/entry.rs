//! # Retailer Entries
//!
//! One [`Entry`] per file under `entries/`. The fixed fields every entry
//! carries are typed; the per-width attributes are kept as an ordered map of
//! raw JSON values because their set, names, and types are declared by the
//! site schema, not by this crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::temporal::Timestamp;

/// One retailer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display name. Drives sorting and anchor generation.
    pub name: String,
    /// Bare domain of the retailer's site. Always rendered as HTTPS.
    pub homepage: String,
    /// Short labels, in file order.
    pub tags: Vec<String>,
    /// Width variants, in file order.
    pub widths: Vec<WidthVariant>,
}

/// One row of an entry's widths table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidthVariant {
    /// Width designation, e.g. `B`, `D`, `2E`.
    pub name: String,
    /// Every other property of the row, keyed by schema column key.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl WidthVariant {
    /// Look up a column value. `None` means the property is absent.
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}

impl Entry {
    /// Build an entry from a parsed JSON document.
    ///
    /// `origin` labels the document in error messages (usually its path).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Entry`] when a fixed field is missing or has the
    /// wrong type. Validation normally catches this first; reaching this
    /// error means validation was skipped or the schema is too loose.
    pub fn from_value(value: Value, origin: &str) -> Result<Self, CoreError> {
        serde_json::from_value(value).map_err(|e| CoreError::Entry {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Where an entry came from. Used only when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySource {
    /// Path of the entry file relative to the site root, e.g. `entries/acme.yml`.
    pub path: PathBuf,
    /// Last time the file changed according to revision history, if known.
    pub updated: Option<Timestamp>,
}

impl EntrySource {
    /// Source with no revision information.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            updated: None,
        }
    }

    /// Attach a last-modified timestamp.
    pub fn with_updated(mut self, updated: Option<Timestamp>) -> Self {
        self.updated = updated;
        self
    }

    /// Path components in order, independent of the platform separator.
    pub fn segments(&self) -> Vec<String> {
        self.path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect()
    }
}
