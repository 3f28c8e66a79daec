//! # Render Errors
//!
//! Any of these aborts the whole build. The page is one document, so there
//! is no per-entry isolation.

use nws_core::CoreError;
use thiserror::Error;

/// Error while rendering the listing page.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A cell value has a shape its column's formatter cannot display.
    #[error("entry '{entry}', width '{width}', column '{column}': cannot display {found}")]
    UnexpectedValue {
        /// Entry name.
        entry: String,
        /// Width variant name.
        width: String,
        /// Column key.
        column: String,
        /// The offending value, as JSON.
        found: String,
    },

    /// A URL is not safe to place in an attribute unescaped.
    #[error("unsafe URL for attribute value: {url:?}")]
    UnsafeUrl {
        /// The rejected URL.
        url: String,
    },

    /// Entry anchors could not be assigned.
    #[error(transparent)]
    Anchor(#[from] CoreError),
}
