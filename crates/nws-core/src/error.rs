//! # Error Types
//!
//! Errors raised while building core values: entries that do not match the
//! Rust data model, anchors that cannot identify an entry, and timestamps
//! that cannot be parsed.

use thiserror::Error;

/// Top-level error type for `nws-core`.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two entry names produce the same fragment anchor.
    #[error("anchor collision: '{first}' and '{second}' both map to '#{anchor}'")]
    AnchorCollision {
        /// The shared anchor.
        anchor: String,
        /// Name that claimed the anchor first.
        first: String,
        /// Name that collided with it.
        second: String,
    },

    /// An entry name has no characters that survive anchor normalization.
    #[error("entry name '{name}' produces an empty anchor")]
    EmptyAnchor {
        /// The offending entry name.
        name: String,
    },

    /// A parsed document does not have the shape of an entry.
    #[error("entry '{path}' has an unexpected shape: {reason}")]
    Entry {
        /// Source of the entry (file path or label).
        path: String,
        /// Deserialization failure.
        reason: String,
    },

    /// A timestamp could not be parsed.
    #[error("timestamp error: {0}")]
    Timestamp(String),
}
