//! # Fragment Anchors
//!
//! Every entry gets an element id derived from its name, and the navigation
//! bar links to it with `#<id>`. Both sides must use the same [`Anchor`]
//! value, so the derivation lives here and nowhere else.
//!
//! ## Derivation
//!
//! 1. Unicode canonical decomposition (NFD), then drop combining marks, so
//!    accented Latin letters fall back to their base letter (`é` → `e`).
//!    Letters without a decomposition are spelled out (`ø` → `o`, `ß` → `ss`).
//! 2. Lowercase.
//! 3. Drop every character outside `[a-z ]`.
//! 4. Collapse each run of spaces into a single `-`.
//!
//! The result only ever contains `[a-z-]`, so it is safe to place in an
//! attribute value without escaping.

use std::collections::HashMap;
use std::fmt;

use crate::error::CoreError;
use crate::fold::fold_name;

/// A URL-fragment-safe identifier derived from an entry name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Anchor(String);

impl Anchor {
    /// Derive the anchor for an entry name.
    ///
    /// The result may be empty when the name contains no Latin letters;
    /// [`AnchorSet::assign`] rejects that case.
    pub fn from_name(name: &str) -> Self {
        let folded: String = fold_name(name)
            .chars()
            .filter(|c| c.is_ascii_lowercase() || *c == ' ')
            .collect();

        let mut id = String::with_capacity(folded.len());
        let mut in_spaces = false;
        for c in folded.chars() {
            if c == ' ' {
                if !in_spaces {
                    id.push('-');
                }
                in_spaces = true;
            } else {
                id.push(c);
                in_spaces = false;
            }
        }
        Self(id)
    }

    /// The identifier text, without a leading `#`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if normalization removed every character.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Anchors for a whole page, checked for uniqueness.
#[derive(Debug, Clone, Default)]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
}

impl AnchorSet {
    /// Derive one anchor per name, in input order.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyAnchor`] if a name yields an empty anchor.
    /// - [`CoreError::AnchorCollision`] if two names yield the same anchor,
    ///   e.g. names that differ only by case or accents.
    pub fn assign<'a, I>(names: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claimed: HashMap<Anchor, &'a str> = HashMap::new();
        let mut anchors = Vec::new();

        for name in names {
            let anchor = Anchor::from_name(name);
            if anchor.is_empty() {
                return Err(CoreError::EmptyAnchor {
                    name: name.to_string(),
                });
            }
            if let Some(first) = claimed.get(&anchor) {
                return Err(CoreError::AnchorCollision {
                    anchor: anchor.0,
                    first: (*first).to_string(),
                    second: name.to_string(),
                });
            }
            claimed.insert(anchor.clone(), name);
            anchors.push(anchor);
        }

        Ok(Self { anchors })
    }

    /// Anchors in the order their names were given.
    pub fn as_slice(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Number of anchors.
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    /// Returns true if no anchors were assigned.
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }
}
