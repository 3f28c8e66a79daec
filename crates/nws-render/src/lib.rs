//! # nws-render — Schema-Driven Page Rendering
//!
//! Turns a schema and a list of entries into one complete HTML document.
//!
//! ## Escaping Boundary (`html`)
//!
//! All markup flows through [`Html`]. Literal markup can only be appended as
//! `&'static str`; entry-derived text is always escaped on the way in. The
//! only unescaped attribute values are [`AttrUrl`]s, which are checked for
//! characters that could break out of an attribute, and anchors, whose
//! alphabet is `[a-z-]` by construction.
//!
//! ## Cell Formatting (`format`)
//!
//! A [`FormatterRegistry`] maps each schema column to a [`CellFormat`], by
//! column key first and declared type second, falling back to an empty cell.
//! The mapping is resolved once per page, not per cell.
//!
//! ## Page Assembly (`page`)
//!
//! [`PageRenderer::render`] sorts entries by name, assigns anchors, and
//! emits the header, navigation, and one section per entry. The whole
//! document is built in memory; writing it is the caller's job.

pub mod error;
pub mod format;
pub mod html;
pub mod markdown;
pub mod page;

pub use error::RenderError;
pub use format::{CellContext, CellFormat, ColumnPlan, FormatterRegistry};
pub use html::{escape, AttrUrl, Html};
pub use markdown::markdown_to_html;
pub use page::{PageRenderer, RenderEntry, SiteChrome};
