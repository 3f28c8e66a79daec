//! # nws-core — Foundational Types for the Narrow-Width Shoes Site
//!
//! Defines the data model shared by the schema validator and the page
//! renderer. It depends on nothing internal.
//!
//! ## Key Types
//!
//! - [`Entry`] / [`WidthVariant`] — one retailer record and its width rows.
//!   Width attributes stay as raw JSON values so rendering can dispatch on
//!   the schema rather than on Rust field names.
//! - [`EntrySource`] — file path and last-modified time attached after load.
//! - [`Anchor`] — URL-fragment-safe identifier derived from an entry name.
//! - [`collate::compare_names`] — case-insensitive, accent-aware ordering.
//! - [`Timestamp`] — UTC-only, seconds-precision timestamp.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nws-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod anchor;
pub mod collate;
pub mod entry;
pub mod error;
mod fold;
pub mod temporal;

pub use anchor::{Anchor, AnchorSet};
pub use collate::{compare_names, sort_by_name};
pub use entry::{Entry, EntrySource, WidthVariant};
pub use error::CoreError;
pub use temporal::Timestamp;
