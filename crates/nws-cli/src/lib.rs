//! # nws-cli — Narrow-Width Shoes Site Tool
//!
//! Provides the `nws` command-line interface.
//!
//! ## Subcommands
//!
//! - `nws validate` — check every `entries/*.yml` against `schema.yml` and
//!   print a per-file violation report.
//! - `nws build` — validate, then render `index.html`.
//!
//! Neither subcommand takes arguments. Paths are fixed relative to the site
//! root (see [`site::SiteLayout`]).
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers live here and delegate to
//!   the library crates.
//! - Handlers return an exit code for expected failures (invalid entries)
//!   and an `anyhow::Error` for fatal ones.

pub mod build;
pub mod history;
pub mod output;
pub mod site;
pub mod validate;
