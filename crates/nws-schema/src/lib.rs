//! # nws-schema — Site Schema & Entry Validation
//!
//! One schema file drives both validation and rendering. This crate owns
//! loading it and checking entries against it.
//!
//! ## Schema Definition (`schema`)
//!
//! [`SiteSchema::load`] reads `schema.yml`, checks it against its JSON
//! Schema meta-schema, and derives the ordered width [`Column`]s the
//! renderer turns into table headers. A schema that fails any of these
//! steps is fatal; there is no partial-schema mode.
//!
//! ## Validation (`validate`)
//!
//! [`EntryValidator`] compiles the schema once and reports **every**
//! violation in a document, not just the first, so a data author can fix
//! a file in one pass. [`EntryValidator::validate_all`] does the same
//! across files, collecting a [`ValidationReport`].
//!
//! ## Crate Policy
//!
//! - No network access: `$ref`s outside the schema document are refused.
//! - Validation is deterministic and single-pass.

pub mod schema;
pub mod validate;
pub mod yaml;

pub use schema::{Column, ColumnKind, SchemaError, SiteSchema, ROW_KEY};
pub use validate::{
    EntryValidator, FileFailure, SchemaValidationError, ValidatedDocument, ValidationReport,
    ValidationViolations, Violation, ViolationKind,
};
pub use yaml::{read_yaml_document, yaml_to_json_value};
