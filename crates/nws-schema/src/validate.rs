//! # Entry Validation
//!
//! Runtime validation of YAML entries against the site schema (draft-07).
//!
//! ## Exhaustive Diagnostics
//!
//! Every violation in a document is reported, each with the JSON Pointer of
//! the failing location, the schema keyword that rejected it, a coarse
//! [`ViolationKind`], and a human-readable message. Across files,
//! [`EntryValidator::validate_all`] keeps going after a failing file so the
//! final report covers the whole dataset.
//!
//! ## Schema Resolution
//!
//! Internal `$ref`s (`#/definitions/<name>`) are resolved by the
//! `jsonschema` crate. Any other `$ref` is refused by [`OfflineRetriever`];
//! builds never touch the network.

use std::fmt;
use std::path::{Path, PathBuf};

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, Retrieve, Uri, Validator};
use serde_json::Value;
use thiserror::Error;

use crate::schema::SiteSchema;
use crate::yaml::read_yaml_document;

/// Retriever that refuses every external schema reference.
struct OfflineRetriever;

impl Retrieve for OfflineRetriever {
    fn retrieve(
        &self,
        uri: &Uri<&str>,
    ) -> Result<Value, Box<dyn std::error::Error + Send + Sync>> {
        Err(format!("external schema reference '{}' is not allowed", uri.as_str()).into())
    }
}

/// Error during entry validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("'{path}' failed validation:\n{violations}")]
    ValidationFailed {
        /// Path of the failing document.
        path: String,
        /// Every violation found in the document.
        violations: ValidationViolations,
    },

    /// The document file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The schema could not be compiled into a validator.
    #[error("validator build error: {reason}")]
    ValidatorBuild {
        /// Reason the validator could not be built.
        reason: String,
    },
}

/// Coarse classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Value has the wrong JSON type.
    Type,
    /// A required property is missing.
    Required,
    /// Value is not one of the allowed options.
    Enum,
    /// String does not match its declared `format`.
    Format,
    /// Object has a property the schema does not allow.
    AdditionalProperty,
    /// Any other keyword (length, pattern, item counts, combinators).
    Other,
}

impl ViolationKind {
    fn of(kind: &ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::Type { .. } => Self::Type,
            ValidationErrorKind::Required { .. } => Self::Required,
            ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => Self::Enum,
            ValidationErrorKind::Format { .. } => Self::Format,
            ValidationErrorKind::AdditionalProperties { .. } => Self::AdditionalProperty,
            _ => Self::Other,
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// JSON Pointer path to the violating value in the entry.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Classification of the failure.
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations. Empty means the document is valid.
#[derive(Debug, Clone, Default)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

/// A document that passed validation, with the path it was read from.
#[derive(Debug, Clone)]
pub struct ValidatedDocument {
    /// Path of the entry file.
    pub path: PathBuf,
    /// Parsed document.
    pub document: Value,
}

/// A file that failed to load or validate.
#[derive(Debug)]
pub struct FileFailure {
    /// Path of the entry file.
    pub path: PathBuf,
    /// What went wrong.
    pub error: SchemaValidationError,
}

/// Outcome of validating a set of entry files.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Files that loaded and conformed, in input order.
    pub passed: Vec<ValidatedDocument>,
    /// Files that did not, in input order.
    pub failures: Vec<FileFailure>,
}

impl ValidationReport {
    /// Number of files checked.
    pub fn total(&self) -> usize {
        self.passed.len() + self.failures.len()
    }

    /// Returns true if every file conformed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Validator for entry documents, compiled once from the site schema.
pub struct EntryValidator {
    validator: Validator,
}

impl fmt::Debug for EntryValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryValidator").finish_non_exhaustive()
    }
}

impl EntryValidator {
    /// Compile the site schema.
    ///
    /// Format assertions (`hostname`, `uri`, ...) are enabled.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::ValidatorBuild`] if the schema cannot
    /// be compiled, e.g. because it references an external schema.
    pub fn new(schema: &SiteSchema) -> Result<Self, SchemaValidationError> {
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .should_validate_formats(true)
            .with_retriever(OfflineRetriever)
            .build(schema.document())
            .map_err(|e| SchemaValidationError::ValidatorBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Collect every violation in `instance`.
    pub fn validate(&self, instance: &Value) -> ValidationViolations {
        let violations = self
            .validator
            .iter_errors(instance)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                kind: ViolationKind::of(&e.kind),
                message: e.to_string(),
            })
            .collect();
        ValidationViolations { violations }
    }

    /// Load a YAML entry file and validate it, returning the parsed document.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaValidationError::DocumentLoad`] if the file cannot be
    /// read or parsed, and [`SchemaValidationError::ValidationFailed`] with
    /// every violation if it does not conform.
    pub fn validate_file(&self, path: &Path) -> Result<Value, SchemaValidationError> {
        let document =
            read_yaml_document(path).map_err(|reason| SchemaValidationError::DocumentLoad {
                path: path.display().to_string(),
                reason,
            })?;

        let violations = self.validate(&document);
        if violations.is_empty() {
            Ok(document)
        } else {
            Err(SchemaValidationError::ValidationFailed {
                path: path.display().to_string(),
                violations,
            })
        }
    }

    /// Validate every file, never stopping early.
    pub fn validate_all<I, P>(&self, paths: I) -> ValidationReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = ValidationReport::default();
        for path in paths {
            let path = path.as_ref();
            match self.validate_file(path) {
                Ok(document) => report.passed.push(ValidatedDocument {
                    path: path.to_path_buf(),
                    document,
                }),
                Err(error) => {
                    tracing::debug!(path = %path.display(), "entry failed validation");
                    report.failures.push(FileFailure {
                        path: path.to_path_buf(),
                        error,
                    });
                }
            }
        }
        report
    }
}
