//! # Schema Definition
//!
//! The site schema is a draft-07 JSON Schema written in YAML. Beyond
//! validating entries, it carries the display metadata for the widths
//! table: every property of `properties.widths.items.properties` other than
//! the row key becomes a [`Column`], with the property's `title` as the
//! header text and its `type` deciding how cells are formatted.
//!
//! Column order is the property declaration order in the file. The page
//! layout depends on it, so the schema is parsed into order-preserving maps.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::yaml::read_yaml_document;

/// Width-item property that identifies the row. Never rendered as a column.
pub const ROW_KEY: &str = "name";

/// Fatal problem with the schema itself.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema file could not be read or parsed.
    #[error("cannot load schema '{path}': {reason}")]
    Load {
        /// Schema file path.
        path: PathBuf,
        /// Read or parse failure.
        reason: String,
    },

    /// The schema does not conform to its JSON Schema meta-schema.
    #[error("schema is not a valid JSON Schema: {0}")]
    MetaSchema(String),

    /// The schema is valid JSON Schema but lacks the structure the site needs.
    #[error("schema shape error: {0}")]
    Shape(String),
}

/// Declared JSON type of a width column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// `type: boolean`
    Boolean,
    /// `type: string`
    String,
    /// `type: array`
    Array,
    /// Any other single type, a list of types, or no `type` keyword.
    Other,
}

impl ColumnKind {
    fn from_subschema(subschema: &Map<String, Value>) -> Self {
        match subschema.get("type").and_then(Value::as_str) {
            Some("boolean") => Self::Boolean,
            Some("string") => Self::String,
            Some("array") => Self::Array,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Boolean => "boolean",
            Self::String => "string",
            Self::Array => "array",
            Self::Other => "other",
        })
    }
}

/// One column of the widths table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Property key in each width item.
    pub key: String,
    /// Header text, from the property's `title`.
    pub title: String,
    /// Declared type, from the property's `type`.
    pub kind: ColumnKind,
}

/// The loaded site schema. Read-only after construction.
#[derive(Debug, Clone)]
pub struct SiteSchema {
    document: Value,
    columns: Vec<Column>,
}

impl SiteSchema {
    /// Load and check the schema file at `path`.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::Load`] if the file cannot be read or is not YAML.
    /// - [`SchemaError::MetaSchema`] if it is not a valid JSON Schema.
    /// - [`SchemaError::Shape`] if the widths item definition is missing or
    ///   malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let document = read_yaml_document(path).map_err(|reason| SchemaError::Load {
            path: path.to_path_buf(),
            reason,
        })?;
        let schema = Self::from_value(document)?;
        tracing::debug!(
            path = %path.display(),
            columns = schema.columns.len(),
            "loaded site schema"
        );
        Ok(schema)
    }

    /// Check an in-memory schema document and derive its columns.
    pub fn from_value(document: Value) -> Result<Self, SchemaError> {
        jsonschema::meta::validate(&document)
            .map_err(|e| SchemaError::MetaSchema(format!("{} at '{}'", e, e.instance_path)))?;
        let columns = derive_columns(&document)?;
        Ok(Self { document, columns })
    }

    /// Width columns in declaration order, excluding the row key.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The raw schema document.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

fn derive_columns(document: &Value) -> Result<Vec<Column>, SchemaError> {
    let properties = document
        .pointer("/properties/widths/items/properties")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            SchemaError::Shape("missing object at properties.widths.items.properties".to_string())
        })?;

    if !properties.contains_key(ROW_KEY) {
        return Err(SchemaError::Shape(format!(
            "width items must declare a '{ROW_KEY}' property"
        )));
    }

    properties
        .iter()
        .filter(|(key, _)| key.as_str() != ROW_KEY)
        .map(|(key, subschema)| {
            let subschema = subschema.as_object().ok_or_else(|| {
                SchemaError::Shape(format!("width property '{key}' is not an object"))
            })?;
            let title = subschema
                .get("title")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    SchemaError::Shape(format!("width property '{key}' has no string 'title'"))
                })?;
            Ok(Column {
                key: key.clone(),
                title: title.to_string(),
                kind: ColumnKind::from_subschema(subschema),
            })
        })
        .collect()
}
