//! # Cell Formatting
//!
//! How a widths-table cell is displayed depends only on its column: the
//! column key, then the declared type, then a fallback. The registry below
//! holds those rules as data and resolves each column once.
//!
//! | Rule              | Format     | Output                                   |
//! |-------------------|------------|------------------------------------------|
//! | key `models`      | `Models`   | capitalized name, or a list of links     |
//! | type `boolean`    | `TriState` | `Yes`, `No`, or `?` when absent          |
//! | anything else     | `Blank`    | empty cell                               |
//!
//! `Blank` is deliberate: string and array columns have no generic display.
//! Extending the vocabulary means adding a [`CellFormat`] variant and a rule.

use std::collections::HashMap;

use nws_schema::{Column, ColumnKind};
use serde_json::Value;

use crate::error::RenderError;
use crate::html::{AttrUrl, Html};

/// Column key whose cells list shoe models.
pub const MODELS_KEY: &str = "models";

/// Identifies the cell being formatted, for error messages.
#[derive(Debug, Clone, Copy)]
pub struct CellContext<'a> {
    /// Entry name.
    pub entry: &'a str,
    /// Width variant name.
    pub width: &'a str,
    /// Column key.
    pub column: &'a str,
}

impl CellContext<'_> {
    fn unexpected(&self, found: &Value) -> RenderError {
        RenderError::UnexpectedValue {
            entry: self.entry.to_string(),
            width: self.width.to_string(),
            column: self.column.to_string(),
            found: found.to_string(),
        }
    }
}

/// A cell display strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    /// Three-valued boolean: `true` → `Yes`, `false` → `No`, absent → `?`.
    TriState,
    /// Model list: a string, capitalized, or `{name, page}` records as links.
    Models,
    /// No display: always an empty cell.
    Blank,
}

impl CellFormat {
    /// Format one cell's content. `None` means the property is absent.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::UnexpectedValue`] when the value has a shape
    /// this format cannot display, and [`RenderError::UnsafeUrl`] when a
    /// model page URL is unsafe.
    pub fn format(self, ctx: &CellContext<'_>, value: Option<&Value>) -> Result<Html, RenderError> {
        match self {
            Self::TriState => format_tri_state(ctx, value),
            Self::Models => format_models(ctx, value),
            Self::Blank => Ok(Html::new()),
        }
    }
}

fn format_tri_state(ctx: &CellContext<'_>, value: Option<&Value>) -> Result<Html, RenderError> {
    let display = match value {
        Some(Value::Bool(true)) => "Yes",
        Some(Value::Bool(false)) => "No",
        None | Some(Value::Null) => "?",
        Some(other) => return Err(ctx.unexpected(other)),
    };
    Ok(Html::from_text(display))
}

fn format_models(ctx: &CellContext<'_>, value: Option<&Value>) -> Result<Html, RenderError> {
    match value {
        None | Some(Value::Null) => Ok(Html::new()),
        Some(Value::String(name)) => Ok(Html::from_text(&capitalize(name))),
        Some(Value::Array(models)) => {
            let mut html = Html::new();
            html.raw("<ul class=models>");
            for model in models {
                let (Some(name), Some(page)) = (
                    model.get("name").and_then(Value::as_str),
                    model.get("page").and_then(Value::as_str),
                ) else {
                    return Err(ctx.unexpected(model));
                };
                html.raw("<li><a href=\"")
                    .url(&AttrUrl::parse(page)?)
                    .raw("\">")
                    .text(name)
                    .raw("</a></li>");
            }
            html.raw("</ul>");
            Ok(html)
        }
        Some(other) => Err(ctx.unexpected(other)),
    }
}

/// Upper-case the first character, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A schema column paired with its resolved format.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    /// The column.
    pub column: Column,
    /// How its cells are displayed.
    pub format: CellFormat,
}

/// Rules mapping columns to formats.
#[derive(Debug, Clone)]
pub struct FormatterRegistry {
    by_key: HashMap<String, CellFormat>,
    by_kind: HashMap<ColumnKind, CellFormat>,
    fallback: CellFormat,
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::empty()
            .with_key(MODELS_KEY, CellFormat::Models)
            .with_kind(ColumnKind::Boolean, CellFormat::TriState)
    }
}

impl FormatterRegistry {
    /// A registry with no rules; every column is `Blank`.
    pub fn empty() -> Self {
        Self {
            by_key: HashMap::new(),
            by_kind: HashMap::new(),
            fallback: CellFormat::Blank,
        }
    }

    /// Add a rule for one column key. Key rules beat type rules.
    pub fn with_key(mut self, key: impl Into<String>, format: CellFormat) -> Self {
        self.by_key.insert(key.into(), format);
        self
    }

    /// Add a rule for a declared column type.
    pub fn with_kind(mut self, kind: ColumnKind, format: CellFormat) -> Self {
        self.by_kind.insert(kind, format);
        self
    }

    /// The format for one column.
    pub fn resolve(&self, column: &Column) -> CellFormat {
        self.by_key
            .get(&column.key)
            .or_else(|| self.by_kind.get(&column.kind))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Resolve every column, keeping schema order.
    pub fn plan(&self, columns: &[Column]) -> Vec<ColumnPlan> {
        columns
            .iter()
            .map(|column| ColumnPlan {
                column: column.clone(),
                format: self.resolve(column),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CTX: CellContext<'static> = CellContext {
        entry: "Acme",
        width: "D",
        column: "waterproof",
    };

    fn column(key: &str, kind: ColumnKind) -> Column {
        Column {
            key: key.to_string(),
            title: key.to_string(),
            kind,
        }
    }

    fn render(format: CellFormat, value: Option<Value>) -> String {
        format.format(&CTX, value.as_ref()).unwrap().into_string()
    }

    #[test]
    fn test_tri_state_three_values() {
        assert_eq!(render(CellFormat::TriState, Some(json!(true))), "Yes");
        assert_eq!(render(CellFormat::TriState, Some(json!(false))), "No");
        assert_eq!(render(CellFormat::TriState, None), "?");
        assert_eq!(render(CellFormat::TriState, Some(Value::Null)), "?");
    }

    #[test]
    fn test_tri_state_rejects_non_boolean() {
        let err = CellFormat::TriState
            .format(&CTX, Some(&json!("yes")))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Acme") && msg.contains("waterproof"), "{msg}");
    }

    #[test]
    fn test_models_string_is_capitalized() {
        assert_eq!(render(CellFormat::Models, Some(json!("adidas"))), "Adidas");
        assert_eq!(render(CellFormat::Models, Some(json!("éclair"))), "Éclair");
        assert_eq!(render(CellFormat::Models, Some(json!("all models"))), "All models");
    }

    #[test]
    fn test_models_string_is_escaped() {
        assert_eq!(render(CellFormat::Models, Some(json!("<b>"))), "&lt;b&gt;");
    }

    #[test]
    fn test_models_list_renders_links_in_order() {
        let value = json!([
            {"name": "Model A", "page": "https://x/a"},
            {"name": "Model B & Co", "page": "https://x/b"}
        ]);
        assert_eq!(
            render(CellFormat::Models, Some(value)),
            "<ul class=models>\
             <li><a href=\"https://x/a\">Model A</a></li>\
             <li><a href=\"https://x/b\">Model B &amp; Co</a></li>\
             </ul>"
        );
    }

    #[test]
    fn test_models_absent_is_empty() {
        assert_eq!(render(CellFormat::Models, None), "");
    }

    #[test]
    fn test_models_rejects_malformed_record() {
        let value = json!([{"name": "Model A"}]);
        assert!(matches!(
            CellFormat::Models.format(&CTX, Some(&value)),
            Err(RenderError::UnexpectedValue { .. })
        ));
    }

    #[test]
    fn test_models_rejects_unsafe_page() {
        let value = json!([{"name": "Model A", "page": "https://x/\"><script>"}]);
        assert!(matches!(
            CellFormat::Models.format(&CTX, Some(&value)),
            Err(RenderError::UnsafeUrl { .. })
        ));
    }

    #[test]
    fn test_blank_ignores_value() {
        assert_eq!(render(CellFormat::Blank, Some(json!("anything"))), "");
        assert_eq!(render(CellFormat::Blank, None), "");
    }

    #[test]
    fn test_registry_key_beats_kind() {
        let registry = FormatterRegistry::default();
        assert_eq!(
            registry.resolve(&column("models", ColumnKind::Array)),
            CellFormat::Models
        );
        assert_eq!(
            registry.resolve(&column("models", ColumnKind::Boolean)),
            CellFormat::Models
        );
        assert_eq!(
            registry.resolve(&column("models", ColumnKind::Other)),
            CellFormat::Models
        );
    }

    #[test]
    fn test_registry_kind_and_fallback() {
        let registry = FormatterRegistry::default();
        assert_eq!(
            registry.resolve(&column("waterproof", ColumnKind::Boolean)),
            CellFormat::TriState
        );
        assert_eq!(
            registry.resolve(&column("notes", ColumnKind::String)),
            CellFormat::Blank
        );
        assert_eq!(
            registry.resolve(&column("sizes", ColumnKind::Array)),
            CellFormat::Blank
        );
    }

    #[test]
    fn test_plan_keeps_column_order() {
        let columns = vec![
            column("models", ColumnKind::Other),
            column("waterproof", ColumnKind::Boolean),
            column("notes", ColumnKind::String),
        ];
        let plan = FormatterRegistry::default().plan(&columns);
        let formats: Vec<CellFormat> = plan.iter().map(|p| p.format).collect();
        assert_eq!(
            formats,
            vec![CellFormat::Models, CellFormat::TriState, CellFormat::Blank]
        );
        assert_eq!(plan[1].column.key, "waterproof");
    }
}
