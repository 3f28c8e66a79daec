//! # Validate Subcommand
//!
//! Checks every entry file against the schema and prints a report. Every
//! file is checked before exiting, and every violation in a failing file is
//! listed, so one run shows all the work needed.

use anyhow::{Context, Result};

use nws_schema::{EntryValidator, SchemaValidationError, SiteSchema, ValidationReport};

use crate::site::SiteLayout;

/// Execute the validate subcommand.
///
/// Returns exit code 0 if every entry conforms, 1 otherwise. A missing or
/// malformed schema is an `Err`.
pub fn run_validate(layout: &SiteLayout) -> Result<u8> {
    let (_schema, report) = validate_entries(layout)?;
    print_report(&report, layout);
    Ok(if report.is_success() { 0 } else { 1 })
}

/// Load the schema and validate every entry file.
pub(crate) fn validate_entries(layout: &SiteLayout) -> Result<(SiteSchema, ValidationReport)> {
    let schema = SiteSchema::load(&layout.schema).context("failed to load site schema")?;
    let validator = EntryValidator::new(&schema).context("failed to compile site schema")?;

    let files = layout.entry_files()?;
    tracing::info!(entries = files.len(), "validating entries");

    let report = validator.validate_all(&files);
    Ok((schema, report))
}

/// Print a summary line and one block per failing file.
pub(crate) fn print_report(report: &ValidationReport, layout: &SiteLayout) {
    println!("Entries: {}/{} passed", report.passed.len(), report.total());

    for failure in &report.failures {
        println!("  FAIL: {}", layout.relative(&failure.path).display());
        match &failure.error {
            SchemaValidationError::ValidationFailed { violations, .. } => {
                for violation in violations.violations() {
                    println!("  {violation}");
                }
            }
            other => println!("    {other}"),
        }
    }

    if !report.is_success() {
        println!(
            "\n{} entr{} failed validation out of {} total.",
            report.failures.len(),
            if report.failures.len() == 1 { "y" } else { "ies" },
            report.total()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
$schema: http://json-schema.org/draft-07/schema#
type: object
required: [name, homepage, tags, widths]
properties:
  name: {type: string}
  homepage: {type: string}
  tags: {type: array, items: {type: string}}
  widths:
    type: array
    items:
      type: object
      properties:
        name: {title: Width, type: string}
        waterproof: {title: Waterproof, type: boolean}
"#;

    fn site(entries: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("entries")).unwrap();
        std::fs::write(dir.path().join("schema.yml"), SCHEMA).unwrap();
        for (name, body) in entries {
            std::fs::write(dir.path().join("entries").join(name), body).unwrap();
        }
        dir
    }

    #[test]
    fn test_all_valid_exits_zero() {
        let dir = site(&[(
            "acme.yml",
            "name: Acme\nhomepage: acme.example\ntags: [boots]\nwidths: [{name: D}]\n",
        )]);
        assert_eq!(run_validate(&SiteLayout::new(dir.path())).unwrap(), 0);
    }

    #[test]
    fn test_any_invalid_exits_one_after_checking_all() {
        let dir = site(&[
            ("a.yml", "name: A\ntags: []\nwidths: []\n"),
            ("b.yml", "name: B\nhomepage: b.example\ntags: []\nwidths: [{name: D, waterproof: sure}]\n"),
            ("c.yml", "name: C\nhomepage: c.example\ntags: []\nwidths: []\n"),
        ]);
        let layout = SiteLayout::new(dir.path());
        let (_, report) = validate_entries(&layout).unwrap();
        assert_eq!(report.total(), 3);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(run_validate(&layout).unwrap(), 1);
    }

    #[test]
    fn test_unparseable_entry_is_reported_not_fatal() {
        let dir = site(&[("bad.yml", "name: [unterminated\n")]);
        assert_eq!(run_validate(&SiteLayout::new(dir.path())).unwrap(), 1);
    }

    #[test]
    fn test_missing_schema_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run_validate(&SiteLayout::new(dir.path())).is_err());
    }
}
