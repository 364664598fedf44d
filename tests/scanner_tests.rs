//! File-level declaration scanner tests
//!
//! Each test writes a small lint source file into a temp directory and runs
//! the scanner over it, checking the documented scanning properties.

use lintdex::error::ScanError;
use lintdex::scan::scan_file;
use lintdex::types::{Lint, Severity};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn scan_str(content: &str) -> Result<Vec<Lint>, ScanError> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lints.rs");
    fs::write(&path, content).unwrap();

    let mut lints = Vec::new();
    scan_file(&path, &mut lints)?;
    Ok(lints)
}

#[test]
fn no_markers_emits_nothing() {
    let lints = scan_str(
        "use std::fmt;\n\nfn helper() -> bool {\n    true\n}\n",
    )
    .unwrap();
    assert!(lints.is_empty());
}

#[test]
fn doc_block_attaches_to_following_declaration() {
    let lints = scan_str(concat!(
        "/// **What it does:** Checks for things.\n",
        "///\n",
        "/// **Example:** `foo()`\n",
        "declare_clippy_lint! {\n",
        "    pub THING_CHECK,\n",
        "    perf,\n",
        "    \"checks for things\"\n",
        "}\n",
    ))
    .unwrap();

    assert_eq!(lints.len(), 1);
    let lint = &lints[0];
    assert_eq!(lint.name.as_str(), "thing_check");
    assert_eq!(lint.severity, Severity::Warn);
    assert_eq!(lint.group, "perf");
    assert_eq!(lint.doc.len(), 3);
    assert_eq!(lint.doc[0], "**What it does:** Checks for things.");
    assert_eq!(lint.doc[1], "");
    assert_eq!(lint.doc[2], "**Example:** `foo()`");
}

#[test]
fn blank_line_discards_doc_block() {
    let lints = scan_str(concat!(
        "/// Orphaned documentation.\n",
        "\n",
        "declare_clippy_lint! {\n",
        "    pub UNDOCUMENTED,\n",
        "    style,\n",
        "}\n",
    ))
    .unwrap();

    assert_eq!(lints.len(), 1);
    assert!(lints[0].doc.is_empty());
}

#[test]
fn deprecated_marker_wins_over_group_text() {
    let lints = scan_str(concat!(
        "/// Replaced by assert_eq!.\n",
        "declare_deprecated_lint! {\n",
        "    pub SHOULD_ASSERT_EQ,\n",
        "    correctness,\n",
        "}\n",
    ))
    .unwrap();

    assert_eq!(lints.len(), 1);
    assert_eq!(lints[0].severity, Severity::Deprecated);
    assert_eq!(lints[0].group, "deprecated");
    assert_eq!(lints[0].doc, vec!["Replaced by assert_eq!."]);
}

#[test]
fn unrecognized_group_emits_no_record() {
    let lints = scan_str(concat!(
        "declare_clippy_lint! {\n",
        "    pub MYSTERY,\n",
        "    unknown_group,\n",
        "}\n",
        "declare_clippy_lint! {\n",
        "    pub KNOWN,\n",
        "    cargo,\n",
        "}\n",
    ))
    .unwrap();

    // the abandoned declaration must not swallow the next one
    assert_eq!(lints.len(), 1);
    assert_eq!(lints[0].name.as_str(), "known");
    assert_eq!(lints[0].severity, Severity::Allow);
}

#[test]
fn unterminated_declaration_is_dropped() {
    let lints = scan_str(concat!(
        "declare_clippy_lint! {\n",
        "    pub CUT_OFF,\n",
    ))
    .unwrap();
    assert!(lints.is_empty());
}

#[test]
fn legacy_marker_aborts_the_scan() {
    let err = scan_str("declare_lint! {\n    pub OLD_STYLE,\n}\n").unwrap_err();
    assert!(matches!(err, ScanError::LegacyDeclaration { .. }));
}

#[test]
fn legacy_marker_error_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("offender.rs");
    fs::write(&path, "declare_lint! {\n").unwrap();

    let mut lints = Vec::new();
    let err = scan_file(&path, &mut lints).unwrap_err();
    match err {
        ScanError::LegacyDeclaration { file } => assert_eq!(file, path),
        other => panic!("expected LegacyDeclaration, got {:?}", other),
    }
}

#[test]
fn multiple_declarations_keep_source_order() {
    let lints = scan_str(concat!(
        "/// First lint.\n",
        "declare_clippy_lint! {\n",
        "    pub FIRST_LINT,\n",
        "    correctness,\n",
        "}\n",
        "\n",
        "/// Second lint.\n",
        "declare_clippy_lint! {\n",
        "    pub SECOND_LINT,\n",
        "    pedantic,\n",
        "}\n",
    ))
    .unwrap();

    let names: Vec<&str> = lints.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["first_lint", "second_lint"]);
    assert_eq!(lints[0].severity, Severity::Deny);
    assert_eq!(lints[1].severity, Severity::Allow);
}

#[test]
fn source_file_is_recorded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("methods.rs");
    fs::write(
        &path,
        "declare_clippy_lint! {\n    pub CHAINED_THING,\n    complexity,\n}\n",
    )
    .unwrap();

    let mut lints = Vec::new();
    scan_file(&path, &mut lints).unwrap();
    assert_eq!(lints.len(), 1);
    assert_eq!(lints[0].source_file, PathBuf::from(&path));
}

#[test]
fn indented_doc_comments_do_not_attach() {
    // the marker prefix must start the line; indented doc comments belong to
    // nested items and reset the pending run
    let lints = scan_str(concat!(
        "    /// Indented doc.\n",
        "declare_clippy_lint! {\n",
        "    pub PLAIN,\n",
        "    style,\n",
        "}\n",
    ))
    .unwrap();

    assert_eq!(lints.len(), 1);
    assert!(lints[0].doc.is_empty());
}
