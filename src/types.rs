#![forbid(unsafe_code)]

//! Core domain types for lintdex
//!
//! This module defines the records produced by the extraction engine and the
//! severity model they are classified under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity a lint is enforced at, derived from its group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Deny,
    Warn,
    Allow,
    Deprecated,
}

impl Severity {
    /// Maps a group token to its severity.
    ///
    /// Returns None for tokens outside the fixed table; the scanner drops
    /// declarations with unrecognized groups.
    pub fn from_group(group: &str) -> Option<Self> {
        match group {
            "correctness" => Some(Severity::Deny),
            "style" | "complexity" | "perf" => Some(Severity::Warn),
            "restriction" | "pedantic" | "nursery" | "cargo" => Some(Severity::Allow),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Deny => "deny",
            Severity::Warn => "warn",
            Severity::Allow => "allow",
            Severity::Deprecated => "deprecated",
        };
        write!(f, "{}", s)
    }
}

/// A validated, lowercase lint identifier
///
/// Lint names are lowercased on construction and must be non-empty, containing
/// only ASCII alphanumerics and underscores. `Ord` is derived so the name can
/// key a `BTreeMap` with deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LintName(String);

impl LintName {
    /// Creates a new LintName, lowercasing and validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into().to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return None;
        }
        Some(LintName(name))
    }

    /// Returns the lint name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LintName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LintName::new(value).ok_or_else(|| "Invalid lint name".to_string())
    }
}

impl From<LintName> for String {
    fn from(name: LintName) -> Self {
        name.0
    }
}

/// One extracted lint declaration
///
/// Created once per recognized declaration and never mutated afterwards.
/// `doc` holds exactly the contiguous run of doc-comment lines immediately
/// preceding the declaration, marker prefix stripped; a run interrupted by
/// any other line is discarded before the declaration is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lint {
    /// Lowercase lint identifier
    pub name: LintName,
    /// Severity mapped from the group token
    pub severity: Severity,
    /// Raw doc lines, in source order
    pub doc: Vec<String>,
    /// File the declaration was found in
    pub source_file: PathBuf,
    /// Raw group token ("deprecated" for deprecated declarations)
    pub group: String,
}

/// One tunable option mined from the aggregate configuration block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfOption {
    /// Hyphenated option name as users write it
    pub name: String,
    /// Raw type token text
    pub ty: String,
    /// Single description line
    pub doc: String,
    /// Raw default-value expression, preserved verbatim
    pub default: String,
}
