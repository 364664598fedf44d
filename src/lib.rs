#![forbid(unsafe_code)]

//! lintdex: lint metadata extraction
//!
//! lintdex scans a tree of lint definition sources and extracts structured
//! metadata: one record per lint declaration (name, severity group, preceding
//! doc-comment) and one record per tunable option in the aggregate
//! configuration block.

pub mod cli;
pub mod error;
pub mod output;
mod patterns;
pub mod scan;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfError, ExtractError, ScanError};

// Re-export the core results and entry points
pub use scan::{CollectOptions, Harvest, collect};
pub use types::{ConfOption, Lint, LintName, Severity};
