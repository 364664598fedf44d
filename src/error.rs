//! Error types for lintdex
//!
//! This module defines the error hierarchy used throughout lintdex, with
//! specific variants for the per-file scanner, the configuration extractor,
//! and a top-level type the collector surfaces to callers.

use std::path::PathBuf;

/// Errors raised while scanning a single lint source file
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The forbidden legacy declaration marker was used.
    ///
    /// This is a contract violation in the scanned corpus itself and aborts
    /// the entire run with a distinct exit code.
    #[error(
        "{file}: don't use `declare_lint!` here, use `declare_clippy_lint!` instead"
    )]
    LegacyDeclaration { file: PathBuf },

    /// I/O error reading the file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while extracting the aggregate configuration block
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
    /// The designated file contains no configuration block.
    ///
    /// Callers rely on the configuration collection being present, so an
    /// absent block is a data-integrity error rather than a soft miss.
    #[error("no configuration block found in {file}")]
    MissingConfBlock { file: PathBuf },

    /// I/O error reading the designated file
    #[error("I/O error reading {file}: {source}")]
    Io {
        file: PathBuf,
        source: std::io::Error,
    },
}

/// Top-level error type for lintdex
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Scanner error
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Configuration extraction error
    #[error("Configuration error: {0}")]
    Conf(#[from] ConfError),

    /// Directory walk error
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// Invalid exclude glob pattern
    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        source: globset::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// True when the error is the fatal legacy-marker contract violation
    pub fn is_legacy_declaration(&self) -> bool {
        matches!(self, ExtractError::Scan(ScanError::LegacyDeclaration { .. }))
    }
}
