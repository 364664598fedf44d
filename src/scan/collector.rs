//! Directory collector
//!
//! Walks a lint source tree, runs the declaration scanner over every `.rs`
//! file, then runs the configuration extractor once against the designated
//! aggregate file, and returns both result collections.

use crate::error::ExtractError;
use crate::scan::conf::extract_conf;
use crate::scan::lints::scan_file;
use crate::types::{ConfOption, Lint, LintName};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Conventional lint source tree scanned when no root is given
pub const DEFAULT_ROOT: &str = "clippy_lints/src";

/// Fixed path of the aggregate configuration file, relative to the root
pub const CONF_FILE: &str = "utils/conf.rs";

/// The two top-level results of a collection run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Harvest {
    /// Every recognized declaration, in traversal order
    pub lints: Vec<Lint>,
    /// Configuration options keyed by the lint they document
    pub conf: BTreeMap<LintName, ConfOption>,
}

/// Knobs for a collection run
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Overrides the designated configuration file (default `<root>/utils/conf.rs`)
    pub conf_file: Option<PathBuf>,
    /// Glob patterns for files to skip while scanning declarations
    pub exclude: Vec<String>,
}

/// Walks `root` and returns the combined extraction results.
///
/// Files are visited one at a time, in sorted traversal order, so two runs
/// over an unchanged tree yield identical results. The one fatal condition is
/// a legacy declaration marker anywhere in the tree, which aborts the whole
/// run; everything else either produces records or is dropped per the scanner
/// rules.
pub fn collect(root: &Path, options: &CollectOptions) -> Result<Harvest, ExtractError> {
    let exclude_set = build_exclude_set(&options.exclude)?;

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();

    let mut lints = Vec::new();
    for result in walker {
        let entry = result?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if exclude_set.is_match(path) {
            continue;
        }
        scan_file(path, &mut lints)?;
    }
    info!("got {} lints", lints.len());

    let conf_path = options
        .conf_file
        .clone()
        .unwrap_or_else(|| root.join(CONF_FILE));
    let conf = extract_conf(&conf_path)?;
    info!("got {} conf options", conf.len());

    Ok(Harvest { lints, conf })
}

/// Builds the exclude set, always folding in the `.git` directory
fn build_exclude_set(patterns: &[String]) -> Result<GlobSet, ExtractError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns.iter().map(String::as_str).chain(["**/.git/**"]) {
        let glob = Glob::new(pattern).map_err(|source| ExtractError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| ExtractError::InvalidGlob {
        pattern: "<globset>".to_string(),
        source,
    })
}
