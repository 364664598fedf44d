//! Aggregate configuration block extractor
//!
//! All tunable options live in one well-known block inside a single designated
//! file. The extractor isolates that block, then mines one record per entry,
//! keyed by the lowercase name of the lint the entry documents.

use crate::error::ConfError;
use crate::patterns::{CONF_BLOCK_RE, CONF_ENTRY_RE};
use crate::types::{ConfOption, LintName};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extracts the configuration mapping from the designated file.
///
/// Returns `ConfError::MissingConfBlock` when the file holds no configuration
/// block; the caller relies on this collection existing, so absence is a hard
/// error rather than an empty result. Later entries for the same lint
/// overwrite earlier ones.
pub fn extract_conf(path: &Path) -> Result<BTreeMap<LintName, ConfOption>, ConfError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfError::Io {
        file: path.to_path_buf(),
        source,
    })?;

    let block = CONF_BLOCK_RE
        .captures(&contents)
        .ok_or_else(|| ConfError::MissingConfBlock {
            file: path.to_path_buf(),
        })?;
    let body = &block["body"];

    let mut conf = BTreeMap::new();
    for entry in CONF_ENTRY_RE.captures_iter(body) {
        // name-keyed capture groups; the lint field keys the mapping
        let Some(lint) = LintName::new(&entry["lint"]) else {
            continue;
        };
        let option = ConfOption {
            name: entry["name"].replace('_', "-"),
            ty: entry["ty"].to_string(),
            doc: entry["doc"].to_string(),
            default: entry["default"].to_string(),
        };
        debug!("conf option {} for {}", option.name, lint);
        conf.insert(lint, option);
    }

    Ok(conf)
}
