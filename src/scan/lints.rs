//! Per-file lint declaration scanner
//!
//! A two-state line machine: in COMMENT mode it accumulates trailing
//! doc-comment lines and watches for a declaration marker; in DECLARATION mode
//! it hunts for the lint name and then the group token, which may sit on later
//! lines because the macro wraps its arguments.
//!
//! The machine is an explicit value threaded through the pure [`step`]
//! function, so every transition can be unit tested without touching the
//! filesystem. [`scan_file`] is the I/O driver that owns the file handle and
//! the output collection.

use crate::error::ScanError;
use crate::patterns::{GROUP_RE, LINT_NAME_RE};
use crate::types::{Lint, LintName, Severity};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// Marker that opens an active lint declaration
const ACTIVE_MARKER: &str = "declare_clippy_lint!";
/// Marker that opens a deprecated lint declaration
const DEPRECATED_MARKER: &str = "declare_deprecated_lint!";
/// Forbidden legacy marker; using it aborts the whole run
const LEGACY_MARKER: &str = "declare_lint!";

/// Which construct the scanner is currently inside
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Between declarations, accumulating a candidate doc-comment run
    Comment,
    /// Inside a declaration marker, hunting for the name and then the group
    Declaration {
        deprecated: bool,
        /// Lowercased lint name once the name pattern has hit
        named: Option<LintName>,
    },
}

/// Scanner state threaded through [`step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    pub mode: ScanMode,
    /// Pending doc-comment run; discarded whenever a non-comment,
    /// non-declaration line interrupts it
    pub doc: Vec<String>,
}

impl ScanState {
    pub fn new() -> Self {
        ScanState {
            mode: ScanMode::Comment,
            doc: Vec::new(),
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// A declaration emitted by the state machine, before the source path is
/// attached by the driver
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedLint {
    pub name: LintName,
    pub severity: Severity,
    pub group: String,
    pub doc: Vec<String>,
}

/// What a single [`step`] produced
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// Nothing emitted; keep feeding lines
    Continue,
    /// A complete declaration. `malformed` is set when the group line also
    /// carried a closing brace, which means the declaration was missing its
    /// expected name line; the driver logs a warning and scanning continues.
    Emit { lint: ScannedLint, malformed: bool },
    /// The forbidden legacy marker was seen; the run must abort
    LegacyMarker,
}

/// Advances the scanner by one line.
///
/// Pure with respect to I/O: takes the current state and a raw line, returns
/// the next state and what (if anything) the line completed.
pub fn step(mut state: ScanState, line: &str) -> (ScanState, StepOutcome) {
    if state.mode == ScanMode::Comment {
        if let Some(rest) = line.strip_prefix("/// ") {
            state.doc.push(rest.to_string());
            return (state, StepOutcome::Continue);
        }
        if let Some(rest) = line.strip_prefix("///") {
            // blank or indented continuation lines keep their leading text
            state.doc.push(rest.to_string());
            return (state, StepOutcome::Continue);
        }
        if line.starts_with(LEGACY_MARKER) {
            return (state, StepOutcome::LegacyMarker);
        }
        if line.starts_with(DEPRECATED_MARKER) {
            state.mode = ScanMode::Declaration {
                deprecated: true,
                named: None,
            };
        } else if line.starts_with(ACTIVE_MARKER) {
            state.mode = ScanMode::Declaration {
                deprecated: false,
                named: None,
            };
        } else {
            // doc comments only attach to an immediately following declaration
            state.doc.clear();
            return (state, StepOutcome::Continue);
        }
        // the marker line itself may already carry the name; fall through
    }

    let ScanMode::Declaration { deprecated, named } = state.mode.clone() else {
        return (state, StepOutcome::Continue);
    };

    match named {
        None => {
            let Some(caps) = LINT_NAME_RE.captures(line) else {
                // arguments wrap across lines; retry on the next one
                return (state, StepOutcome::Continue);
            };
            let name = LintName::new(&caps["name"])
                .expect("name pattern only yields identifier characters");

            if deprecated {
                let lint = ScannedLint {
                    name,
                    severity: Severity::Deprecated,
                    group: "deprecated".to_string(),
                    doc: std::mem::take(&mut state.doc),
                };
                state.mode = ScanMode::Comment;
                return (
                    state,
                    StepOutcome::Emit {
                        lint,
                        malformed: false,
                    },
                );
            }

            // group search starts on the following line, never on this one
            state.mode = ScanMode::Declaration {
                deprecated,
                named: Some(name),
            };
            (state, StepOutcome::Continue)
        }
        Some(name) => {
            let Some(caps) = GROUP_RE.captures(line) else {
                return (state, StepOutcome::Continue);
            };
            let group = caps["group"].to_string();

            let outcome = match Severity::from_group(&group) {
                Some(severity) => StepOutcome::Emit {
                    lint: ScannedLint {
                        name,
                        severity,
                        group,
                        doc: std::mem::take(&mut state.doc),
                    },
                    malformed: line.contains('}'),
                },
                // unrecognized group: abandon the declaration silently
                None => StepOutcome::Continue,
            };

            state.doc.clear();
            state.mode = ScanMode::Comment;
            (state, outcome)
        }
    }
}

/// Scans one source file, appending every recognized declaration to `lints`.
///
/// The file handle is scoped to this call and released on every exit path,
/// including the fatal legacy-marker error. Declarations left unterminated at
/// end of file are silently dropped.
pub fn scan_file(path: &Path, lints: &mut Vec<Lint>) -> Result<(), ScanError> {
    let reader = BufReader::new(File::open(path)?);
    let mut state = ScanState::new();

    for line in reader.lines() {
        let line = line?;
        let (next, outcome) = step(state, &line);
        state = next;

        match outcome {
            StepOutcome::Continue => {}
            StepOutcome::LegacyMarker => {
                return Err(ScanError::LegacyDeclaration {
                    file: path.to_path_buf(),
                });
            }
            StepOutcome::Emit { lint, malformed } => {
                info!(
                    "found {} with severity {} in {}",
                    lint.name,
                    lint.severity,
                    path.display()
                );
                if malformed {
                    warn!("missing lint name in {}", path.display());
                }
                lints.push(Lint {
                    name: lint.name,
                    severity: lint.severity,
                    doc: lint.doc,
                    source_file: path.to_path_buf(),
                    group: lint.group,
                });
            }
        }
    }

    Ok(())
}
