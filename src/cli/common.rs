//! Exit codes shared by the CLI

/// Successful extraction
pub const EXIT_SUCCESS: i32 = 0;

/// Any ordinary failure: I/O, walk errors, missing configuration block
pub const EXIT_ERROR: i32 = 2;

/// A legacy `declare_lint!` marker was found in the scanned corpus.
///
/// Distinct from ordinary failure so callers can tell the contract violation
/// apart from environmental problems.
pub const EXIT_LEGACY_DECLARATION: i32 = 42;
