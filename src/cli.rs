//! CLI argument parsing and command execution

pub mod args;
pub mod common;
pub mod extract;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, OutputFormat};
pub use extract::run_extract;
