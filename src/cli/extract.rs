//! The extraction command
//!
//! Collects lint metadata from the requested tree, renders the results in the
//! requested format, and maps errors to documented exit codes.

use crate::cli::args::{Cli, OutputFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_LEGACY_DECLARATION, EXIT_SUCCESS};
use crate::error::ExtractError;
use crate::output::{print_human, print_json};
use crate::scan::{CollectOptions, collect};

/// Runs the extraction and returns the process exit code.
pub fn run_extract(args: &Cli) -> i32 {
    match run_extract_inner(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_legacy_declaration() {
                EXIT_LEGACY_DECLARATION
            } else {
                EXIT_ERROR
            }
        }
    }
}

fn run_extract_inner(args: &Cli) -> Result<(), ExtractError> {
    let options = CollectOptions {
        conf_file: args.conf_file.clone(),
        exclude: args.exclude.clone(),
    };

    let harvest = collect(&args.root, &options)?;

    match args.format {
        OutputFormat::Human => print_human(&harvest, args.color.to_termcolor())?,
        OutputFormat::Json => print_json(&harvest)?,
    }

    Ok(())
}
