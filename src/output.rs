//! Result rendering (human and JSON)
//!
//! Rendering consumes the two result collections and never feeds back into
//! the extraction core.

use crate::scan::Harvest;
use crate::types::Severity;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn severity_color(severity: Severity) -> Option<Color> {
    match severity {
        Severity::Deny => Some(Color::Red),
        Severity::Warn => Some(Color::Yellow),
        Severity::Allow => Some(Color::Green),
        Severity::Deprecated => None,
    }
}

/// Prints a human-readable summary of the harvest to stdout.
pub fn print_human(harvest: &Harvest, color: ColorChoice) -> io::Result<()> {
    let mut out = StandardStream::stdout(color);

    for lint in &harvest.lints {
        write!(&mut out, "{:<40} ", lint.name.as_str())?;
        out.set_color(ColorSpec::new().set_fg(severity_color(lint.severity)))?;
        write!(&mut out, "{:<10}", lint.severity.to_string())?;
        out.reset()?;
        writeln!(&mut out, " {:<12} {}", lint.group, lint.source_file.display())?;
    }

    if !harvest.lints.is_empty() {
        writeln!(&mut out)?;
    }
    writeln!(
        &mut out,
        "{} lints, {} configuration options",
        harvest.lints.len(),
        harvest.conf.len()
    )?;

    for (lint, opt) in &harvest.conf {
        writeln!(
            &mut out,
            "  {}: {} (type {}, default {})",
            lint, opt.name, opt.ty, opt.default
        )?;
    }

    Ok(())
}

/// Prints the harvest as one pretty-printed JSON document on stdout.
pub fn print_json(harvest: &Harvest) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, harvest)?;
    writeln!(&mut out)?;
    Ok(())
}
