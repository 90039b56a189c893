//! Patterns command
//!
//! Prints the effective catalog so users can see what a scan will look for
//! and which descriptions the --disabled flag accepts.

use crate::catalog;
use crate::cli::Output;
use anyhow::Result;
use std::path::Path;

/// Execute the patterns command
pub fn execute(patterns_file: Option<&Path>, output: &Output) -> Result<()> {
    let definitions = match patterns_file {
        Some(path) => catalog::load_file(path)?,
        None => catalog::load_default()?,
    };

    output.header("Pattern catalog");
    for definition in &definitions {
        let mut notes = Vec::new();
        if let Some(verify) = &definition.verify {
            notes.push(format!("verify: {}", verify));
        }
        if !definition.ignore.is_empty() {
            notes.push(format!("ignores: {}", definition.ignore.join(", ")));
        }
        if let Some(flags) = &definition.flags {
            notes.push(format!("flags: {}", flags));
        }
        output.table_row(definition.name(), &notes.join("  "));
    }
    output.blank_line();
    output.info(&format!("{} patterns", definitions.len()));
    Ok(())
}
