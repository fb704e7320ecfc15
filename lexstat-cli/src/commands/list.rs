//! List command implementation

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;

use super::ListCommands;
use crate::output::OutputFormat;

/// Print the requested listing to `out`
pub fn execute<W: Write>(subcommand: &ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Languages => {
            writeln!(out, "Available languages:")?;
            for (code, name) in lexstat_core::language::available_languages() {
                let marker = if code == lexstat_core::language::DEFAULT_LANGUAGE {
                    " (default)"
                } else {
                    ""
                };
                writeln!(out, "  {code:<4} {name}{marker}")?;
            }
        }
        ListCommands::Formats => {
            writeln!(out, "Available output formats:")?;
            for format in OutputFormat::value_variants() {
                if let Some(value) = format.to_possible_value() {
                    let help = value.get_help().map(ToString::to_string).unwrap_or_default();
                    writeln!(out, "  {:<6} {help}", value.get_name())?;
                }
            }
        }
    }
    Ok(())
}
