//! Text output formatter for human-readable display
//!
//! Writes the same four columns as the interactive table, padded to the
//! column widths, production rows first.

use crate::domain::ComparisonRecord;
use crate::output::{OutputFormatter, COLUMNS};
use crate::resolver::ResolveOutcome;
use colored::Colorize;
use std::io::Write;

/// Text formatter for plain table output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Pad each cell to its column width, separated by a space
    fn row(cells: [&str; 4]) -> String {
        let mut line = String::new();
        for (i, (cell, (_, width))) in cells.iter().zip(COLUMNS.iter()).enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&format!("{:<width$}", cell, width = *width as usize));
        }
        line.trim_end().to_string()
    }

    fn header(&self) -> String {
        let header = Self::row(COLUMNS.map(|(title, _)| title));
        if self.color {
            header.bold().bright_blue().to_string()
        } else {
            header
        }
    }

    fn write_record(&self, record: &ComparisonRecord, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", Self::row(record.cells()))
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, outcome: &ResolveOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header())?;

        for record in outcome.production().chain(outcome.development()) {
            self.write_record(record, writer)?;
        }

        Ok(())
    }
}
