//! Output rendering for comparison records
//!
//! This module provides:
//! - Interactive terminal table (default)
//! - Plain text table for pipes and scripts
//! - JSON output for machine processing

mod json;
mod text;
pub mod tui;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use crate::resolver::ResolveOutcome;
use std::io::Write;

/// Table columns: title and display width
pub const COLUMNS: [(&str, u16); 4] = [
    ("Name", 30),
    ("Current Version", 15),
    ("Updated Version", 15),
    ("Type", 10),
];

/// Hint printed under the interactive table
pub const QUIT_HINT: &str = "Press q to exit";

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Interactive scrollable table
    #[default]
    Tui,
    /// Plain text table written once to stdout
    Text,
    /// JSON document written once to stdout
    Json,
}

/// Configuration for output rendering
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Output format (tui, text, json)
    pub format: OutputFormat,
    /// Whether to use colors in text output
    pub color: bool,
}

impl OutputConfig {
    /// Create configuration from CLI arguments
    pub fn from_cli(json: bool, plain: bool, no_color: bool) -> Self {
        let format = if json {
            OutputFormat::Json
        } else if plain {
            OutputFormat::Text
        } else {
            OutputFormat::Tui
        };

        Self {
            format,
            color: !no_color,
        }
    }
}

/// Trait for one-shot (non-interactive) formatters
pub trait OutputFormatter {
    /// Format and write the resolve outcome
    fn format(&self, outcome: &ResolveOutcome, writer: &mut dyn Write) -> std::io::Result<()>;
}

/// Create a one-shot formatter; `None` for the interactive table
pub fn create_formatter(config: &OutputConfig) -> Option<Box<dyn OutputFormatter>> {
    match config.format {
        OutputFormat::Tui => None,
        OutputFormat::Text => Some(Box::new(TextFormatter::new(config.color))),
        OutputFormat::Json => Some(Box::new(JsonFormatter::new())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Tui);
    }

    #[test]
    fn test_output_config_from_cli_default() {
        let config = OutputConfig::from_cli(false, false, false);
        assert_eq!(config.format, OutputFormat::Tui);
        assert!(config.color);
        assert!(create_formatter(&config).is_none());
    }

    #[test]
    fn test_output_config_from_cli_json() {
        let config = OutputConfig::from_cli(true, false, false);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(create_formatter(&config).is_some());
    }

    #[test]
    fn test_output_config_from_cli_plain() {
        let config = OutputConfig::from_cli(false, true, false);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(create_formatter(&config).is_some());
    }

    #[test]
    fn test_output_config_from_cli_no_color() {
        let config = OutputConfig::from_cli(false, true, true);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
    }

    #[test]
    fn test_columns() {
        let titles: Vec<_> = COLUMNS.iter().map(|(title, _)| *title).collect();
        assert_eq!(
            titles,
            vec!["Name", "Current Version", "Updated Version", "Type"]
        );
        let widths: Vec<_> = COLUMNS.iter().map(|(_, width)| *width).collect();
        assert_eq!(widths, vec![30, 15, 15, 10]);
    }
}
