//! JSON output formatter for machine processing

use crate::output::OutputFormatter;
use crate::resolver::ResolveOutcome;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of the full result
#[derive(Serialize)]
struct JsonOutput<'a> {
    dependencies: Vec<JsonRecord<'a>>,
    errors: Vec<JsonError<'a>>,
}

/// JSON representation of one record
#[derive(Serialize)]
struct JsonRecord<'a> {
    name: &'a str,
    current: &'a str,
    latest: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

/// JSON representation of a failed lookup
#[derive(Serialize)]
struct JsonError<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &ResolveOutcome, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            dependencies: outcome
                .production()
                .chain(outcome.development())
                .map(|r| JsonRecord {
                    name: &r.name,
                    current: &r.current_version,
                    latest: &r.latest_version,
                    kind: r.kind.display_name(),
                })
                .collect(),
            errors: outcome
                .failures
                .iter()
                .map(|f| JsonError {
                    name: &f.name,
                    kind: f.kind.display_name(),
                    message: f.error.to_string(),
                })
                .collect(),
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}
