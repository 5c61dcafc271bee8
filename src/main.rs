//! depview - terminal table of package.json dependencies vs. latest npm versions

use clap::Parser;
use colored::Colorize;
use depview::cli::CliArgs;
use depview::manifest::read_manifest;
use depview::output::{create_formatter, tui, OutputConfig};
use depview::registry::{HttpClient, NpmRegistry};
use depview::resolver::Resolver;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    depview::logging::init(args.log_level(), !args.no_color);

    if args.no_color {
        colored::control::set_override(false);
    }

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let path = args.manifest_path();

    // An unusable manifest ends the run before any lookup or UI, with status 0
    let manifest = match read_manifest(&path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return Ok(ExitCode::SUCCESS);
        }
    };

    let client = HttpClient::with_timeout(args.request_timeout())?;
    let registry = NpmRegistry::with_base_url(client, &args.registry);
    let resolver = Resolver::new(Box::new(registry)).with_progress(!args.quiet);

    let entries = manifest.entries();
    info!(count = entries.len(), registry = %args.registry, "checking dependencies");
    let outcome = resolver.resolve(&entries).await;

    for failure in &outcome.failures {
        eprintln!("{}", failure.to_string().red());
    }

    let output_config = OutputConfig::from_cli(args.json, args.plain, args.no_color);
    match create_formatter(&output_config) {
        Some(formatter) => {
            let mut stdout = io::stdout().lock();
            formatter.format(&outcome, &mut stdout)?;
            stdout.flush()?;
        }
        None => tui::run(outcome.records)?,
    }

    Ok(ExitCode::SUCCESS)
}
