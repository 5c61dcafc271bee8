//! Tracing subscriber setup
//!
//! Diagnostics go to stderr so they never mix with table or JSON output on
//! stdout. `RUST_LOG` directives override the level chosen on the command
//! line.

use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: LevelFilter, ansi: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(ansi),
        )
        .with(filter)
        .try_init();
}
