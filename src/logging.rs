//! Logging setup
//!
//! Log lines go to stderr so that stdout carries only the account report.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

static CRATE_NAME: &str = env!("CARGO_CRATE_NAME");

/// Install the global tracing subscriber
///
/// Other crates log at `warn`; this crate logs at the level chosen by
/// `verbosity`. `RUST_LOG` is not consulted.
pub fn set_up(verbosity: u8) {
    let filter = EnvFilter::new("warn").add_directive(
        format!("{}={}", CRATE_NAME, max_level(verbosity))
            .parse()
            .unwrap_or_else(|_| LevelFilter::WARN.into()),
    );

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(true)
        .init();
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
