use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Installs the log subscriber. `--debug` raises the default level from
/// `warn` to `debug`; `RUST_LOG` overrides both.
pub fn initialize_logging_from_args(matches: &clap::ArgMatches) {
    let default_level = if matches.is_present("debug") {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses an octal mode such as `755` or `0o750`.
pub fn parse_mode(value: &str) -> Result<u32> {
    let digits = value.trim_start_matches("0o");
    u32::from_str_radix(digits, 8)
        .ok()
        .filter(|mode| *mode <= 0o7777)
        .ok_or_else(|| Error::CliInputError(format!("invalid directory mode '{}'", value)))
}
