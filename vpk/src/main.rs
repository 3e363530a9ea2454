extern crate vpk;

use std::io;
use std::process::ExitCode;

use viewpack::Registry;
use vpk::error::Result;

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let registry = Registry::embedded()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    vpk::commands::run(matches, &registry, &mut out)
}

fn main() -> ExitCode {
    let matches = vpk::cli::parse_flags();
    vpk::utils::initialize_logging_from_args(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
