use std::io::Write;
use std::path::Path;

use viewpack::{Registry, RestoreOptions};

use crate::error::{Error, Result};

/// Dispatches the parsed subcommand against `registry`, writing its report to
/// `out`.
pub fn run<W: Write>(matches: &clap::ArgMatches, registry: &Registry, out: &mut W) -> Result<()> {
    match matches.subcommand() {
        ("list", Some(_)) => crate::tree::list(registry, out),
        ("show", Some(cmd)) => match cmd.subcommand() {
            ("info", Some(c)) => {
                let name = required(c, "NAME")?;
                crate::assets::show_info(registry, name, c.is_present("json"), out)
            }
            ("dir", Some(c)) => crate::tree::show(registry, c.value_of("PATH").unwrap_or(""), out),
            (other, _) => Err(Error::CliInputError(format!(
                "invalid 'show' subcommand '{other}'. Use --help for details."
            ))),
        },
        ("cat", Some(cmd)) => crate::assets::cat(registry, required(cmd, "NAME")?, out),
        ("verify", Some(_)) => crate::assets::verify(registry, out),
        ("restore", Some(cmd)) => {
            let destination = required(cmd, "destination")?;
            let mut options = RestoreOptions::default();
            if let Some(mode) = cmd.value_of("dir-mode") {
                options.dir_mode = crate::utils::parse_mode(mode)?;
            }
            crate::recovery::restore(
                registry,
                cmd.value_of("PATH").unwrap_or(""),
                Path::new(destination),
                &options,
                out,
            )
        }
        (other, _) => Err(Error::CliInputError(format!(
            "unknown command '{other}'. Use --help for available commands."
        ))),
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, arg: &str) -> Result<&'a str> {
    matches
        .value_of(arg)
        .ok_or_else(|| Error::CliInputError(format!("{arg} is required.")))
}
