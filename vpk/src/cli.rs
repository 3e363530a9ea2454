use clap;

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}

pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("vpk")
        .version(clap::crate_version!())
        .author(clap::crate_authors!())
        .about("Inspect and unpack the embedded view bundle")
        .setting(clap::AppSettings::SubcommandRequiredElseHelp)
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'").global(true))
        .subcommand(clap::SubCommand::with_name("list").about("List every embedded asset"))
        .subcommand(
            clap::SubCommand::with_name("show")
                .about("Display bundle resources")
                .setting(clap::AppSettings::SubcommandRequiredElseHelp)
                .subcommand(
                    clap::SubCommand::with_name("info")
                        .about("Show the metadata of an asset")
                        .arg(clap::Arg::from_usage("<NAME> 'Asset path inside the bundle'"))
                        .arg(clap::Arg::from_usage("--json 'Print the metadata as JSON'")),
                )
                .subcommand(
                    clap::SubCommand::with_name("dir")
                        .about("List the children of a bundle directory")
                        .arg(clap::Arg::from_usage(
                            "[PATH] 'Directory inside the bundle (defaults to the root)'",
                        )),
                ),
        )
        .subcommand(
            clap::SubCommand::with_name("cat")
                .about("Write the decompressed contents of an asset to stdout")
                .arg(clap::Arg::from_usage("<NAME> 'Asset path inside the bundle'")),
        )
        .subcommand(
            clap::SubCommand::with_name("verify")
                .about("Decompress every asset and check it against its recorded size"),
        )
        .subcommand(
            clap::SubCommand::with_name("restore")
                .about("Write assets to disk with their recorded permissions and timestamps")
                .arg(
                    clap::Arg::from_usage("--destination <output_folder> 'Folder to restore into'")
                        .required(true),
                )
                .arg(clap::Arg::from_usage(
                    "--dir-mode [mode] 'Octal mode for created directories (default 755)'",
                ))
                .arg(clap::Arg::from_usage(
                    "[PATH] 'Asset or directory inside the bundle (defaults to the whole bundle)'",
                )),
        )
}
