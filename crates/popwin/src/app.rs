use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("popwin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Open a secondary browser window and follow it until it closes")
        .long_about("popwin opens a URL in a dedicated browser window, watches it, and reports how it was closed: by the user, on timeout, or on shutdown. Closing popwin closes the window.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("open")
                .about("Open a window and wait until it is closed")
                .arg(
                    Arg::new("url")
                        .help("Destination URL")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("features")
                        .long("features")
                        .short('f')
                        .allow_hyphen_values(true)
                        .help("Feature string forwarded to the browser command as {features} (overrides config)")
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Window name; a live window with the same name is re-used (overrides config, default: _blank)")
                )
                .arg(
                    Arg::new("browser")
                        .long("browser")
                        .short('b')
                        .help("Browser command template, e.g. 'chromium --app={url}' (overrides config)")
                )
                .arg(
                    Arg::new("poll-interval-ms")
                        .long("poll-interval-ms")
                        .help("Interval between checks for a user-closed window (overrides config, default: 400)")
                        .value_parser(value_parser!(u64).range(1..=60_000))
                )
                .arg(
                    Arg::new("timeout-ms")
                        .long("timeout-ms")
                        .help("Close the window after this many milliseconds")
                        .value_parser(value_parser!(u64))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output the result in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("browsers")
                .about("List supported browsers and whether they are installed")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
