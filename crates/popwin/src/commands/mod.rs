use clap::ArgMatches;
use tracing::error;

use popwin_core::events;

pub mod helpers;

mod browsers;
mod open;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("open", sub_matches)) => open::handle_open_command(sub_matches),
        Some(("browsers", sub_matches)) => browsers::handle_browsers_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
