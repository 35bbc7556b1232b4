use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use popwin_core::browser::{self, BrowserBackend};

#[derive(Serialize)]
struct BrowserEntry {
    name: &'static str,
    display_name: &'static str,
    installed: bool,
    executable: Option<&'static str>,
}

impl BrowserEntry {
    fn from_backend(backend: &dyn BrowserBackend) -> Self {
        let executable = backend.find_executable();
        Self {
            name: backend.name(),
            display_name: backend.display_name(),
            installed: executable.is_some(),
            executable,
        }
    }
}

pub(crate) fn handle_browsers_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    info!(event = "cli.browsers_started", json_output = json_output);

    let entries: Vec<BrowserEntry> = browser::all_browsers()
        .map(BrowserEntry::from_backend)
        .collect();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let status = match entry.executable {
                Some(exe) => format!("installed ({})", exe),
                None => "not installed".to_string(),
            };
            println!("{:<10} {:<15} {}", entry.name, entry.display_name, status);
        }
    }

    info!(
        event = "cli.browsers_completed",
        count = entries.len(),
        installed = entries.iter().filter(|e| e.installed).count()
    );
    Ok(())
}
