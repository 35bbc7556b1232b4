use std::sync::Arc;
use std::time::Duration;

use clap::ArgMatches;
use serde::Serialize;
use tracing::{error, info, warn};

use popwin_core::browser;
use popwin_core::events;
use popwin_core::{
    CloseReason, CommandTemplate, OpenOutcome, ProcessHost, WindowController, WindowSpec,
};

use super::helpers::load_config_with_warning;

#[derive(Serialize)]
struct OpenReport<'a> {
    url: &'a str,
    name: &'a str,
    outcome: CloseReason,
}

/// How the wait for the window ended.
enum Exit {
    Closed(CloseReason),
    Timeout,
    Signal,
}

pub(crate) fn handle_open_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let url = matches
        .get_one::<String>("url")
        .ok_or("URL argument is required")?;
    if url.trim().is_empty() {
        eprintln!("URL cannot be empty");
        error!(event = "cli.open_invalid_url");
        return Err("URL cannot be empty".into());
    }

    let json_output = matches.get_flag("json");
    let config = load_config_with_warning();

    let features = matches
        .get_one::<String>("features")
        .map(String::as_str)
        .unwrap_or(config.window.features());
    let name = matches
        .get_one::<String>("name")
        .map(String::as_str)
        .unwrap_or(config.window.name());
    let poll_interval = matches
        .get_one::<u64>("poll-interval-ms")
        .map(|ms| Duration::from_millis(*ms))
        .unwrap_or(config.window.poll_interval());
    let timeout = matches
        .get_one::<u64>("timeout-ms")
        .map(|ms| Duration::from_millis(*ms));

    let mut browser_config = config.browser.clone();
    if let Some(command) = matches.get_one::<String>("browser") {
        browser_config.command = Some(command.clone());
    }

    let template = match browser::resolve_command(&browser_config) {
        Ok(template) => template,
        Err(e) => {
            eprintln!("Failed to pick a browser: {}", e);
            error!(event = "cli.open_failed", url = %url, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let spec = WindowSpec::new(url.as_str())
        .with_features(features)
        .with_name(name);

    info!(
        event = "cli.open_started",
        url = %spec.url(),
        name = %spec.name(),
        program = %template.program(),
        poll_interval_ms = millis(poll_interval),
        timeout_ms = timeout.map(millis)
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let reason = runtime.block_on(follow_window(
        template,
        spec.clone(),
        poll_interval,
        timeout,
        json_output,
    ))?;

    if json_output {
        let report = OpenReport {
            url: spec.url(),
            name: spec.name(),
            outcome: reason,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Window '{}' {}", spec.name(), reason);
    }

    info!(
        event = "cli.open_completed",
        url = %spec.url(),
        reason = ?reason
    );
    Ok(())
}

/// Open the window and wait until it closes, times out or we are interrupted.
async fn follow_window(
    template: CommandTemplate,
    spec: WindowSpec,
    poll_interval: Duration,
    timeout: Option<Duration>,
    json_output: bool,
) -> Result<CloseReason, Box<dyn std::error::Error>> {
    let program = template.to_string();
    let host = Arc::new(ProcessHost::new(template));
    let controller = WindowController::new(host, spec).with_poll_interval(poll_interval);

    if controller.open() == OpenOutcome::Blocked {
        let message = format!(
            "Failed to open window for '{}': browser command '{}' did not start",
            controller.spec().url(),
            program
        );
        eprintln!("{}", message);
        error!(
            event = "cli.open_failed",
            url = %controller.spec().url(),
            program = %program
        );
        return Err(message.into());
    }

    if !json_output {
        println!(
            "Opened window '{}' at {}",
            controller.spec().name(),
            controller.spec().url()
        );
    }

    let mut states = controller.subscribe();
    let exit = tokio::select! {
        state = states.wait_for(|state| !state.is_open()) => {
            let reason = state
                .ok()
                .and_then(|state| state.close_reason())
                .unwrap_or(CloseReason::ClosedByUser);
            Exit::Closed(reason)
        }
        _ = wait_for_timeout(timeout) => Exit::Timeout,
        _ = wait_for_shutdown_signal() => Exit::Signal,
    };

    let reason = match exit {
        Exit::Closed(reason) => reason,
        Exit::Timeout => {
            info!(event = "cli.open_timeout", url = %controller.spec().url());
            controller.close();
            CloseReason::Requested
        }
        Exit::Signal => {
            // Dropping the controller closes the window.
            drop(controller);
            CloseReason::Teardown
        }
    };

    Ok(reason)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

async fn wait_for_timeout(timeout: Option<Duration>) {
    match timeout {
        Some(timeout) => tokio::time::sleep(timeout).await,
        None => std::future::pending().await,
    }
}

/// Resolves on Ctrl-C. Never resolves if the handler cannot be installed.
async fn wait_for_shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            info!(event = "cli.signal_received", signal = "SIGINT");
        }
        Err(e) => {
            warn!(
                event = "cli.signal_handler_failed",
                error = %e,
                "Ctrl-C handler unavailable, window will only close on its own"
            );
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_for_timeout_elapses() {
        tokio::time::timeout(
            Duration::from_secs(1),
            wait_for_timeout(Some(Duration::from_millis(10))),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_wait_for_timeout_none_never_resolves() {
        let result =
            tokio::time::timeout(Duration::from_millis(20), wait_for_timeout(None)).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_millis_saturates() {
        assert_eq!(millis(Duration::from_millis(400)), 400);
        assert_eq!(millis(Duration::MAX), u64::MAX);
    }

    #[test]
    fn test_open_report_json() {
        let report = OpenReport {
            url: "https://example.com",
            name: "_blank",
            outcome: CloseReason::ClosedByUser,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["url"], "https://example.com");
        assert_eq!(json["name"], "_blank");
        assert_eq!(json["outcome"], "closed_by_user");
    }
}
