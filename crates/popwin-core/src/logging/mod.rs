use tracing_subscriber::{
    EnvFilter,
    filter::{Directive, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Target prefix shared by the `popwin` binary and `popwin_core`.
const LOG_TARGET: &str = "popwin";

fn default_directive(quiet: bool) -> Directive {
    let level = if quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    };
    format!("{}={}", LOG_TARGET, level)
        .parse()
        .unwrap_or_else(|_| level.into())
}

/// Install the JSON log subscriber on stderr.
///
/// Quiet mode keeps only errors; otherwise info and above. `RUST_LOG` can add
/// further directives. Stdout is left alone for command output. Calling this
/// more than once is harmless: later calls keep the first subscriber.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(default_directive(quiet));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}
