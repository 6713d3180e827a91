//! Logging setup for the command line tool.

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// The filter honours the usual environment override and defaults to
/// `info` (`debug` with `--verbose`). `colors` of `None` auto-detects a
/// terminal on stderr.
pub fn setup_stderr_logging(verbose: bool, colors: Option<bool>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let ansi = colors.unwrap_or_else(|| atty::is(atty::Stream::Stderr));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .init();
}
