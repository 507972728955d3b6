//! Structured logging for the command line front end.
//!
//! Logs go to stderr so that parsed output on stdout stays machine readable.
//! Records emitted by the parser through the `log` facade are forwarded to
//! the same subscriber.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `STRUCT_TAGS_LOG_LEVEL`
/// 3. Default configuration value
///
/// If a global subscriber is already installed the call does nothing.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();

    // The first subscriber wins.
    let _ = result;
}
