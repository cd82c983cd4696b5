//! Logger setup for the command-line front end.

use tracing_subscriber::EnvFilter;

/// Log verbosity accepted by `--log-level`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only errors.
    Error,
    /// Errors and warnings (trailing bytes, missing sections).
    Warn,
    /// Scan totals.
    Info,
    /// Every SYSTEM instruction as it is decoded.
    Debug,
    /// Everything.
    Trace,
}

impl LogLevel {
    const fn directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to every target.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
