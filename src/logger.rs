//! Diagnostic logging to standard error.

use log::{LevelFilter, SetLoggerError};

/// Prefixes every message with a local timestamp and its level.
struct ScanLogger;

impl log::Log for ScanLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // stdout carries the report
            eprintln!(
                "[{}] {:<5} {}",
                chrono::Local::now().format("%a %Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: ScanLogger = ScanLogger;

/// Installs the stderr logger. Warnings and errors are always shown; scan
/// progress and skipped entries only with `debug`.
///
/// # Errors
///
/// Fails when a global logger is already installed, e.g. on a second call.
pub fn init_logger(debug: bool) -> Result<(), SetLoggerError> {
    let max_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}
