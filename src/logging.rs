#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

struct LineLogger;

impl log::Log for LineLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: LineLogger = LineLogger;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// Install the logger with a level taken from `SEABATTLE_LOG`.
/// Defaults to `info` if the variable is not set or invalid. Calling it twice
/// keeps the first logger.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
