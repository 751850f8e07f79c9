//! # Airdrop Logging
//!
//! Standard Rust logging for the airdrop commitment crates.
//!
//! Library code logs through the `log` facade (`info!()`, `debug!()`, ...).
//! Binaries call [`init_logger`] once at startup to route records to stderr.
//! Until a logger is installed every macro is a cheap no-op.
//!
//! ## Usage
//!
//! ```rust
//! use airdrop_logging::{info, init_logger, LevelFilter};
//!
//! init_logger(LevelFilter::Info);
//! info!("Merkle root: 0x{}", "00");
//! ```
//!
//! ## Log Output Format
//!
//! Records are written as `target: [LEVEL] message`, e.g.
//! `airdrop_commitment::service: [INFO] Built commitment over 2 entitlements`.

use std::io::Write;
use std::sync::Once;

use log::{Log, Metadata, Record};

pub use log::{debug, error, info, log, log_enabled, trace, warn, Level, LevelFilter};

static STDERR_LOGGER: StderrLogger = StderrLogger;
static INIT: Once = Once::new();

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format_record(record.target(), record.level(), record.args());
            // A closed stderr is not worth failing the caller over.
            let _ = writeln!(std::io::stderr().lock(), "{line}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_record(target: &str, level: Level, args: &std::fmt::Arguments) -> String {
    let level_str = match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{target}: [{level_str}] {args}")
}

/// Install the stderr logger with the given maximum level.
///
/// The logger is installed on the first call only; later calls just update
/// the maximum level. If another `log` backend is already installed it is
/// left in place.
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        // Ignore the error if a logger was set elsewhere
        let _ = log::set_logger(&STDERR_LOGGER);
    });
    log::set_max_level(level);
}
