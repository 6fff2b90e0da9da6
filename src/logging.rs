//! Logger setup for the `kindle-publishing` binary.
//!
//! The library itself only uses the `log` facade.

use flexi_logger::{DeferredNow, FlexiLoggerError, Logger, LoggerHandle};

/// Start a stderr logger with the given level spec (e.g. `"info"` or
/// `"info,kindle_publishing::queue=debug"`). Keep the returned handle alive
/// for as long as logging is needed.
pub fn init_logging(level_spec: Option<&str>) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_str(level_spec.unwrap_or("info"))?
        .format(compact_format)
        .start()
}

// "YYYY-MM-DD HH:MM:SS.fff INF message (worker/scheduler)"
fn compact_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &log::Record,
) -> Result<(), std::io::Error> {
    let level = match record.level() {
        log::Level::Error => "ERR",
        log::Level::Warn => "WRN",
        log::Level::Info => "INF",
        log::Level::Debug => "DBG",
        log::Level::Trace => "TRC",
    };
    write!(
        w,
        "{} {} {} ({})",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level,
        record.args(),
        short_target(record.target())
    )
}

/// `kindle_publishing::worker::scheduler` -> `worker/scheduler`
fn short_target(target: &str) -> String {
    let mut parts = target.split("::");
    let first = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();
    if rest.is_empty() {
        first.to_string()
    } else {
        rest.join("/")
    }
}
