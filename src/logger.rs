use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

/// Env var selecting the log level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_ENV: &str = "UBUNTU_HEADERS_LOG";

/// Minimal `log` backend writing `[LEVEL] target: message` lines to stderr,
/// so stdout stays clean for the JSON output.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(
                std::io::stderr().lock(),
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger; the level comes from [`LOG_ENV`].
pub fn init() -> Result<(), log::SetLoggerError> {
    let level = level_from(std::env::var(LOG_ENV).ok().as_deref());
    log::set_boxed_logger(Box::new(StderrLogger { level }))
        .map(|()| log::set_max_level(level))
}
