use std::{
    fmt,
    io::{self, Write},
    sync::OnceLock,
};

use chrono::Local;
use log::{Level, Metadata, Record, SetLoggerError};
use serde::Serialize;

use crate::settings::{LogFormat, Settings};

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Serialize, Debug, PartialEq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl Entry {
    fn from_record(record: &Record) -> Self {
        Self {
            time: Local::now().format("%b %d %H:%M:%S").to_string(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        }
    }

    pub fn render(&self, format: LogFormat) -> String {
        match format {
            LogFormat::Text => self.to_string(),
            LogFormat::Json => serde_json::to_string(self).unwrap_or_else(|_| self.to_string()),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:<5} {}: {}",
            self.time, self.level, self.target, self.message
        )
    }
}

#[allow(dead_code)]
#[derive(Serialize)]
#[serde(remote = "Level")]
enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(settings: &Settings) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| Logger {
        format: settings.log_format,
    });
    log::set_logger(logger).map(|()| log::set_max_level(settings.log_level))
}

struct Logger {
    format: LogFormat,
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = Entry::from_record(record);
            let _ = writeln!(io::stderr().lock(), "{}", entry.render(self.format));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
