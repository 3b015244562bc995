use std::str::FromStr;

use log::LevelFilter;
use strum::{Display, EnumString};

pub const LOG_LEVEL_VAR: &str = "STRIDE_LOG";
pub const LOG_FORMAT_VAR: &str = "STRIDE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub log_level: LevelFilter,
    pub log_format: LogFormat,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();

        if let Some(value) = var(LOG_LEVEL_VAR) {
            settings.log_level = LevelFilter::from_str(value.trim())
                .map_err(|_| SettingsError::InvalidLogLevel(value))?;
        }

        if let Some(value) = var(LOG_FORMAT_VAR) {
            settings.log_format = LogFormat::from_str(value.trim())
                .map_err(|_| SettingsError::InvalidLogFormat(value))?;
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("invalid log level \"{0}\" (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
    #[error("invalid log format \"{0}\" (expected text or json)")]
    InvalidLogFormat(String),
}
