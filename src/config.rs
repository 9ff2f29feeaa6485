use std::env;
use std::path::{Path, PathBuf};

use crate::domain::entities::{FixedHoliday, HolidayError, HolidaySet, Locale};
use crate::domain::services::DEFAULT_MAX_DAY_COUNT;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub holidays_file: Option<PathBuf>,
    pub default_locale: Locale,
    pub metrics_port: Option<u16>,
    pub service_name: String,
    pub max_day_count: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            holidays_file: None,
            default_locale: Locale::PtBr,
            metrics_port: None,
            service_name: "prazos".to_string(),
            max_day_count: DEFAULT_MAX_DAY_COUNT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let server_host = env::var("SERVER_HOST").unwrap_or(defaults.server_host);

        let server_port = match env::var("SERVER_PORT") {
            Ok(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            Err(_) => defaults.server_port,
        };

        let holidays_file = env::var("HOLIDAYS_FILE").ok().map(PathBuf::from);

        let default_locale = match env::var("DEFAULT_LOCALE") {
            Ok(locale) => locale.parse().map_err(ConfigError::InvalidLocale)?,
            Err(_) => defaults.default_locale,
        };

        let metrics_port = match env::var("METRICS_PORT") {
            Ok(port) => Some(port.parse().map_err(|_| ConfigError::InvalidPort(port))?),
            Err(_) => None,
        };

        let service_name = env::var("SERVICE_NAME").unwrap_or(defaults.service_name);

        let max_day_count = match env::var("MAX_DAY_COUNT") {
            Ok(raw) => match raw.parse::<i64>() {
                Ok(max) if max > 0 => max,
                _ => return Err(ConfigError::InvalidMaxDayCount(raw)),
            },
            Err(_) => defaults.max_day_count,
        };

        Ok(Config {
            server_host,
            server_port,
            holidays_file,
            default_locale,
            metrics_port,
            service_name,
            max_day_count,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Holiday set from `holidays_file`, or the Brazilian national
    /// holidays when no file is configured.
    pub fn load_holidays(&self) -> Result<HolidaySet, ConfigError> {
        match &self.holidays_file {
            Some(path) => load_holidays_file(path),
            None => Ok(HolidaySet::brazilian_national()),
        }
    }
}

/// Read a JSON array of `{"date": "MM-DD", "name": "..."}` entries.
pub fn load_holidays_file(path: &Path) -> Result<HolidaySet, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::HolidaysFile {
        path: path.to_path_buf(),
        source,
    })?;

    let holidays: Vec<FixedHoliday> =
        serde_json::from_str(&raw).map_err(|source| ConfigError::HolidaysFormat {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(HolidaySet::from_holidays(holidays)?)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(String),

    #[error("{0}")]
    InvalidLocale(String),

    #[error("MAX_DAY_COUNT must be a positive integer, got {0}")]
    InvalidMaxDayCount(String),

    #[error("Cannot read holidays file {}: {source}", path.display())]
    HolidaysFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid holidays file {}: {source}", path.display())]
    HolidaysFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Holiday(#[from] HolidayError),
}
