use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Interval used when `INTERVAL` is unset or invalid.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(2);
/// Path used when `LOG_PATH` is unset or unusable.
pub const DEFAULT_LOG_PATH: &str = "./spammer.log";
/// Format used when `LOG_FORMAT` is anything but `JSON` or `PLAIN`.
pub const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Json;

pub const INTERVAL_VAR: &str = "INTERVAL";
pub const LOG_PATH_VAR: &str = "LOG_PATH";
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output format of the generated log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    Json,
    /// A date-time stamp followed by the message.
    Plain,
}

impl FromStr for LogFormat {
    type Err = ();

    /// Matches the literals exactly; `json` is not `JSON`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "JSON" => Ok(LogFormat::Json),
            "PLAIN" => Ok(LogFormat::Plain),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => f.write_str("JSON"),
            LogFormat::Plain => f.write_str("PLAIN"),
        }
    }
}

/// A setting that was missing or invalid and got replaced by its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    IntervalUnset,
    IntervalInvalid { value: String },
    LogPathUnset,
    LogFormatInvalid { value: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interval = humantime::format_duration(DEFAULT_INTERVAL);
        match self {
            Notice::IntervalUnset => {
                write!(f, "{INTERVAL_VAR} not set, using default {interval}")
            }
            Notice::IntervalInvalid { value } => {
                write!(f, "Invalid {INTERVAL_VAR} '{value}', using default {interval}")
            }
            Notice::LogPathUnset => {
                write!(f, "{LOG_PATH_VAR} not set, using default: {DEFAULT_LOG_PATH}")
            }
            Notice::LogFormatInvalid { value } => write!(
                f,
                "Invalid or missing {LOG_FORMAT_VAR} '{value}', using default: {DEFAULT_LOG_FORMAT}"
            ),
        }
    }
}

/// Fully resolved settings. Every field holds a usable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interval: Duration,
    pub log_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_format: DEFAULT_LOG_FORMAT,
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// Variables that are not valid Unicode are treated as unset.
    pub fn from_env() -> (Self, Vec<Notice>) {
        Self::resolve(|key| env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary variable lookup.
    ///
    /// Never fails: each missing or invalid value is replaced by its default
    /// and reported as a [`Notice`], in the order interval, path, format.
    ///
    /// # Examples
    ///
    /// ```
    /// # use log_spammer::{Config, LogFormat, Notice};
    /// # use std::time::Duration;
    /// let (config, notices) = Config::resolve(|key| match key {
    ///     "INTERVAL" => Some("500ms".to_string()),
    ///     "LOG_FORMAT" => Some("PLAIN".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.interval, Duration::from_millis(500));
    /// assert_eq!(config.log_format, LogFormat::Plain);
    /// assert_eq!(notices, vec![Notice::LogPathUnset]);
    /// ```
    pub fn resolve<F>(lookup: F) -> (Self, Vec<Notice>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut notices = Vec::new();
        let mut config = Config::default();

        match lookup(INTERVAL_VAR).filter(|v| !v.is_empty()) {
            None => notices.push(Notice::IntervalUnset),
            Some(value) => match humantime::parse_duration(&value) {
                Ok(interval) => config.interval = interval,
                Err(_) => notices.push(Notice::IntervalInvalid { value }),
            },
        }

        match lookup(LOG_PATH_VAR).filter(|v| !v.is_empty()) {
            None => notices.push(Notice::LogPathUnset),
            Some(value) => config.log_path = PathBuf::from(value),
        }

        let format = lookup(LOG_FORMAT_VAR).unwrap_or_default();
        match format.parse() {
            Ok(log_format) => config.log_format = log_format,
            Err(()) => notices.push(Notice::LogFormatInvalid { value: format }),
        }

        (config, notices)
    }
}
