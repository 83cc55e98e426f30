//! # Log Spammer
//!
//! A synthetic log generator for exercising log-collection pipelines
//! (shippers, aggregators, dashboards) without a real application behind
//! them.
//!
//! It appends one line every interval to a file, forever:
//!
//! * **JSON**: `{"level":"info","time":"2024-03-09T07:05:01Z","message":"Log message at 2024-03-09T07:05:01Z"}`
//! * **PLAIN**: `2024/03/09 07:05:01 Log message at 2024-03-09T07:05:01Z`
//!
//! ## Configuration
//!
//! | Variable     | Default         | Accepted                          |
//! |--------------|-----------------|-----------------------------------|
//! | `INTERVAL`   | `2s`            | a duration such as `500ms`, `1m`  |
//! | `LOG_PATH`   | `./spammer.log` | any path; parents are created     |
//! | `LOG_FORMAT` | `JSON`          | `JSON` or `PLAIN`, exact match    |
//!
//! Missing or invalid values fall back to the default with a notice on
//! standard error. An unusable `LOG_PATH` falls back to `./spammer.log`; if
//! that cannot be opened either the binary exits with status 1.
//!
//! ## Main Components
//!
//! * `config`: resolves [`Config`] from the environment
//! * `sink`: opens the output file with fallback, see [`Sink`]
//! * `formatter`: the JSON and plain [`Formatter`] variants
//! * `spammer`: the emission loop and its [`Shutdown`] handle
//! * `telemetry`: the process's own startup log
//!
//! ## Quick Start
//!
//! ```
//! use log_spammer::{Config, Formatter, Shutdown, Sink, Spammer};
//! use std::time::Duration;
//! use std::thread;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let (mut config, _notices) = Config::resolve(|_| None);
//! config.log_path = dir.path().join("spam/out.log");
//! config.interval = Duration::from_millis(10);
//!
//! let sink = Sink::acquire(&config.log_path, &dir.path().join("spammer.log")).unwrap();
//! let mut formatter = Formatter::new(config.log_format, sink);
//!
//! let shutdown = Shutdown::new();
//! let stopper = shutdown.clone();
//! thread::spawn(move || {
//!     thread::sleep(Duration::from_millis(50));
//!     stopper.signal();
//! });
//!
//! let emitted = Spammer::new(config.interval).run(&mut formatter, &shutdown);
//! assert!(emitted >= 1);
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod sink;
pub mod spammer;
pub mod telemetry;

pub use config::{
    Config, LogFormat, Notice, DEFAULT_INTERVAL, DEFAULT_LOG_FORMAT, DEFAULT_LOG_PATH,
};
pub use error::Error;
pub use formatter::{Emit, Formatter, JsonFormatter, PlainFormatter};
pub use sink::Sink;
pub use spammer::{Shutdown, Spammer};
