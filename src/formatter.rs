use std::io::Write;

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use log::{Level, Record};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::encode::writer::simple::SimpleWriter;
use log4rs::encode::Encode;
use serde::Serialize;

use crate::config::LogFormat;
use crate::error::Error;

/// Pattern of a conventional plain logger line: `2009/01/23 01:23:23 message`.
pub const PLAIN_PATTERN: &str = "{d(%Y/%m/%d %H:%M:%S)} {m}{n}";

/// Writes one message to a sink as one complete line.
pub trait Emit {
    fn emit(&mut self, message: &str) -> Result<(), Error>;
}

/// Formats `now` the way every generated line stamps itself.
///
/// Second precision, with `Z` standing in for a zero UTC offset.
pub fn rfc3339<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    level: &'static str,
    time: &'a str,
    message: &'a str,
}

/// Emits `{"level":"info","time":"<RFC 3339>","message":"..."}` lines.
#[derive(Debug)]
pub struct JsonFormatter<W> {
    sink: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Emit for JsonFormatter<W> {
    fn emit(&mut self, message: &str) -> Result<(), Error> {
        let time = rfc3339(&Local::now());
        let record = JsonRecord {
            level: "info",
            time: &time,
            message,
        };
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');
        self.sink.write_all(&line)?;
        Ok(())
    }
}

/// Emits `YYYY/MM/DD HH:MM:SS message` lines through a log4rs pattern encoder.
#[derive(Debug)]
pub struct PlainFormatter<W> {
    sink: W,
    encoder: PatternEncoder,
}

impl<W: Write> PlainFormatter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            encoder: PatternEncoder::new(PLAIN_PATTERN),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Emit for PlainFormatter<W> {
    fn emit(&mut self, message: &str) -> Result<(), Error> {
        let mut line = SimpleWriter(Vec::with_capacity(message.len() + 32));
        self.encoder
            .encode(
                &mut line,
                &Record::builder()
                    .args(format_args!("{message}"))
                    .level(Level::Info)
                    .target(module_path!())
                    .build(),
            )
            .map_err(|error| Error::Encode(error.into()))?;
        self.sink.write_all(&line.0)?;
        Ok(())
    }
}

/// The output strategy chosen once at startup, owning the sink.
///
/// # Examples
///
/// ```
/// # use log_spammer::{Emit, Formatter, LogFormat};
/// let mut formatter = Formatter::new(LogFormat::Json, Vec::new());
/// formatter.emit("hello").unwrap();
///
/// let out = String::from_utf8(formatter.into_inner()).unwrap();
/// assert!(out.starts_with(r#"{"level":"info","time":""#));
/// assert!(out.ends_with("\"message\":\"hello\"}\n"));
/// ```
#[derive(Debug)]
pub enum Formatter<W> {
    Json(JsonFormatter<W>),
    Plain(PlainFormatter<W>),
}

impl<W: Write> Formatter<W> {
    pub fn new(format: LogFormat, sink: W) -> Self {
        match format {
            LogFormat::Json => Formatter::Json(JsonFormatter::new(sink)),
            LogFormat::Plain => Formatter::Plain(PlainFormatter::new(sink)),
        }
    }

    pub fn format(&self) -> LogFormat {
        match self {
            Formatter::Json(_) => LogFormat::Json,
            Formatter::Plain(_) => LogFormat::Plain,
        }
    }

    /// Releases the sink.
    pub fn into_inner(self) -> W {
        match self {
            Formatter::Json(formatter) => formatter.into_inner(),
            Formatter::Plain(formatter) => formatter.into_inner(),
        }
    }
}

impl<W: Write> Emit for Formatter<W> {
    fn emit(&mut self, message: &str) -> Result<(), Error> {
        match self {
            Formatter::Json(formatter) => formatter.emit(message),
            Formatter::Plain(formatter) => formatter.emit(message),
        }
    }
}
