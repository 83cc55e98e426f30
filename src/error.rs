use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while acquiring the sink or emitting records.
#[derive(Debug, Error)]
pub enum Error {
    /// Neither the requested nor the fallback log file could be opened.
    ///
    /// This is the only fatal condition: without a sink there is nothing
    /// left to write to.
    #[error("failed to open default log file {}: {source}", .path.display())]
    DefaultSink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing a finished line to the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A JSON record could not be serialized.
    #[error("failed to serialize JSON record: {0}")]
    Json(#[from] serde_json::Error),
    /// The plain pattern encoder rejected a record.
    #[error("failed to encode plain record: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),
}
