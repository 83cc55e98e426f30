use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Error;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// The open append-only file that receives generated lines.
///
/// A sink is created once at startup and lives as long as the emission loop.
/// Dropping it closes the file.
#[derive(Debug)]
pub struct Sink {
    path: PathBuf,
    file: File,
}

impl Sink {
    /// Opens `candidate` for appending, falling back to `fallback` if needed.
    ///
    /// The candidate's parent directory is created first. When that fails,
    /// or the candidate itself cannot be opened, the fallback path is opened
    /// instead. Each fallback is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DefaultSink`] when the fallback cannot be opened
    /// either. No destination is usable at that point.
    pub fn acquire(candidate: &Path, fallback: &Path) -> Result<Self, Error> {
        let mut path = candidate;

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            if let Err(error) = create_dir_all(dir) {
                warn!(
                    "Failed to create log directory {}: {error}",
                    dir.display()
                );
                warn!("Using default log path: {}", fallback.display());
                path = fallback;
            }
        }

        match open_append(path) {
            Ok(file) => Ok(Self::from_parts(path, file)),
            Err(error) if path != fallback => {
                warn!("Failed to open log file at {}: {error}", path.display());
                warn!("Using default log path: {}", fallback.display());
                open_append(fallback)
                    .map(|file| Self::from_parts(fallback, file))
                    .map_err(|source| Error::DefaultSink {
                        path: fallback.to_path_buf(),
                        source,
                    })
            }
            Err(source) => Err(Error::DefaultSink {
                path: fallback.to_path_buf(),
                source,
            }),
        }
    }

    /// The path that was actually opened.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn from_parts(path: &Path, file: File) -> Self {
        Self {
            path: path.to_path_buf(),
            file,
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.file.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

fn create_dir_all(dir: &Path) -> io::Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path)
}
