//! File sink implementation

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// An open log file in append mode.
///
/// The handle is acquired by [`FileSink::open`] and held for the life of
/// the value; dropping it flushes buffered lines and releases the file.
/// There is no closed state, existence of the sink means the file is open.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Open `path` for appending, creating the file if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }

    /// Append one formatted line, terminated with a newline
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| sink_io_error(&self.path, e))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| sink_io_error(&self.path, e))?;
        Ok(())
    }

    /// Push buffered lines out to the file
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| {
            LoggerError::sink_io("flushing", self.path.display().to_string(), e)
        })
    }

    /// Path the sink was opened with
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn sink_io_error(path: &Path, source: std::io::Error) -> LoggerError {
    LoggerError::sink_io("writing log line to", path.display().to_string(), source)
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure all buffered data is flushed to disk
        let _ = self.writer.flush();
    }
}
