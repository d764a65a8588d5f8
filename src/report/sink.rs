//! Report output sink.

use std::fs::File;
use std::io::{self, BufWriter, ErrorKind, Write};
use std::path::Path;

use log::warn;

use crate::error_handling::InitializationError;

/// Writer that treats a closed downstream pipe as success.
struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes report text to the console and, optionally, to a file.
///
/// Write failures never abort a run: a failing console is logged, a failing
/// file is logged once and then dropped.
pub struct OutputSink {
    console: Box<dyn Write + Send>,
    file: Option<Box<dyn Write + Send>>,
}

impl OutputSink {
    /// Sink over arbitrary writers.
    pub fn new(console: Box<dyn Write + Send>, file: Option<Box<dyn Write + Send>>) -> Self {
        Self { console, file }
    }

    /// Stdout only.
    pub fn stdout() -> Self {
        Self::new(Box::new(IgnoreBrokenPipe { inner: io::stdout() }), None)
    }

    /// Stdout, mirrored to `path` when given. The file is truncated.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::OutputFileError` if the file cannot be created.
    pub fn create(path: Option<&Path>) -> Result<Self, InitializationError> {
        let mut sink = Self::stdout();
        if let Some(path) = path {
            let file = File::create(path)?;
            sink.file = Some(Box::new(BufWriter::new(file)));
        }
        Ok(sink)
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Writes `text` to the console and the file.
    pub fn write(&mut self, text: &str) {
        if let Err(e) = self.console.write_all(text.as_bytes()) {
            warn!("Failed to write report to console: {e}");
        }
        self.write_file(text);
    }

    /// Writes `text` to the file only.
    pub fn detail(&mut self, text: &str) {
        self.write_file(text);
    }

    fn write_file(&mut self, text: &str) {
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.write_all(text.as_bytes()) {
                warn!("Failed to write report file, disabling it: {e}");
                self.file = None;
            }
        }
    }

    pub fn flush(&mut self) {
        if let Err(e) = self.console.flush() {
            warn!("Failed to flush console: {e}");
        }
        if let Some(file) = self.file.as_mut() {
            if let Err(e) = file.flush() {
                warn!("Failed to flush report file: {e}");
            }
        }
    }
}

impl Drop for OutputSink {
    fn drop(&mut self) {
        self.flush();
    }
}
