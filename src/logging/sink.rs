//! Output destinations for formatted lines
//!
//! Lines go to standard output unless another sink is selected. The capture
//! buffer keeps everything written to it, which is how embedding code and the
//! tests read back what a logger produced.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Where a logger writes its lines
#[derive(Debug, Clone, Default)]
pub enum Sink {
    /// Process standard output
    #[default]
    Stdout,
    /// Process standard error
    Stderr,
    /// In-memory capture
    Buffer(CaptureBuffer),
}

impl Sink {
    /// Write one complete line in a single call
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(line.as_bytes())?;
                out.flush()
            }
            Sink::Stderr => {
                let mut err = io::stderr().lock();
                err.write_all(line.as_bytes())?;
                err.flush()
            }
            Sink::Buffer(buffer) => buffer.push(line),
        }
    }
}

/// Thread-safe buffer that collects written lines
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    contents: Arc<Mutex<String>>,
}

impl CaptureBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, line: &str) -> io::Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "capture buffer poisoned"))?;
        contents.push_str(line);
        Ok(())
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        self.contents
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    /// Written output split into lines, without trailing newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.contents.lock().map(|c| c.is_empty()).unwrap_or(true)
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        if let Ok(mut contents) = self.contents.lock() {
            contents.clear();
        }
    }
}
