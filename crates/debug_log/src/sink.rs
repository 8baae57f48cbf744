//! Output routing.
//!
//! A [`LogSink`] receives fully formatted lines tagged with the stream
//! class they belong on. The production sink maps classes onto the
//! process's standard streams; tests substitute [`MemorySink`] to assert
//! on destinations without parsing output.

use std::io::Write;
use std::sync::Mutex;

/// Output stream class a formatted line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogStream {
    /// Default stream for debug and informational output
    Standard,
    /// Warning-class stream
    Warning,
    /// Error-class stream
    Error,
}

/// Destination for formatted log lines.
///
/// Implementations must not buffer: each call is a single synchronous
/// write that completes before returning.
pub trait LogSink: Send + Sync {
    /// Writes one formatted line to the given stream class.
    fn write_line(&self, stream: LogStream, line: &str);
}

/// Production sink writing to the process's standard streams.
///
/// Standard-class lines go to stdout; warning- and error-class lines go
/// to stderr. Write failures are swallowed, logging never fails.
#[derive(Debug, Default)]
pub struct StdStreams;

impl LogSink for StdStreams {
    fn write_line(&self, stream: LogStream, line: &str) {
        match stream {
            LogStream::Standard => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{}", line);
            }
            LogStream::Warning | LogStream::Error => {
                let mut err = std::io::stderr().lock();
                let _ = writeln!(err, "{}", line);
            }
        }
    }
}

/// In-memory sink recording every write together with its stream class.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(LogStream, String)>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded writes in order.
    pub fn records(&self) -> Vec<(LogStream, String)> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded lines routed to the given stream class.
    pub fn lines_for(&self, stream: LogStream) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|(recorded, _)| *recorded == stream)
            .map(|(_, line)| line)
            .collect()
    }

    /// Total number of recorded writes.
    pub fn len(&self) -> usize {
        self.records().len()
    }

    /// Returns whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, stream: LogStream, line: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push((stream, line.to_string()));
        }
    }
}
