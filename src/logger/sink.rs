//! Output sinks for serialized records.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Destination for serialized records, one line per call.
pub trait Sink: Send + Sync {
    /// Write one record line. The sink appends the line terminator.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes records to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")
    }
}

/// Keeps records in memory.
///
/// Useful for tests and for hosts that forward records themselves.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Remove and return every line written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    // A panic while holding the lock cannot leave a half-pushed line behind,
    // so a poisoned lock is still usable.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.guard().push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_lines() {
        let sink = MemorySink::new();
        sink.write_line("a").unwrap();
        sink.write_line("b").unwrap();
        assert_eq!(sink.lines(), vec!["a", "b"]);

        assert_eq!(sink.take().len(), 2);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_memory_sink_survives_poisoning() {
        let sink = std::sync::Arc::new(MemorySink::new());
        sink.write_line("before").unwrap();

        let poisoner = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.lines.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        assert!(sink.lines.is_poisoned());

        sink.write_line("after").unwrap();
        assert_eq!(sink.lines(), vec!["before", "after"]);
        assert_eq!(sink.take().len(), 2);
        assert!(sink.lines().is_empty());
    }
}
