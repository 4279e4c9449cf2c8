//! Log sink module
//!
//! Destinations for `LogRecord`s. The sink is handed to components at
//! construction so tests can capture what would otherwise go to the process
//! subscriber.

use super::LogRecord;
use std::sync::{Arc, Mutex, PoisonError};

/// Write-only, fire-and-forget record destination
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord);
}

impl<T: LogSink + ?Sized> LogSink for Arc<T> {
    fn log(&self, record: &LogRecord) {
        (**self).log(record);
    }
}

/// Forwards records to the installed `tracing` subscriber at error level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord) {
        tracing::error!(
            method = %record.method,
            status = record.status,
            path = %record.path,
            "{}",
            record.message
        );
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the captured records, oldest first
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn log(&self, record: &LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.log(&LogRecord::new("first", "GET", 404, "/a"));
        sink.log(&LogRecord::new("second", "HEAD", 404, "/b"));

        let records = sink.records();
        assert_eq!(sink.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].method, "HEAD");
    }

    #[test]
    fn test_shared_sink() {
        let sink = Arc::new(MemorySink::new());
        let handle: Arc<MemorySink> = Arc::clone(&sink);
        handle.log(&LogRecord::new("shared", "GET", 404, "/c"));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        // No subscriber installed: the event is dropped silently
        TracingSink.log(&LogRecord::new("dropped", "GET", 404, "/d"));
    }
}
