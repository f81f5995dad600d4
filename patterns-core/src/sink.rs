//! Output sinks
//!
//! Every pattern reports what it did as human-readable lines. Instead of
//! printing directly, the patterns write to an [`OutputSink`] so callers pick
//! the destination: the console for the CLI, memory for tests, or the `log`
//! facade when embedding.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Destination for human-readable output lines
pub trait OutputSink {
    /// Write one line (without trailing newline)
    fn write_line(&self, line: &str);
}

/// Shared handle to a sink, as held by the patterns
pub type SharedSink = Rc<dyn OutputSink>;

/// Writes lines to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

/// Captures lines in memory
///
/// Clones share the same buffer, so a test can hand one clone to a pattern and
/// read the transcript back through another.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// Drain all captured lines
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    /// Number of captured lines
    pub fn len(&self) -> usize {
        self.lines.borrow().len()
    }

    /// True if nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Forwards lines to the `log` facade
#[derive(Debug, Clone, Copy)]
pub struct LogSink {
    level: log::Level,
}

impl LogSink {
    /// Create a sink logging at the given level
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl OutputSink for LogSink {
    fn write_line(&self, line: &str) {
        log::log!(target: "patterns::output", self.level, "{}", line);
    }
}

/// Counts lines written through it before handing them to an inner sink
pub(crate) struct CountingSink {
    inner: SharedSink,
    count: Cell<usize>,
}

impl CountingSink {
    pub(crate) fn new(inner: SharedSink) -> Self {
        Self {
            inner,
            count: Cell::new(0),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count.get()
    }
}

impl OutputSink for CountingSink {
    fn write_line(&self, line: &str) {
        self.count.set(self.count.get() + 1);
        self.inner.write_line(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_shares_buffer() {
        let sink = MemorySink::new();
        let handle: SharedSink = Rc::new(sink.clone());

        handle.write_line("first");
        handle.write_line("second");

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert_eq!(sink.take(), vec!["first", "second"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_counting_sink() {
        let memory = MemorySink::new();
        let counting = CountingSink::new(Rc::new(memory.clone()));

        counting.write_line("a");
        counting.write_line("b");

        assert_eq!(counting.count(), 2);
        assert_eq!(memory.lines(), vec!["a", "b"]);
    }

    /// Records output-target log lines so LogSink can be checked
    struct CaptureLogger {
        records: std::sync::Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.target() == "patterns::output"
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                if let Ok(mut records) = self.records.lock() {
                    records.push((record.level(), record.args().to_string()));
                }
            }
        }

        fn flush(&self) {}
    }

    static CAPTURE: CaptureLogger = CaptureLogger {
        records: std::sync::Mutex::new(Vec::new()),
    };

    #[test]
    fn test_log_sink_forwards_at_level() {
        // Only this test installs a logger in the library's test binary
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(log::LevelFilter::Trace);

        LogSink::new(log::Level::Warn).write_line("careful");
        LogSink::default().write_line("hello");

        let records = CAPTURE.records.lock().unwrap();
        assert_eq!(
            *records,
            vec![
                (log::Level::Warn, "careful".to_string()),
                (log::Level::Info, "hello".to_string()),
            ]
        );
    }
}
