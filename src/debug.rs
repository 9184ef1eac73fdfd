//! Debug sink for tracing every intermediate value of an invocation.
//!
//! Enabled with `YQ_DEBUG`. Records go to stderr as `LOG: [...]` lines and
//! are mirrored as `tracing` events.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// Two-method logging capability threaded through the pipeline.
pub trait DebugSink {
    /// Log a sequence of values.
    fn log(&self, values: &[&dyn fmt::Debug]);

    /// Log a formatted message.
    fn logf(&self, args: fmt::Arguments<'_>);
}

impl<S: DebugSink + ?Sized> DebugSink for Rc<S> {
    fn log(&self, values: &[&dyn fmt::Debug]) {
        (**self).log(values)
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        (**self).logf(args)
    }
}

/// Sink used when debugging is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn log(&self, _values: &[&dyn fmt::Debug]) {}

    fn logf(&self, _args: fmt::Arguments<'_>) {}
}

/// Writes each record to stderr as `LOG: [...]`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn log(&self, values: &[&dyn fmt::Debug]) {
        let line = values
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(io::stderr().lock(), "LOG: [{line}]");
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        let _ = writeln!(io::stderr().lock(), "LOG: [{args}]");
    }
}

/// Keeps every record in memory. Handy for embedding and tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: RefCell<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records logged so far, oldest first.
    pub fn records(&self) -> Vec<String> {
        self.records.borrow().clone()
    }

    /// Whether any record was logged under `name` via [`trace`].
    pub fn has_entry(&self, name: &str) -> bool {
        let prefix = format!("{name} ");
        self.records.borrow().iter().any(|r| r.starts_with(&prefix))
    }
}

impl DebugSink for MemorySink {
    fn log(&self, values: &[&dyn fmt::Debug]) {
        let line = values
            .iter()
            .map(|v| format!("{v:?}"))
            .collect::<Vec<_>>()
            .join(" ");
        self.records.borrow_mut().push(line);
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        self.records.borrow_mut().push(args.to_string());
    }
}

/// Byte buffer that debug-prints as an escaped string instead of a list of
/// numbers.
pub struct Bytes<'a>(pub &'a [u8]);

impl fmt::Debug for Bytes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{:?}", String::from_utf8_lossy(self.0))
    }
}

/// Record one named pipeline value as `"<name> <value>"`.
pub fn trace(sink: &dyn DebugSink, name: &str, value: &dyn fmt::Debug) {
    tracing::debug!(target: "yq::trace", entry = name, value = ?value);
    sink.logf(format_args!("{name} {value:?}"));
}
