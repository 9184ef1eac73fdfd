//! Wrapper — ties the translation stages together for one invocation.

use std::ffi::OsString;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::Stdio;

use tracing::{debug_span, info};

use crate::args::{classify, FlagTables};
use crate::debug::{DebugSink, NoopSink};
use crate::error::WrapError;
use crate::process::{execute, ProcessResult};
use crate::translate::{translate_input, translate_output};

/// Runs jq over YAML.
///
/// Classifies the arguments, translates stdin from YAML to JSON, runs jq,
/// and translates its stdout back to YAML. jq's stderr is passed through.
pub struct Wrapper {
    program: PathBuf,
    args: Vec<OsString>,
    tables: FlagTables,
    sink: Box<dyn DebugSink>,
}

impl Wrapper {
    /// `args` are jq's arguments, without the program name. They are kept as
    /// OS strings so non-UTF-8 values reach jq untouched.
    pub fn new<I, A>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            tables: FlagTables::jq(),
            sink: Box::new(NoopSink),
        }
    }

    /// Replace the built-in flag tables.
    pub fn with_tables(mut self, tables: FlagTables) -> Self {
        self.tables = tables;
        self
    }

    /// Trace every intermediate value to `sink`.
    pub fn with_sink(mut self, sink: Box<dyn DebugSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run one invocation.
    ///
    /// Returns jq's termination status for the caller to replay. Any error
    /// means the wrapper itself failed and nothing was written to `stdout`.
    pub fn run<R, W>(&self, stdin: R, stdout: W, stderr: Stdio) -> Result<ProcessResult, WrapError>
    where
        R: Read,
        W: Write,
    {
        let span = debug_span!("invocation", program = %self.program.display());
        let _enter = span.enter();
        let sink = self.sink.as_ref();

        // Stage 1: Classify arguments
        let classification = classify(&self.args, &self.tables, sink);

        // Stage 2: YAML → JSON
        let input = translate_input(stdin, &classification, sink)?;

        // Stage 3: Run jq
        let execution = execute(&self.program, &classification.forwarded, input, stderr, sink)?;

        // Stage 4: JSON → YAML
        translate_output(&execution.stdout, &classification, stdout, sink)?;

        info!(
            code = ?execution.result.code(),
            signal = ?execution.result.signal(),
            "invocation complete"
        );
        Ok(execution.result)
    }
}
