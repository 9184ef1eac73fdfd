//! Spawn jq, feed it the translated input, capture its stdout.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use crate::debug::{trace, DebugSink};
use crate::error::WrapError;
use crate::process::result::ProcessResult;

/// Captured stdout and termination status of one run.
#[derive(Debug)]
pub struct Execution {
    pub stdout: Vec<u8>,
    pub result: ProcessResult,
}

/// Run `program` with `args` to completion.
///
/// `input` of `None` gives the child a null stdin. The child's stderr is
/// wired to `stderr` for the whole run. A nonzero exit is a normal outcome
/// recorded in [`Execution::result`]; only failures to start or talk to the
/// child are errors.
pub fn execute(
    program: &Path,
    args: &[OsString],
    input: Option<Vec<u8>>,
    stderr: Stdio,
    sink: &dyn DebugSink,
) -> Result<Execution, WrapError> {
    trace(sink, "jqArgs", &args);

    let stdin = if input.is_some() {
        Stdio::piped()
    } else {
        Stdio::null()
    };

    let mut child = Command::new(program)
        .args(args)
        .stdin(stdin)
        .stdout(Stdio::piped())
        .stderr(stderr)
        .spawn()
        .map_err(|source| WrapError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    debug!(pid = child.id(), program = %program.display(), "spawned");

    // Fed from a separate thread: jq may fill its stdout pipe before it has
    // consumed all of stdin.
    let feeder = match (input, child.stdin.take()) {
        (Some(buf), Some(pipe)) => Some(spawn_feeder(&mut child, pipe, buf)?),
        _ => None,
    };

    let output = child
        .wait_with_output()
        .map_err(WrapError::io("failed to collect output"))?;

    if let Some(handle) = feeder {
        handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")))
            .map_err(WrapError::io("failed to write input"))?;
    }

    let exit_err = (!output.status.success()).then_some(output.status);
    trace(sink, "cmdErr", &exit_err);

    let result = ProcessResult::from_status(output.status);
    if let Some(status) = exit_err {
        debug!(%status, "wrapped tool exited unsuccessfully");
    }

    Ok(Execution {
        stdout: output.stdout,
        result,
    })
}

fn spawn_feeder(
    child: &mut Child,
    pipe: ChildStdin,
    buf: Vec<u8>,
) -> Result<JoinHandle<io::Result<()>>, WrapError> {
    thread::Builder::new()
        .name("yq-stdin".to_string())
        .spawn(move || feed(pipe, &buf))
        .map_err(|source| {
            warn!(error = %source, "could not start stdin writer, killing child");
            let _ = child.kill();
            let _ = child.wait();
            WrapError::Io {
                context: "failed to start stdin writer",
                source,
            }
        })
}

/// Write all of `buf` and close the pipe. A child that exits without reading
/// its input is fine.
fn feed(mut pipe: ChildStdin, buf: &[u8]) -> io::Result<()> {
    match pipe.write_all(buf) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
