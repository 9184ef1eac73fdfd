//! Fatal wrapper errors.
//!
//! Anything in here aborts the invocation and terminates the process with
//! [`FATAL_EXIT_CODE`]. A wrapped tool that exits nonzero is not an error and
//! never produces one of these.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Exit code used when the wrapper itself fails. jq never exits with 128, so
/// callers can tell a wrapper failure from a query result.
pub const FATAL_EXIT_CODE: i32 = 128;

/// Errors that abort an invocation.
#[derive(Debug, Error)]
pub enum WrapError {
    /// Reading stdin, writing stdout, or pipe plumbing to the child failed.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: io::Error,
    },

    /// Input is not a single valid YAML document.
    #[error("{0}")]
    InputFormat(#[source] serde_yaml::Error),

    /// Parsed YAML has no JSON representation.
    #[error("{0}")]
    Encoding(String),

    /// The wrapped tool could not be started.
    #[error("failed to start '{}': {}", .program.display(), .source)]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The wrapped tool printed something that is not a JSON stream.
    #[error("{0}")]
    OutputFormat(#[source] serde_json::Error),

    /// Parsed JSON could not be rendered as YAML.
    #[error("{0}")]
    OutputEncoding(#[source] serde_yaml::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WrapError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(io::Error) -> Self {
        move |source| WrapError::Io { context, source }
    }

    /// Short type tag printed ahead of the error detail.
    pub fn kind(&self) -> &'static str {
        match self {
            WrapError::Io { .. } => "io",
            WrapError::InputFormat(_) => "yaml-format",
            WrapError::Encoding(_) => "json-encoding",
            WrapError::Spawn { .. } => "spawn",
            WrapError::OutputFormat(_) => "json-format",
            WrapError::OutputEncoding(_) => "yaml-encoding",
            WrapError::Config(_) => "config",
        }
    }

    /// The single line written to stderr before exiting with
    /// [`FATAL_EXIT_CODE`]: `"<kind> <detail>\n"`.
    pub fn fatal_line(&self) -> String {
        format!("{} {}\n", self.kind(), self)
    }
}
