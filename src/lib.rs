//! yq — jq for YAML.
//!
//! A transparent filter around `jq`: YAML on stdin is translated to JSON,
//! jq runs unmodified, and its JSON output is translated back to YAML.
//! jq's exit code and stderr reach the caller unchanged.

pub mod args;
pub mod config;
pub mod debug;
pub mod error;
pub mod logging;
pub mod process;
pub mod translate;
pub mod wrapper;

pub use error::{WrapError, FATAL_EXIT_CODE};
pub use process::ProcessResult;
pub use wrapper::Wrapper;
