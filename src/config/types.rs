use std::path::PathBuf;

use serde::Deserialize;

/// Path or name of the wrapped tool.
pub const ENV_JQ: &str = "YQ_JQ";
/// Alternate config file location.
pub const ENV_CONFIG: &str = "YQ_CONFIG";
/// Any non-empty value turns on the stderr debug sink.
pub const ENV_DEBUG: &str = "YQ_DEBUG";
/// File that `tracing` events are appended to.
pub const ENV_LOG: &str = "YQ_LOG";

/// Root configuration, read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// The wrapped jq binary, looked up on PATH when not absolute.
    #[serde(default = "default_jq")]
    pub jq: PathBuf,
    /// Trace every intermediate value to stderr.
    #[serde(default)]
    pub debug: bool,
}

fn default_jq() -> PathBuf {
    PathBuf::from("jq")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jq: default_jq(),
            debug: false,
        }
    }
}
