//! Wrapper configuration: which jq to run and whether to trace.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ENV_CONFIG, ENV_DEBUG, ENV_JQ, ENV_LOG};
