//! Running the wrapped tool.

mod executor;
mod result;

pub use executor::{execute, Execution};
pub use result::ProcessResult;
