//! Argument handling for the wrapped jq invocation.
//!
//! ```text
//! Raw args → Classify (flag tables) → forwarded args + translation switches
//! ```
//!
//! Only flags that change how yq itself translates input or output are
//! looked at; everything else goes to jq untouched.

mod classifier;
mod registry;

pub use classifier::{classify, Classification, FlagSet};
pub use registry::{
    FlagDef, FlagTables, NO_INPUT_FLAGS, NO_OUTPUT_FLAGS, RAW_OUTPUT, WRAPPED_FLAGS,
};
