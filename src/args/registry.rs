//! Flag tables: the jq flags that affect translation.

/// One logical flag with its short and long spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDef {
    /// Canonical short form (e.g., "-r"). Used as the key in classifications.
    pub short: &'static str,
    /// Long form (e.g., "--raw-output").
    pub long: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        arg == self.short || arg == self.long
    }
}

/// Canonical spelling of the raw-output flag.
pub const RAW_OUTPUT: &str = "-r";

const HELP: FlagDef = FlagDef {
    short: "-h",
    long: "--help",
    description: "Show jq help",
};

const VERSION: FlagDef = FlagDef {
    short: "-V",
    long: "--version",
    description: "Show jq version",
};

/// Flags yq handles itself. Stripped before jq sees them.
pub static WRAPPED_FLAGS: &[FlagDef] = &[FlagDef {
    short: RAW_OUTPUT,
    long: "--raw-output",
    description: "Print strings without YAML quoting",
}];

/// Flags under which jq does not read stdin, so nothing is read or translated.
///
/// `-n` is not listed: jq's `input` and `inputs` read stdin under it.
pub static NO_INPUT_FLAGS: &[FlagDef] = &[HELP, VERSION];

/// Flags under which jq prints plain text; its stdout is passed through as is.
pub static NO_OUTPUT_FLAGS: &[FlagDef] = &[HELP, VERSION];

/// The three category tables used by [`classify`](super::classify).
#[derive(Debug, Clone, Copy)]
pub struct FlagTables {
    pub wrapped: &'static [FlagDef],
    pub no_input: &'static [FlagDef],
    pub no_output: &'static [FlagDef],
}

impl FlagTables {
    /// Built-in tables for jq.
    pub const fn jq() -> Self {
        Self {
            wrapped: WRAPPED_FLAGS,
            no_input: NO_INPUT_FLAGS,
            no_output: NO_OUTPUT_FLAGS,
        }
    }
}

impl Default for FlagTables {
    fn default() -> Self {
        Self::jq()
    }
}
