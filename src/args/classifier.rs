//! Argument classifier — raw args → forwarded args + flag sets.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

use crate::args::registry::{FlagDef, FlagTables, RAW_OUTPUT};
use crate::debug::{trace, DebugSink};

/// Canonical short spellings of the flags that were present.
pub type FlagSet = BTreeSet<&'static str>;

/// Result of classifying raw arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Arguments for jq, in original order, with wrapped flags removed.
    pub forwarded: Vec<OsString>,
    /// Wrapped flags that were present (and stripped).
    pub wrapped: FlagSet,
    /// No-input flags that were present (still forwarded).
    pub no_input: FlagSet,
    /// No-output flags that were present (still forwarded).
    pub no_output: FlagSet,
}

impl Classification {
    /// `-r` / `--raw-output` was given.
    pub fn raw_output(&self) -> bool {
        self.wrapped.contains(RAW_OUTPUT)
    }

    /// jq won't read stdin, so neither do we.
    pub fn skips_input(&self) -> bool {
        !self.no_input.is_empty()
    }

    /// jq's stdout must reach the user unmodified.
    pub fn passes_output_through(&self) -> bool {
        !self.no_output.is_empty()
    }
}

/// Classify raw args against the flag tables.
///
/// Wrapped flags are removed from the forwarded list in either spelling.
/// No-input and no-output flags are only detected: jq still needs them.
/// Arguments that are not valid UTF-8 never match a flag and are forwarded
/// byte for byte.
pub fn classify(raw_args: &[OsString], tables: &FlagTables, sink: &dyn DebugSink) -> Classification {
    let mut wrapped = FlagSet::new();
    let mut forwarded = Vec::with_capacity(raw_args.len());

    for arg in raw_args {
        match find(tables.wrapped, arg) {
            Some(def) => {
                wrapped.insert(def.short);
            }
            None => forwarded.push(arg.clone()),
        }
    }
    trace(sink, "wrappedArgs", &wrapped);

    let no_input = detect(&forwarded, tables.no_input);
    trace(sink, "noInArgs", &no_input);

    let no_output = detect(&forwarded, tables.no_output);
    trace(sink, "noOutArgs", &no_output);

    Classification {
        forwarded,
        wrapped,
        no_input,
        no_output,
    }
}

fn find<'t>(table: &'t [FlagDef], arg: &OsStr) -> Option<&'t FlagDef> {
    let arg = arg.to_str()?;
    table.iter().find(|d| d.matches(arg))
}

fn detect(args: &[OsString], table: &'static [FlagDef]) -> FlagSet {
    args.iter()
        .filter_map(|arg| find(table, arg))
        .map(|def| def.short)
        .collect()
}
