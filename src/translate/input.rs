//! Input side: YAML on stdin → JSON for jq.

use std::io::Read;

use tracing::debug;

use crate::args::Classification;
use crate::debug::{trace, Bytes, DebugSink};
use crate::error::WrapError;
use crate::translate::value::yaml_to_json;

/// Produce jq's stdin.
///
/// `None` means a no-input flag was given: stdin is left unread and jq gets
/// no input stream at all. Empty input yields an empty buffer without being
/// parsed, so jq sees no input rather than `null`.
pub fn translate_input<R: Read>(
    mut reader: R,
    classification: &Classification,
    sink: &dyn DebugSink,
) -> Result<Option<Vec<u8>>, WrapError> {
    if classification.skips_input() {
        debug!(flags = ?classification.no_input, "stdin left unread");
        return Ok(None);
    }

    let mut in_yaml = Vec::new();
    reader
        .read_to_end(&mut in_yaml)
        .map_err(WrapError::io("failed to read input"))?;
    trace(sink, "inYAML", &Bytes(&in_yaml));

    let in_json = if in_yaml.is_empty() {
        Vec::new()
    } else {
        yaml_to_json_bytes(&in_yaml, sink)?
    };
    trace(sink, "inJSON", &Bytes(&in_json));

    debug!(yaml_bytes = in_yaml.len(), json_bytes = in_json.len(), "input translated");
    Ok(Some(in_json))
}

/// Parse one YAML document, resolve `<<` merge keys, and serialize it as
/// compact JSON.
pub fn yaml_to_json_bytes(in_yaml: &[u8], sink: &dyn DebugSink) -> Result<Vec<u8>, WrapError> {
    let mut in_raw: serde_yaml::Value =
        serde_yaml::from_slice(in_yaml).map_err(WrapError::InputFormat)?;
    in_raw.apply_merge().map_err(WrapError::InputFormat)?;
    trace(sink, "inRAW", &in_raw);

    let value = yaml_to_json(in_raw)?;
    serde_json::to_vec(&value).map_err(|e| WrapError::Encoding(e.to_string()))
}
