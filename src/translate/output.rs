//! Output side: jq's JSON stream → YAML (or raw text) on stdout.

use std::io::Write;

use serde_json::Value as Json;
use tracing::debug;

use crate::args::Classification;
use crate::debug::{trace, Bytes, DebugSink};
use crate::error::WrapError;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Write jq's captured stdout to `writer`.
///
/// Empty capture writes nothing. Under a no-output flag the bytes go out
/// verbatim. Otherwise the capture is parsed completely before anything is
/// written, so a parse failure never leaves partial output behind.
pub fn translate_output<W: Write>(
    captured: &[u8],
    classification: &Classification,
    mut writer: W,
    sink: &dyn DebugSink,
) -> Result<(), WrapError> {
    trace(sink, "outJSON", &Bytes(captured));

    if captured.is_empty() {
        return Ok(());
    }

    if classification.passes_output_through() {
        debug!(flags = ?classification.no_output, "output passed through");
        return write_all(&mut writer, captured);
    }

    let out_raw = parse_json_stream(captured)?;
    trace(sink, "outRAW", &out_raw);

    let out_yaml = if classification.raw_output() {
        render_raw(&out_raw)
    } else {
        render_yaml(&out_raw)?
    };
    trace(sink, "outYAML", &Bytes(out_yaml.as_bytes()));

    debug!(values = out_raw.len(), raw = classification.raw_output(), "output translated");
    write_all(&mut writer, out_yaml.as_bytes())
}

/// Parse jq's output: zero or more whitespace-separated JSON values.
pub fn parse_json_stream(bytes: &[u8]) -> Result<Vec<Json>, WrapError> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Json>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(WrapError::OutputFormat)
}

/// One YAML document per value, separated by `---` lines.
pub fn render_yaml(values: &[Json]) -> Result<String, WrapError> {
    let documents = values
        .iter()
        .map(serde_yaml::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(WrapError::OutputEncoding)?;
    Ok(documents.join(DOCUMENT_SEPARATOR))
}

/// Raw mode: strings unquoted, everything else as compact JSON, one value per
/// line.
///
/// Each value ends with a newline as `jq -r` prints it: `"hello"` renders as
/// `hello\n`, not a bare `hello`.
pub fn render_raw(values: &[Json]) -> String {
    let mut out = String::new();
    for value in values {
        match value {
            Json::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
        out.push('\n');
    }
    out
}

fn write_all<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<(), WrapError> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(WrapError::io("failed to write output"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{classify, FlagTables};
    use crate::debug::{MemorySink, NoopSink};
    use std::io;

    fn classification(args: &[&str]) -> Classification {
        let args: Vec<std::ffi::OsString> = args.iter().map(Into::into).collect();
        classify(&args, &FlagTables::jq(), &NoopSink)
    }

    fn run(captured: &[u8], args: &[&str]) -> Result<Vec<u8>, WrapError> {
        let mut out = Vec::new();
        translate_output(captured, &classification(args), &mut out, &NoopSink)?;
        Ok(out)
    }

    #[test]
    fn number_becomes_yaml_scalar() {
        assert_eq!(run(b"1\n", &[".foo"]).unwrap(), b"1\n");
    }

    #[test]
    fn object_becomes_block_mapping() {
        let out = run(b"{\"name\":\"yq\",\"tags\":[\"a\",\"b\"]}\n", &["."]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name: yq\ntags:\n- a\n- b\n");
    }

    #[test]
    fn string_that_looks_like_number_stays_quoted() {
        let out = String::from_utf8(run(b"\"1\"\n", &["."]).unwrap()).unwrap();
        assert_ne!(out, "1\n");
        let back: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(back, serde_yaml::Value::String("1".into()));
    }

    #[test]
    fn raw_mode_prints_strings_unquoted() {
        assert_eq!(run(b"\"hello\"\n", &["-r", "."]).unwrap(), b"hello\n");
        assert_eq!(run(b"\"hello\"\n", &["--raw-output", "."]).unwrap(), b"hello\n");
    }

    #[test]
    fn raw_mode_prints_collections_as_compact_json() {
        let out = run(b"[1, {\"a\": null}]\n", &["-r", "."]).unwrap();
        assert_eq!(out, b"[1,{\"a\":null}]\n");
    }

    #[test]
    fn value_stream_becomes_document_stream() {
        let out = run(b"1\n\"two\"\n{\"three\":3}\n", &[".[]"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n---\ntwo\n---\nthree: 3\n");

        let raw = run(b"\"a\"\n\"b\"\n", &["-r", ".[]"]).unwrap();
        assert_eq!(raw, b"a\nb\n");
    }

    #[test]
    fn empty_capture_writes_nothing() {
        let sink = MemorySink::new();
        let mut out = Vec::new();
        translate_output(b"", &classification(&["."]), &mut out, &sink).unwrap();
        assert!(out.is_empty());
        assert!(!sink.has_entry("outRAW"));
    }

    #[test]
    fn no_output_flag_passes_bytes_verbatim() {
        let help = b"Usage: jq [OPTIONS] FILTER {not json\n";
        assert_eq!(run(help, &["--help"]).unwrap(), help);
    }

    #[test]
    fn invalid_json_is_format_error_and_writes_nothing() {
        let mut out = Vec::new();
        let err = translate_output(b"1\n{oops\n", &classification(&["."]), &mut out, &NoopSink)
            .unwrap_err();
        assert!(matches!(err, WrapError::OutputFormat(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn write_failure_is_io_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = translate_output(b"1", &classification(&["."]), Closed, &NoopSink).unwrap_err();
        assert!(matches!(err, WrapError::Io { .. }));
    }

    #[test]
    fn traces_each_stage() {
        let sink = MemorySink::new();
        let mut out = Vec::new();
        translate_output(b"true", &classification(&["."]), &mut out, &sink).unwrap();
        for entry in ["outJSON", "outRAW", "outYAML"] {
            assert!(sink.has_entry(entry), "missing {entry}");
        }
    }
}
