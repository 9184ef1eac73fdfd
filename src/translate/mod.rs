//! YAML ⇄ JSON translation on either side of the jq subprocess.

mod input;
mod output;
mod value;

pub use input::{translate_input, yaml_to_json_bytes};
pub use output::{parse_json_stream, render_raw, render_yaml, translate_output};
pub use value::yaml_to_json;
