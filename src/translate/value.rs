//! Conversion from parsed YAML values to JSON values.

use serde_json::Value as Json;
use serde_yaml::Value as Yaml;

use crate::error::WrapError;

/// Convert a YAML value into its JSON equivalent.
///
/// Scalar mapping keys are stringified the way YAML prints them, tags are
/// dropped in favour of the tagged value. Fails on collection keys and on
/// floats JSON can't hold (`.nan`, `.inf`).
pub fn yaml_to_json(value: Yaml) -> Result<Json, WrapError> {
    Ok(match value {
        Yaml::Null => Json::Null,
        Yaml::Bool(b) => Json::Bool(b),
        Yaml::Number(n) => number(&n)?,
        Yaml::String(s) => Json::String(s),
        Yaml::Sequence(seq) => Json::Array(
            seq.into_iter()
                .map(yaml_to_json)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_string(key)?, yaml_to_json(value)?);
            }
            Json::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn number(n: &serde_yaml::Number) -> Result<Json, WrapError> {
    if let Some(i) = n.as_i64() {
        return Ok(Json::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Json::from(u));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Json::Number)
        .ok_or_else(|| WrapError::Encoding(format!("unsupported number {n}: not representable in JSON")))
}

fn key_string(key: Yaml) -> Result<String, WrapError> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Tagged(tagged) => key_string(tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => Err(WrapError::Encoding(
            "unsupported mapping key: JSON object keys must be scalars".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(src: &str) -> Result<Json, WrapError> {
        yaml_to_json(serde_yaml::from_str(src).unwrap())
    }

    #[test]
    fn nested_document() {
        let value = convert("name: yq\ntags: [a, b]\nmeta:\n  stars: 3\n  ratio: 0.5\n  ok: true\n  none: ~\n").unwrap();
        assert_eq!(
            value,
            json!({
                "name": "yq",
                "tags": ["a", "b"],
                "meta": {"stars": 3, "ratio": 0.5, "ok": true, "none": null}
            })
        );
    }

    #[test]
    fn scalar_keys_become_strings() {
        let value = convert("1: one\ntrue: yes\n~: nothing\n").unwrap();
        assert_eq!(value, json!({"1": "one", "true": "yes", "null": "nothing"}));
    }

    #[test]
    fn tags_are_dropped() {
        let value = convert("when: !date 2024-01-01\n").unwrap();
        assert_eq!(value, json!({"when": "2024-01-01"}));
    }

    #[test]
    fn large_unsigned_survives() {
        let value = convert("big: 18446744073709551615\n").unwrap();
        assert_eq!(value, json!({"big": 18446744073709551615u64}));
    }

    #[test]
    fn collection_key_is_an_encoding_error() {
        let err = convert("? [a, b]\n: pair\n").unwrap_err();
        assert!(matches!(err, WrapError::Encoding(_)));
    }

    #[test]
    fn nan_is_an_encoding_error() {
        let err = convert("x: .nan\n").unwrap_err();
        assert!(matches!(err, WrapError::Encoding(_)));
    }
}
