//! JSON pretty-printing.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::core::ReloadError;

/// Parse `text` as JSON and re-serialize it with `indent` spaces per level.
///
/// Object keys keep the order they had in the input (`preserve_order`).
pub(super) fn pretty_print(text: &str, indent: usize) -> Result<String, ReloadError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let indent = " ".repeat(indent);
    let mut out = Vec::with_capacity(text.len() * 2);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;

    // serde_json only ever writes UTF-8
    String::from_utf8(out)
        .map_err(|e| ReloadError::Parse(<serde_json::Error as serde::ser::Error>::custom(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn test_key_order_preserved() {
        let out = pretty_print(r#"{"b":1,"a":2}"#, 2).unwrap();
        assert_eq!(out, "{\n  \"b\": 1,\n  \"a\": 2\n}");
    }

    #[test]
    fn test_nested_indent_width() {
        let out = pretty_print(r#"{"list":[1,{"z":null}]}"#, 4).unwrap();
        assert_eq!(
            out,
            "{\n    \"list\": [\n        1,\n        {\n            \"z\": null\n        }\n    ]\n}"
        );
    }

    #[test]
    fn test_scalar_document() {
        assert_eq!(pretty_print("  42 ", 2).unwrap(), "42");
        assert_eq!(pretty_print("\"s\"", 2).unwrap(), "\"s\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(pretty_print("{}", 2).unwrap(), "{}");
        assert_eq!(pretty_print("[]", 2).unwrap(), "[]");
    }

    #[test]
    fn test_malformed() {
        for input in ["", "{", "{\"a\":}", "[1,]", "{} {}"] {
            let err = pretty_print(input, 2).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "input: {input:?}");
        }
    }

    #[test]
    fn test_round_trip_is_semantically_equal() {
        let inputs = [
            r#"{"name":"x","nested":{"k":[true,false,null]},"n":-1.5e3}"#,
            r#"[{"b":1,"a":{"d":4,"c":3}},"tail"]"#,
            r#"{"unicode":"héllo é ✓","escaped":"line\nbreak"}"#,
        ];

        for input in inputs {
            let original: serde_json::Value = serde_json::from_str(input).unwrap();
            let rendered = pretty_print(input, 2).unwrap();
            let reparsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
            assert_eq!(original, reparsed);

            // Rendering is stable: a second pass changes nothing
            assert_eq!(pretty_print(&rendered, 2).unwrap(), rendered);
        }
    }
}
