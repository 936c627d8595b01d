// JSON Formatter - pretty-print, minify, validate
// Thin layer over serde_json with a configurable indent.

use crate::error::{Result, ToolError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Indentation for pretty output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(usize),
    Tabs,
}

impl Default for Indent {
    fn default() -> Self {
        Indent::Spaces(2)
    }
}

/// Pretty-print with the given indent
pub fn format(input: &str, indent: Indent) -> Result<String> {
    let value = parse(input)?;
    let indent_str = match indent {
        Indent::Spaces(n) => " ".repeat(n),
        Indent::Tabs => "\t".to_string(),
    };

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| ToolError::InvalidJson { reason: e.to_string() })?;

    String::from_utf8(out).map_err(|e| ToolError::InvalidJson { reason: e.to_string() })
}

/// Re-serialize without any whitespace
pub fn minify(input: &str) -> Result<String> {
    let value = parse(input)?;
    serde_json::to_string(&value).map_err(|e| ToolError::InvalidJson { reason: e.to_string() })
}

/// Check syntax only; the error carries serde_json's message
pub fn validate(input: &str) -> Result<()> {
    parse(input).map(|_| ())
}

fn parse(input: &str) -> Result<Value> {
    serde_json::from_str(input).map_err(|e| ToolError::InvalidJson {
        reason: e.to_string(),
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_spaces() {
        let out = format(r#"{"a":[1,2]}"#, Indent::Spaces(2)).unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_format_with_tabs() {
        let out = format(r#"{"a":1}"#, Indent::Tabs).unwrap();
        assert_eq!(out, "{\n\t\"a\": 1\n}");
    }

    #[test]
    fn test_minify() {
        let out = minify("{\n  \"a\": [1, 2],\n  \"b\": null\n}").unwrap();
        assert_eq!(out, r#"{"a":[1,2],"b":null}"#);
    }

    #[test]
    fn test_validate() {
        assert!(validate(r#"{"ok": true}"#).is_ok());
        let err = validate("{broken").unwrap_err();
        assert!(matches!(err, ToolError::InvalidJson { .. }));
        assert!(err.to_string().starts_with("Invalid JSON:"));
    }

    #[test]
    fn test_non_object_roots() {
        assert_eq!(minify(" [1, 2, 3] ").unwrap(), "[1,2,3]");
        assert_eq!(minify("\"str\"").unwrap(), "\"str\"");
        assert!(validate("42").is_ok());
    }
}
