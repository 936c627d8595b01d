// Export/import formats - CSV, plain text, palette JSON
// These shapes are round-trip contracts with previously exported files,
// so headers and field layouts must stay exactly as documented.

use crate::color::{ColorFormat, Conversions};
use crate::error::{Result, ToolError};
use crate::password::classify_strength;
use crate::uuid_gen::UuidVersion;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// PLAIN TEXT
// ============================================================================

/// Newline-joined plain text export
pub fn lines_txt(values: &[String]) -> String {
    values.join("\n")
}

// ============================================================================
// CSV EXPORTS
// ============================================================================

/// CSV export with header `Password,Strength,Timestamp`
pub fn passwords_csv(passwords: &[String]) -> Result<String> {
    let timestamp = now_iso();
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Password", "Strength", "Timestamp"])
        .map_err(ToolError::export)?;
    for password in passwords {
        writer
            .write_record([password.as_str(), classify_strength(password).as_str(), &timestamp])
            .map_err(ToolError::export)?;
    }
    finish_csv(writer)
}

/// CSV export with header `UUID,Version,Timestamp`
pub fn uuids_csv(uuids: &[String], version: UuidVersion) -> Result<String> {
    let timestamp = now_iso();
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["UUID", "Version", "Timestamp"])
        .map_err(ToolError::export)?;
    for uuid in uuids {
        writer
            .write_record([uuid.as_str(), version.name(), &timestamp])
            .map_err(ToolError::export)?;
    }
    finish_csv(writer)
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer.into_inner().map_err(ToolError::export)?;
    String::from_utf8(bytes).map_err(ToolError::export)
}

/// RFC 3339 with milliseconds, e.g. 2026-08-26T10:30:00.000Z
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ============================================================================
// PALETTE JSON
// ============================================================================

/// Exported color palette: the input, its format, and all conversions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub color: String,
    pub format: ColorFormat,
    pub conversions: Conversions,
}

/// Pretty-printed palette JSON (`{color, format, conversions}`)
pub fn palette_json(palette: &Palette) -> Result<String> {
    serde_json::to_string_pretty(palette).map_err(ToolError::export)
}

/// Re-import a palette file: only `color` is required, `format` defaults
/// to hex. Anything malformed is `None`, never an error.
pub fn palette_from_json(json: &str) -> Option<(String, ColorFormat)> {
    #[derive(Deserialize)]
    struct Import {
        color: String,
        #[serde(default)]
        format: Option<ColorFormat>,
    }

    let import: Import = serde_json::from_str(json).ok()?;
    Some((import.color, import.format.unwrap_or(ColorFormat::Hex)))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn test_lines_txt() {
        let values = vec!["a".to_string(), "b".to_string()];
        assert_eq!(lines_txt(&values), "a\nb");
    }

    #[test]
    fn test_passwords_csv_header_and_rows() {
        let passwords = vec!["Abcdef12!@#$".to_string(), "aaa".to_string()];
        let out = passwords_csv(&passwords).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Password,Strength,Timestamp"));
        let first = lines.next().unwrap();
        assert!(first.starts_with("Abcdef12!@#$,very-strong,"));
        let second = lines.next().unwrap();
        assert!(second.starts_with("aaa,weak,"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_uuids_csv_header_and_rows() {
        let uuids = vec!["a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d".to_string()];
        let out = uuids_csv(&uuids, UuidVersion::V4).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("UUID,Version,Timestamp"));
        assert!(lines.next().unwrap().starts_with("a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d,v4,"));
    }

    #[test]
    fn test_export_errors_are_typed() {
        let err = ToolError::export("disk full");
        assert_eq!(err.to_string(), "Export error: disk full");
    }

    #[test]
    fn test_palette_roundtrip() {
        let conversions = color::convert("#3366cc", ColorFormat::Hex).unwrap();
        let palette = Palette {
            color: "#3366cc".to_string(),
            format: ColorFormat::Hex,
            conversions,
        };
        let json = palette_json(&palette).unwrap();
        let (color, format) = palette_from_json(&json).unwrap();
        assert_eq!(color, "#3366cc");
        assert_eq!(format, ColorFormat::Hex);
    }

    #[test]
    fn test_palette_import_color_only() {
        let (color, format) = palette_from_json(r#"{"color": "rgb(1, 2, 3)"}"#).unwrap();
        assert_eq!(color, "rgb(1, 2, 3)");
        assert_eq!(format, ColorFormat::Hex);
    }

    #[test]
    fn test_palette_import_tolerates_garbage() {
        assert!(palette_from_json("not json").is_none());
        assert!(palette_from_json(r#"{"format": "hex"}"#).is_none());
    }
}
