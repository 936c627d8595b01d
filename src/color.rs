// Color Converter - bidirectional conversion between color text formats
// Canonical intermediate form is RGBA with an alpha channel in [0, 1].
// Parsing is strict per format family; rendering always produces all six
// output formats at once.

use crate::error::{Result, ToolError};
use serde::{Deserialize, Serialize};

// ============================================================================
// FORMAT FAMILIES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Cmyk,
}

impl ColorFormat {
    /// Display name, as used in error messages
    pub fn name(&self) -> &str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Rgba => "RGBA",
            ColorFormat::Hsl => "HSL",
            ColorFormat::Hsla => "HSLA",
            ColorFormat::Cmyk => "CMYK",
        }
    }

    /// Parse a format name as entered on the CLI
    pub fn from_name(name: &str) -> Option<ColorFormat> {
        match name.to_lowercase().as_str() {
            "hex" => Some(ColorFormat::Hex),
            "rgb" => Some(ColorFormat::Rgb),
            "rgba" => Some(ColorFormat::Rgba),
            "hsl" => Some(ColorFormat::Hsl),
            "hsla" => Some(ColorFormat::Hsla),
            "cmyk" => Some(ColorFormat::Cmyk),
            _ => None,
        }
    }
}

// ============================================================================
// CANONICAL RGBA
// ============================================================================

/// Canonical color value: 8-bit channels plus alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

impl Rgba {
    pub fn new(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Rgba { r, g, b, alpha }
    }

    /// Fully opaque color
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Rgba::new(r, g, b, 1.0)
    }
}

/// All six rendered representations of one canonical color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversions {
    pub hex: String,
    pub rgb: String,
    pub rgba: String,
    pub hsl: String,
    pub hsla: String,
    pub cmyk: String,
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse `input` as the given format family into canonical RGBA.
///
/// A non-matching string is an `InvalidFormat` error naming the family.
pub fn parse(input: &str, format: ColorFormat) -> Result<Rgba> {
    let input = input.trim();
    match format {
        ColorFormat::Hex => parse_hex(input),
        ColorFormat::Rgb | ColorFormat::Rgba => parse_rgb(input),
        ColorFormat::Hsl | ColorFormat::Hsla => parse_hsl(input),
        ColorFormat::Cmyk => parse_cmyk(input),
    }
}

/// Parse, render and return all six output formats in one step
pub fn convert(input: &str, format: ColorFormat) -> Result<Conversions> {
    Ok(render_all(&parse(input, format)?))
}

fn parse_hex(input: &str) -> Result<Rgba> {
    let invalid = || ToolError::invalid_format("HEX");
    let digits = input.strip_prefix('#').unwrap_or(input);

    if (digits.len() != 6 && digits.len() != 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
    };
    let r = byte(0..2)?;
    let g = byte(2..4)?;
    let b = byte(4..6)?;
    // The last byte of an 8-digit hex string is the alpha channel
    let alpha = if digits.len() == 8 {
        byte(6..8)? as f64 / 255.0
    } else {
        1.0
    };

    Ok(Rgba::new(r, g, b, alpha))
}

/// Strip `prefix(` and the trailing `)`, then split the body on commas
fn function_args<'a>(input: &'a str, prefixes: &[&str]) -> Option<Vec<&'a str>> {
    let body = prefixes.iter().find_map(|p| {
        input
            .strip_prefix(p)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
    })?;
    Some(body.split(',').map(str::trim).collect())
}

fn parse_rgb(input: &str) -> Result<Rgba> {
    let invalid = || ToolError::invalid_format("RGB(A)");
    let args = function_args(input, &["rgba", "rgb"]).ok_or_else(invalid)?;
    if args.len() != 3 && args.len() != 4 {
        return Err(invalid());
    }

    let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
    let r = channel(args[0])?;
    let g = channel(args[1])?;
    let b = channel(args[2])?;
    let alpha = match args.get(3) {
        Some(a) => parse_alpha(a).ok_or_else(invalid)?,
        None => 1.0,
    };

    Ok(Rgba::new(r, g, b, alpha))
}

fn parse_hsl(input: &str) -> Result<Rgba> {
    let invalid = || ToolError::invalid_format("HSL(A)");
    let args = function_args(input, &["hsla", "hsl"]).ok_or_else(invalid)?;
    if args.len() != 3 && args.len() != 4 {
        return Err(invalid());
    }

    let h: u32 = args[0].parse().map_err(|_| invalid())?;
    let s = percent(args[1]).ok_or_else(invalid)?;
    let l = percent(args[2]).ok_or_else(invalid)?;
    if h > 360 || s > 100 || l > 100 {
        return Err(invalid());
    }
    let alpha = match args.get(3) {
        Some(a) => parse_alpha(a).ok_or_else(invalid)?,
        None => 1.0,
    };

    let (r, g, b) = hsl_to_rgb(h as f64, s as f64 / 100.0, l as f64 / 100.0);
    Ok(Rgba::new(r, g, b, alpha))
}

fn parse_cmyk(input: &str) -> Result<Rgba> {
    let invalid = || ToolError::invalid_format("CMYK");
    let args = function_args(input, &["cmyk"]).ok_or_else(invalid)?;
    if args.len() != 4 {
        return Err(invalid());
    }

    let mut channels = [0.0f64; 4];
    for (slot, arg) in channels.iter_mut().zip(args.iter().copied()) {
        let value = percent(arg).ok_or_else(invalid)?;
        if value > 100 {
            return Err(invalid());
        }
        *slot = value as f64 / 100.0;
    }
    let [c, m, y, k] = channels;

    let channel = |x: f64| (255.0 * (1.0 - x) * (1.0 - k)).round() as u8;
    Ok(Rgba::opaque(channel(c), channel(m), channel(y)))
}

fn percent(s: &str) -> Option<u32> {
    s.strip_suffix('%')?.trim().parse().ok()
}

fn parse_alpha(s: &str) -> Option<f64> {
    let alpha: f64 = s.parse().ok()?;
    (0.0..=1.0).contains(&alpha).then_some(alpha)
}

// ============================================================================
// CHANNEL MATH
// ============================================================================

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Standard piecewise HSL to RGB; hue in degrees, s/l normalized
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        // Achromatic
        let v = (l * 255.0).round() as u8;
        return (v, v, v);
    }

    let hue = h / 360.0;
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = (hue_to_channel(p, q, hue + 1.0 / 3.0) * 255.0).round() as u8;
    let g = (hue_to_channel(p, q, hue) * 255.0).round() as u8;
    let b = (hue_to_channel(p, q, hue - 1.0 / 3.0) * 255.0).round() as u8;
    (r, g, b)
}

/// Min/max based RGB to HSL; hue is 0 for achromatic colors
fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (u32, u32, u32) {
    let rr = r as f64 / 255.0;
    let gg = g as f64 / 255.0;
    let bb = b as f64 / 255.0;
    let max = rr.max(gg).max(bb);
    let min = rr.min(gg).min(bb);

    let l = (max + min) / 2.0;
    let mut h = 0.0;
    let mut s = 0.0;

    if max != min {
        let d = max - min;
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == rr {
            (gg - bb) / d + if gg < bb { 6.0 } else { 0.0 }
        } else if max == gg {
            (bb - rr) / d + 2.0
        } else {
            (rr - gg) / d + 4.0
        };
        h *= 60.0;
    }

    (h.round() as u32, (s * 100.0).round() as u32, (l * 100.0).round() as u32)
}

/// RGB to CMYK percentages; pure black is cmyk(0%, 0%, 0%, 100%)
fn rgb_to_cmyk(r: u8, g: u8, b: u8) -> (u32, u32, u32, u32) {
    let rr = r as f64 / 255.0;
    let gg = g as f64 / 255.0;
    let bb = b as f64 / 255.0;

    let k = 1.0 - rr.max(gg).max(bb);
    if k >= 1.0 {
        return (0, 0, 0, 100);
    }

    let c = (1.0 - rr - k) / (1.0 - k) * 100.0;
    let m = (1.0 - gg - k) / (1.0 - k) * 100.0;
    let y = (1.0 - bb - k) / (1.0 - k) * 100.0;
    (c.round() as u32, m.round() as u32, y.round() as u32, (k * 100.0).round() as u32)
}

// ============================================================================
// RENDERING
// ============================================================================

/// Render canonical RGBA to all six output formats
pub fn render_all(color: &Rgba) -> Conversions {
    let Rgba { r, g, b, alpha } = *color;

    // Hex carries an alpha suffix only when the color is not fully opaque
    let hex = if alpha < 1.0 {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, (alpha * 255.0).round() as u8)
    } else {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    };

    let (h, s, l) = rgb_to_hsl(r, g, b);
    let (c, m, y, k) = rgb_to_cmyk(r, g, b);

    Conversions {
        hex,
        rgb: format!("rgb({}, {}, {})", r, g, b),
        rgba: format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        hsl: format!("hsl({}, {}%, {}%)", h, s, l),
        hsla: format!("hsla({}, {}%, {}%, {})", h, s, l, alpha),
        cmyk: format!("cmyk({}%, {}%, {}%, {}%)", c, m, y, k),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse("#3366cc", ColorFormat::Hex).unwrap(), Rgba::opaque(0x33, 0x66, 0xcc));
        // Leading '#' is optional
        assert_eq!(parse("3366cc", ColorFormat::Hex).unwrap(), Rgba::opaque(0x33, 0x66, 0xcc));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let c = parse("#ff000080", ColorFormat::Hex).unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert!((c.alpha - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        assert_eq!(parse("rgb(12, 34, 56)", ColorFormat::Rgb).unwrap(), Rgba::opaque(12, 34, 56));
        let c = parse("rgba(12, 34, 56, 0.5)", ColorFormat::Rgba).unwrap();
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn test_parse_hsl() {
        // Primary green
        assert_eq!(parse("hsl(120, 100%, 50%)", ColorFormat::Hsl).unwrap(), Rgba::opaque(0, 255, 0));
        // Achromatic: saturation 0 yields equal channels
        assert_eq!(parse("hsl(42, 0%, 50%)", ColorFormat::Hsl).unwrap(), Rgba::opaque(128, 128, 128));
    }

    #[test]
    fn test_parse_cmyk() {
        assert_eq!(parse("cmyk(0%, 100%, 100%, 0%)", ColorFormat::Cmyk).unwrap(), Rgba::opaque(255, 0, 0));
        assert_eq!(parse("cmyk(0%, 0%, 0%, 100%)", ColorFormat::Cmyk).unwrap(), Rgba::opaque(0, 0, 0));
    }

    #[test]
    fn test_invalid_formats_name_the_family() {
        let err = parse("#zzz", ColorFormat::Hex).unwrap_err();
        assert_eq!(err.to_string(), "Invalid HEX format");
        let err = parse("rgb(300, 0, 0, 0, 0)", ColorFormat::Rgb).unwrap_err();
        assert_eq!(err.to_string(), "Invalid RGB(A) format");
        let err = parse("hsl(10, 20, 30)", ColorFormat::Hsl).unwrap_err();
        assert_eq!(err.to_string(), "Invalid HSL(A) format");
        let err = parse("cmyk(1%, 2%, 3%)", ColorFormat::Cmyk).unwrap_err();
        assert_eq!(err.to_string(), "Invalid CMYK format");
    }

    #[test]
    fn test_render_all_opaque() {
        let out = render_all(&Rgba::opaque(51, 102, 204));
        assert_eq!(out.hex, "#3366cc");
        assert_eq!(out.rgb, "rgb(51, 102, 204)");
        assert_eq!(out.rgba, "rgba(51, 102, 204, 1)");
        assert_eq!(out.hsl, "hsl(220, 60%, 50%)");
        assert_eq!(out.cmyk, "cmyk(75%, 50%, 0%, 20%)");
    }

    #[test]
    fn test_hex_alpha_suffix_only_when_translucent() {
        let translucent = render_all(&Rgba::new(255, 0, 0, 0.5));
        assert_eq!(translucent.hex, "#ff000080");
        assert_eq!(translucent.rgba, "rgba(255, 0, 0, 0.5)");
        let opaque = render_all(&Rgba::opaque(255, 0, 0));
        assert_eq!(opaque.hex, "#ff0000");
    }

    #[test]
    fn test_cmyk_pure_black_no_division_by_zero() {
        let out = render_all(&Rgba::opaque(0, 0, 0));
        assert_eq!(out.cmyk, "cmyk(0%, 0%, 0%, 100%)");
    }

    #[test]
    fn test_hex_roundtrip_within_rounding() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (17, 130, 201), (1, 2, 3)] {
            let rendered = render_all(&Rgba::opaque(r, g, b));
            let back = parse(&rendered.hex, ColorFormat::Hex).unwrap();
            assert_eq!((back.r, back.g, back.b), (r, g, b));
        }
    }

    #[test]
    fn test_hsl_roundtrip_within_one_unit() {
        let original = Rgba::opaque(120, 64, 200);
        let rendered = render_all(&original);
        let back = parse(&rendered.hsl, ColorFormat::Hsl).unwrap();
        assert!((back.r as i32 - original.r as i32).abs() <= 2);
        assert!((back.g as i32 - original.g as i32).abs() <= 2);
        assert!((back.b as i32 - original.b as i32).abs() <= 2);
    }
}
