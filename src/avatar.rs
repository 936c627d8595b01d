// Letter-Profile Renderer - initials on a filled shape
// Derives up to two initials from a name and renders them centered on a
// circle, square or rounded rect, either as a hand-built SVG string or as
// a raster image (PNG/JPEG). Text size is fixed at 50% of the canvas.

use crate::color::{self, ColorFormat, Rgba};
use crate::error::{Result, ToolError};
use ab_glyph::{point, Font, PxScale, ScaleFont};
use image::RgbaImage;
use std::fmt::Write as _;

/// Supported canvas sizes in pixels
pub const SIZES: [u32; 3] = [128, 256, 512];

/// Font size as a fraction of the canvas size
const FONT_RATIO: f32 = 0.5;

/// Rounded-rect corner radius as a fraction of the canvas size
const CORNER_RATIO: f64 = 0.1;

// ============================================================================
// SHAPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shape {
    #[default]
    Circle,
    Square,
    Rounded,
}

impl Shape {
    pub fn name(&self) -> &str {
        match self {
            Shape::Circle => "circle",
            Shape::Square => "square",
            Shape::Rounded => "rounded",
        }
    }

    pub fn from_name(name: &str) -> Option<Shape> {
        match name {
            "circle" => Some(Shape::Circle),
            "square" => Some(Shape::Square),
            "rounded" => Some(Shape::Rounded),
            _ => None,
        }
    }

    /// Antialiased fill coverage of the pixel at (x, y) for a canvas of
    /// `size` pixels, in [0, 1]
    fn coverage(&self, size: u32, x: u32, y: u32) -> f64 {
        let s = size as f64;
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;

        match self {
            Shape::Square => 1.0,
            Shape::Circle => {
                let r = s / 2.0;
                let d = ((px - r).powi(2) + (py - r).powi(2)).sqrt();
                (r - d + 0.5).clamp(0.0, 1.0)
            }
            Shape::Rounded => {
                let r = s * CORNER_RATIO;
                let half = s / 2.0;
                let dx = ((px - half).abs() - (half - r)).max(0.0);
                let dy = ((py - half).abs() - (half - r)).max(0.0);
                let d = (dx * dx + dy * dy).sqrt();
                (r - d + 0.5).clamp(0.0, 1.0)
            }
        }
    }
}

// ============================================================================
// AVATAR SPEC
// ============================================================================

#[derive(Debug, Clone)]
pub struct AvatarSpec {
    /// Up to two uppercased initials; empty means nothing to render
    pub initials: String,
    pub shape: Shape,
    /// Canvas size in pixels (128 / 256 / 512)
    pub size: u32,
    /// Background fill, hex
    pub background: String,
    /// Text fill, hex
    pub text_color: String,
    /// Font family name, used verbatim in SVG output
    pub font_family: String,
}

impl Default for AvatarSpec {
    fn default() -> Self {
        AvatarSpec {
            initials: String::new(),
            shape: Shape::Circle,
            size: 256,
            background: "#1abc9c".to_string(),
            text_color: "#ffffff".to_string(),
            font_family: "Arial".to_string(),
        }
    }
}

/// First character of each whitespace-separated name part, uppercased,
/// truncated to two
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(2)
        .collect()
}

impl AvatarSpec {
    /// Spec for a full name, deriving the initials
    pub fn for_name(name: &str) -> Self {
        AvatarSpec {
            initials: initials(name),
            ..AvatarSpec::default()
        }
    }

    pub fn has_initials(&self) -> bool {
        !self.initials.is_empty()
    }

    // ========================================================================
    // SVG EXPORT
    // ========================================================================

    /// Hand-built inline SVG mirroring the raster geometry.
    /// `None` when there are no initials yet.
    pub fn svg(&self) -> Option<String> {
        if !self.has_initials() {
            return None;
        }

        let s = self.size;
        let clip = match self.shape {
            Shape::Circle => format!(
                r#"<circle cx="{c}" cy="{c}" r="{c}"/>"#,
                c = s as f64 / 2.0
            ),
            Shape::Rounded => format!(
                r#"<rect x="0" y="0" width="{s}" height="{s}" rx="{rx}"/>"#,
                rx = s as f64 * CORNER_RATIO
            ),
            Shape::Square => format!(r#"<rect x="0" y="0" width="{s}" height="{s}"/>"#),
        };

        let mut out = String::new();
        // Infallible writes into a String
        let _ = writeln!(
            out,
            r#"<svg width="{s}" height="{s}" xmlns="http://www.w3.org/2000/svg">"#
        );
        let _ = writeln!(out, r#"  <defs><clipPath id="shape">{clip}</clipPath></defs>"#);
        let _ = writeln!(
            out,
            r#"  <rect width="{s}" height="{s}" fill="{bg}" clip-path="url(#shape)"/>"#,
            bg = self.background
        );
        let _ = writeln!(
            out,
            concat!(
                r#"  <text x="{x}" y="{y}" font-family="{family}" font-size="{px}" "#,
                r#"fill="{fill}" text-anchor="middle" dominant-baseline="middle" "#,
                r#"font-weight="bold">{text}</text>"#
            ),
            x = s as f64 / 2.0,
            y = s as f64 / 2.0,
            family = self.font_family,
            px = s as f32 * FONT_RATIO,
            fill = self.text_color,
            text = self.initials,
        );
        out.push_str("</svg>\n");
        Some(out)
    }

    // ========================================================================
    // RASTER EXPORT
    // ========================================================================

    /// The filled shape alone, antialiased, transparent outside
    pub fn rasterize_background(&self) -> Result<RgbaImage> {
        let bg = parse_hex_color(&self.background)?;
        Ok(RgbaImage::from_fn(self.size, self.size, |x, y| {
            let coverage = self.shape.coverage(self.size, x, y);
            image::Rgba([bg.r, bg.g, bg.b, (coverage * bg.alpha * 255.0).round() as u8])
        }))
    }

    /// Shape plus centered initials. `Ok(None)` when there are no
    /// initials yet; the caller supplies the resolved font.
    pub fn rasterize<F: Font>(&self, font: &F) -> Result<Option<RgbaImage>> {
        if !self.has_initials() {
            return Ok(None);
        }

        let mut canvas = self.rasterize_background()?;
        let text = parse_hex_color(&self.text_color)?;

        let scale = PxScale::from(self.size as f32 * FONT_RATIO);
        let scaled = font.as_scaled(scale);

        let glyph_ids: Vec<_> = self.initials.chars().map(|c| scaled.glyph_id(c)).collect();
        let total_width: f32 = glyph_ids.iter().map(|id| scaled.h_advance(*id)).sum();

        // Center the glyph box both ways; middle baseline like the SVG
        let mut caret = (self.size as f32 - total_width) / 2.0;
        let height = scaled.ascent() - scaled.descent();
        let baseline = (self.size as f32 - height) / 2.0 + scaled.ascent();

        for id in glyph_ids {
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            caret += scaled.h_advance(id);
            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, glyph_coverage| {
                let x = bounds.min.x as i32 + gx as i32;
                let y = bounds.min.y as i32 + gy as i32;
                if x < 0 || y < 0 || x >= self.size as i32 || y >= self.size as i32 {
                    return;
                }
                // Clip the text to the shape, then blend over the fill
                let mask = self.shape.coverage(self.size, x as u32, y as u32);
                let a = (glyph_coverage as f64 * mask).clamp(0.0, 1.0);
                let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                for (channel, target) in [text.r, text.g, text.b].into_iter().enumerate() {
                    let base = pixel.0[channel] as f64;
                    pixel.0[channel] = (base + (target as f64 - base) * a).round() as u8;
                }
            });
        }

        Ok(Some(canvas))
    }
}

fn parse_hex_color(input: &str) -> Result<Rgba> {
    color::parse(input, ColorFormat::Hex)
}

// ============================================================================
// ENCODING
// ============================================================================

/// Encode as PNG, preserving transparency outside the shape
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, image::ImageFormat::Png)
        .map_err(|e| ToolError::Render {
            message: format!("PNG encoding failed: {}", e),
        })?;
    Ok(buffer.into_inner())
}

/// Encode as JPEG at the given quality (1-100), flattened over white
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Result<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(ToolError::invalid_parameter("quality", quality));
    }

    let flattened = image::RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let px = image.get_pixel(x, y);
        let a = px.0[3] as f64 / 255.0;
        let over_white = |c: u8| (c as f64 * a + 255.0 * (1.0 - a)).round() as u8;
        image::Rgb([over_white(px.0[0]), over_white(px.0[1]), over_white(px.0[2])])
    });

    let mut buffer = std::io::Cursor::new(Vec::new());
    image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .encode_image(&flattened)
        .map_err(|e| ToolError::Render {
            message: format!("JPEG encoding failed: {}", e),
        })?;
    Ok(buffer.into_inner())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_derivation() {
        assert_eq!(initials("john doe"), "JD");
        assert_eq!(initials("alice"), "A");
        assert_eq!(initials("ada lovelace byron"), "AL");
        assert_eq!(initials("  spaced   out  "), "SO");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_svg_requires_initials() {
        let spec = AvatarSpec::default();
        assert!(spec.svg().is_none());
    }

    #[test]
    fn test_svg_geometry_circle() {
        let spec = AvatarSpec::for_name("john doe");
        let svg = spec.svg().unwrap();
        assert!(svg.contains(r#"<svg width="256" height="256""#));
        assert!(svg.contains(r#"<circle cx="128" cy="128" r="128"/>"#));
        assert!(svg.contains(r##"fill="#1abc9c""##));
        assert!(svg.contains(r#"font-size="128""#));
        assert!(svg.contains(">JD</text>"));
    }

    #[test]
    fn test_svg_geometry_rounded() {
        let spec = AvatarSpec {
            shape: Shape::Rounded,
            size: 128,
            ..AvatarSpec::for_name("jane")
        };
        let svg = spec.svg().unwrap();
        // Corner radius is 10% of the canvas
        assert!(svg.contains(r#"rx="12.8""#));
    }

    #[test]
    fn test_shape_coverage() {
        // Square covers the whole canvas
        assert_eq!(Shape::Square.coverage(256, 0, 0), 1.0);
        // Circle: corners are outside, center is inside
        assert_eq!(Shape::Circle.coverage(256, 0, 0), 0.0);
        assert_eq!(Shape::Circle.coverage(256, 128, 128), 1.0);
        // Rounded rect: corners clipped, edge midpoints kept
        assert_eq!(Shape::Rounded.coverage(256, 0, 0), 0.0);
        assert!(Shape::Rounded.coverage(256, 128, 0) > 0.99);
        assert_eq!(Shape::Rounded.coverage(256, 128, 128), 1.0);
    }

    #[test]
    fn test_rasterize_background_circle() {
        let spec = AvatarSpec {
            size: 128,
            ..AvatarSpec::for_name("jd")
        };
        let img = spec.rasterize_background().unwrap();
        assert_eq!((img.width(), img.height()), (128, 128));
        // Transparent corner, opaque background center
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(64, 64).0, [0x1a, 0xbc, 0x9c, 255]);
    }

    fn test_font() -> ab_glyph::FontRef<'static> {
        let bytes: &[u8] = include_bytes!("../tests/fixtures/DejaVuSansMono.ttf");
        ab_glyph::FontRef::try_from_slice(bytes).unwrap()
    }

    #[test]
    fn test_rasterize_without_initials_is_none() {
        let spec = AvatarSpec::default();
        assert!(spec.rasterize(&test_font()).unwrap().is_none());
    }

    #[test]
    fn test_rasterize_paints_initials_inside_shape() {
        let spec = AvatarSpec {
            size: 128,
            ..AvatarSpec::for_name("john doe")
        };
        let img = spec.rasterize(&test_font()).unwrap().unwrap();
        assert_eq!((img.width(), img.height()), (128, 128));

        // Text pixels pull the center region away from the pure background
        // fill and toward white (#ffffff)
        let background = [0x1a, 0xbc, 0x9c];
        let mut text_pixels = 0usize;
        for y in 32..96 {
            for x in 16..112 {
                let px = img.get_pixel(x, y).0;
                if px[0] > background[0] && px[1] > background[1] && px[2] > background[2] {
                    text_pixels += 1;
                }
            }
        }
        assert!(text_pixels > 50, "only {} text pixels rendered", text_pixels);

        // Corners stay outside the circle: transparent, never painted
        assert_eq!(img.get_pixel(0, 0).0[3], 0);
        assert_eq!(img.get_pixel(127, 127).0[3], 0);
    }

    #[test]
    fn test_rasterize_square_leaves_edges_as_background() {
        let spec = AvatarSpec {
            shape: Shape::Square,
            size: 128,
            ..AvatarSpec::for_name("jd")
        };
        let img = spec.rasterize(&test_font()).unwrap().unwrap();
        // Glyphs are centered at half-canvas scale; the border rows stay
        // pure background fill
        assert_eq!(img.get_pixel(0, 0).0, [0x1a, 0xbc, 0x9c, 255]);
        assert_eq!(img.get_pixel(127, 0).0, [0x1a, 0xbc, 0x9c, 255]);
    }

    #[test]
    fn test_encode_png_magic() {
        let spec = AvatarSpec {
            size: 128,
            ..AvatarSpec::for_name("jd")
        };
        let img = spec.rasterize_background().unwrap();
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn test_encode_jpeg_quality_bounds() {
        let spec = AvatarSpec {
            size: 128,
            ..AvatarSpec::for_name("jd")
        };
        let img = spec.rasterize_background().unwrap();
        assert!(matches!(encode_jpeg(&img, 0), Err(ToolError::InvalidParameter { .. })));
        let jpeg = encode_jpeg(&img, 80).unwrap();
        // JFIF SOI marker
        assert_eq!(&jpeg[..2], &[0xff, 0xd8]);
    }

    #[test]
    fn test_invalid_background_color() {
        let spec = AvatarSpec {
            background: "bad".to_string(),
            ..AvatarSpec::for_name("jd")
        };
        assert!(matches!(
            spec.rasterize_background(),
            Err(ToolError::InvalidFormat { .. })
        ));
    }
}
