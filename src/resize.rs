// Image Resizer - preset target sizes, aspect-ratio fitting, Lanczos resampling

use crate::error::{Result, ToolError};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

// ============================================================================
// PRESETS
// ============================================================================

/// Common target dimensions offered by the resizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Thumbnail,
    InstagramPost,
    TwitterPost,
    FacebookCover,
    Hd,
    Uhd4k,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Thumbnail,
        Preset::InstagramPost,
        Preset::TwitterPost,
        Preset::FacebookCover,
        Preset::Hd,
        Preset::Uhd4k,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Thumbnail => "thumbnail",
            Preset::InstagramPost => "instagram-post",
            Preset::TwitterPost => "twitter-post",
            Preset::FacebookCover => "facebook-cover",
            Preset::Hd => "hd",
            Preset::Uhd4k => "4k",
        }
    }

    pub fn from_name(name: &str) -> Option<Preset> {
        Preset::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Target (width, height) in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Preset::Thumbnail => (150, 150),
            Preset::InstagramPost => (1080, 1080),
            Preset::TwitterPost => (1200, 675),
            Preset::FacebookCover => (851, 315),
            Preset::Hd => (1920, 1080),
            Preset::Uhd4k => (3840, 2160),
        }
    }
}

// ============================================================================
// DIMENSION FITTING
// ============================================================================

/// Compute output dimensions for a target box.
///
/// With `keep_aspect` the image is scaled uniformly to fit inside
/// `max_w` x `max_h`; otherwise the box is used as-is. Dimensions never
/// round down to zero.
pub fn fit_dimensions(
    orig_w: u32,
    orig_h: u32,
    max_w: u32,
    max_h: u32,
    keep_aspect: bool,
) -> (u32, u32) {
    if !keep_aspect {
        return (max_w.max(1), max_h.max(1));
    }
    if orig_w == 0 || orig_h == 0 {
        return (1, 1);
    }

    let scale = f64::min(max_w as f64 / orig_w as f64, max_h as f64 / orig_h as f64);
    let w = (orig_w as f64 * scale).round() as u32;
    let h = (orig_h as f64 * scale).round() as u32;
    (w.max(1), h.max(1))
}

// ============================================================================
// RESIZE + ENCODE
// ============================================================================

/// Resample to exactly `width` x `height` with Lanczos3
pub fn resize(img: &DynamicImage, width: u32, height: u32) -> Result<DynamicImage> {
    if width == 0 || height == 0 {
        return Err(ToolError::invalid_parameter(
            "dimensions",
            format!("{}x{}", width, height),
        ));
    }
    Ok(img.resize_exact(width, height, FilterType::Lanczos3))
}

/// Resize to fit a preset box, preserving aspect ratio
pub fn resize_to_preset(img: &DynamicImage, preset: Preset) -> Result<DynamicImage> {
    let (max_w, max_h) = preset.dimensions();
    let (w, h) = fit_dimensions(img.width(), img.height(), max_w, max_h, true);
    resize(img, w, h)
}

/// PNG-encode the image
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| ToolError::Render {
            message: format!("PNG encoding failed: {}", e),
        })?;
    Ok(out.into_inner())
}

/// JPEG-encode at the given quality (1-100). Alpha is dropped by
/// flattening to RGB.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    if !(1..=100).contains(&quality) {
        return Err(ToolError::invalid_parameter("quality", quality.to_string()));
    }

    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .encode_image(&rgb)
        .map_err(|e| ToolError::Render {
            message: format!("JPEG encoding failed: {}", e),
        })?;
    Ok(out)
}

// ============================================================================
// TESTS
// ============================================================================
