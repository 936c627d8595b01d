// UUID Generator - v4 (random) and a simplified v1 (timestamp-based)
// The v1 variant is a pragmatic approximation, not RFC 4122 compliant:
// no node/MAC field, millisecond clock resolution, random clock sequence.

use crate::error::{Result, ToolError};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Bulk generation bounds per call
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;

// ============================================================================
// VERSION AND OUTPUT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UuidVersion {
    /// Timestamp-seeded (simplified)
    V1,
    /// Fully random
    V4,
}

impl UuidVersion {
    pub fn name(&self) -> &str {
        match self {
            UuidVersion::V1 => "v1",
            UuidVersion::V4 => "v4",
        }
    }

    pub fn from_name(name: &str) -> Option<UuidVersion> {
        match name {
            "v1" | "1" => Some(UuidVersion::V1),
            "v4" | "4" => Some(UuidVersion::V4),
            _ => None,
        }
    }
}

/// Post-processing applied uniformly regardless of version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UuidFormat {
    #[default]
    Default,
    Uppercase,
    NoHyphens,
    UppercaseNoHyphens,
}

impl UuidFormat {
    pub fn apply(&self, uuid: &str) -> String {
        match self {
            UuidFormat::Default => uuid.to_string(),
            UuidFormat::Uppercase => uuid.to_uppercase(),
            UuidFormat::NoHyphens => uuid.replace('-', ""),
            UuidFormat::UppercaseNoHyphens => uuid.replace('-', "").to_uppercase(),
        }
    }

    pub fn from_name(name: &str) -> Option<UuidFormat> {
        match name {
            "default" => Some(UuidFormat::Default),
            "uppercase" => Some(UuidFormat::Uppercase),
            "nohyphens" => Some(UuidFormat::NoHyphens),
            "uppernohyphens" => Some(UuidFormat::UppercaseNoHyphens),
            _ => None,
        }
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// RFC 4122 version 4: 128 random bits, version nibble 4, variant bits 10
pub fn generate_v4() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Simplified version 1 using the thread-local RNG
pub fn generate_v1() -> String {
    generate_v1_with(&mut rand::rng())
}

/// Simplified version 1: millisecond clock split into low/high 32-bit
/// fields, random clock sequence with variant bits 10, random node field.
pub fn generate_v1_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let millis = Utc::now().timestamp_millis() as u64;
    let time_low = (millis & 0xffff_ffff) as u32;
    // Coarse high bits from a 100ns-style scaling of the same clock
    let time_high = (millis.wrapping_mul(10_000) & 0xffff_ffff) as u32;

    let time_mid = (time_high & 0xffff) as u16;
    let time_hi = ((time_high >> 16) & 0x0fff) as u16;
    let clock_seq = (rng.random_range(0..0x4000u16)) | 0x8000;
    let node = rng.random::<u64>() & 0xffff_ffff_ffff;

    format!(
        "{:08x}-{:04x}-1{:03x}-{:04x}-{:012x}",
        time_low, time_mid, time_hi, clock_seq, node
    )
}

/// Generate `count` identifiers (1-100) with the format applied to each
pub fn generate_batch(version: UuidVersion, format: UuidFormat, count: usize) -> Result<Vec<String>> {
    generate_batch_with(version, format, count, &mut rand::rng())
}

pub fn generate_batch_with<R: Rng + ?Sized>(
    version: UuidVersion,
    format: UuidFormat,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    if !(MIN_COUNT..=MAX_COUNT).contains(&count) {
        return Err(ToolError::invalid_parameter("count", count));
    }

    Ok((0..count)
        .map(|_| {
            let raw = match version {
                UuidVersion::V1 => generate_v1_with(rng),
                UuidVersion::V4 => generate_v4(),
            };
            format.apply(&raw)
        })
        .collect())
}

// ============================================================================
// TESTS
// ============================================================================
