// Dev Toolbox - Core Library
// Exposes all tool modules for use in the CLI and tests

pub mod error;
pub mod formatter;     // Text Formatter - case styles, whitespace, encodings
pub mod color;         // Color Converter - HEX/RGB/HSL/CMYK
pub mod analyzer;      // Text Analyzer - counts, frequency, read time
pub mod password;      // Password Generator - charsets + strength
pub mod uuid_gen;      // UUID Generator - v1/v4, output formats
pub mod avatar;        // Avatar Generator - initials on SVG/raster
pub mod lorem;         // Lorem Generator - placeholder text
pub mod json_fmt;      // JSON Formatter - pretty/minify/validate
pub mod resize;        // Image Resizer - presets + aspect fitting
pub mod history;       // Recency lists over a key-value store
pub mod export;        // CSV / TXT / palette JSON exports

// Re-export commonly used types
pub use error::{Result, ToolError};
pub use formatter::{CaseStyle, Markup, DEFAULT_TAB_WIDTH};
pub use color::{ColorFormat, Conversions, Rgba};
pub use analyzer::{TextStats, WordCount};
pub use password::{classify_strength, PasswordOptions, Strength};
pub use uuid_gen::{UuidFormat, UuidVersion, MAX_COUNT, MIN_COUNT};
pub use avatar::{AvatarSpec, Shape, SIZES};
pub use lorem::{Length, Unit};
pub use json_fmt::Indent;
pub use resize::Preset;
pub use history::{
    record_color, record_password, record_uuid, FileStore, HistoryEntry, KeyValueStore,
    MemoryStore, RecencyList, HISTORY_CAP, PASSWORD_HISTORY_KEY, RECENT_COLORS_KEY,
    UUID_HISTORY_KEY,
};
pub use export::Palette;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
