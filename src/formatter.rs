// Case/Text Formatter - pure string -> string transformations
// Case conversion, whitespace handling, markup wrapping, lists, cleaning,
// encode/decode. Empty input maps to empty output for every operation
// except markup wrapping, which still emits the delimiter pair.

use crate::error::{Result, ToolError};
use base64::Engine;

// ============================================================================
// CASE FAMILY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Upper,
    Lower,
    /// First letter of each word-boundary segment, after lowering
    Capitalize,
    /// First letter of the string/line and of each sentence after ". "
    Sentence,
    /// Alternate case by character index (even -> lower, odd -> upper)
    Toggle,
}

impl CaseStyle {
    /// Human-readable name for display
    pub fn name(&self) -> &str {
        match self {
            CaseStyle::Upper => "uppercase",
            CaseStyle::Lower => "lowercase",
            CaseStyle::Capitalize => "capitalize",
            CaseStyle::Sentence => "sentence",
            CaseStyle::Toggle => "toggle",
        }
    }

    /// Parse a style name as entered on the CLI
    pub fn from_name(name: &str) -> Option<CaseStyle> {
        match name {
            "upper" | "uppercase" => Some(CaseStyle::Upper),
            "lower" | "lowercase" => Some(CaseStyle::Lower),
            "capitalize" | "proper" => Some(CaseStyle::Capitalize),
            "sentence" => Some(CaseStyle::Sentence),
            "toggle" => Some(CaseStyle::Toggle),
            _ => None,
        }
    }

    /// Apply this case style to the input
    pub fn apply(&self, text: &str) -> String {
        match self {
            CaseStyle::Upper => text.to_uppercase(),
            CaseStyle::Lower => text.to_lowercase(),
            CaseStyle::Capitalize => capitalize(text),
            CaseStyle::Sentence => sentence_case(text),
            CaseStyle::Toggle => toggle_case(text),
        }
    }
}

/// Word boundaries are runs of `-`, `_` and whitespace; separators are
/// kept in place
fn capitalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;
    for c in text.to_lowercase().chars() {
        let is_separator = c == '-' || c == '_' || c.is_whitespace();
        if at_boundary && !is_separator {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = is_separator;
    }
    out
}

fn sentence_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(lowered.len());

    for (i, &c) in chars.iter().enumerate() {
        let is_word = c.is_alphanumeric() || c == '_';
        let at_line_start = i == 0 || chars[i - 1] == '\n';
        let after_sentence = {
            // Walk back over at least one whitespace char (newlines
            // included) to a period
            let mut j = i;
            let mut saw_ws = false;
            while j > 0 && chars[j - 1].is_whitespace() {
                j -= 1;
                saw_ws = true;
            }
            saw_ws && j > 0 && chars[j - 1] == '.'
        };

        if is_word && (at_line_start || after_sentence) {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn toggle_case(text: &str) -> String {
    text.chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let converted: Vec<char> = if i % 2 == 0 {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            converted
        })
        .collect()
}

// ============================================================================
// WHITESPACE FAMILY
// ============================================================================

/// Collapse every run of whitespace to a single space
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_ws = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_ws {
                out.push(' ');
            }
            in_ws = true;
        } else {
            out.push(c);
            in_ws = false;
        }
    }
    out
}

/// Trim leading and trailing whitespace
pub fn trim(text: &str) -> String {
    text.trim().to_string()
}

/// Replace each tab with `width` spaces (default width is 4)
pub fn tabs_to_spaces(text: &str, width: usize) -> String {
    text.replace('\t', &" ".repeat(width))
}

/// Replace each run of exactly `width` spaces with a tab, left to right
pub fn spaces_to_tabs(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    text.replace(&" ".repeat(width), "\t")
}

/// Default tab width for tab/space conversion
pub const DEFAULT_TAB_WIDTH: usize = 4;

// ============================================================================
// LINE AND PARAGRAPH TOOLS
// ============================================================================

/// Double every line break
pub fn add_line_breaks(text: &str) -> String {
    text.replace('\n', "\n\n")
}

/// Collapse runs of line breaks into a single space
pub fn remove_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_break = false;
    for c in text.chars() {
        if c == '\n' {
            if !in_break {
                out.push(' ');
            }
            in_break = true;
        } else {
            out.push(c);
            in_break = false;
        }
    }
    out
}

/// Prefix each line with a 1-based index: "1. ", "2. ", ...
pub fn to_numbered_list(text: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix each line with a bullet
pub fn to_bulleted_list(text: &str) -> String {
    text.lines()
        .map(|line| format!("\u{2022} {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// MARKUP FAMILY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
}

impl Markup {
    /// Wrap the entire input in this markup's delimiters
    pub fn wrap(&self, text: &str) -> String {
        match self {
            Markup::Bold => format!("**{}**", text),
            Markup::Italic => format!("*{}*", text),
            Markup::Underline => format!("__{}__", text),
            Markup::Strikethrough => format!("~~{}~~", text),
            Markup::Subscript => format!("<sub>{}</sub>", text),
            Markup::Superscript => format!("<sup>{}</sup>", text),
        }
    }
}

// ============================================================================
// CLEANING FAMILY
// ============================================================================

/// Strip every character that is not a word character or whitespace
pub fn remove_special_chars(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Strip HTML tags with a non-nested `<...>` scan.
/// An unmatched `<` with no closing `>` is left in place.
pub fn remove_html_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Deduplicate lines, preserving first-seen order
pub fn remove_duplicate_lines(text: &str) -> String {
    let mut seen = Vec::new();
    for line in text.split('\n') {
        if !seen.contains(&line) {
            seen.push(line);
        }
    }
    seen.join("\n")
}

/// Deduplicate whitespace-delimited tokens, preserving first-seen order
pub fn remove_duplicate_words(text: &str) -> String {
    let mut seen = Vec::new();
    for word in text.split_whitespace() {
        if !seen.contains(&word) {
            seen.push(word);
        }
    }
    seen.join(" ")
}

// ============================================================================
// ENCODING FAMILY
// ============================================================================

/// Percent-encode for safe inclusion in a URL component
pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode a percent-encoded string
pub fn url_decode(text: &str) -> Result<String> {
    urlencoding::decode(text)
        .map(|cow| cow.into_owned())
        .map_err(|e| ToolError::decode(format!("invalid percent-encoding: {}", e)))
}

/// Base64-encode the input (standard alphabet, with padding)
pub fn base64_encode(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decode Base64 input; malformed input is a `Decode` error, never garbage
pub fn base64_decode(text: &str) -> Result<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| ToolError::decode(format!("invalid Base64: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ToolError::decode(format!("invalid UTF-8: {}", e)))
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const HTML_ENTITIES: [(&str, char); 5] = [
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Unescape the five HTML entities in a single pass
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        for (entity, replacement) in HTML_ENTITIES {
            if rest.starts_with(entity) {
                out.push(replacement);
                rest = &rest[entity.len()..];
                continue 'outer;
            }
        }
        out.push('&');
        rest = &rest[1..];
    }
    out.push_str(rest);
    out
}

// ============================================================================
// TESTS
// ============================================================================
