// Password Generator - charset-driven random strings
// Guarantees one character from every enabled class, fills the remainder
// from the union charset, then applies a uniform shuffle so the guaranteed
// characters are not positionally predictable.

use crate::error::{Result, ToolError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// CHARSETS
// ============================================================================

// The "safe" variants drop visually ambiguous characters. The exclusions are
// intentionally asymmetric (digits drop 0 and 1, but uppercase keeps most
// lookalikes) and are preserved verbatim from the shipped charset strings.
const UPPERCASE_SAFE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const UPPERCASE_ALL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE_SAFE: &str = "abcdefghjkmnpqrstuvwxyz";
const LOWERCASE_ALL: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS_SAFE: &str = "23456789";
const DIGITS_ALL: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

// ============================================================================
// OPTIONS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordOptions {
    /// Target password length
    pub length: usize,

    /// Allowed length bounds
    pub min_length: usize,
    pub max_length: usize,

    /// Character class flags
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,

    /// Drop visually ambiguous characters from the class charsets
    pub exclude_ambiguous: bool,
}

impl Default for PasswordOptions {
    fn default() -> Self {
        PasswordOptions {
            length: 16,
            min_length: 8,
            max_length: 64,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            exclude_ambiguous: false,
        }
    }
}

impl PasswordOptions {
    /// The charsets for every enabled class, honoring the ambiguity flag
    fn enabled_charsets(&self) -> Vec<&'static str> {
        let mut sets = Vec::new();
        if self.uppercase {
            sets.push(if self.exclude_ambiguous { UPPERCASE_SAFE } else { UPPERCASE_ALL });
        }
        if self.lowercase {
            sets.push(if self.exclude_ambiguous { LOWERCASE_SAFE } else { LOWERCASE_ALL });
        }
        if self.digits {
            sets.push(if self.exclude_ambiguous { DIGITS_SAFE } else { DIGITS_ALL });
        }
        if self.symbols {
            sets.push(SYMBOLS);
        }
        sets
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generate one password using the thread-local RNG
pub fn generate(options: &PasswordOptions) -> Result<String> {
    generate_with(options, &mut rand::rng())
}

/// Generate one password from the provided RNG
pub fn generate_with<R: Rng + ?Sized>(options: &PasswordOptions, rng: &mut R) -> Result<String> {
    let charsets = options.enabled_charsets();
    if charsets.is_empty() {
        return Err(ToolError::NoCharacterSetSelected);
    }
    if options.length < options.min_length
        || options.length > options.max_length
        || options.length < charsets.len()
    {
        return Err(ToolError::invalid_parameter("length", options.length));
    }

    let union: Vec<char> = charsets.iter().flat_map(|set| set.chars()).collect();

    // One guaranteed character per enabled class
    let mut result: Vec<char> = charsets.iter().map(|set| pick(set, rng)).collect();

    while result.len() < options.length {
        result.push(union[rng.random_range(0..union.len())]);
    }

    // Uniform permutation so guaranteed characters are not front-loaded
    result.shuffle(rng);
    Ok(result.into_iter().collect())
}

/// Generate `count` passwords in one call
pub fn generate_batch<R: Rng + ?Sized>(
    options: &PasswordOptions,
    count: usize,
    rng: &mut R,
) -> Result<Vec<String>> {
    (0..count).map(|_| generate_with(options, rng)).collect()
}

fn pick<R: Rng + ?Sized>(charset: &str, rng: &mut R) -> char {
    let chars: Vec<char> = charset.chars().collect();
    chars[rng.random_range(0..chars.len())]
}

// ============================================================================
// STRENGTH CLASSIFIER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strength {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "weak",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
            Strength::VeryStrong => "very-strong",
        }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Additive 0-7 score: length tiers, class presence, character variety
pub fn classify_strength(password: &str) -> Strength {
    let chars: Vec<char> = password.chars().collect();
    let mut score = 0;

    if chars.len() >= 12 {
        score += 2;
    } else if chars.len() >= 8 {
        score += 1;
    }

    if chars.iter().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if chars.iter().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if chars.iter().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if chars.iter().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }

    let mut unique: Vec<char> = chars.clone();
    unique.sort_unstable();
    unique.dedup();
    if unique.len() as f64 >= chars.len() as f64 * 0.7 {
        score += 1;
    }

    match score {
        s if s >= 6 => Strength::VeryStrong,
        s if s >= 4 => Strength::Strong,
        s if s >= 2 => Strength::Medium,
        _ => Strength::Weak,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_length_and_class_coverage() {
        let options = PasswordOptions::default();
        let mut rng = rng();
        for _ in 0..50 {
            let pwd = generate_with(&options, &mut rng).unwrap();
            assert_eq!(pwd.chars().count(), 16);
            assert!(pwd.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pwd.chars().any(|c| c.is_ascii_digit()));
            assert!(pwd.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_no_class_selected_is_an_error() {
        let options = PasswordOptions {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        let err = generate_with(&options, &mut rng()).unwrap_err();
        assert!(matches!(err, ToolError::NoCharacterSetSelected));
    }

    #[test]
    fn test_length_bounds_are_enforced() {
        let options = PasswordOptions {
            length: 4,
            ..PasswordOptions::default()
        };
        let err = generate_with(&options, &mut rng()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter { .. }));
    }

    #[test]
    fn test_single_class_generation() {
        let options = PasswordOptions {
            length: 12,
            uppercase: false,
            lowercase: true,
            digits: false,
            symbols: false,
            ..PasswordOptions::default()
        };
        let pwd = generate_with(&options, &mut rng()).unwrap();
        assert!(pwd.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_ambiguous_characters_are_excluded() {
        let options = PasswordOptions {
            length: 64,
            max_length: 64,
            exclude_ambiguous: true,
            ..PasswordOptions::default()
        };
        let mut rng = rng();
        for _ in 0..20 {
            let pwd = generate_with(&options, &mut rng).unwrap();
            for excluded in ['I', 'O', 'i', 'l', 'o', '0', '1'] {
                assert!(!pwd.contains(excluded), "found ambiguous {:?} in {}", excluded, pwd);
            }
        }
    }

    #[test]
    fn test_batch_generation() {
        let options = PasswordOptions::default();
        let batch = generate_batch(&options, 5, &mut rng()).unwrap();
        assert_eq!(batch.len(), 5);
        assert!(batch.iter().all(|p| p.chars().count() == 16));
    }

    #[test]
    fn test_strength_tiers() {
        // Short repeated run scores only the lowercase point
        assert_eq!(classify_strength("aaa"), Strength::Weak);
        // 8 chars, lower only, high variety: 1 + 1 + 1 = 3 -> medium
        assert_eq!(classify_strength("abcdefgh"), Strength::Medium);
        // 8 chars, three classes, high variety: 1 + 3 + 1 = 5 -> strong
        assert_eq!(classify_strength("Abcdef12"), Strength::Strong);
        // 12+ chars, all four classes, high variety: 2 + 4 + 1 = 7
        assert_eq!(classify_strength("Abcdef12!@#$"), Strength::VeryStrong);
    }

    #[test]
    fn test_strength_variety_penalty() {
        // 12 chars but a single repeated character: 2 + 1 = 3 -> medium
        assert_eq!(classify_strength("aaaaaaaaaaaa"), Strength::Medium);
    }

    #[test]
    fn test_strength_labels() {
        assert_eq!(Strength::VeryStrong.to_string(), "very-strong");
        assert_eq!(Strength::Weak.as_str(), "weak");
    }
}
