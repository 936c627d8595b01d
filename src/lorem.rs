// Lorem Generator - placeholder text from a fixed word bank
// Generates words, sentences or paragraphs; paragraph size is driven by a
// length tier (short/medium/long).

use rand::Rng;

/// The classic lorem ipsum vocabulary
const WORDS: [&str; 63] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "reprehenderit",
    "voluptate", "velit", "esse", "cillum", "eu", "fugiat", "nulla", "pariatur", "excepteur",
    "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui", "officia",
    "deserunt", "mollit", "anim", "id", "est", "laborum",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Words,
    Sentences,
    Paragraphs,
}

impl Unit {
    pub fn from_name(name: &str) -> Option<Unit> {
        match name {
            "words" => Some(Unit::Words),
            "sentences" => Some(Unit::Sentences),
            "paragraphs" => Some(Unit::Paragraphs),
            _ => None,
        }
    }
}

/// Paragraph length tier, in words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Length {
    Short,
    #[default]
    Medium,
    Long,
}

impl Length {
    pub fn from_name(name: &str) -> Option<Length> {
        match name {
            "short" => Some(Length::Short),
            "medium" => Some(Length::Medium),
            "long" => Some(Length::Long),
            _ => None,
        }
    }

    /// Random word budget for this tier
    fn word_count<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        match self {
            Length::Short => rng.random_range(10..20),
            Length::Medium => rng.random_range(20..40),
            Length::Long => rng.random_range(40..70),
        }
    }
}

/// Generate `amount` units using the thread-local RNG
pub fn generate(unit: Unit, amount: usize, length: Length) -> String {
    generate_with(unit, amount, length, &mut rand::rng())
}

/// Generate `amount` units from the provided RNG
pub fn generate_with<R: Rng + ?Sized>(
    unit: Unit,
    amount: usize,
    length: Length,
    rng: &mut R,
) -> String {
    match unit {
        Unit::Words => {
            let words: Vec<&str> = (0..amount).map(|_| random_word(rng)).collect();
            words.join(" ") + "."
        }
        Unit::Sentences => {
            let sentences: Vec<String> = (0..amount).map(|_| sentence(rng)).collect();
            sentences.join(" ")
        }
        Unit::Paragraphs => {
            let paragraphs: Vec<String> = (0..amount).map(|_| paragraph(length, rng)).collect();
            paragraphs.join("\n\n")
        }
    }
}

fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}

/// 10-20 random words ending with a period
fn sentence<R: Rng + ?Sized>(rng: &mut R) -> String {
    let count = Length::Short.word_count(rng);
    let words: Vec<&str> = (0..count).map(|_| random_word(rng)).collect();
    words.join(" ") + "."
}

/// Enough ~10-word sentences to cover the tier's word budget
fn paragraph<R: Rng + ?Sized>(length: Length, rng: &mut R) -> String {
    let budget = length.word_count(rng);
    let sentence_count = budget.div_ceil(10);
    let sentences: Vec<String> = (0..sentence_count).map(|_| sentence(rng)).collect();
    sentences.join(" ")
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
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_words_unit() {
        let text = generate_with(Unit::Words, 5, Length::Medium, &mut rng());
        assert!(text.ends_with('.'));
        let body = text.trim_end_matches('.');
        assert_eq!(body.split(' ').count(), 5);
        assert!(body.split(' ').all(|w| WORDS.contains(&w)));
    }

    #[test]
    fn test_sentences_unit() {
        let text = generate_with(Unit::Sentences, 3, Length::Medium, &mut rng());
        assert_eq!(text.matches('.').count(), 3);
        // Each sentence carries 10-20 words
        for sentence in text.split_inclusive('.') {
            let words = sentence.trim().trim_end_matches('.').split(' ').count();
            assert!((10..=20).contains(&words), "sentence had {} words", words);
        }
    }

    #[test]
    fn test_paragraphs_unit() {
        let text = generate_with(Unit::Paragraphs, 4, Length::Long, &mut rng());
        assert_eq!(text.split("\n\n").count(), 4);
        for para in text.split("\n\n") {
            // Long tier: 40-70 word budget at ~10 words per sentence
            let sentences = para.matches('.').count();
            assert!((4..=7).contains(&sentences), "paragraph had {} sentences", sentences);
        }
    }

    #[test]
    fn test_deterministic_with_seeded_rng() {
        let a = generate_with(Unit::Paragraphs, 2, Length::Short, &mut rng());
        let b = generate_with(Unit::Paragraphs, 2, Length::Short, &mut rng());
        assert_eq!(a, b);
    }
}
