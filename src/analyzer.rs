// Text Analyzer - single-pass statistics over an input string
// Counts, frequency table, derived reading/speaking estimates.
// Empty or whitespace-only input yields no statistics at all.

use serde::{Deserialize, Serialize};

/// Average reading speed, words per minute
const READING_WPM: f64 = 200.0;

/// Average speaking speed, words per minute
const SPEAKING_WPM: f64 = 130.0;

/// Tokens excluded from the most-used-words table
const STOP_WORDS: [&str; 10] = ["the", "a", "an", "and", "or", "but", "in", "on", "at", "to"];

// ============================================================================
// RESULT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// All characters, whitespace included
    pub characters: usize,

    /// Maximal runs of non-whitespace
    pub words: usize,

    /// Segments split on `. ! ?`, empty segments discarded
    pub sentences: usize,

    /// Segments split on blank lines
    pub paragraphs: usize,

    /// Estimated reading time at 200 wpm
    pub reading_time: String,

    /// Estimated speaking time at 130 wpm
    pub speaking_time: String,

    /// Top 5 most frequent cleaned tokens, stop words excluded
    pub most_used_words: Vec<WordCount>,

    /// Distinct cleaned tokens
    pub unique_words: usize,

    /// Average length over alphabetic-only tokens, one decimal place
    pub average_word_length: f64,

    /// Longest alphabetic-only token (ties broken by first occurrence)
    pub longest_word: String,

    /// Shortest alphabetic-only token (ties broken by first occurrence)
    pub shortest_word: String,
}

// ============================================================================
// ANALYSIS
// ============================================================================

/// Analyze `text`, or `None` when there is nothing to analyze
pub fn analyze(text: &str) -> Option<TextStats> {
    if text.trim().is_empty() {
        return None;
    }

    let characters = text.chars().count();
    let words: Vec<&str> = text.split_whitespace().collect();

    let sentences = text
        .split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .count();

    let paragraphs = count_paragraphs(text);

    let reading_time = format_minutes(words.len() as f64 / READING_WPM);
    let speaking_time = format_minutes(words.len() as f64 / SPEAKING_WPM);

    // Frequency over lowercase alphanumeric-stripped tokens,
    // first-seen order retained for stable tie-breaking
    let mut frequency: Vec<WordCount> = Vec::new();
    for word in &words {
        let clean: String = word
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        if clean.is_empty() {
            continue;
        }
        match frequency.iter_mut().find(|wc| wc.word == clean) {
            Some(wc) => wc.count += 1,
            None => frequency.push(WordCount { word: clean, count: 1 }),
        }
    }

    let unique_words = frequency.len();

    let mut most_used_words: Vec<WordCount> = frequency
        .iter()
        .filter(|wc| !STOP_WORDS.contains(&wc.word.as_str()))
        .cloned()
        .collect();
    // Stable sort keeps first-seen order among equal counts
    most_used_words.sort_by(|a, b| b.count.cmp(&a.count));
    most_used_words.truncate(5);

    let alphabetic: Vec<&str> = words
        .iter()
        .copied()
        .filter(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_alphabetic()))
        .collect();

    let average_word_length = if alphabetic.is_empty() {
        0.0
    } else {
        let total: usize = alphabetic.iter().map(|w| w.len()).sum();
        (total as f64 / alphabetic.len() as f64 * 10.0).round() / 10.0
    };

    let mut longest_word = "";
    let mut shortest_word = "";
    for word in &alphabetic {
        if word.len() > longest_word.len() {
            longest_word = word;
        }
        if shortest_word.is_empty() || word.len() < shortest_word.len() {
            shortest_word = word;
        }
    }

    Some(TextStats {
        characters,
        words: words.len(),
        sentences,
        paragraphs,
        reading_time,
        speaking_time,
        most_used_words,
        unique_words,
        average_word_length,
        longest_word: longest_word.to_string(),
        shortest_word: shortest_word.to_string(),
    })
}

/// Paragraphs are separated by a blank (or whitespace-only) line
fn count_paragraphs(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else {
            if !in_paragraph {
                count += 1;
            }
            in_paragraph = true;
        }
    }
    count
}

/// "S seconds" under a minute, otherwise "M min(s) S sec(s)"
fn format_minutes(minutes: f64) -> String {
    if minutes < 1.0 {
        return format!("{} seconds", (minutes * 60.0).round() as u64);
    }
    let mins = minutes.floor() as u64;
    let secs = ((minutes - mins as f64) * 60.0).round() as u64;
    format!(
        "{} min{} {} sec{}",
        mins,
        if mins != 1 { "s" } else { "" },
        secs,
        if secs != 1 { "s" } else { "" },
    )
}

// ============================================================================
// TESTS
// ============================================================================
