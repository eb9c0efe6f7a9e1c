//! Fixed linguistic feature extraction.
//!
//! Produces the 20-value tail block of every dimension's feature vector.
//! The order is part of the trained-model contract and must never change.
//! Ratio denominators are floored at 1 so empty text yields zeros rather
//! than NaN.

/// Number of features in the fixed block.
pub const FEATURE_COUNT: usize = 20;

const POSITIVE_WORDS: [&str; 8] = [
    "good", "great", "happy", "love", "like", "best", "amazing", "wonderful",
];
const NEGATIVE_WORDS: [&str; 8] = [
    "bad", "hate", "worst", "never", "no", "not", "terrible", "awful",
];
const COGNITION_WORDS: [&str; 7] = [
    "think", "believe", "feel", "know", "understand", "realize", "consider",
];
const SOCIAL_WORDS: [&str; 7] = [
    "friend", "people", "together", "meet", "party", "group", "social",
];
const PLANNING_WORDS: [&str; 6] = ["plan", "schedule", "organize", "prepare", "ready", "structured"];
const ABSTRACTION_WORDS: [&str; 7] = [
    "idea", "theory", "concept", "possibility", "future", "potential", "vision",
];

/// Stateless extractor of the fixed linguistic feature block.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinguisticFeatureExtractor;

impl LinguisticFeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all [`FEATURE_COUNT`] features in their fixed order.
    pub fn extract(&self, text: &str) -> Vec<f64> {
        let lower = text.to_lowercase();
        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences: Vec<&str> = text.split('.').collect();

        let char_count = text.chars().count();
        let word_denom = words.len().max(1) as f64;
        let char_denom = char_count.max(1) as f64;

        let avg_word_length = if words.is_empty() {
            0.0
        } else {
            words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
        };
        let avg_sentence_length = if sentences.is_empty() {
            0.0
        } else {
            sentences
                .iter()
                .map(|s| s.split_whitespace().count())
                .sum::<usize>() as f64
                / sentences.len() as f64
        };

        let uppercase = text.chars().filter(|c| c.is_uppercase()).count() as f64;
        let title_case = words.iter().filter(|w| is_title_case(w)).count() as f64;

        let presence_ratio = |lexicon: &[&str]| {
            lexicon.iter().filter(|w| lower.contains(*w)).count() as f64 / word_denom
        };
        let pronoun_ratio = |pronoun: &str| {
            words
                .iter()
                .filter(|w| normalized_token(w) == pronoun)
                .count() as f64
                / word_denom
        };

        vec![
            avg_word_length,
            avg_sentence_length,
            words.len() as f64,
            sentences.len() as f64,
            char_count as f64,
            count_matches(text, "!") as f64 / word_denom,
            count_matches(text, "?") as f64 / word_denom,
            count_matches(text, ",") as f64 / word_denom,
            count_matches(text, "...") as f64 / word_denom,
            uppercase / char_denom,
            title_case / word_denom,
            pronoun_ratio("i"),
            pronoun_ratio("we"),
            pronoun_ratio("you"),
            presence_ratio(&POSITIVE_WORDS),
            presence_ratio(&NEGATIVE_WORDS),
            presence_ratio(&COGNITION_WORDS),
            presence_ratio(&SOCIAL_WORDS),
            presence_ratio(&PLANNING_WORDS),
            presence_ratio(&ABSTRACTION_WORDS),
        ]
    }
}

fn count_matches(text: &str, needle: &str) -> usize {
    text.matches(needle).count()
}

/// First alphabetic character uppercase, every later alphabetic character
/// lowercase.
fn is_title_case(word: &str) -> bool {
    let mut alphabetic = word.chars().filter(|c| c.is_alphabetic());
    match alphabetic.next() {
        Some(first) if first.is_uppercase() => alphabetic.all(|c| c.is_lowercase()),
        _ => false,
    }
}

/// Word stripped of surrounding punctuation, lowercased for comparison.
fn normalized_token(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}
