//! Lexical tokenization shared by the embedding model and the vectorizers.

/// Split text into lowercase alphanumeric tokens, dropping tokens of one or
/// two characters. This is the vocabulary tokenization the lexical
/// artifacts were fitted with, so every inference-time consumer must use
/// the same rule.
pub fn lexical_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 2)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits_on_non_alphanumeric()  {
        let tokens = lexical_tokens("Plans, Ideas... and THEORIES!");
        assert_eq!(tokens, vec!["plans", "ideas", "and", "theories"]);
    }

    #[test]
    fn drops_short_tokens() {
        let tokens = lexical_tokens("I am at an odd place");
        assert_eq!(tokens, vec!["odd", "place"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(lexical_tokens("").is_empty());
        assert!(lexical_tokens("!!! ??").is_empty());
    }
}
