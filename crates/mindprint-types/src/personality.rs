//! Four-letter personality type codes.

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::AnalysisError;

/// A validated four-letter personality type, one letter per dimension in
/// fixed order (IE, NS, TF, JP). Always uppercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonalityType([char; 4]);

impl PersonalityType {
    /// Assemble a type from one letter per dimension, in fixed order.
    ///
    /// Fails if any letter does not belong to its dimension's pair.
    pub fn from_letters(letters: [char; 4]) -> Result<Self, AnalysisError> {
        for (dim, letter) in Dimension::ALL.iter().zip(letters.iter()) {
            if Dimension::of_letter(*letter) != Some(*dim) {
                return Err(AnalysisError::Validation(format!(
                    "letter '{}' is not valid for dimension {}",
                    letter, dim
                )));
            }
        }
        Ok(Self(letters))
    }

    /// Parse a code such as `"INTJ"`. Input is upper-cased first.
    pub fn parse(code: &str) -> Result<Self, AnalysisError> {
        let upper = code.to_uppercase();
        let chars: Vec<char> = upper.chars().collect();
        if chars.len() != 4 {
            return Err(AnalysisError::Validation(format!(
                "personality type must be 4 letters, got {:?}",
                code
            )));
        }
        Self::from_letters([chars[0], chars[1], chars[2], chars[3]])
    }

    /// The letter chosen for a given dimension.
    pub fn letter(&self, dim: Dimension) -> char {
        let idx = Dimension::ALL.iter().position(|d| *d == dim).unwrap_or(0);
        self.0[idx]
    }

    /// All four letters in fixed order.
    pub fn letters(&self) -> [char; 4] {
        self.0
    }
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for PersonalityType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PersonalityType {
    type Error = AnalysisError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PersonalityType> for String {
    fn from(t: PersonalityType) -> String {
        t.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_sixteen_codes() {
        for ie in ['I', 'E'] {
            for ns in ['N', 'S'] {
                for tf in ['T', 'F'] {
                    for jp in ['J', 'P'] {
                        let code: String = [ie, ns, tf, jp].iter().collect();
                        let t = PersonalityType::parse(&code).unwrap();
                        assert_eq!(t.to_string(), code);
                    }
                }
            }
        }
    }

    #[test]
    fn lowercase_input_is_uppercased() {
        let t = PersonalityType::parse("intj").unwrap();
        assert_eq!(t.to_string(), "INTJ");
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(PersonalityType::parse("INT").is_err());
        assert!(PersonalityType::parse("INTJX").is_err());
        assert!(PersonalityType::parse("").is_err());
    }

    #[test]
    fn rejects_letter_in_wrong_position() {
        // J belongs to JP, not to the first slot
        assert!(PersonalityType::parse("JNTI").is_err());
        assert!(PersonalityType::parse("IENT").is_err());
    }

    #[test]
    fn letter_lookup_by_dimension() {
        let t = PersonalityType::parse("ENFP").unwrap();
        assert_eq!(t.letter(Dimension::Ie), 'E');
        assert_eq!(t.letter(Dimension::Ns), 'N');
        assert_eq!(t.letter(Dimension::Tf), 'F');
        assert_eq!(t.letter(Dimension::Jp), 'P');
    }

    #[test]
    fn serde_round_trip_as_string() {
        let t = PersonalityType::parse("ISTP").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"ISTP\"");
        let back: PersonalityType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
