//! The four binary personality dimensions.

use serde::{Deserialize, Serialize};

/// One of the four independent binary personality axes.
///
/// Iteration order is fixed (IE, NS, TF, JP) and every consumer that
/// assembles a four-letter type relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Dimension {
    /// Introversion / Extraversion.
    Ie,
    /// Intuition / Sensing.
    Ns,
    /// Thinking / Feeling.
    Tf,
    /// Judging / Perceiving.
    Jp,
}

impl Dimension {
    /// All dimensions in fixed assembly order.
    pub const ALL: [Dimension; 4] = [Dimension::Ie, Dimension::Ns, Dimension::Tf, Dimension::Jp];

    /// Two-letter key used in confidence maps and artifact file names.
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Ie => "IE",
            Dimension::Ns => "NS",
            Dimension::Tf => "TF",
            Dimension::Jp => "JP",
        }
    }

    /// Letters in binary-class order: class 0 maps to the first letter,
    /// class 1 to the second. Used by the text ensemble.
    pub fn class_letters(&self) -> (char, char) {
        match self {
            Dimension::Ie => ('I', 'E'),
            Dimension::Ns => ('N', 'S'),
            Dimension::Tf => ('T', 'F'),
            Dimension::Jp => ('J', 'P'),
        }
    }

    /// Letters in questionnaire-scoring order. The first-listed letter wins
    /// ties and is the default when a dimension receives no weight.
    pub fn scoring_letters(&self) -> (char, char) {
        match self {
            Dimension::Ie => ('I', 'E'),
            Dimension::Ns => ('S', 'N'),
            Dimension::Tf => ('T', 'F'),
            Dimension::Jp => ('J', 'P'),
        }
    }

    /// The dimension owning a given letter, if any.
    pub fn of_letter(letter: char) -> Option<Dimension> {
        match letter {
            'I' | 'E' => Some(Dimension::Ie),
            'N' | 'S' => Some(Dimension::Ns),
            'T' | 'F' => Some(Dimension::Tf),
            'J' | 'P' => Some(Dimension::Jp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
