//! Questionnaire answer types.

use serde::{Deserialize, Serialize};

/// The fixed label set a questionnaire choice can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerChoice {
    A,
    B,
    C,
}

impl AnswerChoice {
    /// Ordinal encoding used by the confidence enhancer (A=1, B=2, C=3).
    pub fn ordinal(&self) -> f64 {
        match self {
            AnswerChoice::A => 1.0,
            AnswerChoice::B => 2.0,
            AnswerChoice::C => 3.0,
        }
    }
}

impl std::fmt::Display for AnswerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerChoice::A => write!(f, "A"),
            AnswerChoice::B => write!(f, "B"),
            AnswerChoice::C => write!(f, "C"),
        }
    }
}

/// One answered question. A full submission is an ordered sequence of
/// exactly [`QuestionnaireAnswer::REQUIRED_COUNT`] answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionnaireAnswer {
    /// Id of the answered question in the bank.
    pub question_id: u32,
    /// The chosen label.
    pub choice: AnswerChoice,
}

impl QuestionnaireAnswer {
    /// A complete submission answers every one of the 20 bank questions.
    pub const REQUIRED_COUNT: usize = 20;

    pub fn new(question_id: u32, choice: AnswerChoice) -> Self {
        Self {
            question_id,
            choice,
        }
    }
}
