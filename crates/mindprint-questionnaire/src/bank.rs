//! The fixed question bank.

use std::collections::HashMap;

use mindprint_types::{AnalysisError, AnalysisResult, AnswerChoice, Dimension};
use serde::{Deserialize, Serialize};

/// One selectable choice: the letter it votes for and the vote weight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Choice {
    pub letter: char,
    pub weight: f64,
    pub text: String,
}

/// The three choices of a question.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Choices {
    pub a: Choice,
    pub b: Choice,
    pub c: Choice,
}

/// One bank question. Each question probes exactly one dimension; its
/// choices vote for one of that dimension's two letters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub dimension: Dimension,
    pub prompt: String,
    pub choices: Choices,
}

impl Question {
    /// The choice behind a chosen label.
    pub fn choice(&self, choice: AnswerChoice) -> &Choice {
        match choice {
            AnswerChoice::A => &self.choices.a,
            AnswerChoice::B => &self.choices.b,
            AnswerChoice::C => &self.choices.c,
        }
    }
}

#[derive(Deserialize)]
struct BankFile {
    questions: Vec<Question>,
}

/// The validated 20-question bank, compiled into the binary.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    by_id: HashMap<u32, usize>,
}

impl QuestionBank {
    /// Parse and validate the compiled-in bank.
    pub fn bundled() -> AnalysisResult<Self> {
        Self::from_json(include_str!("../data/questions.json"))
    }

    /// Parse and validate a bank from JSON.
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        let file: BankFile = serde_json::from_str(json)
            .map_err(|e| AnalysisError::internal("question bank parse", e.to_string()))?;
        Self::new(file.questions)
    }

    fn new(questions: Vec<Question>) -> AnalysisResult<Self> {
        let mut by_id = HashMap::with_capacity(questions.len());
        let mut per_dim: HashMap<Dimension, usize> = HashMap::new();

        for (idx, q) in questions.iter().enumerate() {
            if by_id.insert(q.id, idx).is_some() {
                return Err(AnalysisError::internal(
                    "question bank validation",
                    format!("duplicate question id {}", q.id),
                ));
            }
            let (first, second) = q.dimension.scoring_letters();
            for choice in [&q.choices.a, &q.choices.b, &q.choices.c] {
                if choice.letter != first && choice.letter != second {
                    return Err(AnalysisError::internal(
                        "question bank validation",
                        format!(
                            "question {} choice letter '{}' is not in dimension {}",
                            q.id, choice.letter, q.dimension
                        ),
                    ));
                }
                if choice.weight <= 0.0 {
                    return Err(AnalysisError::internal(
                        "question bank validation",
                        format!("question {} has a non-positive weight", q.id),
                    ));
                }
            }
            *per_dim.entry(q.dimension).or_insert(0) += 1;
        }

        if questions.len() != 20 || per_dim.len() != 4 || per_dim.values().any(|n| *n != 5) {
            return Err(AnalysisError::internal(
                "question bank validation",
                "bank must hold 5 questions for each of the 4 dimensions",
            ));
        }

        Ok(Self { questions, by_id })
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Look up a question by id.
    pub fn question(&self, id: u32) -> Option<&Question> {
        self.by_id.get(&id).map(|idx| &self.questions[*idx])
    }

    /// All questions in bank order (ascending id).
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Whether a set of answered ids covers the full bank.
    pub fn covers(&self, ids: impl Iterator<Item = u32>) -> bool {
        let answered: std::collections::HashSet<u32> = ids.collect();
        self.questions.iter().all(|q| answered.contains(&q.id))
    }
}
