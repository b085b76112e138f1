use serde::{Deserialize, Serialize};

pub type Questions = Vec<QuizQuestion>;

/// A single multiple-choice question. Invariant: `answer` equals one of
/// `options` verbatim, and `options` always holds exactly four entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}
