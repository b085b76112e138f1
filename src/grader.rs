// Scoring a submitted quiz. Pure - no database, no network - so the whole
// module is unit-testable offline.

use serde::{Deserialize, Serialize};

use crate::ai::DEFAULT_EXPLANATION;
use crate::models::QuizQuestion;

/// Per-question grading record, produced in quiz order. Serialized into the
/// session export state so the graded PDF can be rendered later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedDetail {
    pub question: String,
    pub options: Vec<String>,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graded {
    pub score: i64,
    pub total: i64,
    pub details: Vec<GradedDetail>,
}

/// Grade `answers` against `questions` positionally. Comparison is trimmed
/// and case-sensitive; an empty or missing submission is never correct.
pub fn grade(questions: &[QuizQuestion], answers: &[String]) -> Graded {
    let mut score = 0;
    let mut details = Vec::with_capacity(questions.len());

    for (i, q) in questions.iter().enumerate() {
        let user_answer = answers.get(i).map(|a| a.trim()).unwrap_or_default();
        let correct_answer = q.answer.trim();
        let is_correct = !user_answer.is_empty() && user_answer == correct_answer;

        if is_correct {
            score += 1;
        }

        let explanation = if q.explanation.trim().is_empty() {
            DEFAULT_EXPLANATION.to_string()
        } else {
            q.explanation.clone()
        };

        details.push(GradedDetail {
            question: q.question.clone(),
            options: q.options.clone(),
            user_answer: user_answer.to_string(),
            correct_answer: correct_answer.to_string(),
            is_correct,
            explanation,
        });
    }

    Graded {
        score,
        total: questions.len() as i64,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, answer: &str) -> QuizQuestion {
        QuizQuestion {
            question: text.to_string(),
            options: vec![
                answer.to_string(),
                "Wrong 1".to_string(),
                "Wrong 2".to_string(),
                "Wrong 3".to_string(),
            ],
            answer: answer.to_string(),
            explanation: "Because.".to_string(),
        }
    }

    #[test]
    fn counts_correct_answers_in_order() {
        let questions = vec![question("Q1", "Paris"), question("Q2", "Rome")];
        let answers = vec!["Paris".to_string(), "Berlin".to_string()];

        let graded = grade(&questions, &answers);

        assert_eq!(graded.score, 1);
        assert_eq!(graded.total, 2);
        assert_eq!(graded.details.len(), 2);
        assert!(graded.details[0].is_correct);
        assert!(!graded.details[1].is_correct);
        assert_eq!(graded.details[1].user_answer, "Berlin");
        assert_eq!(graded.details[1].correct_answer, "Rome");
    }

    #[test]
    fn is_deterministic_and_side_effect_free() {
        let questions = vec![question("Q1", "Paris")];
        let answers = vec!["Paris".to_string()];
        assert_eq!(grade(&questions, &answers), grade(&questions, &answers));
    }

    #[test]
    fn trims_whitespace_but_keeps_case_sensitivity() {
        let questions = vec![question("Q1", "Paris"), question("Q2", "Paris")];
        let answers = vec![" Paris ".to_string(), "paris".to_string()];

        let graded = grade(&questions, &answers);

        assert!(graded.details[0].is_correct);
        assert!(!graded.details[1].is_correct);
    }

    #[test]
    fn empty_submission_is_never_correct() {
        let mut questions = vec![question("Q1", "Paris"), question("Q2", "Rome")];
        // Even a blank stored answer must not match a blank submission.
        questions.push(question("Q3", ""));

        let graded = grade(&questions, &[]);

        assert_eq!(graded.score, 0);
        assert_eq!(graded.total, 3);
        assert!(graded.details.iter().all(|d| !d.is_correct));
        assert!(graded.details.iter().all(|d| d.user_answer.is_empty()));
    }

    #[test]
    fn score_never_exceeds_total() {
        let questions = vec![question("Q1", "A"), question("Q2", "B")];
        let answers = vec!["A".to_string(), "B".to_string(), "C".to_string()];

        let graded = grade(&questions, &answers);

        assert_eq!(graded.score, 2);
        assert_eq!(graded.total, 2);
    }

    #[test]
    fn blank_explanation_gets_the_default() {
        let mut q = question("Q1", "A");
        q.explanation = "  ".to_string();

        let graded = grade(&[q], &["A".to_string()]);

        assert_eq!(graded.details[0].explanation, DEFAULT_EXPLANATION);
    }
}
