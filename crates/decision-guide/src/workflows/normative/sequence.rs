use super::domain::{AnswerSet, Factor};
use super::resolver::Resolution;

/// A factor to display, flagged when it is the question awaiting input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionEntry {
    pub factor: Factor,
    pub pending: bool,
}

/// Ordered factors to show: every answered factor in canonical order, plus
/// the pending question when the resolution is incomplete.
///
/// Expects `answers` to be reconciled; the canonical order then coincides
/// with ancestry because every tree path asks factors in that order.
pub fn question_sequence(answers: &AnswerSet, resolution: &Resolution) -> Vec<QuestionEntry> {
    let next = resolution.next_question();

    Factor::ordered()
        .into_iter()
        .filter(|factor| answers.contains(*factor) || Some(*factor) == next)
        .map(|factor| QuestionEntry {
            factor,
            pending: Some(factor) == next,
        })
        .collect()
}
