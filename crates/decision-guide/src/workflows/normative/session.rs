use super::domain::{Answer, AnswerSet, Factor};
use super::export::format_summary;
use super::reconcile::set_factor_answer;
use super::resolver::{resolve, Resolution};
use super::sequence::{question_sequence, QuestionEntry};
use super::tree::{standard_tree, TreeNode};
use std::sync::Arc;

/// Consumer-held state for one user working through the funnel.
#[derive(Debug, Clone)]
pub struct DecisionSession {
    tree: Arc<TreeNode>,
    problem: String,
    answers: AnswerSet,
}

impl Default for DecisionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionSession {
    pub fn new() -> Self {
        Self::with_tree(standard_tree())
    }

    pub fn with_tree(tree: Arc<TreeNode>) -> Self {
        Self {
            tree,
            problem: String::new(),
            answers: AnswerSet::new(),
        }
    }

    pub fn problem(&self) -> &str {
        &self.problem
    }

    pub fn set_problem(&mut self, problem: impl Into<String>) {
        self.problem = problem.into();
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// Sets or clears one answer, discarding downstream answers that fall
    /// off the live path.
    pub fn answer(&mut self, factor: Factor, value: Option<Answer>) -> Resolution {
        self.answers = set_factor_answer(&self.tree, &self.answers, factor, value);
        self.resolution()
    }

    /// Selecting the value that is already recorded clears it.
    pub fn toggle(&mut self, factor: Factor, value: Answer) -> Resolution {
        let next = if self.answers.get(factor) == Some(value) {
            None
        } else {
            Some(value)
        };
        self.answer(factor, next)
    }

    /// Clears the most recently asked answer on the path, if any.
    pub fn undo(&mut self) -> Resolution {
        match self.answers.factors().last() {
            Some(factor) => self.answer(factor, None),
            None => self.resolution(),
        }
    }

    pub fn resolution(&self) -> Resolution {
        resolve(&self.tree, &self.answers)
    }

    pub fn questions(&self) -> Vec<QuestionEntry> {
        question_sequence(&self.answers, &self.resolution())
    }

    /// Shareable summary, available only once a style is recommended.
    pub fn summary(&self) -> Option<String> {
        let resolution = self.resolution();
        resolution
            .is_complete()
            .then(|| format_summary(&resolution, &self.problem))
    }

    pub fn reset(&mut self) {
        self.problem.clear();
        self.answers.clear();
    }
}
