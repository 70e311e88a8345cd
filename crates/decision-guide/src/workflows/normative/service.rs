use std::collections::BTreeMap;
use std::sync::Arc;

use super::domain::{Answer, AnswerSet, Factor, ParseError};
use super::export::format_summary;
use super::reconcile::{reconcile, set_factor_answer};
use super::resolver::{resolve, Resolution};
use super::sequence::question_sequence;
use super::tree::{standard_tree, TreeNode};
use super::views::DecisionStateView;

/// Stateless facade used by the HTTP layer: every call carries its answers
/// and gets the reconciled state back.
#[derive(Debug, Clone)]
pub struct DecisionService {
    tree: Arc<TreeNode>,
}

impl Default for DecisionService {
    fn default() -> Self {
        Self::standard()
    }
}

impl DecisionService {
    pub fn standard() -> Self {
        Self::new(standard_tree())
    }

    pub fn new(tree: Arc<TreeNode>) -> Self {
        Self { tree }
    }

    pub fn tree(&self) -> &TreeNode {
        &self.tree
    }

    /// Reconciles raw answers from a collaborator and resolves them.
    pub fn resolve(
        &self,
        raw_answers: &BTreeMap<String, String>,
    ) -> Result<DecisionStateView, DecisionServiceError> {
        let answers = self.parse_answers(raw_answers)?;
        self.state(answers)
    }

    /// Same as [`DecisionService::resolve`] for answers that are already typed.
    pub fn resolve_answers(
        &self,
        answers: &AnswerSet,
    ) -> Result<DecisionStateView, DecisionServiceError> {
        self.state(reconcile(&self.tree, answers))
    }

    /// Applies one answer change (a `None` value clears the factor).
    pub fn answer(
        &self,
        raw_answers: &BTreeMap<String, String>,
        factor: &str,
        value: Option<&str>,
    ) -> Result<DecisionStateView, DecisionServiceError> {
        let current = self.parse_answers(raw_answers)?;
        let factor: Factor = factor.parse()?;
        let value = value.map(str::parse::<Answer>).transpose()?;

        let answers = set_factor_answer(&self.tree, &current, factor, value);
        self.state(answers)
    }

    /// Summary text for a completed resolution.
    pub fn summary(
        &self,
        raw_answers: &BTreeMap<String, String>,
        problem: &str,
    ) -> Result<String, DecisionServiceError> {
        let answers = self.parse_answers(raw_answers)?;
        self.summary_for(&answers, problem)
    }

    pub fn summary_for(
        &self,
        answers: &AnswerSet,
        problem: &str,
    ) -> Result<String, DecisionServiceError> {
        match resolve(&self.tree, &reconcile(&self.tree, answers)) {
            resolution @ Resolution::Complete { .. } => Ok(format_summary(&resolution, problem)),
            Resolution::Incomplete { next, .. } => Err(DecisionServiceError::Incomplete { next }),
            Resolution::StructurallyInvalid { message } => {
                Err(DecisionServiceError::InvalidTree(message))
            }
        }
    }

    fn parse_answers(
        &self,
        raw_answers: &BTreeMap<String, String>,
    ) -> Result<AnswerSet, DecisionServiceError> {
        let parsed = AnswerSet::from_codes(raw_answers)?;
        Ok(reconcile(&self.tree, &parsed))
    }

    fn state(&self, answers: AnswerSet) -> Result<DecisionStateView, DecisionServiceError> {
        let resolution = resolve(&self.tree, &answers);
        if let Resolution::StructurallyInvalid { message } = resolution {
            return Err(DecisionServiceError::InvalidTree(message));
        }
        let questions = question_sequence(&answers, &resolution);
        DecisionStateView::build(&answers, &resolution, &questions).ok_or_else(|| {
            DecisionServiceError::InvalidTree("resolution has no renderable state".to_string())
        })
    }
}

/// Error raised by the decision service.
#[derive(Debug, thiserror::Error)]
pub enum DecisionServiceError {
    #[error(transparent)]
    Input(#[from] ParseError),
    #[error("decision incomplete: {next} still needs an answer")]
    Incomplete { next: Factor },
    #[error("decision model is malformed: {0}")]
    InvalidTree(String),
}
