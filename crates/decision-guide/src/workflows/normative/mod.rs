//! Vroom's Time-Driven normative model: the question tree, the resolver that
//! walks it, and the reconciler that keeps recorded answers on one live path.

pub mod domain;
pub mod export;
mod reconcile;
mod resolver;
pub mod router;
mod sequence;
pub mod service;
mod session;
pub mod tree;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    parse_answer_pair, Answer, AnswerSet, Factor, ParseError, PathStep, ResolutionPath, Style,
};
pub use reconcile::{reconcile, set_factor_answer};
pub use resolver::{resolve, Resolution};
pub use router::decision_router;
pub use sequence::{question_sequence, QuestionEntry};
pub use service::{DecisionService, DecisionServiceError};
pub use session::DecisionSession;
pub use tree::{standard_tree, validate, TreeDefect, TreeNode, MAX_DEPTH};
