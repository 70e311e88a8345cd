use super::domain::{AnswerSet, Factor, ResolutionPath, Style};
use super::tree::TreeNode;
use serde::Serialize;
use tracing::{debug, error};

/// Outcome of walking the tree against a (possibly partial) answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// More input is needed; `next` is the first unanswered factor on the path.
    Incomplete { next: Factor, path: ResolutionPath },
    Complete { style: Style, path: ResolutionPath },
    /// The tree has a branch without a child for the given answer. Only a
    /// malformed tree can produce this; it is never mapped onto a style.
    StructurallyInvalid { message: String },
}

impl Resolution {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    pub fn style(&self) -> Option<Style> {
        match self {
            Self::Complete { style, .. } => Some(*style),
            _ => None,
        }
    }

    pub fn next_question(&self) -> Option<Factor> {
        match self {
            Self::Incomplete { next, .. } => Some(*next),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&ResolutionPath> {
        match self {
            Self::Incomplete { path, .. } | Self::Complete { path, .. } => Some(path),
            Self::StructurallyInvalid { .. } => None,
        }
    }
}

/// Walks `tree` from the root using `answers`.
pub fn resolve(tree: &TreeNode, answers: &AnswerSet) -> Resolution {
    let mut path = ResolutionPath::new();
    let mut node = tree;

    loop {
        let factor = match node {
            TreeNode::Leaf { style } => {
                debug!(style = style.code(), steps = path.len(), "resolution complete");
                return Resolution::Complete {
                    style: *style,
                    path,
                };
            }
            TreeNode::Branch { factor, .. } => *factor,
        };

        let Some(value) = answers.get(factor) else {
            debug!(next = factor.code(), steps = path.len(), "resolution incomplete");
            return Resolution::Incomplete { next: factor, path };
        };

        let Some(child) = node.child(value) else {
            let message =
                format!("Invalid path in model: no branch for {factor}={value} after [{path}]");
            error!(%message, "decision tree is malformed");
            return Resolution::StructurallyInvalid { message };
        };

        path.push(factor, value);
        node = child;
    }
}
