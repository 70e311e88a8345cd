use super::domain::{Answer, Factor, ResolutionPath, Style};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

/// Deepest path the Time-Driven funnel may take (one question per factor).
pub const MAX_DEPTH: usize = 7;

/// Node of the branching question tree.
///
/// Children are optional so that trees authored outside this module (for
/// example deserialized from JSON) can be represented even when malformed;
/// [`validate`] and the resolver report the gap instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Branch {
        factor: Factor,
        #[serde(default)]
        high: Option<Box<TreeNode>>,
        #[serde(default)]
        low: Option<Box<TreeNode>>,
    },
    Leaf {
        style: Style,
    },
}

impl TreeNode {
    pub fn branch(factor: Factor, high: TreeNode, low: TreeNode) -> Self {
        Self::Branch {
            factor,
            high: Some(Box::new(high)),
            low: Some(Box::new(low)),
        }
    }

    pub fn leaf(style: Style) -> Self {
        Self::Leaf { style }
    }

    /// Factor asked at this node, `None` for leaves.
    pub fn factor(&self) -> Option<Factor> {
        match self {
            Self::Branch { factor, .. } => Some(*factor),
            Self::Leaf { .. } => None,
        }
    }

    /// Child selected by `answer`; `None` for leaves and missing children.
    pub fn child(&self, answer: Answer) -> Option<&TreeNode> {
        match self {
            Self::Branch { high, low, .. } => match answer {
                Answer::High => high.as_deref(),
                Answer::Low => low.as_deref(),
            },
            Self::Leaf { .. } => None,
        }
    }

    /// Number of questions on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 0,
            Self::Branch { high, low, .. } => {
                let high = high.as_deref().map(TreeNode::depth).unwrap_or(0);
                let low = low.as_deref().map(TreeNode::depth).unwrap_or(0);
                1 + high.max(low)
            }
        }
    }

    /// Every complete root-to-leaf path with the style it ends in.
    pub fn leaf_paths(&self) -> Vec<(ResolutionPath, Style)> {
        let mut found = Vec::new();
        collect_leaf_paths(self, &mut Vec::new(), &mut found);
        found
    }
}

fn collect_leaf_paths(
    node: &TreeNode,
    prefix: &mut Vec<(Factor, Answer)>,
    found: &mut Vec<(ResolutionPath, Style)>,
) {
    match node {
        TreeNode::Leaf { style } => {
            found.push((prefix.iter().copied().collect(), *style));
        }
        TreeNode::Branch { factor, .. } => {
            for answer in [Answer::High, Answer::Low] {
                if let Some(child) = node.child(answer) {
                    prefix.push((*factor, answer));
                    collect_leaf_paths(child, prefix, found);
                    prefix.pop();
                }
            }
        }
    }
}

/// Shared handle to the built-in Time-Driven tree.
pub fn standard_tree() -> Arc<TreeNode> {
    static TREE: OnceLock<Arc<TreeNode>> = OnceLock::new();
    TREE.get_or_init(|| Arc::new(build_standard_tree())).clone()
}

fn build_standard_tree() -> TreeNode {
    use Factor::*;
    use Style::*;

    let leaf = TreeNode::leaf;

    TreeNode::branch(
        DecisionSignificance,
        TreeNode::branch(
            ImportanceOfCommitment,
            TreeNode::branch(
                LeaderExpertise,
                TreeNode::branch(
                    LikelihoodOfCommitment,
                    leaf(Decide),
                    alignment_funnel(ConsultGroup),
                ),
                TreeNode::branch(
                    LikelihoodOfCommitment,
                    alignment_funnel(ConsultIndividually),
                    alignment_funnel(ConsultGroup),
                ),
            ),
            TreeNode::branch(
                LeaderExpertise,
                leaf(Decide),
                alignment_funnel(ConsultIndividually),
            ),
        ),
        TreeNode::branch(
            ImportanceOfCommitment,
            TreeNode::branch(
                LikelihoodOfCommitment,
                leaf(Decide),
                TreeNode::branch(TeamCompetence, leaf(Delegate), leaf(Facilitate)),
            ),
            leaf(Decide),
        ),
    )
}

/// GA -> GE -> TC tail shared by the high-significance branches: only an
/// aligned, expert and competent group earns `Facilitate`.
fn alignment_funnel(otherwise: Style) -> TreeNode {
    TreeNode::branch(
        Factor::GoalAlignment,
        TreeNode::branch(
            Factor::GroupExpertise,
            TreeNode::branch(
                Factor::TeamCompetence,
                TreeNode::leaf(Style::Facilitate),
                TreeNode::leaf(otherwise),
            ),
            TreeNode::leaf(otherwise),
        ),
        TreeNode::leaf(otherwise),
    )
}

/// Structural problem found while auditing a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeDefect {
    #[error("branch {factor} reached via [{path}] has no child for {answer}")]
    MissingChild {
        factor: Factor,
        answer: Answer,
        path: ResolutionPath,
    },
    #[error("factor {factor} asked twice along [{path}]")]
    RepeatedFactor { factor: Factor, path: ResolutionPath },
    #[error("tree depth {depth} exceeds the {max} factor limit")]
    TooDeep { depth: usize, max: usize },
}

/// Audits a tree, returning every defect found.
pub fn validate(tree: &TreeNode) -> Result<(), Vec<TreeDefect>> {
    let mut defects = Vec::new();
    audit_node(tree, &mut Vec::new(), &mut BTreeSet::new(), &mut defects);

    let depth = tree.depth();
    if depth > MAX_DEPTH {
        defects.push(TreeDefect::TooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }

    if defects.is_empty() {
        Ok(())
    } else {
        Err(defects)
    }
}

fn audit_node(
    node: &TreeNode,
    prefix: &mut Vec<(Factor, Answer)>,
    seen: &mut BTreeSet<Factor>,
    defects: &mut Vec<TreeDefect>,
) {
    let TreeNode::Branch { factor, .. } = node else {
        return;
    };
    let factor = *factor;

    if !seen.insert(factor) {
        defects.push(TreeDefect::RepeatedFactor {
            factor,
            path: prefix.iter().copied().collect(),
        });
        return;
    }

    for answer in [Answer::High, Answer::Low] {
        match node.child(answer) {
            Some(child) => {
                prefix.push((factor, answer));
                audit_node(child, prefix, seen, defects);
                prefix.pop();
            }
            None => defects.push(TreeDefect::MissingChild {
                factor,
                answer,
                path: prefix.iter().copied().collect(),
            }),
        }
    }

    seen.remove(&factor);
}
