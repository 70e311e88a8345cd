use super::domain::{Answer, AnswerSet, Factor};
use super::tree::TreeNode;
use tracing::debug;

/// Keeps only the answers that lie on the live path from the root.
///
/// The walk mirrors [`super::resolve`] but, instead of reporting, it stops at
/// the first factor the candidate has no answer for. Anything the walk did not
/// reach is dropped, so the result is always one connected root path.
pub fn reconcile(tree: &TreeNode, candidate: &AnswerSet) -> AnswerSet {
    let mut kept = AnswerSet::new();
    let mut node = tree;

    while let Some(factor) = node.factor() {
        let Some(value) = candidate.get(factor) else {
            break;
        };
        kept.insert(factor, value);
        match node.child(value) {
            Some(child) => node = child,
            None => break,
        }
    }

    if kept.len() < candidate.len() {
        let discarded: Vec<&'static str> = candidate
            .factors()
            .filter(|factor| !kept.contains(*factor))
            .map(Factor::code)
            .collect();
        debug!(?discarded, "discarded answers no longer on the live path");
    }

    kept
}

/// Records (or clears, when `value` is `None`) one answer and re-derives the
/// authoritative answer set. Changing an upstream factor drops every
/// downstream answer whose branch is no longer reachable.
pub fn set_factor_answer(
    tree: &TreeNode,
    current: &AnswerSet,
    factor: Factor,
    value: Option<Answer>,
) -> AnswerSet {
    let mut candidate = current.clone();
    match value {
        Some(value) => {
            candidate.insert(factor, value);
        }
        None => {
            candidate.remove(factor);
        }
    }
    reconcile(tree, &candidate)
}
