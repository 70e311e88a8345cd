use super::common::*;
use crate::workflows::normative::{standard_tree, validate, Style, TreeDefect, TreeNode, MAX_DEPTH};
use std::collections::BTreeSet;

#[test]
fn standard_tree_is_well_formed() {
    let tree = standard_tree();

    assert_eq!(validate(&tree), Ok(()));
    assert_eq!(tree.depth(), MAX_DEPTH);
}

#[test]
fn standard_tree_reaches_every_style() {
    let tree = standard_tree();

    let reached: BTreeSet<&'static str> = tree
        .leaf_paths()
        .into_iter()
        .map(|(_, style)| style.code())
        .collect();

    assert_eq!(reached.len(), Style::ordered().len());
}

#[test]
fn leaf_paths_ask_factors_in_canonical_order() {
    let tree = standard_tree();

    for (path, _) in tree.leaf_paths() {
        let factors: Vec<_> = path.iter().map(|step| step.factor).collect();
        let mut sorted = factors.clone();
        sorted.sort();
        assert_eq!(factors, sorted, "path {path} is out of order");
    }
}

#[test]
fn validate_reports_missing_children() {
    let defects = validate(&truncated_tree()).expect_err("truncated tree is malformed");

    assert_eq!(defects.len(), 1);
    assert!(matches!(
        &defects[0],
        TreeDefect::MissingChild { factor, answer, path } if *factor == DS && *answer == L && path.is_empty()
    ));
}

#[test]
fn validate_reports_repeated_factors() {
    let tree = TreeNode::branch(
        DS,
        TreeNode::branch(DS, TreeNode::leaf(Style::Decide), TreeNode::leaf(Style::Delegate)),
        TreeNode::leaf(Style::Decide),
    );

    let defects = validate(&tree).expect_err("DS asked twice");

    assert!(defects
        .iter()
        .any(|defect| matches!(defect, TreeDefect::RepeatedFactor { factor, .. } if *factor == DS)));
}

#[test]
fn tree_parses_from_json_authoring_format() {
    let json = r#"{
        "branch": {
            "factor": "DS",
            "high": { "leaf": { "style": "FAC" } }
        }
    }"#;

    let tree: TreeNode = serde_json::from_str(json).expect("tree parses");

    assert_eq!(tree.child(H), Some(&TreeNode::leaf(Style::Facilitate)));
    assert_eq!(tree.child(L), None);
    assert!(validate(&tree).is_err());
}
