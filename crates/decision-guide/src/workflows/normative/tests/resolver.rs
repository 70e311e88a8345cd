use super::common::*;
use crate::workflows::normative::{
    resolve, standard_tree, AnswerSet, Factor, Resolution, ResolutionPath, Style,
};

#[test]
fn empty_answers_ask_for_decision_significance() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &AnswerSet::new());

    assert_eq!(
        resolution,
        Resolution::Incomplete {
            next: DS,
            path: ResolutionPath::new(),
        }
    );
}

#[test]
fn every_complete_assignment_matches_expected_style() {
    let tree = standard_tree();

    for assignment in every_assignment() {
        let resolution = resolve(&tree, &assignment);
        let style = resolution
            .style()
            .unwrap_or_else(|| panic!("{assignment:?} should resolve, got {resolution:?}"));
        assert_eq!(style, expected_style(&assignment), "assignment {assignment:?}");

        let path = resolution.path().expect("complete resolution has a path");
        for step in path.iter() {
            assert_eq!(assignment.get(step.factor), Some(step.value));
        }
    }
}

#[test]
fn every_prefix_of_a_leaf_path_asks_the_next_factor_on_it() {
    let tree = standard_tree();

    for (path, style) in tree.leaf_paths() {
        let steps = path.steps();
        for cut in 0..steps.len() {
            let partial: AnswerSet = steps[..cut]
                .iter()
                .map(|step| (step.factor, step.value))
                .collect();
            let expected_path: ResolutionPath = steps[..cut]
                .iter()
                .map(|step| (step.factor, step.value))
                .collect();

            assert_eq!(
                resolve(&tree, &partial),
                Resolution::Incomplete {
                    next: steps[cut].factor,
                    path: expected_path,
                }
            );
        }

        let full: AnswerSet = steps.iter().map(|step| (step.factor, step.value)).collect();
        assert_eq!(
            resolve(&tree, &full),
            Resolution::Complete {
                style,
                path: path.clone(),
            }
        );
    }
}

#[test]
fn resolve_is_idempotent() {
    let tree = standard_tree();
    let given = answers(&[(DS, H), (IC, H), (LE, L)]);

    let first = resolve(&tree, &given);
    let second = resolve(&tree, &given);

    assert_eq!(first, second);
    assert_eq!(first.next_question(), Some(LC));
}

#[test]
fn low_significance_low_commitment_decides() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, L), (IC, L)]));

    assert_eq!(resolution.style(), Some(Style::Decide));
    assert_eq!(
        resolution.path().map(ToString::to_string).as_deref(),
        Some("DS=Low, IC=Low")
    );
}

#[test]
fn leader_without_expertise_facing_resistance_consults_group() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, H), (IC, H), (LE, L), (LC, L), (GA, L)]));

    assert_eq!(resolution.style(), Some(Style::ConsultGroup));
}

#[test]
fn leader_without_expertise_expecting_commitment_consults_individually() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, H), (IC, H), (LE, L), (LC, H), (GA, L)]));

    assert_eq!(resolution.style(), Some(Style::ConsultIndividually));
}

#[test]
fn competent_team_on_minor_decision_gets_delegation() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, L), (IC, H), (LC, L), (TC, H)]));

    assert_eq!(resolution.style(), Some(Style::Delegate));
    assert_eq!(
        resolution.path().map(|path| path.len()),
        Some(4),
        "delegation path asks DS, IC, LC and TC"
    );
}

#[test]
fn low_commitment_significant_decision_needs_leader_expertise() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, H), (IC, L), (LC, L), (TC, H)]));

    assert_eq!(resolution.next_question(), Some(LE));
    assert_eq!(
        resolution.path().map(ToString::to_string).as_deref(),
        Some("DS=High, IC=Low")
    );
}

#[test]
fn answers_off_the_path_are_ignored_by_resolution() {
    let tree = standard_tree();
    let resolution = resolve(&tree, &answers(&[(DS, L), (IC, L), (GE, H), (TC, L)]));

    assert_eq!(resolution.style(), Some(Style::Decide));
    assert_eq!(resolution.path().map(|path| path.len()), Some(2));
}

#[test]
fn missing_child_reports_structural_fault_instead_of_a_style() {
    let tree = truncated_tree();
    let resolution = resolve(&tree, &answers(&[(DS, L)]));

    match resolution {
        Resolution::StructurallyInvalid { message } => {
            assert!(message.contains("DS=Low"), "diagnostic names the branch: {message}");
        }
        other => panic!("expected structural fault, got {other:?}"),
    }
}

#[test]
fn truncated_tree_still_resolves_authored_branches() {
    let tree = truncated_tree();

    assert_eq!(
        resolve(&tree, &answers(&[(DS, H), (IC, L)])).style(),
        Some(Style::ConsultIndividually)
    );
    assert_eq!(
        resolve(&tree, &AnswerSet::new()).next_question(),
        Some(Factor::DecisionSignificance)
    );
}
