use super::common::*;
use crate::workflows::normative::{
    question_sequence, reconcile, resolve, set_factor_answer, standard_tree, AnswerSet, Factor,
    Resolution, Style, TreeNode,
};

/// Every recorded answer must sit on the path the resolver walks.
fn assert_single_path(tree: &TreeNode, given: &AnswerSet) {
    let resolution = resolve(tree, given);
    let path = resolution.path().expect("standard tree never faults");
    assert_eq!(path.len(), given.len(), "orphan answers in {given:?}");
    for step in path.iter() {
        assert_eq!(given.get(step.factor), Some(step.value));
    }
}

#[test]
fn changing_significance_discards_downstream_answers() {
    let tree = standard_tree();
    let mut state = AnswerSet::new();
    for (factor, value) in [(DS, H), (IC, H), (LE, H), (LC, H)] {
        state = set_factor_answer(&tree, &state, factor, Some(value));
    }
    assert_eq!(resolve(&tree, &state).style(), Some(Style::Decide));

    let state = set_factor_answer(&tree, &state, DS, Some(L));

    assert_eq!(state, answers(&[(DS, L), (IC, H), (LC, H)]));
    assert!(!state.contains(LE));
    assert_eq!(resolve(&tree, &state).style(), Some(Style::Decide));
}

#[test]
fn changing_significance_reopens_the_team_branch() {
    let tree = standard_tree();
    let state = answers(&[(DS, H), (IC, H), (LE, H), (LC, L), (GA, H)]);
    assert_eq!(resolve(&tree, &state).next_question(), Some(GE));

    let state = set_factor_answer(&tree, &state, DS, Some(L));

    assert_eq!(state, answers(&[(DS, L), (IC, H), (LC, L)]));
    assert!(!state.contains(LE));
    assert!(!state.contains(GA));
    assert_eq!(resolve(&tree, &state).next_question(), Some(TC));
}

#[test]
fn changes_that_keep_the_path_preserve_later_answers() {
    let tree = standard_tree();
    let state = answers(&[(DS, H), (IC, H), (LE, L), (LC, H), (GA, H)]);

    let state = set_factor_answer(&tree, &state, LC, Some(L));

    assert_eq!(state, answers(&[(DS, H), (IC, H), (LE, L), (LC, L), (GA, H)]));
    assert_eq!(resolve(&tree, &state).next_question(), Some(GE));
}

#[test]
fn skipped_factor_answers_are_dropped_when_branch_changes() {
    let tree = standard_tree();
    let state = answers(&[(DS, H), (IC, H), (LE, H), (LC, L), (GA, H), (GE, H), (TC, H)]);
    assert_eq!(resolve(&tree, &state).style(), Some(Style::Facilitate));

    let state = set_factor_answer(&tree, &state, GA, Some(L));

    assert_eq!(state, answers(&[(DS, H), (IC, H), (LE, H), (LC, L), (GA, L)]));
    assert_eq!(resolve(&tree, &state).style(), Some(Style::ConsultGroup));
}

#[test]
fn clearing_an_answer_truncates_the_path_at_that_factor() {
    let tree = standard_tree();
    let state = answers(&[(DS, L), (IC, H), (LC, L), (TC, H)]);

    let state = set_factor_answer(&tree, &state, IC, None);

    assert_eq!(state, answers(&[(DS, L)]));
    assert_eq!(resolve(&tree, &state).next_question(), Some(IC));
}

#[test]
fn answering_a_factor_before_its_ancestors_is_not_recorded() {
    let tree = standard_tree();

    let state = set_factor_answer(&tree, &AnswerSet::new(), TC, Some(H));

    assert!(state.is_empty());
}

#[test]
fn reconcile_strips_orphans_from_untrusted_input() {
    let tree = standard_tree();
    let untrusted = answers(&[(DS, L), (IC, L), (LE, H), (GA, H), (GE, L)]);

    let cleaned = reconcile(&tree, &untrusted);

    assert_eq!(cleaned, answers(&[(DS, L), (IC, L)]));
}

#[test]
fn arbitrary_answer_sequences_always_leave_one_connected_path() {
    let tree = standard_tree();
    let factors = Factor::ordered();
    let mut state = AnswerSet::new();
    let mut seed: u32 = 0x2545_f491;

    for _ in 0..500 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;

        let factor = factors[(seed % 7) as usize];
        let value = match (seed >> 3) % 3 {
            0 => Some(H),
            1 => Some(L),
            _ => None,
        };

        state = set_factor_answer(&tree, &state, factor, value);
        assert_single_path(&tree, &state);
    }
}

#[test]
fn question_list_grows_by_one_and_shrinks_on_upstream_change() {
    let tree = standard_tree();
    let mut state = AnswerSet::new();

    let listed = |state: &AnswerSet| -> Vec<Factor> {
        question_sequence(state, &resolve(&tree, state))
            .into_iter()
            .map(|entry| entry.factor)
            .collect()
    };

    assert_eq!(listed(&state), vec![DS]);
    for (step, (factor, value)) in [(DS, H), (IC, H), (LE, L), (LC, H)].into_iter().enumerate() {
        state = set_factor_answer(&tree, &state, factor, Some(value));
        assert_eq!(listed(&state).len(), step + 2);
    }
    assert_eq!(listed(&state), vec![DS, IC, LE, LC, GA]);

    state = set_factor_answer(&tree, &state, IC, Some(L));
    assert!(!state.contains(LC));
    assert_eq!(listed(&state), vec![DS, IC, LE, GA]);
}

#[test]
fn pending_flag_marks_only_the_next_question() {
    let tree = standard_tree();
    let state = answers(&[(DS, L), (IC, H)]);
    let resolution = resolve(&tree, &state);

    let entries = question_sequence(&state, &resolution);

    let pending: Vec<Factor> = entries
        .iter()
        .filter(|entry| entry.pending)
        .map(|entry| entry.factor)
        .collect();
    assert_eq!(pending, vec![LC]);
    assert_eq!(entries.len(), 3);
}

#[test]
fn completed_resolution_has_no_pending_question() {
    let tree = standard_tree();
    let state = answers(&[(DS, L), (IC, L)]);
    let resolution = resolve(&tree, &state);
    assert!(matches!(resolution, Resolution::Complete { .. }));

    let entries = question_sequence(&state, &resolution);

    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| !entry.pending));
}
