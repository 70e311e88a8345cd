use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::normative::export::{ExportError, SummarySink};
use crate::workflows::normative::{
    Answer, AnswerSet, DecisionService, Factor, Style, TreeNode,
};

pub(super) use Answer::{High as H, Low as L};
pub(super) use Factor::{
    DecisionSignificance as DS, GoalAlignment as GA, GroupExpertise as GE,
    ImportanceOfCommitment as IC, LeaderExpertise as LE, LikelihoodOfCommitment as LC,
    TeamCompetence as TC,
};

pub(super) fn answers(pairs: &[(Factor, Answer)]) -> AnswerSet {
    pairs.iter().copied().collect()
}

pub(super) fn raw_answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(factor, value)| (factor.to_string(), value.to_string()))
        .collect()
}

/// Independent restatement of the Time-Driven funnel, written as nested
/// conditionals rather than tree data, used to cross-check the tree.
pub(super) fn expected_style(all: &AnswerSet) -> Style {
    let high = |factor: Factor| all.get(factor) == Some(Answer::High);

    let group_funnel = |otherwise: Style| {
        if high(GA) && high(GE) && high(TC) {
            Style::Facilitate
        } else {
            otherwise
        }
    };

    if high(DS) {
        if high(IC) {
            match (high(LE), high(LC)) {
                (true, true) => Style::Decide,
                (true, false) | (false, false) => group_funnel(Style::ConsultGroup),
                (false, true) => group_funnel(Style::ConsultIndividually),
            }
        } else if high(LE) {
            Style::Decide
        } else {
            group_funnel(Style::ConsultIndividually)
        }
    } else if high(IC) {
        if high(LC) {
            Style::Decide
        } else if high(TC) {
            Style::Delegate
        } else {
            Style::Facilitate
        }
    } else {
        Style::Decide
    }
}

/// All 128 complete assignments of the seven factors.
pub(super) fn every_assignment() -> Vec<AnswerSet> {
    (0u8..128)
        .map(|bits| {
            Factor::ordered()
                .into_iter()
                .enumerate()
                .map(|(index, factor)| {
                    let value = if bits & (1 << index) != 0 {
                        Answer::High
                    } else {
                        Answer::Low
                    };
                    (factor, value)
                })
                .collect()
        })
        .collect()
}

/// A tree whose `DS=L` branch was never authored.
pub(super) fn truncated_tree() -> TreeNode {
    TreeNode::Branch {
        factor: DS,
        high: Some(Box::new(TreeNode::branch(
            IC,
            TreeNode::leaf(Style::Decide),
            TreeNode::leaf(Style::ConsultIndividually),
        ))),
        low: None,
    }
}

pub(super) fn truncated_service() -> Arc<DecisionService> {
    Arc::new(DecisionService::new(Arc::new(truncated_tree())))
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    writes: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub(super) fn writes(&self) -> Vec<String> {
        self.writes.lock().expect("sink mutex poisoned").clone()
    }
}

impl SummarySink for MemorySink {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn write(&self, text: &str) -> Result<(), ExportError> {
        self.writes
            .lock()
            .expect("sink mutex poisoned")
            .push(text.to_string());
        Ok(())
    }
}

pub(super) struct UnavailableSink;

impl SummarySink for UnavailableSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn write(&self, _text: &str) -> Result<(), ExportError> {
        Err(ExportError::Unavailable("clipboard permission denied".to_string()))
    }
}

pub(super) fn assert_status(response: &Response, status: StatusCode) {
    assert_eq!(response.status(), status);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
