use super::domain::{Answer, AnswerSet, Factor, ResolutionPath, Style};
use super::resolver::Resolution;
use super::sequence::QuestionEntry;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FactorView {
    pub code: Factor,
    pub label: &'static str,
    pub help: &'static str,
}

impl From<Factor> for FactorView {
    fn from(factor: Factor) -> Self {
        Self {
            code: factor,
            label: factor.label(),
            help: factor.help(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleView {
    pub code: Style,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub details: &'static str,
    pub next_step: &'static str,
}

impl From<Style> for StyleView {
    fn from(style: Style) -> Self {
        Self {
            code: style,
            title: style.title(),
            subtitle: style.subtitle(),
            details: style.details(),
            next_step: style.next_step(),
        }
    }
}

/// Static catalog the UI needs to render questions and results.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub factors: Vec<FactorView>,
    pub styles: Vec<StyleView>,
}

impl CatalogView {
    pub fn standard() -> Self {
        Self {
            factors: Factor::ordered().into_iter().map(FactorView::from).collect(),
            styles: Style::ordered().into_iter().map(StyleView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub factor: Factor,
    pub label: &'static str,
    pub help: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Answer>,
    pub pending: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    Incomplete,
    Complete,
}

/// Everything a collaborator needs to render the current state.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionStateView {
    pub status: DecisionStatus,
    pub answers: AnswerSet,
    pub path: ResolutionPath,
    pub questions: Vec<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_question: Option<Factor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<StyleView>,
}

impl DecisionStateView {
    /// Returns `None` for a structurally invalid resolution, which has no
    /// renderable state.
    pub fn build(
        answers: &AnswerSet,
        resolution: &Resolution,
        questions: &[QuestionEntry],
    ) -> Option<Self> {
        let (status, path, next_question, result) = match resolution {
            Resolution::Incomplete { next, path } => {
                (DecisionStatus::Incomplete, path.clone(), Some(*next), None)
            }
            Resolution::Complete { style, path } => (
                DecisionStatus::Complete,
                path.clone(),
                None,
                Some(StyleView::from(*style)),
            ),
            Resolution::StructurallyInvalid { .. } => return None,
        };

        let questions = questions
            .iter()
            .map(|entry| QuestionView {
                factor: entry.factor,
                label: entry.factor.label(),
                help: entry.factor.help(),
                value: answers.get(entry.factor),
                pending: entry.pending,
            })
            .collect();

        Some(Self {
            status,
            answers: answers.clone(),
            path,
            questions,
            next_question,
            result,
        })
    }
}
