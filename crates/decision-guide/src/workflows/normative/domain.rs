use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the seven situational questions of the Time-Driven model.
///
/// Variant order is the canonical display order; `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Factor {
    #[serde(rename = "DS")]
    DecisionSignificance,
    #[serde(rename = "IC")]
    ImportanceOfCommitment,
    #[serde(rename = "LE")]
    LeaderExpertise,
    #[serde(rename = "LC")]
    LikelihoodOfCommitment,
    #[serde(rename = "GA")]
    GoalAlignment,
    #[serde(rename = "GE")]
    GroupExpertise,
    #[serde(rename = "TC")]
    TeamCompetence,
}

impl Factor {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::DecisionSignificance,
            Self::ImportanceOfCommitment,
            Self::LeaderExpertise,
            Self::LikelihoodOfCommitment,
            Self::GoalAlignment,
            Self::GroupExpertise,
            Self::TeamCompetence,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::DecisionSignificance => "DS",
            Self::ImportanceOfCommitment => "IC",
            Self::LeaderExpertise => "LE",
            Self::LikelihoodOfCommitment => "LC",
            Self::GoalAlignment => "GA",
            Self::GroupExpertise => "GE",
            Self::TeamCompetence => "TC",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::DecisionSignificance => "Decision Significance",
            Self::ImportanceOfCommitment => "Importance of Commitment",
            Self::LeaderExpertise => "Leader Expertise",
            Self::LikelihoodOfCommitment => "Likelihood of Commitment",
            Self::GoalAlignment => "Goal Alignment",
            Self::GroupExpertise => "Group Expertise",
            Self::TeamCompetence => "Team Competence",
        }
    }

    pub const fn help(self) -> &'static str {
        match self {
            Self::DecisionSignificance => {
                "How significant is this decision to project/org success? (High = big consequences; Low = limited impact)"
            }
            Self::ImportanceOfCommitment => {
                "How important is team commitment for implementation? (High = buy-in is critical; Low = you can implement without much buy-in)"
            }
            Self::LeaderExpertise => {
                "How much relevant expertise do you (the leader) have? (High = you have strong knowledge; Low = you don't)"
            }
            Self::LikelihoodOfCommitment => {
                "If you decide alone, how likely is the team to commit anyway? (High = they'll commit; Low = they may resist)"
            }
            Self::GoalAlignment => {
                "Do team goals align with organizational goals on this decision? (High = aligned; Low = misaligned)"
            }
            Self::GroupExpertise => {
                "Does the group have relevant expertise/knowledge? (High = yes; Low = not really)"
            }
            Self::TeamCompetence => {
                "Can the team work together effectively to solve problems? (High = works well; Low = struggles to collaborate)"
            }
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Factor {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let code = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|factor| factor.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseError::UnknownFactor(raw.to_string()))
    }
}

/// Binary response to a factor question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Answer {
    #[serde(rename = "H", alias = "High")]
    High,
    #[serde(rename = "L", alias = "Low")]
    Low,
}

impl Answer {
    pub const fn code(self) -> &'static str {
        match self {
            Self::High => "H",
            Self::Low => "L",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Answer {
    type Err = ParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "h" | "high" => Ok(Self::High),
            "l" | "low" => Ok(Self::Low),
            _ => Err(ParseError::UnknownAnswer(raw.to_string())),
        }
    }
}

/// Recommended decision-making process at a leaf of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "DECIDE")]
    Decide,
    #[serde(rename = "CI")]
    ConsultIndividually,
    #[serde(rename = "CG")]
    ConsultGroup,
    #[serde(rename = "FAC")]
    Facilitate,
    #[serde(rename = "DEL")]
    Delegate,
}

impl Style {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Decide,
            Self::ConsultIndividually,
            Self::ConsultGroup,
            Self::Facilitate,
            Self::Delegate,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Decide => "DECIDE",
            Self::ConsultIndividually => "CI",
            Self::ConsultGroup => "CG",
            Self::Facilitate => "FAC",
            Self::Delegate => "DEL",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Decide => "Decide",
            Self::ConsultIndividually => "Consult (Individually)",
            Self::ConsultGroup => "Consult (Group)",
            Self::Facilitate => "Facilitate",
            Self::Delegate => "Delegate",
        }
    }

    pub const fn subtitle(self) -> &'static str {
        match self {
            Self::Decide => "You decide alone",
            Self::ConsultIndividually => "You decide after 1:1 input",
            Self::ConsultGroup => "You decide after group input",
            Self::Facilitate => "Run a group process to shape the decision",
            Self::Delegate => "Let the team decide",
        }
    }

    pub const fn details(self) -> &'static str {
        match self {
            Self::Decide => "Make the decision yourself. Communicate clearly, then drive execution.",
            Self::ConsultIndividually => "Talk to key people one-on-one, then make the call.",
            Self::ConsultGroup => "Bring the group together for input, then you decide.",
            Self::Facilitate => {
                "Facilitate a discussion to build shared understanding and converge on the best option."
            }
            Self::Delegate => "Define boundaries/constraints, then empower the team to decide.",
        }
    }

    /// Canned follow-up used only by the exported summary.
    pub const fn next_step(self) -> &'static str {
        match self {
            Self::Decide => {
                "Draft the decision + 2–3 crisp reasons, then communicate the call and the execution plan."
            }
            Self::ConsultIndividually => {
                "Do 10–20 minute 1:1s with key stakeholders, synthesize input, then make the call."
            }
            Self::ConsultGroup => {
                "Run a short meeting for input, summarize tradeoffs, then decide and communicate."
            }
            Self::Facilitate => {
                "Facilitate a focused working session: define options, surface constraints, converge, and align on execution."
            }
            Self::Delegate => {
                "Define constraints (scope, timeline, budget, success criteria) and let the team decide—then support execution."
            }
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Answers recorded so far, keyed by factor and iterated in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<Factor, Answer>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses raw `code -> value` pairs as received from a collaborator.
    pub fn from_codes<I, K, V>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let parsed = pairs
            .into_iter()
            .map(|(factor, value)| -> Result<(Factor, Answer), ParseError> {
                Ok((factor.as_ref().parse()?, value.as_ref().parse()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_pairs(parsed)
    }

    /// Like collecting, but a factor answered twice is an error instead of
    /// the last value silently winning.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (Factor, Answer)>,
    {
        let mut answers = Self::new();
        for (factor, value) in pairs {
            if answers.0.insert(factor, value).is_some() {
                return Err(ParseError::DuplicateFactor(factor));
            }
        }
        Ok(answers)
    }

    pub fn get(&self, factor: Factor) -> Option<Answer> {
        self.0.get(&factor).copied()
    }

    pub fn contains(&self, factor: Factor) -> bool {
        self.0.contains_key(&factor)
    }

    pub fn insert(&mut self, factor: Factor, value: Answer) -> Option<Answer> {
        self.0.insert(factor, value)
    }

    pub fn remove(&mut self, factor: Factor) -> Option<Answer> {
        self.0.remove(&factor)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn factors(&self) -> impl Iterator<Item = Factor> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Factor, Answer)> + '_ {
        self.0.iter().map(|(factor, value)| (*factor, *value))
    }
}

impl FromIterator<(Factor, Answer)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (Factor, Answer)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A single branch decision taken while walking the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    pub factor: Factor,
    pub value: Answer,
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.factor, self.value)
    }
}

/// Branch decisions from the root in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolutionPath(Vec<PathStep>);

impl ResolutionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, factor: Factor, value: Answer) {
        self.0.push(PathStep { factor, value });
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathStep> {
        self.0.iter()
    }
}

impl FromIterator<(Factor, Answer)> for ResolutionPath {
    fn from_iter<T: IntoIterator<Item = (Factor, Answer)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(factor, value)| PathStep { factor, value })
                .collect(),
        )
    }
}

/// Renders `DS=High, IC=Low`.
impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, step) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Rejected collaborator input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown factor code '{0}' (expected one of DS, IC, LE, LC, GA, GE, TC)")]
    UnknownFactor(String),
    #[error("unknown answer '{0}' (expected H/High or L/Low)")]
    UnknownAnswer(String),
    #[error("factor {0} answered more than once")]
    DuplicateFactor(Factor),
    #[error("expected FACTOR=VALUE, got '{0}'")]
    MalformedPair(String),
}

/// Parses a `DS=H` style pair as typed on the command line.
pub fn parse_answer_pair(raw: &str) -> Result<(Factor, Answer), ParseError> {
    let (factor, value) = raw
        .split_once('=')
        .ok_or_else(|| ParseError::MalformedPair(raw.to_string()))?;
    Ok((factor.parse()?, value.parse()?))
}
