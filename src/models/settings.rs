//! Generation settings sent to the question service.
//!
//! Every closed set of labels is an enum so an out-of-range label cannot
//! reach the wire. Labels are the exact strings the service expects.

use crate::models::{QuizmakerError, Result};
use crate::selection::SelectionState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A label that matched none of the accepted values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn parse_label<T: Copy>(
    kind: &'static str,
    all: &[T],
    label: fn(T) -> &'static str,
    value: &str,
) -> std::result::Result<T, ParseLabelError> {
    let value = value.trim();
    all.iter()
        .copied()
        .find(|item| label(*item) == value)
        .ok_or_else(|| ParseLabelError {
            kind,
            value: value.to_string(),
            expected: all
                .iter()
                .map(|item| label(*item))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Kind of question to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "기본 정보 확인")]
    BasicFacts,
    #[serde(rename = "빈칸 채우기")]
    FillInTheBlank,
    #[serde(rename = "사례/시나리오")]
    Scenario,
    #[serde(rename = "일치 여부 판단")]
    MatchJudgement,
    #[serde(rename = "원인-결과 연결")]
    CauseEffect,
    #[serde(rename = "우선순위/절차")]
    PriorityProcedure,
    #[serde(rename = "틀린 것 고르기")]
    PickIncorrect,
    #[serde(rename = "비교/구분")]
    CompareContrast,
    #[serde(rename = "적용 판단")]
    ApplicationJudgement,
}

impl QuestionType {
    pub const ALL: [QuestionType; 9] = [
        Self::BasicFacts,
        Self::FillInTheBlank,
        Self::Scenario,
        Self::MatchJudgement,
        Self::CauseEffect,
        Self::PriorityProcedure,
        Self::PickIncorrect,
        Self::CompareContrast,
        Self::ApplicationJudgement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::BasicFacts => "기본 정보 확인",
            Self::FillInTheBlank => "빈칸 채우기",
            Self::Scenario => "사례/시나리오",
            Self::MatchJudgement => "일치 여부 판단",
            Self::CauseEffect => "원인-결과 연결",
            Self::PriorityProcedure => "우선순위/절차",
            Self::PickIncorrect => "틀린 것 고르기",
            Self::CompareContrast => "비교/구분",
            Self::ApplicationJudgement => "적용 판단",
        }
    }

    /// What a question of this kind asks for.
    pub fn description(self) -> &'static str {
        match self {
            Self::BasicFacts => "정보 또는 정의를 묻는 정형화된 문제",
            Self::FillInTheBlank => {
                "내 핵심 개념을 빈칸으로 제시, 알맞은 단어나 개념 선택하는 문제"
            }
            Self::Scenario => "상황을 간단히 설명하고, 올바른 대처법이나 판단을 묻는 문제",
            Self::MatchJudgement => "설명이 주어진 뒤, 관련 정보 중 올바른 것을 선택하는 문제",
            Self::CauseEffect => "현상의 원인 또는 결과를 묻는 문제",
            Self::PriorityProcedure => "단계가 있는 절차 중, 가장 먼저 혹은 올바른 순서를 묻는 문제",
            Self::PickIncorrect => "보기 중 틀린 정보를 선택하는 문제",
            Self::CompareContrast => "개념이나 기술을 구별하거나 비교하는 문제",
            Self::ApplicationJudgement => {
                "지침/보안수칙 등을 특정 상황에 적용할 수 있는지 묻는 문제"
            }
        }
    }
}

/// Top-level knowledge domain. Labels equal the catalog's domain keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[default]
    #[serde(rename = "IT")]
    It,
    #[serde(rename = "일반")]
    General,
    #[serde(rename = "법률")]
    Law,
    #[serde(rename = "동향")]
    Trends,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Self::It, Self::General, Self::Law, Self::Trends];

    pub fn label(self) -> &'static str {
        match self {
            Self::It => "IT",
            Self::General => "일반",
            Self::Law => "법률",
            Self::Trends => "동향",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "하")]
    Low,
    #[default]
    #[serde(rename = "중")]
    Medium,
    #[serde(rename = "상")]
    High,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "하",
            Self::Medium => "중",
            Self::High => "상",
        }
    }
}

/// How the service should return the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "Plain Text")]
    PlainText,
    #[serde(rename = "CSV")]
    Csv,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [Self::PlainText, Self::Csv];

    pub fn label(self) -> &'static str {
        match self {
            Self::PlainText => "Plain Text",
            Self::Csv => "CSV",
        }
    }
}

macro_rules! label_traits {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                parse_label($kind, &Self::ALL, Self::label, s)
            }
        }
    };
}

label_traits!(QuestionType, "question type");
label_traits!(Domain, "domain");
label_traits!(Difficulty, "difficulty");
label_traits!(OutputFormat, "output format");

/// Number of questions per request, always within `1..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QuestionCount(u8);

impl QuestionCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(count: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(QuizmakerError::InvalidInput(format!(
                "num_questions must be between {} and {}, got {count}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for QuestionCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for QuestionCount {
    type Error = QuizmakerError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<QuestionCount> for u8 {
    fn from(count: QuestionCount) -> Self {
        count.0
    }
}

/// Full request payload for one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub question_type: QuestionType,
    pub domain: Domain,
    pub num_questions: QuestionCount,
    pub difficulty: Difficulty,
    pub include_explanation: bool,
    pub output_format: OutputFormat,
    #[serde(rename = "mainCriteria", default)]
    pub main_criteria: String,
    #[serde(rename = "subCriteria", default)]
    pub sub_criteria: String,
    #[serde(rename = "detailCriteria", default)]
    pub detail_criteria: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            question_type: QuestionType::default(),
            domain: Domain::default(),
            num_questions: QuestionCount::default(),
            difficulty: Difficulty::default(),
            include_explanation: true,
            output_format: OutputFormat::default(),
            main_criteria: String::new(),
            sub_criteria: String::new(),
            detail_criteria: String::new(),
        }
    }
}

impl GenerationSettings {
    /// Take the domain and criteria path from a selection, keeping the
    /// other parameters.
    pub fn with_selection(mut self, selection: &SelectionState) -> Result<Self> {
        self.domain = selection
            .domain
            .parse()
            .map_err(|e: ParseLabelError| QuizmakerError::InvalidInput(e.to_string()))?;
        self.main_criteria = selection.main_criterion.clone();
        self.sub_criteria = selection.sub_criterion.clone();
        self.detail_criteria = selection.detail_criterion.clone();
        Ok(self)
    }
}
