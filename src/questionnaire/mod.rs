pub mod fields;
mod lenient;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use fields::{
    Complexity, DecisionType, ProjectLength, RecurringType, RiskLevel, StakeholderCount, Urgency,
    WireValue,
};

/// One respondent's answers about an upcoming decision.
///
/// Every field has a default and unknown keys are ignored, so `{}` is a
/// valid answer set. Odd values are coerced rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    #[serde(deserialize_with = "lenient::category")]
    pub urgency: Urgency,
    #[serde(deserialize_with = "lenient::category")]
    pub complexity: Complexity,
    #[serde(
        rename = "decisionTypes",
        alias = "decision_types",
        deserialize_with = "lenient::decision_types"
    )]
    pub decision_types: BTreeSet<DecisionType>,
    #[serde(
        rename = "stakeholderCount",
        alias = "stakeholder_count",
        deserialize_with = "lenient::category"
    )]
    pub stakeholder_count: StakeholderCount,
    #[serde(
        rename = "crossTeamDependencies",
        alias = "cross_team_dependencies",
        deserialize_with = "lenient::flag"
    )]
    pub cross_team_dependencies: bool,
    #[serde(
        rename = "emotionalRisk",
        alias = "emotional_risk",
        deserialize_with = "lenient::category"
    )]
    pub emotional_risk: RiskLevel,
    #[serde(
        rename = "changeImpact",
        alias = "change_impact",
        deserialize_with = "lenient::category"
    )]
    pub change_impact: RiskLevel,
    #[serde(deserialize_with = "lenient::flag")]
    pub is_recurring: bool,
    #[serde(deserialize_with = "lenient::recurring_type")]
    pub recurring_type: Option<RecurringType>,
    #[serde(deserialize_with = "lenient::project_length")]
    pub project_length: Option<ProjectLength>,
}

#[derive(Debug, Error)]
pub enum QuestionnaireError {
    #[error("answers could not be parsed: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("answers must be a JSON object, found {0}")]
    NotAnObject(&'static str),
    #[error("answer sets must be a JSON array, found {0}")]
    NotAnArray(&'static str),
    #[error("unknown answer field: {0}")]
    UnknownField(String),
}

/// Canonical wire name first, then accepted aliases.
const FIELD_NAMES: [(&str, &[&str]); 10] = [
    ("urgency", &[]),
    ("complexity", &[]),
    ("decisionTypes", &["decision_types"]),
    ("stakeholderCount", &["stakeholder_count", "stakeholders"]),
    ("crossTeamDependencies", &["cross_team_dependencies", "cross_team"]),
    ("emotionalRisk", &["emotional_risk"]),
    ("changeImpact", &["change_impact"]),
    ("is_recurring", &["isRecurring", "recurring"]),
    ("recurring_type", &["recurringType"]),
    ("project_length", &["projectLength"]),
];

impl QuestionnaireAnswers {
    pub fn from_json(raw: &str) -> Result<Self, QuestionnaireError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, QuestionnaireError> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(QuestionnaireError::NotAnObject(json_kind(&other))),
        }
    }

    /// Parses a JSON array of answer sets; any element that is not an object
    /// fails the whole batch.
    pub fn many_from_json(raw: &str) -> Result<Vec<Self>, QuestionnaireError> {
        let value: Value = serde_json::from_str(raw)?;
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => Err(QuestionnaireError::NotAnArray(json_kind(&other))),
        }
    }

    /// Resolves a field name or alias to its canonical wire name.
    pub fn canonical_field(name: &str) -> Option<&'static str> {
        FIELD_NAMES
            .iter()
            .find(|(canonical, aliases)| *canonical == name || aliases.contains(&name))
            .map(|(canonical, _)| *canonical)
    }

    /// Replaces one field, coercing `value` with the same rules as a full
    /// parse. Returns the previous wire value.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<Value, QuestionnaireError> {
        let canonical = Self::canonical_field(name)
            .ok_or_else(|| QuestionnaireError::UnknownField(name.to_string()))?;
        let mut snapshot = serde_json::to_value(&*self)?;
        let Some(map) = snapshot.as_object_mut() else {
            return Err(QuestionnaireError::NotAnObject("a non-object value"));
        };
        let previous = map.insert(canonical.to_string(), value).unwrap_or(Value::Null);
        *self = Self::from_value(snapshot)?;
        Ok(previous)
    }

    /// True when decision types were given and every one is `inform` or
    /// `update`.
    pub fn is_informational_only(&self) -> bool {
        !self.decision_types.is_empty()
            && self
                .decision_types
                .iter()
                .all(|kind| kind.is_informational())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let answers = QuestionnaireAnswers::from_json("{}").expect("parse");
        assert_eq!(answers, QuestionnaireAnswers::default());
        assert_eq!(answers.urgency, Urgency::None);
        assert_eq!(answers.complexity, Complexity::Simple);
        assert_eq!(answers.stakeholder_count, StakeholderCount::OneToTwo);
        assert!(answers.decision_types.is_empty());
        assert!(!answers.cross_team_dependencies);
    }

    #[test]
    fn parses_full_answer_set_and_ignores_extra_fields() {
        let answers = QuestionnaireAnswers::from_value(json!({
            "title": "Q3 roadmap",
            "purpose": "pick the launch order",
            "urgency": "critical",
            "complexity": "highly_complex",
            "decisionTypes": ["decide", "escalate"],
            "stakeholderCount": "10+",
            "crossTeamDependencies": true,
            "emotionalRisk": "high",
            "changeImpact": "medium",
            "is_recurring": true,
            "recurring_type": "project",
            "project_length": "3-6_months"
        }))
        .expect("parse");

        assert_eq!(answers.urgency, Urgency::Critical);
        assert_eq!(answers.complexity, Complexity::HighlyComplex);
        assert_eq!(
            answers.decision_types.iter().copied().collect::<Vec<_>>(),
            vec![DecisionType::Decide, DecisionType::Escalate]
        );
        assert_eq!(answers.stakeholder_count, StakeholderCount::TenPlus);
        assert!(answers.cross_team_dependencies);
        assert_eq!(answers.emotional_risk, RiskLevel::High);
        assert_eq!(answers.change_impact, RiskLevel::Medium);
        assert!(answers.is_recurring);
        assert_eq!(answers.recurring_type, Some(RecurringType::Project));
        assert_eq!(answers.project_length, Some(ProjectLength::ThreeToSixMonths));
    }

    #[test]
    fn odd_values_fall_back_instead_of_failing() {
        let answers = QuestionnaireAnswers::from_value(json!({
            "urgency": "URGENT",
            "complexity": 4,
            "decisionTypes": ["decide", "celebrate", 7, "decide"],
            "stakeholderCount": "3-5",
            "crossTeamDependencies": "yes",
            "emotionalRisk": null,
            "changeImpact": ["high"],
            "recurring_type": "quarterly",
            "project_length": false
        }))
        .expect("parse");

        assert_eq!(answers.urgency, Urgency::Unrecognized);
        assert_eq!(answers.complexity, Complexity::Unrecognized);
        assert_eq!(
            answers.decision_types.iter().copied().collect::<Vec<_>>(),
            vec![DecisionType::Decide, DecisionType::Unrecognized]
        );
        assert_eq!(answers.stakeholder_count, StakeholderCount::Unrecognized);
        assert!(!answers.cross_team_dependencies);
        assert_eq!(answers.emotional_risk, RiskLevel::None);
        assert_eq!(answers.change_impact, RiskLevel::Unrecognized);
        assert_eq!(answers.recurring_type, None);
        assert_eq!(answers.project_length, None);
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let answers = QuestionnaireAnswers::from_value(json!({
            "decision_types": ["unblock"],
            "stakeholder_count": "6–10",
            "cross_team_dependencies": true
        }))
        .expect("parse");
        assert!(answers.decision_types.contains(&DecisionType::Unblock));
        assert_eq!(answers.stakeholder_count, StakeholderCount::SixToTen);
        assert!(answers.cross_team_dependencies);
    }

    #[test]
    fn rejects_non_object_input() {
        let err = QuestionnaireAnswers::from_json("[1, 2]").expect_err("array is not answers");
        assert!(matches!(err, QuestionnaireError::NotAnObject("an array")));
        let err = QuestionnaireAnswers::from_json("{not json").expect_err("invalid json");
        assert!(matches!(err, QuestionnaireError::InvalidJson(_)));
    }

    #[test]
    fn serializes_back_to_wire_names() {
        let mut answers = QuestionnaireAnswers::default();
        answers.stakeholder_count = StakeholderCount::ThreeToFive;
        answers.decision_types.insert(DecisionType::Update);
        let value = serde_json::to_value(&answers).expect("serialize");
        assert_eq!(value["stakeholderCount"], json!("3–5"));
        assert_eq!(value["decisionTypes"], json!(["update"]));
        assert_eq!(value["recurring_type"], Value::Null);

        let reparsed = QuestionnaireAnswers::from_value(value).expect("reparse");
        assert_eq!(reparsed, answers);
    }

    #[test]
    fn set_field_coerces_and_returns_previous_value() {
        let mut answers = QuestionnaireAnswers::default();
        let previous = answers
            .set_field("urgency", json!("high"))
            .expect("known field");
        assert_eq!(previous, json!("none"));
        assert_eq!(answers.urgency, Urgency::High);

        answers
            .set_field("cross_team", json!(true))
            .expect("alias resolves");
        assert!(answers.cross_team_dependencies);

        let err = answers
            .set_field("budget", json!(10))
            .expect_err("unknown field");
        assert!(matches!(err, QuestionnaireError::UnknownField(name) if name == "budget"));
    }

    #[test]
    fn informational_only_requires_non_empty_set() {
        let mut answers = QuestionnaireAnswers::default();
        assert!(!answers.is_informational_only());
        answers.decision_types.insert(DecisionType::Inform);
        answers.decision_types.insert(DecisionType::Update);
        assert!(answers.is_informational_only());
        answers.decision_types.insert(DecisionType::Align);
        assert!(!answers.is_informational_only());
    }

    #[test]
    fn unknown_decision_type_is_not_informational() {
        let answers = QuestionnaireAnswers::from_value(json!({
            "decisionTypes": ["update", "celebrate"]
        }))
        .expect("parse");
        assert!(answers.decision_types.contains(&DecisionType::Unrecognized));
        assert!(!answers.is_informational_only());

        let value = serde_json::to_value(&answers).expect("serialize");
        assert_eq!(value["decisionTypes"], json!(["update", "unrecognized"]));
        assert_eq!(QuestionnaireAnswers::from_value(value).expect("reparse"), answers);
    }

    #[test]
    fn batch_input_must_be_an_array() {
        let err = QuestionnaireAnswers::many_from_json(r#"{"urgency":"high"}"#)
            .expect_err("object is not a batch");
        assert!(matches!(err, QuestionnaireError::NotAnArray("an object")));
        assert_eq!(
            err.to_string(),
            "answer sets must be a JSON array, found an object"
        );

        let sets = QuestionnaireAnswers::many_from_json(r#"[{}, {"urgency":"low"}]"#)
            .expect("array of objects");
        assert_eq!(sets.len(), 2);
    }
}
