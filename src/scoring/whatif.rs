use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::questionnaire::{QuestionnaireAnswers, QuestionnaireError};
use crate::scoring::{score, RecommendationResult};

/// A requested change to one answer field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerChange {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppliedChange {
    pub field: String,
    pub from: Value,
    pub to: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatIfResult {
    pub changes_applied: Vec<AppliedChange>,
    pub before: RecommendationResult,
    pub after: RecommendationResult,
    pub recommendation_changed: bool,
    pub time_saved_delta_minutes: i64,
}

pub fn simulate_whatif(
    answers: &QuestionnaireAnswers,
    changes: &[AnswerChange],
) -> Result<WhatIfResult, QuestionnaireError> {
    let before = score(answers);

    let mut changed = answers.clone();
    let mut changes_applied = Vec::with_capacity(changes.len());
    for change in changes {
        let from = changed.set_field(&change.field, change.value.clone())?;
        let to = serde_json::to_value(&changed)?
            .get(canonical_name(&change.field))
            .cloned()
            .unwrap_or(Value::Null);
        if from != to {
            changes_applied.push(AppliedChange {
                field: canonical_name(&change.field).to_string(),
                from,
                to,
            });
        }
    }

    let after = score(&changed);
    let recommendation_changed = before.recommendation != after.recommendation;
    let time_saved_delta_minutes =
        i64::from(after.time_saved_minutes) - i64::from(before.time_saved_minutes);

    Ok(WhatIfResult {
        changes_applied,
        before,
        after,
        recommendation_changed,
        time_saved_delta_minutes,
    })
}

fn canonical_name(field: &str) -> &str {
    QuestionnaireAnswers::canonical_field(field).unwrap_or(field)
}
