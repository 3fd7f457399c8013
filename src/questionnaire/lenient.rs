//! Deserializers that never fail on the value itself.
//!
//! Answer sets come from forms that change independently of the scoring
//! rules, so an odd value degrades to a fallback instead of rejecting the
//! whole record.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::questionnaire::fields::{DecisionType, ProjectLength, RecurringType, WireValue};

/// Missing or `null` → default; an unmatched string or any other JSON type
/// → `T::unrecognized()`.
pub(crate) fn category<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: WireValue,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => T::default(),
        Some(Value::String(raw)) => T::from_wire(&raw).unwrap_or_else(T::unrecognized),
        Some(_) => T::unrecognized(),
    })
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(matches!(value, Some(Value::Bool(true))))
}

pub(crate) fn decision_types<'de, D>(deserializer: D) -> Result<BTreeSet<DecisionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(BTreeSet::new());
    };
    Ok(items
        .iter()
        .map(|item| {
            item.as_str()
                .and_then(DecisionType::from_wire)
                .unwrap_or(DecisionType::Unrecognized)
        })
        .collect())
}

pub(crate) fn recurring_type<'de, D>(deserializer: D) -> Result<Option<RecurringType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(RecurringType::from_wire))
}

pub(crate) fn project_length<'de, D>(deserializer: D) -> Result<Option<ProjectLength>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(ProjectLength::from_wire))
}
