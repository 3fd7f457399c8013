use std::fmt::{Display, Formatter};

use serde::Serialize;

/// A categorical answer that travels over the wire as a fixed string.
///
/// `from_wire` only accepts exact matches; callers decide what an unmatched
/// string becomes through `unrecognized`.
pub trait WireValue: Sized + Default {
    fn from_wire(raw: &str) -> Option<Self>;
    fn as_wire(&self) -> &'static str;
    fn unrecognized() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[default]
    None,
    Low,
    Medium,
    High,
    Critical,
    Unrecognized,
}

impl WireValue for Urgency {
    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Unrecognized => "unrecognized",
        }
    }

    fn unrecognized() -> Self {
        Self::Unrecognized
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
    HighlyComplex,
    Unrecognized,
}

impl WireValue for Complexity {
    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "simple" => Some(Self::Simple),
            "moderate" => Some(Self::Moderate),
            "complex" => Some(Self::Complex),
            "highly_complex" => Some(Self::HighlyComplex),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
            Self::HighlyComplex => "highly_complex",
            Self::Unrecognized => "unrecognized",
        }
    }

    fn unrecognized() -> Self {
        Self::Unrecognized
    }
}

/// Shared by `emotionalRisk` and `changeImpact`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Unrecognized,
}

impl WireValue for RiskLevel {
    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "none" => Some(Self::None),
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unrecognized => "unrecognized",
        }
    }

    fn unrecognized() -> Self {
        Self::Unrecognized
    }
}

/// Stakeholder bands. The wire keys use an en-dash (U+2013), not a hyphen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum StakeholderCount {
    #[default]
    #[serde(rename = "1–2")]
    OneToTwo,
    #[serde(rename = "3–5")]
    ThreeToFive,
    #[serde(rename = "6–10")]
    SixToTen,
    #[serde(rename = "10+")]
    TenPlus,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl WireValue for StakeholderCount {
    fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "1–2" => Some(Self::OneToTwo),
            "3–5" => Some(Self::ThreeToFive),
            "6–10" => Some(Self::SixToTen),
            "10+" => Some(Self::TenPlus),
            _ => None,
        }
    }

    fn as_wire(&self) -> &'static str {
        match self {
            Self::OneToTwo => "1–2",
            Self::ThreeToFive => "3–5",
            Self::SixToTen => "6–10",
            Self::TenPlus => "10+",
            Self::Unrecognized => "unrecognized",
        }
    }

    fn unrecognized() -> Self {
        Self::Unrecognized
    }
}

/// Ordering follows declaration order, which is also the order used when a
/// set of decision types is written back out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    Inform,
    Align,
    Decide,
    Escalate,
    Unblock,
    Update,
    Brainstorm,
    /// A member that matched none of the above. It weighs nothing and is
    /// never informational.
    Unrecognized,
}

impl DecisionType {
    pub const ALL: [DecisionType; 7] = [
        DecisionType::Inform,
        DecisionType::Align,
        DecisionType::Decide,
        DecisionType::Escalate,
        DecisionType::Unblock,
        DecisionType::Update,
        DecisionType::Brainstorm,
    ];

    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "inform" => Some(Self::Inform),
            "align" => Some(Self::Align),
            "decide" => Some(Self::Decide),
            "escalate" => Some(Self::Escalate),
            "unblock" => Some(Self::Unblock),
            "update" => Some(Self::Update),
            "brainstorm" => Some(Self::Brainstorm),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Inform => "inform",
            Self::Align => "align",
            Self::Decide => "decide",
            Self::Escalate => "escalate",
            Self::Unblock => "unblock",
            Self::Update => "update",
            Self::Brainstorm => "brainstorm",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Column index into the decision-type influence table. `Unrecognized`
    /// has no column.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_informational(self) -> bool {
        matches!(self, Self::Inform | Self::Update)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringType {
    Project,
    Team,
    Company,
}

impl RecurringType {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "project" => Some(Self::Project),
            "team" => Some(Self::Team),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Team => "team",
            Self::Company => "company",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectLength {
    #[serde(rename = "1-3_months")]
    OneToThreeMonths,
    #[serde(rename = "3-6_months")]
    ThreeToSixMonths,
    #[serde(rename = "6-12_months")]
    SixToTwelveMonths,
    #[serde(rename = "12+_months")]
    TwelvePlusMonths,
}

impl ProjectLength {
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "1-3_months" => Some(Self::OneToThreeMonths),
            "3-6_months" => Some(Self::ThreeToSixMonths),
            "6-12_months" => Some(Self::SixToTwelveMonths),
            "12+_months" => Some(Self::TwelvePlusMonths),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::OneToThreeMonths => "1-3_months",
            Self::ThreeToSixMonths => "3-6_months",
            Self::SixToTwelveMonths => "6-12_months",
            Self::TwelvePlusMonths => "12+_months",
        }
    }
}

impl Display for Urgency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for RiskLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for StakeholderCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for DecisionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for RecurringType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

impl Display for ProjectLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stakeholder_keys_require_en_dash() {
        assert_eq!(
            StakeholderCount::from_wire("3–5"),
            Some(StakeholderCount::ThreeToFive)
        );
        assert_eq!(StakeholderCount::from_wire("3-5"), None);
    }

    #[test]
    fn decision_type_index_matches_canonical_order() {
        for (position, kind) in DecisionType::ALL.iter().enumerate() {
            assert_eq!(kind.index(), position);
            assert_eq!(DecisionType::from_wire(kind.as_wire()), Some(*kind));
        }
    }

    #[test]
    fn unrecognized_decision_type_sorts_last_and_is_not_informational() {
        assert!(!DecisionType::ALL.contains(&DecisionType::Unrecognized));
        assert!(DecisionType::Unrecognized > DecisionType::Brainstorm);
        assert!(!DecisionType::Unrecognized.is_informational());
        assert_eq!(DecisionType::from_wire("unrecognized"), None);
    }

    #[test]
    fn wire_matching_is_exact() {
        assert_eq!(Urgency::from_wire("High"), None);
        assert_eq!(Complexity::from_wire(" simple"), None);
        assert_eq!(RiskLevel::from_wire("critical"), None);
    }
}
