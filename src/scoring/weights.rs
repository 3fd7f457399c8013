use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::questionnaire::{
    Complexity, DecisionType, QuestionnaireAnswers, RiskLevel, StakeholderCount, Urgency,
};
use crate::scoring::Channel;

pub const CROSS_TEAM_BONUS: f64 = 3.0;

/// Per-channel contribution of each decision type, indexed by
/// `[channel][DecisionType::index()]`. Columns: inform, align, decide,
/// escalate, unblock, update, brainstorm.
pub const DECISION_TYPE_INFLUENCE: [[f64; 7]; 3] = [
    [0.0, 3.0, 4.0, 4.0, 1.0, 0.0, 4.0],
    [2.0, 1.0, 0.0, 0.0, 0.0, 3.0, 0.0],
    [2.0, 0.0, 0.0, 0.0, 3.0, 1.0, 0.0],
];

/// The inputs that feed a channel score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    Urgency,
    Complexity,
    DecisionTypes,
    Stakeholders,
    CrossTeam,
    EmotionalRisk,
    ChangeImpact,
}

impl Display for Factor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Urgency => "urgency",
            Self::Complexity => "complexity",
            Self::DecisionTypes => "decision types",
            Self::Stakeholders => "stakeholders",
            Self::CrossTeam => "cross-team",
            Self::EmotionalRisk => "emotional risk",
            Self::ChangeImpact => "change impact",
        };
        write!(f, "{label}")
    }
}

// Multipliers are listed in summation order; reordering changes the last bits
// of the raw scores.
const MEETING_MULTIPLIERS: &[(Factor, f64)] = &[
    (Factor::Urgency, 1.6),
    (Factor::Complexity, 1.4),
    (Factor::DecisionTypes, 2.0),
    (Factor::Stakeholders, 1.2),
    (Factor::CrossTeam, 1.0),
    (Factor::EmotionalRisk, 1.5),
    (Factor::ChangeImpact, 1.5),
];

const EMAIL_MULTIPLIERS: &[(Factor, f64)] = &[
    (Factor::Urgency, 0.9),
    (Factor::Complexity, 0.4),
    (Factor::DecisionTypes, 1.6),
    (Factor::ChangeImpact, 0.6),
];

const ASYNC_MULTIPLIERS: &[(Factor, f64)] = &[
    (Factor::Urgency, 0.7),
    (Factor::Complexity, 0.5),
    (Factor::DecisionTypes, 1.8),
    (Factor::Stakeholders, 0.3),
];

pub fn channel_multipliers(channel: Channel) -> &'static [(Factor, f64)] {
    match channel {
        Channel::Meeting => MEETING_MULTIPLIERS,
        Channel::Email => EMAIL_MULTIPLIERS,
        Channel::Async => ASYNC_MULTIPLIERS,
    }
}

pub fn urgency_weight(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::None => 0.0,
        Urgency::Low => 1.0,
        Urgency::Medium => 2.0,
        Urgency::High => 3.0,
        Urgency::Critical => 5.0,
        Urgency::Unrecognized => 0.0,
    }
}

pub fn complexity_weight(complexity: Complexity) -> f64 {
    match complexity {
        Complexity::Simple => 0.0,
        Complexity::Moderate => 1.0,
        Complexity::Complex => 3.0,
        Complexity::HighlyComplex => 5.0,
        Complexity::Unrecognized => 0.0,
    }
}

pub fn stakeholder_weight(count: StakeholderCount) -> f64 {
    match count {
        StakeholderCount::OneToTwo => 0.0,
        StakeholderCount::ThreeToFive => 2.0,
        StakeholderCount::SixToTen => 4.0,
        StakeholderCount::TenPlus => 6.0,
        StakeholderCount::Unrecognized => 0.0,
    }
}

/// Used for both emotional risk and change impact.
pub fn risk_weight(level: RiskLevel) -> f64 {
    match level {
        RiskLevel::None => 0.0,
        RiskLevel::Low => 1.0,
        RiskLevel::Medium => 2.0,
        RiskLevel::High => 4.0,
        RiskLevel::Unrecognized => 0.0,
    }
}

pub fn decision_type_influence(kind: DecisionType, channel: Channel) -> f64 {
    match kind {
        DecisionType::Unrecognized => 0.0,
        known => DECISION_TYPE_INFLUENCE[channel.index()][known.index()],
    }
}

/// Every numeric weight an answer set resolves to, looked up once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub urgency: f64,
    pub complexity: f64,
    pub stakeholders: f64,
    pub cross_team: f64,
    pub emotional_risk: f64,
    pub change_impact: f64,
    pub decision_types: [f64; 3],
}

impl FactorWeights {
    pub fn resolve(answers: &QuestionnaireAnswers) -> Self {
        let mut decision_types = [0.0; 3];
        for kind in &answers.decision_types {
            for channel in Channel::ALL {
                decision_types[channel.index()] += decision_type_influence(*kind, channel);
            }
        }

        Self {
            urgency: urgency_weight(answers.urgency),
            complexity: complexity_weight(answers.complexity),
            stakeholders: stakeholder_weight(answers.stakeholder_count),
            cross_team: if answers.cross_team_dependencies {
                CROSS_TEAM_BONUS
            } else {
                0.0
            },
            emotional_risk: risk_weight(answers.emotional_risk),
            change_impact: risk_weight(answers.change_impact),
            decision_types,
        }
    }

    pub fn get(&self, factor: Factor, channel: Channel) -> f64 {
        match factor {
            Factor::Urgency => self.urgency,
            Factor::Complexity => self.complexity,
            Factor::DecisionTypes => self.decision_types[channel.index()],
            Factor::Stakeholders => self.stakeholders,
            Factor::CrossTeam => self.cross_team,
            Factor::EmotionalRisk => self.emotional_risk,
            Factor::ChangeImpact => self.change_impact,
        }
    }

    /// Weighted sum for one channel, before the zero floor.
    pub fn raw_channel_score(&self, channel: Channel) -> f64 {
        channel_multipliers(channel)
            .iter()
            .fold(0.0, |total, (factor, multiplier)| {
                total + multiplier * self.get(*factor, channel)
            })
    }
}
