use serde::{Deserialize, Serialize};

use crate::questionnaire::QuestionnaireAnswers;
use crate::scoring::engine::{normalize, raw_scores, select_recommendation};
use crate::scoring::weights::{channel_multipliers, Factor, FactorWeights};
use crate::scoring::{Channel, ChannelScores, Recommendation};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FactorContribution {
    pub factor: Factor,
    pub weight: f64,
    pub multiplier: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelBreakdown {
    pub channel: Channel,
    pub contributions: Vec<FactorContribution>,
    pub raw_score: f64,
}

impl ChannelBreakdown {
    /// The factor that added the most to this channel, if any added anything.
    pub fn dominant_factor(&self) -> Option<Factor> {
        self.contributions
            .iter()
            .filter(|c| c.contribution > 0.0)
            .max_by(|a, b| a.contribution.total_cmp(&b.contribution))
            .map(|c| c.factor)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub weights: FactorWeights,
    pub channels: Vec<ChannelBreakdown>,
    pub percentages: ChannelScores,
    pub recommendation: Recommendation,
}

/// Shows how each answer moved each channel's raw score.
pub fn explain(answers: &QuestionnaireAnswers) -> ScoreBreakdown {
    let weights = FactorWeights::resolve(answers);
    let raw = raw_scores(&weights);
    let percentages = normalize(raw);

    let channels = Channel::ALL
        .iter()
        .map(|channel| ChannelBreakdown {
            channel: *channel,
            contributions: channel_multipliers(*channel)
                .iter()
                .map(|(factor, multiplier)| {
                    let weight = weights.get(*factor, *channel);
                    FactorContribution {
                        factor: *factor,
                        weight,
                        multiplier: *multiplier,
                        contribution: multiplier * weight,
                    }
                })
                .collect(),
            raw_score: raw[channel.index()],
        })
        .collect();

    ScoreBreakdown {
        weights,
        channels,
        recommendation: select_recommendation(answers, &percentages),
        percentages: percentages.rounded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{Complexity, DecisionType, StakeholderCount, Urgency};
    use crate::scoring::score;

    #[test]
    fn contributions_add_up_to_raw_scores() {
        let mut answers = QuestionnaireAnswers::default();
        answers.urgency = Urgency::Medium;
        answers.complexity = Complexity::Complex;
        answers.stakeholder_count = StakeholderCount::ThreeToFive;
        answers.decision_types.insert(DecisionType::Align);
        answers.decision_types.insert(DecisionType::Inform);

        let breakdown = explain(&answers);
        assert_eq!(breakdown.channels.len(), 3);
        for channel in &breakdown.channels {
            let sum = channel
                .contributions
                .iter()
                .map(|c| c.contribution)
                .sum::<f64>();
            assert!((sum - channel.raw_score).abs() < 1e-9);
        }
    }

    #[test]
    fn agrees_with_score() {
        let mut answers = QuestionnaireAnswers::default();
        answers.urgency = Urgency::High;
        answers.decision_types.insert(DecisionType::Brainstorm);

        let breakdown = explain(&answers);
        let result = score(&answers);
        assert_eq!(breakdown.percentages, result.scores);
        assert_eq!(breakdown.recommendation, result.recommendation);
        assert_eq!(
            breakdown.channels[0].dominant_factor(),
            Some(Factor::DecisionTypes)
        );
    }

    #[test]
    fn empty_answers_have_no_dominant_factor() {
        let breakdown = explain(&QuestionnaireAnswers::default());
        assert!(breakdown
            .channels
            .iter()
            .all(|channel| channel.dominant_factor().is_none()));
    }
}
