use crate::questionnaire::{QuestionnaireAnswers, Urgency};
use crate::scoring::guidance::{best_practices, rationale};
use crate::scoring::meeting::{
    baseline_meeting_minutes, meeting_cadence, meeting_length, participants,
    WRITTEN_DRAFTING_MINUTES,
};
use crate::scoring::weights::FactorWeights;
use crate::scoring::{Channel, ChannelScores, Recommendation, RecommendationResult};

/// Below this percentage a channel is not considered significant.
pub const SIGNIFICANCE_FLOOR_PCT: f64 = 15.0;

/// A meeting that wins with less than this share can still be cancelled.
pub const CANCEL_CEILING_PCT: f64 = 50.0;

/// `(minimum lead, confidence)` checked top to bottom; the lead must be
/// strictly greater than the minimum.
pub const CONFIDENCE_BANDS: [(f64, u8); 4] = [(30.0, 95), (20.0, 85), (10.0, 75), (5.0, 65)];
pub const BASE_CONFIDENCE: u8 = 55;

pub fn score(answers: &QuestionnaireAnswers) -> RecommendationResult {
    let weights = FactorWeights::resolve(answers);
    let percentages = normalize(raw_scores(&weights));
    let recommendation = select_recommendation(answers, &percentages);
    let is_meeting = recommendation == Recommendation::Meeting;
    let scores = percentages.rounded();

    RecommendationResult {
        recommendation,
        confidence_score: confidence(percentages.lead()),
        rationale: rationale(recommendation, &scores, answers),
        meeting_length: if is_meeting {
            meeting_length(answers.complexity)
        } else {
            0
        },
        meeting_cadence: is_meeting.then(|| meeting_cadence(answers).to_string()),
        participants: participants(answers),
        time_saved_minutes: time_saved(recommendation, answers),
        best_practices: best_practices(recommendation, answers),
        scores,
    }
}

pub fn score_batch(answer_sets: &[QuestionnaireAnswers]) -> Vec<RecommendationResult> {
    answer_sets.iter().map(score).collect()
}

/// Raw channel scores floored at zero, in `Channel::ALL` order.
pub fn raw_scores(weights: &FactorWeights) -> [f64; 3] {
    Channel::ALL.map(|channel| weights.raw_channel_score(channel).max(0.0))
}

/// Converts raw scores to percentages of their sum. A zero sum is treated as
/// one so an empty answer set yields 0/0/0 instead of NaN.
pub fn normalize(raw: [f64; 3]) -> ChannelScores {
    let sum = raw[0] + raw[1] + raw[2];
    let total = if sum == 0.0 { 1.0 } else { sum };
    ChannelScores::from_values(raw.map(|value| value / total * 100.0))
}

pub fn select_recommendation(
    answers: &QuestionnaireAnswers,
    percentages: &ChannelScores,
) -> Recommendation {
    if Channel::ALL
        .iter()
        .all(|channel| percentages.get(*channel) < SIGNIFICANCE_FLOOR_PCT)
    {
        return Recommendation::NoAction;
    }

    let (top, top_pct) = percentages.ranked()[0];
    if top == Channel::Meeting
        && answers.is_informational_only()
        && matches!(answers.urgency, Urgency::None | Urgency::Low)
        && top_pct < CANCEL_CEILING_PCT
    {
        return Recommendation::CancelMeeting;
    }
    top.into()
}

pub fn confidence(lead: f64) -> u8 {
    CONFIDENCE_BANDS
        .iter()
        .find(|(minimum, _)| lead > *minimum)
        .map(|(_, band)| *band)
        .unwrap_or(BASE_CONFIDENCE)
}

pub fn time_saved(recommendation: Recommendation, answers: &QuestionnaireAnswers) -> u32 {
    let baseline = baseline_meeting_minutes(answers.complexity);
    match recommendation {
        Recommendation::AsyncMessage | Recommendation::Email => {
            baseline.saturating_sub(WRITTEN_DRAFTING_MINUTES)
        }
        Recommendation::CancelMeeting => baseline,
        Recommendation::Meeting | Recommendation::NoAction => 0,
    }
}
