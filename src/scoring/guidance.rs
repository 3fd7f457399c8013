use crate::questionnaire::{DecisionType, QuestionnaireAnswers, RiskLevel};
use crate::scoring::{ChannelScores, Recommendation};

pub const GENERAL_TIP: &str =
    "State the decision and the outcome you need in the first line, whatever the channel.";

const MEETING_TIPS: [&str; 3] = [
    "Share an agenda with the decision to be made at least a day ahead.",
    "Timebox each agenda item and close with owners and dates.",
    "Invite only the core group; send notes to everyone else.",
];
const EMAIL_TIP: &str =
    "Write a subject line that names the decision, spell out the action you need and give a deadline.";
const ASYNC_TIP: &str =
    "Open with context, put the decision in one line and finish with next steps.";
const EMOTIONAL_RISK_TIP: &str =
    "Emotional risk is high: talk to the most affected people one-to-one before any group announcement.";
const CROSS_TEAM_TIP: &str =
    "Name one owner per dependent team and confirm hand-off dates in writing.";

/// One sentence explaining the recommendation from its scores and inputs.
pub fn rationale(
    recommendation: Recommendation,
    scores: &ChannelScores,
    answers: &QuestionnaireAnswers,
) -> String {
    let decision_types = if answers.decision_types.is_empty() {
        "none".to_string()
    } else {
        answers
            .decision_types
            .iter()
            .map(DecisionType::as_wire)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{} (meeting {:.1}%, email {:.1}%, async {:.1}%) based on urgency {}, complexity {}, {} stakeholders, decision types [{}], cross-team dependencies {}, emotional risk {} and change impact {}.",
        recommendation.label(),
        scores.meeting,
        scores.email,
        scores.async_message,
        answers.urgency,
        answers.complexity,
        answers.stakeholder_count,
        decision_types,
        if answers.cross_team_dependencies { "yes" } else { "no" },
        answers.emotional_risk,
        answers.change_impact,
    )
}

pub fn best_practices(recommendation: Recommendation, answers: &QuestionnaireAnswers) -> String {
    let mut tips = vec![GENERAL_TIP];
    match recommendation {
        Recommendation::Meeting => tips.extend(MEETING_TIPS),
        Recommendation::Email => tips.push(EMAIL_TIP),
        Recommendation::AsyncMessage => tips.push(ASYNC_TIP),
        Recommendation::CancelMeeting | Recommendation::NoAction => {}
    }
    if answers.emotional_risk == RiskLevel::High {
        tips.push(EMOTIONAL_RISK_TIP);
    }
    if answers.cross_team_dependencies {
        tips.push(CROSS_TEAM_TIP);
    }
    tips.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{StakeholderCount, Urgency};

    #[test]
    fn rationale_embeds_scores_and_inputs() {
        let mut answers = QuestionnaireAnswers::default();
        answers.urgency = Urgency::High;
        answers.stakeholder_count = StakeholderCount::SixToTen;
        answers.decision_types.insert(DecisionType::Decide);
        let scores = ChannelScores::from_values([72.7, 15.3, 11.9]);

        let text = rationale(Recommendation::Meeting, &scores, &answers);
        assert!(text.starts_with("Schedule a meeting (meeting 72.7%, email 15.3%, async 11.9%)"));
        assert!(text.contains("urgency high"));
        assert!(text.contains("6–10 stakeholders"));
        assert!(text.contains("decision types [decide]"));
    }

    #[test]
    fn meeting_tips_include_agenda_and_timebox() {
        let answers = QuestionnaireAnswers::default();
        let tips = best_practices(Recommendation::Meeting, &answers);
        let lines = tips.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], GENERAL_TIP);
        assert!(lines.iter().any(|line| line.contains("agenda")));
        assert!(lines.iter().any(|line| line.contains("Timebox")));
    }

    #[test]
    fn conditional_tips_are_appended() {
        let mut answers = QuestionnaireAnswers::default();
        answers.emotional_risk = RiskLevel::High;
        answers.cross_team_dependencies = true;
        let tips = best_practices(Recommendation::CancelMeeting, &answers);
        assert_eq!(
            tips.lines().collect::<Vec<_>>(),
            vec![GENERAL_TIP, EMOTIONAL_RISK_TIP, CROSS_TEAM_TIP]
        );
    }
}
