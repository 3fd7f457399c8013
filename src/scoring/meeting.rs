use crate::questionnaire::{
    Complexity, ProjectLength, QuestionnaireAnswers, RecurringType, RiskLevel, StakeholderCount,
};

pub const ONE_TIME_CADENCE: &str = "One-time meeting (no regular cadence)";
pub const TEAM_CADENCE: &str = "Weekly team sync (30–45 min)";
pub const COMPANY_CADENCE: &str = "Monthly all-hands (45–60 min)";

/// Drafting cost assumed for an email or async message, in minutes.
pub const WRITTEN_DRAFTING_MINUTES: u32 = 10;

/// Recommended length of the meeting itself.
pub fn meeting_length(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Moderate => 35,
        Complexity::Complex => 50,
        Complexity::HighlyComplex => 75,
        Complexity::Simple | Complexity::Unrecognized => 20,
    }
}

/// What a meeting on this topic would typically cost if it were held
/// anyway. Deliberately longer than [`meeting_length`].
pub fn baseline_meeting_minutes(complexity: Complexity) -> u32 {
    match complexity {
        Complexity::Moderate => 45,
        Complexity::Complex => 60,
        Complexity::HighlyComplex => 80,
        Complexity::Simple | Complexity::Unrecognized => 30,
    }
}

pub fn project_cadence(length: Option<ProjectLength>) -> &'static str {
    match length {
        Some(ProjectLength::OneToThreeMonths) => {
            "Weekly standup (15 min) + Bi-weekly planning (45 min) + Kick-off & Retro"
        }
        Some(ProjectLength::ThreeToSixMonths) => {
            "Weekly standup + Weekly planning (30 min) + Monthly review (60 min)"
        }
        Some(ProjectLength::SixToTwelveMonths) => {
            "Daily standup + Weekly planning (45 min) + Bi-weekly stakeholder sync + Monthly retro"
        }
        Some(ProjectLength::TwelvePlusMonths) | None => {
            "Daily standup + Weekly planning + Bi-weekly stakeholder sync + Monthly retro + Quarterly review (90 min)"
        }
    }
}

pub fn meeting_cadence(answers: &QuestionnaireAnswers) -> &'static str {
    if !answers.is_recurring {
        return ONE_TIME_CADENCE;
    }
    match answers.recurring_type {
        Some(RecurringType::Project) => project_cadence(answers.project_length),
        Some(RecurringType::Team) => TEAM_CADENCE,
        Some(RecurringType::Company) => COMPANY_CADENCE,
        None => ONE_TIME_CADENCE,
    }
}

/// Representative headcount for a stakeholder band.
pub fn core_stakeholder_headcount(count: StakeholderCount) -> u32 {
    match count {
        StakeholderCount::OneToTwo => 2,
        StakeholderCount::ThreeToFive => 4,
        StakeholderCount::SixToTen => 8,
        StakeholderCount::TenPlus | StakeholderCount::Unrecognized => 12,
    }
}

pub fn participants(answers: &QuestionnaireAnswers) -> Vec<String> {
    let mut out = vec![
        "Decision owner".to_string(),
        format!(
            "Core stakeholders ({})",
            core_stakeholder_headcount(answers.stakeholder_count)
        ),
    ];
    if answers.cross_team_dependencies {
        out.push("Representatives from dependent teams".to_string());
    }
    if answers.emotional_risk == RiskLevel::High {
        out.push("HR or people lead (optional)".to_string());
    }
    // Anything other than a plain `simple` answer, unrecognized values included.
    if answers.complexity != Complexity::Simple {
        out.push("Subject matter experts".to_string());
    }
    out
}
