use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::scoring::breakdown::ScoreBreakdown;
use crate::scoring::whatif::WhatIfResult;
use crate::scoring::{Recommendation, RecommendationResult};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn recommendation_cell(recommendation: Recommendation) -> Cell {
    let color = match recommendation {
        Recommendation::Meeting => Color::Yellow,
        Recommendation::Email | Recommendation::AsyncMessage => Color::Green,
        Recommendation::CancelMeeting => Color::Cyan,
        Recommendation::NoAction => Color::DarkGrey,
    };
    Cell::new(recommendation.label()).fg(color)
}

pub fn render_result_table(result: &RecommendationResult) -> String {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![
        Cell::new("Recommendation"),
        recommendation_cell(result.recommendation),
    ]);
    table.add_row(vec![
        "Confidence".to_string(),
        format!("{}%", result.confidence_score),
    ]);
    table.add_row(vec![
        "Scores".to_string(),
        format!(
            "meeting {:.1}% / email {:.1}% / async {:.1}%",
            result.scores.meeting, result.scores.email, result.scores.async_message
        ),
    ]);
    if result.recommendation == Recommendation::Meeting {
        table.add_row(vec![
            "Meeting length".to_string(),
            format!("{} min", result.meeting_length),
        ]);
        table.add_row(vec![
            "Cadence".to_string(),
            result.meeting_cadence.clone().unwrap_or_default(),
        ]);
        table.add_row(vec![
            "Participants".to_string(),
            result.participants.join("\n"),
        ]);
    }
    table.add_row(vec![
        "Time saved".to_string(),
        format!("{} min", result.time_saved_minutes),
    ]);
    table.add_row(vec!["Rationale".to_string(), result.rationale.clone()]);
    table.add_row(vec![
        "Best practices".to_string(),
        result.best_practices.clone(),
    ]);
    table.to_string()
}

pub fn render_batch_table(results: &[RecommendationResult]) -> String {
    let mut table = new_table();
    table.set_header(vec![
        "#",
        "Recommendation",
        "Confidence",
        "Meeting %",
        "Email %",
        "Async %",
        "Length",
        "Time Saved",
    ]);
    for (idx, result) in results.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            recommendation_cell(result.recommendation),
            Cell::new(format!("{}%", result.confidence_score)),
            Cell::new(format!("{:.1}", result.scores.meeting)),
            Cell::new(format!("{:.1}", result.scores.email)),
            Cell::new(format!("{:.1}", result.scores.async_message)),
            Cell::new(if result.meeting_length > 0 {
                format!("{} min", result.meeting_length)
            } else {
                "-".to_string()
            }),
            Cell::new(format!("{} min", result.time_saved_minutes)),
        ]);
    }
    let saved = results
        .iter()
        .map(|r| u64::from(r.time_saved_minutes))
        .sum::<u64>();
    format!("{table}\nTotal time saved: {saved} min")
}

pub fn render_breakdown_table(breakdown: &ScoreBreakdown) -> String {
    let mut table = new_table();
    table.set_header(vec!["Channel", "Factor", "Weight", "Multiplier", "Contribution"]);
    for channel in &breakdown.channels {
        for contribution in &channel.contributions {
            table.add_row(vec![
                channel.channel.to_string(),
                contribution.factor.to_string(),
                format!("{:.1}", contribution.weight),
                format!("{:.1}", contribution.multiplier),
                format!("{:.2}", contribution.contribution),
            ]);
        }
        table.add_row(vec![
            Cell::new(channel.channel.to_string()),
            Cell::new("raw total").fg(Color::Cyan),
            Cell::new(""),
            Cell::new(""),
            Cell::new(format!("{:.2}", channel.raw_score)).fg(Color::Cyan),
        ]);
    }
    format!(
        "{table}\nShares: meeting {:.1}% / email {:.1}% / async {:.1}% -> {}",
        breakdown.percentages.meeting,
        breakdown.percentages.email,
        breakdown.percentages.async_message,
        breakdown.recommendation.label()
    )
}

pub fn render_whatif_table(result: &WhatIfResult) -> String {
    let mut changes = new_table();
    changes.set_header(vec!["Field", "From", "To"]);
    for change in &result.changes_applied {
        changes.add_row(vec![
            change.field.clone(),
            change.from.to_string(),
            change.to.to_string(),
        ]);
    }

    let mut comparison = new_table();
    comparison.set_header(vec!["", "Before", "After"]);
    comparison.add_row(vec![
        Cell::new("Recommendation"),
        recommendation_cell(result.before.recommendation),
        recommendation_cell(result.after.recommendation),
    ]);
    comparison.add_row(vec![
        "Confidence".to_string(),
        format!("{}%", result.before.confidence_score),
        format!("{}%", result.after.confidence_score),
    ]);
    comparison.add_row(vec![
        "Meeting %".to_string(),
        format!("{:.1}", result.before.scores.meeting),
        format!("{:.1}", result.after.scores.meeting),
    ]);
    comparison.add_row(vec![
        "Email %".to_string(),
        format!("{:.1}", result.before.scores.email),
        format!("{:.1}", result.after.scores.email),
    ]);
    comparison.add_row(vec![
        "Async %".to_string(),
        format!("{:.1}", result.before.scores.async_message),
        format!("{:.1}", result.after.scores.async_message),
    ]);
    comparison.add_row(vec![
        "Time saved".to_string(),
        format!("{} min", result.before.time_saved_minutes),
        format!("{} min", result.after.time_saved_minutes),
    ]);

    format!(
        "{changes}\n{comparison}\nRecommendation changed: {}\nTime saved delta: {:+} min",
        if result.recommendation_changed { "yes" } else { "no" },
        result.time_saved_delta_minutes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::{DecisionType, QuestionnaireAnswers, Urgency};
    use crate::scoring::{explain, score};

    fn meeting_answers() -> QuestionnaireAnswers {
        let mut answers = QuestionnaireAnswers::default();
        answers.urgency = Urgency::High;
        answers.decision_types.insert(DecisionType::Decide);
        answers
    }

    #[test]
    fn meeting_result_lists_participants() {
        let rendered = render_result_table(&score(&meeting_answers()));
        assert!(rendered.contains("Schedule a meeting"));
        assert!(rendered.contains("Decision owner"));
        assert!(rendered.contains("20 min"));
    }

    #[test]
    fn non_meeting_result_hides_meeting_rows() {
        let rendered = render_result_table(&score(&QuestionnaireAnswers::default()));
        assert!(rendered.contains("No action needed"));
        assert!(!rendered.contains("Participants"));
    }

    #[test]
    fn batch_table_totals_time_saved() {
        let mut email = QuestionnaireAnswers::default();
        email.decision_types.insert(DecisionType::Update);
        let rendered = render_batch_table(&[score(&email), score(&email)]);
        assert!(rendered.ends_with("Total time saved: 40 min"));
    }

    #[test]
    fn breakdown_table_shows_raw_totals() {
        let rendered = render_breakdown_table(&explain(&meeting_answers()));
        assert!(rendered.contains("raw total"));
        assert!(rendered.contains("12.80"));
    }
}
