use anyhow::Result;

use crate::scoring::RecommendationResult;

pub fn results_to_csv(results: &[RecommendationResult]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "recommendation",
        "confidence",
        "meeting_pct",
        "email_pct",
        "async_pct",
        "meeting_length",
        "meeting_cadence",
        "participants",
        "time_saved_minutes",
    ])?;
    for result in results {
        writer.write_record([
            result.recommendation.to_string(),
            result.confidence_score.to_string(),
            format!("{:.1}", result.scores.meeting),
            format!("{:.1}", result.scores.email),
            format!("{:.1}", result.scores.async_message),
            result.meeting_length.to_string(),
            result.meeting_cadence.clone().unwrap_or_default(),
            result.participants.join("; "),
            result.time_saved_minutes.to_string(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
