//! Plain-text rendering of records, metrics and advice.

use studypulse_core::{
    Advice, AnalysisReport, BurnoutAssessment, DailyStudyRecord, FeatureRow, HoursMinutes,
};

pub fn summary(record: &DailyStudyRecord) -> String {
    let lines = [
        "📝 Summary".to_string(),
        format!("  • Study: {}", HoursMinutes::from_hours(record.study_hours)),
        format!("  • Sleep: {}", HoursMinutes::from_hours(record.sleep_hours)),
        format!(
            "  • Breaks: {} (avg {} min)",
            record.break_count, record.avg_break_duration
        ),
        format!("  • Screen Time: {} hours", round2(record.screen_time)),
        format!("  • Difficulty: {}/5", record.difficulty_level),
        format!(
            "  • Revision: {}",
            if record.revision_done { "Yes" } else { "No" }
        ),
        format!("  • Mood: {}/5", record.mood_score),
    ];
    lines.join("\n")
}

/// Two-decimal rounding that keeps at least one fractional digit: `4.0`, `2.5`, `1.17`.
fn round2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

pub fn metrics(report: &AnalysisReport) -> String {
    let lines = [
        "📊 Results".to_string(),
        format!(
            "  Predicted Performance Score: {:.1} / 100",
            report.performance_score
        ),
        format!(
            "  Burnout Risk Probability: {:.1}%",
            report.burnout_probability * 100.0
        ),
        format!("  Burnout Score: {:.2}", report.burnout.raw_score),
    ];
    lines.join("\n")
}

pub fn burnout(assessment: &BurnoutAssessment) -> String {
    let mut lines = vec![format!(
        "🔥 Burnout Score: {:.2} ({})",
        assessment.raw_score, assessment.level
    )];
    for term in &assessment.terms {
        lines.push(format!(
            "  {:<7} penalty {:>5.2} × {:.2} = {:.2}",
            term.name, term.penalty, term.weight, term.contribution
        ));
    }
    if let Some(top) = assessment.top_term() {
        lines.push(format!("  Largest factor: {}", top.name));
    }
    lines.join("\n")
}

pub fn advice(advice: &Advice) -> String {
    let mut lines = vec!["🧠 Recommendations".to_string()];
    lines.extend(advice.lines().map(|line| format!("  • {line}")));
    lines.join("\n")
}

pub fn features(row: &FeatureRow) -> String {
    row.columns()
        .map(|(name, value)| format!("{name:<20} {value:.3}"))
        .collect::<Vec<_>>()
        .join("\n")
}
