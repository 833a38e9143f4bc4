//! Day inputs shared by the analysis commands.
//!
//! Values outside the form ranges are clamped, never rejected.

use clap::Args;
use studypulse_core::{DailyStudyRecord, FormInput, FormRanges, HoursMinutes};

#[derive(Args, Debug, Clone)]
pub struct DayArgs {
    /// Study time in decimal hours (0-10)
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub study: f64,

    /// Study hours; with --study-m overrides --study
    #[arg(long = "study-h", allow_negative_numbers = true)]
    pub study_h: Option<i64>,

    /// Study minutes in 10-minute steps (0-50)
    #[arg(long = "study-m", allow_negative_numbers = true)]
    pub study_m: Option<i64>,

    /// Sleep time in decimal hours (1-10)
    #[arg(long, default_value_t = 7.0, allow_negative_numbers = true)]
    pub sleep: f64,

    /// Sleep hours; with --sleep-m overrides --sleep
    #[arg(long = "sleep-h", allow_negative_numbers = true)]
    pub sleep_h: Option<i64>,

    /// Sleep minutes in 10-minute steps (0-50)
    #[arg(long = "sleep-m", allow_negative_numbers = true)]
    pub sleep_m: Option<i64>,

    /// Number of breaks (0-10)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub breaks: i64,

    /// Average break duration in minutes (5-40)
    #[arg(long = "break-minutes", default_value_t = 10, allow_negative_numbers = true)]
    pub break_minutes: i64,

    /// Total screen time in hours (0-12)
    #[arg(long, default_value_t = 4.0, allow_negative_numbers = true)]
    pub screen: f64,

    /// Difficulty (1 = easy, 5 = very hard)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub difficulty: i64,

    /// No revision today
    #[arg(long = "no-revision")]
    pub no_revision: bool,

    /// Mental state (1 = very stressed, 5 = highly motivated)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    pub mood: i64,
}

/// Combine split hour/minute flags, falling back to decimal hours.
fn resolve_hours(
    decimal: f64,
    hours: Option<i64>,
    minutes: Option<i64>,
    min_hours: i64,
    max_hours: i64,
) -> f64 {
    if hours.is_none() && minutes.is_none() {
        return decimal;
    }
    let fallback = HoursMinutes::from_hours(decimal);
    let h = hours.unwrap_or(fallback.hours as i64).clamp(min_hours, max_hours);
    let m = minutes.unwrap_or(fallback.minutes as i64).clamp(0, 50);
    HoursMinutes {
        hours: h as u32,
        minutes: m as u32,
    }
    .to_hours()
}

impl DayArgs {
    pub fn to_form(&self) -> FormInput {
        let study = FormRanges::STUDY_HOURS;
        let sleep = FormRanges::SLEEP_HOURS;
        FormInput {
            study_hours: resolve_hours(
                self.study,
                self.study_h,
                self.study_m,
                study.min as i64,
                study.max as i64,
            ),
            sleep_hours: resolve_hours(
                self.sleep,
                self.sleep_h,
                self.sleep_m,
                sleep.min as i64,
                sleep.max as i64,
            ),
            break_count: self.breaks,
            avg_break_duration: self.break_minutes,
            screen_time: self.screen,
            difficulty_level: self.difficulty,
            revision_done: !self.no_revision,
            mood_score: self.mood,
        }
    }

    pub fn to_record(&self) -> DailyStudyRecord {
        self.to_form().into_record()
    }
}
