//! The daily study record and its form ranges.
//!
//! A [`DailyStudyRecord`] is the single transient input of one analysis. It
//! is built from loosely typed form values via [`FormInput::into_record`],
//! which clamps every field into its closed form range so that out-of-range
//! values cannot reach the pipeline.

use serde::{Deserialize, Serialize};

/// Closed range for a real-valued form field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealRange {
    pub min: f64,
    pub max: f64,
}

impl RealRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp into the range. NaN maps to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Closed range for an integer form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Form ranges for each input field.
pub struct FormRanges;

impl FormRanges {
    pub const STUDY_HOURS: RealRange = RealRange::new(0.0, 10.0);
    pub const SLEEP_HOURS: RealRange = RealRange::new(1.0, 10.0);
    pub const BREAK_COUNT: IntRange = IntRange::new(0, 10);
    pub const AVG_BREAK_DURATION: IntRange = IntRange::new(5, 40);
    pub const SCREEN_TIME: RealRange = RealRange::new(0.0, 12.0);
    pub const DIFFICULTY_LEVEL: IntRange = IntRange::new(1, 5);
    pub const MOOD_SCORE: IntRange = IntRange::new(1, 5);
}

/// One day of self-reported study metrics.
///
/// Every field is within its [`FormRanges`] bound once constructed through
/// [`FormInput::into_record`] or [`DailyStudyRecord::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStudyRecord {
    /// Hours studied
    pub study_hours: f64,
    /// Hours slept
    pub sleep_hours: f64,
    /// Number of breaks taken
    pub break_count: u32,
    /// Average break length in minutes
    pub avg_break_duration: u32,
    /// Total screen time in hours
    pub screen_time: f64,
    /// 1 = easy, 5 = very hard
    pub difficulty_level: u8,
    /// Whether the day included revision
    pub revision_done: bool,
    /// 1 = very stressed, 5 = highly motivated
    pub mood_score: u8,
}

impl Default for DailyStudyRecord {
    fn default() -> Self {
        Self {
            study_hours: 4.0,
            sleep_hours: 7.0,
            break_count: 3,
            avg_break_duration: 10,
            screen_time: 4.0,
            difficulty_level: 3,
            revision_done: true,
            mood_score: 3,
        }
    }
}

impl DailyStudyRecord {
    /// `revision_done` as the 0/1 value models expect.
    pub fn revision_flag(&self) -> f64 {
        if self.revision_done {
            1.0
        } else {
            0.0
        }
    }

    /// True when every field lies within its form range.
    pub fn within_form_ranges(&self) -> bool {
        FormRanges::STUDY_HOURS.contains(self.study_hours)
            && FormRanges::SLEEP_HOURS.contains(self.sleep_hours)
            && FormRanges::BREAK_COUNT.contains(self.break_count as i64)
            && FormRanges::AVG_BREAK_DURATION.contains(self.avg_break_duration as i64)
            && FormRanges::SCREEN_TIME.contains(self.screen_time)
            && FormRanges::DIFFICULTY_LEVEL.contains(self.difficulty_level as i64)
            && FormRanges::MOOD_SCORE.contains(self.mood_score as i64)
    }
}

/// Unchecked form values as entered by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormInput {
    pub study_hours: f64,
    pub sleep_hours: f64,
    pub break_count: i64,
    pub avg_break_duration: i64,
    pub screen_time: f64,
    pub difficulty_level: i64,
    pub revision_done: bool,
    pub mood_score: i64,
}

impl Default for FormInput {
    fn default() -> Self {
        let record = DailyStudyRecord::default();
        Self {
            study_hours: record.study_hours,
            sleep_hours: record.sleep_hours,
            break_count: record.break_count as i64,
            avg_break_duration: record.avg_break_duration as i64,
            screen_time: record.screen_time,
            difficulty_level: record.difficulty_level as i64,
            revision_done: record.revision_done,
            mood_score: record.mood_score as i64,
        }
    }
}

impl FormInput {
    /// Clamp every field into its form range and build the record.
    pub fn into_record(self) -> DailyStudyRecord {
        DailyStudyRecord {
            study_hours: FormRanges::STUDY_HOURS.clamp(self.study_hours),
            sleep_hours: FormRanges::SLEEP_HOURS.clamp(self.sleep_hours),
            break_count: FormRanges::BREAK_COUNT.clamp(self.break_count) as u32,
            avg_break_duration: FormRanges::AVG_BREAK_DURATION.clamp(self.avg_break_duration)
                as u32,
            screen_time: FormRanges::SCREEN_TIME.clamp(self.screen_time),
            difficulty_level: FormRanges::DIFFICULTY_LEVEL.clamp(self.difficulty_level) as u8,
            revision_done: self.revision_done,
            mood_score: FormRanges::MOOD_SCORE.clamp(self.mood_score) as u8,
        }
    }
}

/// A duration shown as whole hours plus minutes in 10-minute steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursMinutes {
    pub hours: u32,
    pub minutes: u32,
}

impl HoursMinutes {
    pub const MINUTE_STEP: u32 = 10;

    /// Split decimal hours, rounding the minutes to the nearest 10-minute
    /// step. A rounded value of 60 minutes carries into the hour.
    pub fn from_hours(hours: f64) -> Self {
        let hours = if hours.is_finite() { hours.max(0.0) } else { 0.0 };
        let whole = hours.trunc();
        let step = Self::MINUTE_STEP as f64;
        let mut h = whole as u32;
        let mut m = (((hours - whole) * 60.0 / step).round() * step) as u32;
        if m >= 60 {
            h += 1;
            m -= 60;
        }
        Self { hours: h, minutes: m }
    }

    /// Combine hours and minutes back to decimal hours. Minutes are snapped
    /// down to the 10-minute grid and capped at 50.
    pub fn to_hours(self) -> f64 {
        let m = (self.minutes.min(50) / Self::MINUTE_STEP) * Self::MINUTE_STEP;
        self.hours as f64 + m as f64 / 60.0
    }
}

impl std::fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}
