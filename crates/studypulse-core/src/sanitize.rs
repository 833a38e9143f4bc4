//! Input sanitizing for the burnout scorer.
//!
//! The scorer works on a narrower view of the record than the form allows:
//! study time is floored at half an hour so a zero-hour day still counts as
//! a study day.

use serde::{Deserialize, Serialize};

use crate::record::{DailyStudyRecord, FormInput, IntRange, RealRange};

pub const SANITIZED_STUDY_HOURS: RealRange = RealRange::new(0.5, 10.0);
pub const SANITIZED_SLEEP_HOURS: RealRange = RealRange::new(1.0, 10.0);
pub const SANITIZED_SCREEN_TIME: RealRange = RealRange::new(0.0, 12.0);
pub const SANITIZED_BREAK_COUNT: IntRange = IntRange::new(0, 10);
pub const SANITIZED_MOOD_SCORE: IntRange = IntRange::new(1, 5);

/// The subset of inputs the burnout scorer reads, clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SanitizedInputs {
    pub study_hours: f64,
    pub sleep_hours: f64,
    pub screen_time: f64,
    pub break_count: u32,
    pub mood_score: u8,
}

impl SanitizedInputs {
    fn from_values(study: f64, sleep: f64, screen: f64, breaks: i64, mood: i64) -> Self {
        Self {
            study_hours: SANITIZED_STUDY_HOURS.clamp(study),
            sleep_hours: SANITIZED_SLEEP_HOURS.clamp(sleep),
            screen_time: SANITIZED_SCREEN_TIME.clamp(screen),
            break_count: SANITIZED_BREAK_COUNT.clamp(breaks) as u32,
            mood_score: SANITIZED_MOOD_SCORE.clamp(mood) as u8,
        }
    }
}

/// Clamp a record's scorer inputs.
pub fn sanitize(record: &DailyStudyRecord) -> SanitizedInputs {
    SanitizedInputs::from_values(
        record.study_hours,
        record.sleep_hours,
        record.screen_time,
        record.break_count as i64,
        record.mood_score as i64,
    )
}

/// Clamp unchecked form values directly.
pub fn sanitize_form(input: &FormInput) -> SanitizedInputs {
    SanitizedInputs::from_values(
        input.study_hours,
        input.sleep_hours,
        input.screen_time,
        input.break_count,
        input.mood_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_study_floors_at_half_hour() {
        let record = DailyStudyRecord {
            study_hours: 0.0,
            ..DailyStudyRecord::default()
        };
        assert_eq!(sanitize(&record).study_hours, 0.5);
    }

    #[test]
    fn nominal_values_pass_through() {
        let s = sanitize(&DailyStudyRecord::default());
        assert_eq!(s.study_hours, 4.0);
        assert_eq!(s.sleep_hours, 7.0);
        assert_eq!(s.screen_time, 4.0);
        assert_eq!(s.break_count, 3);
        assert_eq!(s.mood_score, 3);
    }

    #[test]
    fn form_values_are_clamped() {
        let s = sanitize_form(&FormInput {
            study_hours: 30.0,
            sleep_hours: -3.0,
            screen_time: 99.0,
            break_count: 50,
            mood_score: -1,
            ..FormInput::default()
        });
        assert_eq!(s.study_hours, 10.0);
        assert_eq!(s.sleep_hours, 1.0);
        assert_eq!(s.screen_time, 12.0);
        assert_eq!(s.break_count, 10);
        assert_eq!(s.mood_score, 1);
    }

    proptest! {
        #[test]
        fn sanitized_values_stay_in_range(
            study in proptest::num::f64::ANY,
            sleep in proptest::num::f64::ANY,
            screen in proptest::num::f64::ANY,
            breaks in any::<i64>(),
            mood in any::<i64>(),
        ) {
            let s = sanitize_form(&FormInput {
                study_hours: study,
                sleep_hours: sleep,
                screen_time: screen,
                break_count: breaks,
                mood_score: mood,
                ..FormInput::default()
            });
            prop_assert!((0.5..=10.0).contains(&s.study_hours));
            prop_assert!((1.0..=10.0).contains(&s.sleep_hours));
            prop_assert!((0.0..=12.0).contains(&s.screen_time));
            prop_assert!(s.break_count <= 10);
            prop_assert!((1..=5).contains(&s.mood_score));
        }
    }
}
