//! Threshold-based advice.
//!
//! Each burnout level selects a branch of fixed and conditional tips. The
//! conditions look at the unsanitized record, so advice reflects what the
//! user actually entered.

use serde::{Deserialize, Serialize};

use crate::burnout::BurnoutLevel;
use crate::record::DailyStudyRecord;

pub const LOW_AFFIRMATION: &str = "✅ Your burnout risk is low today.";
pub const LOW_SLEEP_TIP: &str = "🛌 Getting a bit more sleep could further improve focus.";
pub const LOW_SCREEN_TIP: &str = "📵 Slightly reducing screen time may help maintain energy.";
pub const LOW_CLOSING: &str = "👍 Keep maintaining a healthy balance.";

pub const MODERATE_NOTICE: &str =
    "🟡 You may be starting to feel some mental or physical strain.";
pub const MODERATE_SLEEP_TIP: &str =
    "😴 Your sleep is on the lower side. Prioritizing rest can help.";
pub const MODERATE_STUDY_TIP: &str =
    "📖 Consider slightly reducing study hours or improving breaks.";
pub const MODERATE_SCREEN_TIP: &str = "📵 Reducing screen time at night may improve recovery.";
pub const MODERATE_CLOSING: &str = "🔍 Small adjustments now can prevent burnout later.";

pub const HIGH_NOTICE: &str = "🚨 High burnout risk detected.";
pub const SEVERE_SLEEP_TIP: &str = "😴 Severe sleep deprivation detected.";
pub const HEAVY_WORKLOAD_TIP: &str = "📚 Very high workload detected.";
pub const HIGH_CLOSING: &str = "🧠 Strongly recommend taking rest or reducing workload.";

/// Advice for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub level: BurnoutLevel,
    /// `🔥 Burnout Level: <level>`
    pub headline: String,
    /// Ordered tips
    pub tips: Vec<String>,
}

impl Advice {
    /// Headline followed by tips, as displayed.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.headline.as_str()).chain(self.tips.iter().map(String::as_str))
    }
}

/// Build advice for a level and the raw record.
pub fn generate_advice(level: BurnoutLevel, record: &DailyStudyRecord) -> Advice {
    let mut tips: Vec<&str> = Vec::new();

    match level {
        BurnoutLevel::Low => {
            tips.push(LOW_AFFIRMATION);
            if record.sleep_hours < 7.0 {
                tips.push(LOW_SLEEP_TIP);
            }
            if record.screen_time > 6.0 {
                tips.push(LOW_SCREEN_TIP);
            }
            tips.push(LOW_CLOSING);
        }
        BurnoutLevel::Moderate => {
            tips.push(MODERATE_NOTICE);
            if record.sleep_hours < 6.0 {
                tips.push(MODERATE_SLEEP_TIP);
            }
            if record.study_hours > 6.0 {
                tips.push(MODERATE_STUDY_TIP);
            }
            if record.screen_time > 6.0 {
                tips.push(MODERATE_SCREEN_TIP);
            }
            tips.push(MODERATE_CLOSING);
        }
        BurnoutLevel::High | BurnoutLevel::VeryHigh => {
            tips.push(HIGH_NOTICE);
            if record.sleep_hours < 5.0 {
                tips.push(SEVERE_SLEEP_TIP);
            }
            if record.study_hours > 8.0 {
                tips.push(HEAVY_WORKLOAD_TIP);
            }
            tips.push(HIGH_CLOSING);
        }
    }

    Advice {
        level,
        headline: format!("🔥 Burnout Level: {level}"),
        tips: tips.into_iter().map(String::from).collect(),
    }
}
