//! Rule-based burnout scoring.
//!
//! The raw burnout score is a weighted sum of five penalty terms computed
//! from [`SanitizedInputs`]. Each penalty is clipped at zero, optionally
//! capped, then weighted:
//!
//! | Term   | Penalty                    | Weight |
//! |--------|----------------------------|--------|
//! | sleep  | `max(0, 7 - sleep_hours)`  | 0.7    |
//! | study  | `max(0, study_hours - 3)`  | 0.4    |
//! | screen | `max(0, screen_time - 3)`  | 0.3    |
//! | breaks | `max(0, break_count - 2)`  | 0.3    |
//! | mood   | `max(0, 4 - mood_score)`   | 0.5    |
//!
//! The score (rounded to two decimals) maps to a [`BurnoutLevel`] through
//! fixed descending thresholds.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::sanitize::SanitizedInputs;

/// Ordinal burnout level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BurnoutLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl BurnoutLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BurnoutLevel::Low => "Low",
            BurnoutLevel::Moderate => "Moderate",
            BurnoutLevel::High => "High",
            BurnoutLevel::VeryHigh => "Very High",
        }
    }
}

impl std::fmt::Display for BurnoutLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight applied to each penalty term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    #[serde(default = "default_sleep_weight")]
    pub sleep: f64,
    #[serde(default = "default_study_weight")]
    pub study: f64,
    #[serde(default = "default_screen_weight")]
    pub screen: f64,
    #[serde(default = "default_breaks_weight")]
    pub breaks: f64,
    #[serde(default = "default_mood_weight")]
    pub mood: f64,
}

/// Reference points the penalties are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTargets {
    /// Sleep below this many hours is penalized
    #[serde(default = "default_sleep_target")]
    pub sleep_hours: f64,
    /// Study above this many hours is penalized
    #[serde(default = "default_study_allowance")]
    pub study_hours: f64,
    /// Screen time above this many hours is penalized
    #[serde(default = "default_screen_allowance")]
    pub screen_time: f64,
    /// Breaks above this count are penalized
    #[serde(default = "default_break_allowance")]
    pub break_count: f64,
    /// Mood below this score is penalized
    #[serde(default = "default_mood_target")]
    pub mood_score: f64,
}

/// Lower bounds of each level above Low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnoutThresholds {
    #[serde(default = "default_very_high")]
    pub very_high: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_moderate")]
    pub moderate: f64,
}

/// Scorer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurnoutConfig {
    /// Cap each penalty at `penalty_cap` before weighting.
    #[serde(default)]
    pub cap_penalties: bool,
    #[serde(default = "default_penalty_cap")]
    pub penalty_cap: f64,
    #[serde(default)]
    pub weights: PenaltyWeights,
    #[serde(default)]
    pub targets: PenaltyTargets,
    #[serde(default)]
    pub thresholds: BurnoutThresholds,
}

fn default_sleep_weight() -> f64 {
    0.7
}
fn default_study_weight() -> f64 {
    0.4
}
fn default_screen_weight() -> f64 {
    0.3
}
fn default_breaks_weight() -> f64 {
    0.3
}
fn default_mood_weight() -> f64 {
    0.5
}
fn default_sleep_target() -> f64 {
    7.0
}
fn default_study_allowance() -> f64 {
    3.0
}
fn default_screen_allowance() -> f64 {
    3.0
}
fn default_break_allowance() -> f64 {
    2.0
}
fn default_mood_target() -> f64 {
    4.0
}
fn default_very_high() -> f64 {
    7.5
}
fn default_high() -> f64 {
    5.0
}
fn default_moderate() -> f64 {
    2.5
}
fn default_penalty_cap() -> f64 {
    5.0
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            sleep: default_sleep_weight(),
            study: default_study_weight(),
            screen: default_screen_weight(),
            breaks: default_breaks_weight(),
            mood: default_mood_weight(),
        }
    }
}

impl PenaltyWeights {
    /// Validate that all weights are finite and non-negative
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [
            ("sleep", self.sleep),
            ("study", self.study),
            ("screen", self.screen),
            ("breaks", self.breaks),
            ("mood", self.mood),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for PenaltyTargets {
    fn default() -> Self {
        Self {
            sleep_hours: default_sleep_target(),
            study_hours: default_study_allowance(),
            screen_time: default_screen_allowance(),
            break_count: default_break_allowance(),
            mood_score: default_mood_target(),
        }
    }
}

impl PenaltyTargets {
    /// Validate that all targets are finite
    pub fn validate(&self) -> Result<(), ValidationError> {
        let targets = [
            ("sleep_hours", self.sleep_hours),
            ("study_hours", self.study_hours),
            ("screen_time", self.screen_time),
            ("break_count", self.break_count),
            ("mood_score", self.mood_score),
        ];

        for (name, value) in targets {
            if !value.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("burnout.targets.{name}"),
                    message: format!("must be finite, got {value}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for BurnoutThresholds {
    fn default() -> Self {
        Self {
            very_high: default_very_high(),
            high: default_high(),
            moderate: default_moderate(),
        }
    }
}

impl BurnoutThresholds {
    /// Map a raw score to its level.
    pub fn level_for(&self, score: f64) -> BurnoutLevel {
        if score >= self.very_high {
            BurnoutLevel::VeryHigh
        } else if score >= self.high {
            BurnoutLevel::High
        } else if score >= self.moderate {
            BurnoutLevel::Moderate
        } else {
            BurnoutLevel::Low
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let ordered = self.very_high > self.high && self.high > self.moderate;
        let finite = [self.very_high, self.high, self.moderate]
            .iter()
            .all(|t| t.is_finite());
        if ordered && finite {
            Ok(())
        } else {
            Err(ValidationError::ThresholdOrder {
                very_high: self.very_high,
                high: self.high,
                moderate: self.moderate,
            })
        }
    }
}

impl Default for BurnoutConfig {
    fn default() -> Self {
        Self {
            cap_penalties: false,
            penalty_cap: default_penalty_cap(),
            weights: PenaltyWeights::default(),
            targets: PenaltyTargets::default(),
            thresholds: BurnoutThresholds::default(),
        }
    }
}

impl BurnoutConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.weights.validate()?;
        self.targets.validate()?;
        self.thresholds.validate()?;
        if self.cap_penalties && !(self.penalty_cap.is_finite() && self.penalty_cap >= 0.0) {
            return Err(ValidationError::InvalidValue {
                field: "burnout.penalty_cap".to_string(),
                message: format!("must be finite and non-negative, got {}", self.penalty_cap),
            });
        }
        Ok(())
    }
}

/// One penalty term of the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTerm {
    /// Term name
    pub name: String,
    /// Penalty after clipping (and capping, when enabled)
    pub penalty: f64,
    /// Weight for this term
    pub weight: f64,
    /// `weight * penalty`
    pub contribution: f64,
}

impl PenaltyTerm {
    fn new(name: &str, penalty: f64, weight: f64) -> Self {
        Self {
            name: name.to_string(),
            penalty,
            weight,
            contribution: weight * penalty,
        }
    }
}

/// Scoring result with per-term breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnoutAssessment {
    pub terms: Vec<PenaltyTerm>,
    /// Weighted sum rounded to two decimals
    pub raw_score: f64,
    pub level: BurnoutLevel,
}

impl BurnoutAssessment {
    /// Get the top contributing term, if any term contributes
    pub fn top_term(&self) -> Option<&PenaltyTerm> {
        self.terms
            .iter()
            .filter(|t| t.contribution > 0.0)
            .max_by(|a, b| a.contribution.total_cmp(&b.contribution))
    }

    pub fn term(&self, name: &str) -> Option<&PenaltyTerm> {
        self.terms.iter().find(|t| t.name == name)
    }
}

/// Computes [`BurnoutAssessment`]s.
#[derive(Debug, Clone, Default)]
pub struct BurnoutScorer {
    config: BurnoutConfig,
}

impl BurnoutScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: BurnoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BurnoutConfig {
        &self.config
    }

    fn penalty(&self, excess: f64) -> f64 {
        let clipped = excess.max(0.0);
        if self.config.cap_penalties {
            clipped.min(self.config.penalty_cap)
        } else {
            clipped
        }
    }

    /// Score sanitized inputs.
    pub fn score(&self, inputs: &SanitizedInputs) -> BurnoutAssessment {
        let t = &self.config.targets;
        let w = &self.config.weights;

        let terms = vec![
            PenaltyTerm::new("sleep", self.penalty(t.sleep_hours - inputs.sleep_hours), w.sleep),
            PenaltyTerm::new("study", self.penalty(inputs.study_hours - t.study_hours), w.study),
            PenaltyTerm::new("screen", self.penalty(inputs.screen_time - t.screen_time), w.screen),
            PenaltyTerm::new(
                "breaks",
                self.penalty(inputs.break_count as f64 - t.break_count),
                w.breaks,
            ),
            PenaltyTerm::new("mood", self.penalty(t.mood_score - inputs.mood_score as f64), w.mood),
        ];

        let sum: f64 = terms.iter().map(|term| term.contribution).sum();
        let raw_score = round2(sum);
        let level = self.config.thresholds.level_for(raw_score);

        debug!(raw_score, level = %level, "scored burnout");

        BurnoutAssessment {
            terms,
            raw_score,
            level,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DailyStudyRecord;
    use crate::sanitize::sanitize;
    use proptest::prelude::*;

    fn nominal() -> SanitizedInputs {
        sanitize(&DailyStudyRecord::default())
    }

    #[test]
    fn short_sleep_contributes_sleep_penalty() {
        let inputs = SanitizedInputs {
            sleep_hours: 4.0,
            ..nominal()
        };
        let assessment = BurnoutScorer::new().score(&inputs);
        let sleep = assessment.term("sleep").unwrap();
        assert_eq!(sleep.penalty, 3.0);
        assert!((sleep.contribution - 2.1).abs() < 1e-9);
    }

    #[test]
    fn nominal_day_scores_low() {
        // study 4 -> 0.4, screen 4 -> 0.3, breaks 3 -> 0.3, mood 3 -> 0.5
        let assessment = BurnoutScorer::new().score(&nominal());
        assert!((assessment.raw_score - 1.5).abs() < 1e-9);
        assert_eq!(assessment.level, BurnoutLevel::Low);
        assert_eq!(assessment.top_term().unwrap().name, "mood");
    }

    #[test]
    fn rested_day_has_no_top_term() {
        let inputs = SanitizedInputs {
            study_hours: 2.0,
            sleep_hours: 8.0,
            screen_time: 1.0,
            break_count: 1,
            mood_score: 5,
        };
        let assessment = BurnoutScorer::new().score(&inputs);
        assert_eq!(assessment.raw_score, 0.0);
        assert!(assessment.top_term().is_none());
    }

    #[test]
    fn worst_day_scores_very_high() {
        let inputs = SanitizedInputs {
            study_hours: 10.0,
            sleep_hours: 1.0,
            screen_time: 12.0,
            break_count: 10,
            mood_score: 1,
        };
        let assessment = BurnoutScorer::new().score(&inputs);
        // 0.7*6 + 0.4*7 + 0.3*9 + 0.3*8 + 0.5*3
        assert!((assessment.raw_score - 13.6).abs() < 1e-9);
        assert_eq!(assessment.level, BurnoutLevel::VeryHigh);
    }

    #[test]
    fn capped_penalties_limit_each_term() {
        let scorer = BurnoutScorer::with_config(BurnoutConfig {
            cap_penalties: true,
            penalty_cap: 2.0,
            ..BurnoutConfig::default()
        });
        let inputs = SanitizedInputs {
            sleep_hours: 1.0,
            ..nominal()
        };
        let sleep = scorer.score(&inputs).term("sleep").cloned().unwrap();
        assert_eq!(sleep.penalty, 2.0);
    }

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        let t = BurnoutThresholds::default();
        assert_eq!(t.level_for(2.49), BurnoutLevel::Low);
        assert_eq!(t.level_for(2.5), BurnoutLevel::Moderate);
        assert_eq!(t.level_for(5.0), BurnoutLevel::High);
        assert_eq!(t.level_for(7.5), BurnoutLevel::VeryHigh);
    }

    #[test]
    fn threshold_validation_rejects_disorder() {
        let t = BurnoutThresholds {
            very_high: 5.0,
            high: 5.0,
            moderate: 2.5,
        };
        assert!(t.validate().is_err());
        assert!(BurnoutThresholds::default().validate().is_ok());
    }

    #[test]
    fn weight_validation_rejects_negative() {
        let w = PenaltyWeights {
            mood: -0.1,
            ..PenaltyWeights::default()
        };
        assert!(w.validate().is_err());
    }

    #[test]
    fn level_serializes_with_display_name() {
        let json = serde_json::to_string(&BurnoutLevel::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");
        assert_eq!(BurnoutLevel::Moderate.to_string(), "Moderate");
    }

    proptest! {
        #[test]
        fn level_is_monotonic_in_score(a in -5.0f64..20.0, b in -5.0f64..20.0) {
            let t = BurnoutThresholds::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(t.level_for(lo) <= t.level_for(hi));
        }

        #[test]
        fn raw_score_is_non_negative(
            study in 0.5f64..=10.0,
            sleep in 1.0f64..=10.0,
            screen in 0.0f64..=12.0,
            breaks in 0u32..=10,
            mood in 1u8..=5,
        ) {
            let inputs = SanitizedInputs {
                study_hours: study,
                sleep_hours: sleep,
                screen_time: screen,
                break_count: breaks,
                mood_score: mood,
            };
            prop_assert!(BurnoutScorer::new().score(&inputs).raw_score >= 0.0);
        }
    }
}
