//! Feature derivation.
//!
//! Turns a [`DailyStudyRecord`] into the flat [`FeatureRow`] that the
//! predictive models consume:
//!
//! ```text
//! focus_score        = study_hours / (break_count + 1)
//! fatigue_index      = study_hours / sleep_hours
//! consistency_score  = min(study_hours, 6)        (capped mode)
//! revision_intensity = revision_done as 0/1
//! cognitive_load     = difficulty_level * study_hours
//! productivity_index = 0.35*focus + 0.30*consistency + 0.20*revision - 0.15*fatigue
//! ```
//!
//! `break_count >= 0` and `sleep_hours >= 1` hold for every record built from
//! the form, so neither division can blow up.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::record::DailyStudyRecord;

/// How `consistency_score` is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyMode {
    /// `min(study_hours, cap)`
    #[default]
    Capped,
    /// `study_hours` unchanged
    Raw,
}

/// Feature derivation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureConfig {
    #[serde(default)]
    pub consistency_mode: ConsistencyMode,
    #[serde(default = "default_consistency_cap")]
    pub consistency_cap: f64,
}

fn default_consistency_cap() -> f64 {
    6.0
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            consistency_mode: ConsistencyMode::default(),
            consistency_cap: default_consistency_cap(),
        }
    }
}

impl FeatureConfig {
    /// The consistency cap must be finite and positive.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.consistency_cap.is_finite() && self.consistency_cap > 0.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidValue {
                field: "features.consistency_cap".to_string(),
                message: format!("must be finite and positive, got {}", self.consistency_cap),
            })
        }
    }
}

/// Weights of the productivity index.
pub const PRODUCTIVITY_FOCUS_WEIGHT: f64 = 0.35;
pub const PRODUCTIVITY_CONSISTENCY_WEIGHT: f64 = 0.30;
pub const PRODUCTIVITY_REVISION_WEIGHT: f64 = 0.20;
pub const PRODUCTIVITY_FATIGUE_WEIGHT: f64 = 0.15;

/// Secondary indices computed from a record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedFeatures {
    pub focus_score: f64,
    pub fatigue_index: f64,
    pub consistency_score: f64,
    pub revision_intensity: f64,
    pub cognitive_load: f64,
    pub productivity_index: f64,
}

/// The raw record plus its derived features, in model column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub record: DailyStudyRecord,
    pub derived: DerivedFeatures,
}

impl FeatureRow {
    /// Column names in the order models were trained on.
    pub const COLUMNS: [&'static str; 14] = [
        "difficulty_level",
        "study_hours",
        "break_count",
        "avg_break_duration",
        "sleep_hours",
        "screen_time",
        "revision_done",
        "mood_score",
        "focus_score",
        "fatigue_index",
        "consistency_score",
        "revision_intensity",
        "cognitive_load",
        "productivity_index",
    ];

    /// Values aligned with [`FeatureRow::COLUMNS`].
    pub fn values(&self) -> [f64; 14] {
        let r = &self.record;
        let d = &self.derived;
        [
            r.difficulty_level as f64,
            r.study_hours,
            r.break_count as f64,
            r.avg_break_duration as f64,
            r.sleep_hours,
            r.screen_time,
            r.revision_flag(),
            r.mood_score as f64,
            d.focus_score,
            d.fatigue_index,
            d.consistency_score,
            d.revision_intensity,
            d.cognitive_load,
            d.productivity_index,
        ]
    }

    /// `(name, value)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::COLUMNS.into_iter().zip(self.values())
    }

    /// Look up a single column by name.
    pub fn get(&self, name: &str) -> Option<f64> {
        Self::COLUMNS
            .iter()
            .position(|c| *c == name)
            .map(|i| self.values()[i])
    }
}

/// Derives feature rows from records.
#[derive(Debug, Clone, Default)]
pub struct FeatureDeriver {
    config: FeatureConfig,
}

impl FeatureDeriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FeatureConfig) -> Self {
        Self { config }
    }

    /// Compute the derived features only.
    pub fn derive_features(&self, record: &DailyStudyRecord) -> DerivedFeatures {
        let study = record.study_hours;
        let focus_score = study / (record.break_count as f64 + 1.0);
        let fatigue_index = study / record.sleep_hours;
        let consistency_score = match self.config.consistency_mode {
            ConsistencyMode::Capped => study.min(self.config.consistency_cap),
            ConsistencyMode::Raw => study,
        };
        let revision_intensity = record.revision_flag();
        let cognitive_load = record.difficulty_level as f64 * study;

        let productivity_index = PRODUCTIVITY_FOCUS_WEIGHT * focus_score
            + PRODUCTIVITY_CONSISTENCY_WEIGHT * consistency_score
            + PRODUCTIVITY_REVISION_WEIGHT * revision_intensity
            - PRODUCTIVITY_FATIGUE_WEIGHT * fatigue_index;

        DerivedFeatures {
            focus_score,
            fatigue_index,
            consistency_score,
            revision_intensity,
            cognitive_load,
            productivity_index,
        }
    }

    /// Build the full feature row for a record.
    pub fn derive(&self, record: &DailyStudyRecord) -> FeatureRow {
        let derived = self.derive_features(record);
        debug!(
            focus = derived.focus_score,
            fatigue = derived.fatigue_index,
            productivity = derived.productivity_index,
            "derived features"
        );
        FeatureRow {
            record: record.clone(),
            derived,
        }
    }
}
