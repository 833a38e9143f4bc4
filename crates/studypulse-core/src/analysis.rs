//! The analysis pipeline.
//!
//! `record -> features -> models -> sanitize -> score -> advice`. Each call
//! is independent; the analyzer holds only configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::advice::{generate_advice, Advice};
use crate::burnout::{BurnoutAssessment, BurnoutScorer};
use crate::config::{Config, ProbabilityConfig};
use crate::error::ModelError;
use crate::features::{FeatureDeriver, FeatureRow};
use crate::model::{BurnoutClassifier, PerformanceModel};
use crate::record::DailyStudyRecord;
use crate::sanitize::sanitize;

/// Rule-based part of an analysis, available without models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleAssessment {
    pub features: FeatureRow,
    pub burnout: BurnoutAssessment,
    pub advice: Advice,
}

/// Full analysis output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub features: FeatureRow,
    /// Regressor output, 0-100 scale
    pub performance_score: f64,
    /// Classifier output after the display clamp
    pub burnout_probability: f64,
    /// Classifier output before the display clamp
    pub raw_burnout_probability: f64,
    pub burnout: BurnoutAssessment,
    pub advice: Advice,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn record(&self) -> &DailyStudyRecord {
        &self.features.record
    }
}

/// Runs the pipeline for single records.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    deriver: FeatureDeriver,
    scorer: BurnoutScorer,
    probability: ProbabilityConfig,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            deriver: FeatureDeriver::with_config(config.features.clone()),
            scorer: BurnoutScorer::with_config(config.burnout),
            probability: config.probability,
        }
    }

    /// Features, burnout score and advice without invoking models.
    pub fn assess(&self, record: &DailyStudyRecord) -> RuleAssessment {
        let features = self.deriver.derive(record);
        let burnout = self.scorer.score(&sanitize(record));
        let advice = generate_advice(burnout.level, record);
        RuleAssessment {
            features,
            burnout,
            advice,
        }
    }

    /// Run the full pipeline with both models.
    ///
    /// # Errors
    ///
    /// Returns the first model error; no partial report is produced.
    pub fn analyze(
        &self,
        record: &DailyStudyRecord,
        performance: &dyn PerformanceModel,
        classifier: &dyn BurnoutClassifier,
    ) -> Result<AnalysisReport, ModelError> {
        let RuleAssessment {
            features,
            burnout,
            advice,
        } = self.assess(record);

        let performance_score = performance.predict(&features)?;
        let raw_burnout_probability = classifier.predict_proba(&features)?;
        if !performance_score.is_finite() {
            return Err(ModelError::NonFiniteOutput {
                model: performance.name().to_string(),
            });
        }
        if !raw_burnout_probability.is_finite() {
            return Err(ModelError::NonFiniteOutput {
                model: classifier.name().to_string(),
            });
        }

        let burnout_probability = self.probability.apply(raw_burnout_probability);
        if burnout_probability != raw_burnout_probability {
            warn!(
                raw = raw_burnout_probability,
                shown = burnout_probability,
                "burnout probability clamped for display"
            );
        }

        debug!(
            performance = performance_score,
            probability = burnout_probability,
            score = burnout.raw_score,
            "analysis complete"
        );

        Ok(AnalysisReport {
            features,
            performance_score,
            burnout_probability,
            raw_burnout_probability,
            burnout,
            advice,
            analyzed_at: Utc::now(),
        })
    }
}
