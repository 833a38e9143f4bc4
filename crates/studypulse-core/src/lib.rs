//! # StudyPulse Core Library
//!
//! This library provides the core logic for StudyPulse, a daily study-habit
//! check. All operations are available through the `studypulse` CLI binary,
//! which is a thin presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Record**: One day of self-reported metrics, clamped to form ranges
//! - **Features**: Derived indices (focus, fatigue, consistency, load,
//!   productivity) assembled into a fixed-order feature row
//! - **Burnout**: Sanitized inputs scored by weighted penalty rules and mapped
//!   to an ordinal level
//! - **Advice**: Level-specific tips re-checking the raw inputs
//! - **Models**: Pre-trained performance regressor and burnout classifier
//!   behind traits, with a JSON linear-model backend
//!
//! ## Key Components
//!
//! - [`Analyzer`]: Runs the full pipeline for one record
//! - [`FeatureDeriver`]: Builds [`FeatureRow`]s
//! - [`BurnoutScorer`]: Rule-based burnout score
//! - [`Config`]: Application configuration management

pub mod advice;
pub mod analysis;
pub mod burnout;
pub mod config;
pub mod error;
pub mod features;
pub mod model;
pub mod record;
pub mod sanitize;

pub use advice::{generate_advice, Advice};
pub use analysis::{AnalysisReport, Analyzer, RuleAssessment};
pub use burnout::{
    BurnoutAssessment, BurnoutConfig, BurnoutLevel, BurnoutScorer, BurnoutThresholds,
    PenaltyTerm, PenaltyWeights,
};
pub use config::{data_dir, Config, ProbabilityConfig};
pub use error::{ConfigError, CoreError, ModelError, ValidationError};
pub use features::{ConsistencyMode, DerivedFeatures, FeatureConfig, FeatureDeriver, FeatureRow};
pub use model::{
    BurnoutClassifier, LinearRegressor, LogisticClassifier, ModelArtifact, ModelBundle, ModelKind,
    PerformanceModel,
};
pub use record::{DailyStudyRecord, FormInput, FormRanges, HoursMinutes};
pub use sanitize::{sanitize, sanitize_form, SanitizedInputs};
