//! JSON model artifacts.
//!
//! An artifact stores a linear model over named feature-row columns:
//!
//! ```json
//! {
//!   "kind": "logistic_regression",
//!   "name": "burnout",
//!   "version": "2024-05",
//!   "features": ["sleep_hours", "study_hours"],
//!   "coefficients": [-0.6, 0.4],
//!   "intercept": 1.2
//! }
//! ```
//!
//! Regression artifacts return `intercept + w·x`; logistic artifacts return
//! `sigmoid(intercept + w·x)`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::{BurnoutClassifier, PerformanceModel};
use crate::error::ModelError;
use crate::features::FeatureRow;

/// Which kind of linear model an artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    LinearRegression,
    LogisticRegression,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::LinearRegression => "linear_regression",
            ModelKind::LogisticRegression => "logistic_regression",
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// On-disk model description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub kind: ModelKind,
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    #[serde(default)]
    pub intercept: f64,
}

impl ModelArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            ModelError::ArtifactMissing {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&content).map_err(|e| match e {
            ModelError::MalformedArtifact { message, .. } => ModelError::MalformedArtifact {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    /// Parse an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::MalformedArtifact {
            path: PathBuf::new(),
            message: e.to_string(),
        })
    }

    /// Resolve feature names to row column indices.
    fn column_indices(&self) -> Result<Vec<usize>, ModelError> {
        if self.features.len() != self.coefficients.len() {
            return Err(ModelError::SchemaMismatch {
                model: self.name.clone(),
                message: format!(
                    "{} features but {} coefficients",
                    self.features.len(),
                    self.coefficients.len()
                ),
            });
        }

        if let Some(bad) = self.coefficients.iter().find(|c| !c.is_finite()) {
            return Err(ModelError::SchemaMismatch {
                model: self.name.clone(),
                message: format!("non-finite coefficient {bad}"),
            });
        }

        self.features
            .iter()
            .map(|feature| {
                FeatureRow::COLUMNS
                    .iter()
                    .position(|c| c == feature)
                    .ok_or_else(|| ModelError::SchemaMismatch {
                        model: self.name.clone(),
                        message: format!("unknown feature column '{feature}'"),
                    })
            })
            .collect()
    }

    fn expect_kind(&self, expected: ModelKind) -> Result<(), ModelError> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(ModelError::WrongKind {
                name: self.name.clone(),
                expected: expected.to_string(),
                found: self.kind.to_string(),
            })
        }
    }
}

/// A validated artifact ready to score rows.
#[derive(Debug, Clone)]
struct LinearCore {
    artifact: ModelArtifact,
    indices: Vec<usize>,
}

impl LinearCore {
    fn new(artifact: ModelArtifact, kind: ModelKind) -> Result<Self, ModelError> {
        artifact.expect_kind(kind)?;
        let indices = artifact.column_indices()?;
        Ok(Self { artifact, indices })
    }

    fn decision(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let values = row.values();
        let z = self
            .indices
            .iter()
            .zip(&self.artifact.coefficients)
            .fold(self.artifact.intercept, |acc, (&i, w)| acc + w * values[i]);
        if z.is_finite() {
            Ok(z)
        } else {
            Err(ModelError::NonFiniteOutput {
                model: self.artifact.name.clone(),
            })
        }
    }
}

/// Linear regression performance model.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    core: LinearCore,
}

impl LinearRegressor {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        Ok(Self {
            core: LinearCore::new(artifact, ModelKind::LinearRegression)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.core.artifact
    }
}

impl PerformanceModel for LinearRegressor {
    fn name(&self) -> &str {
        &self.core.artifact.name
    }

    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        self.core.decision(row)
    }
}

/// Logistic regression burnout classifier.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    core: LinearCore,
}

impl LogisticClassifier {
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self, ModelError> {
        Ok(Self {
            core: LinearCore::new(artifact, ModelKind::LogisticRegression)?,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        Self::from_artifact(ModelArtifact::load(path)?)
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.core.artifact
    }
}

impl BurnoutClassifier for LogisticClassifier {
    fn name(&self) -> &str {
        &self.core.artifact.name
    }

    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ModelError> {
        let z = self.core.decision(row)?;
        Ok(sigmoid(z))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// The two models an analysis needs.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub performance: LinearRegressor,
    pub burnout: LogisticClassifier,
}

impl ModelBundle {
    /// Load both artifacts from `dir`.
    pub fn load_from_dir(
        dir: &Path,
        performance_file: &str,
        burnout_file: &str,
    ) -> Result<Self, ModelError> {
        let performance = LinearRegressor::load(&dir.join(performance_file))?;
        let burnout = LogisticClassifier::load(&dir.join(burnout_file))?;
        info!(
            performance = %performance.artifact().name,
            burnout = %burnout.artifact().name,
            dir = %dir.display(),
            "loaded model artifacts"
        );
        Ok(Self {
            performance,
            burnout,
        })
    }
}
