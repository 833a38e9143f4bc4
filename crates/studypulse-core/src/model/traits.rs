use crate::error::ModelError;
use crate::features::FeatureRow;

/// A pre-trained regressor predicting a 0-100 performance score.
/// Implementations take a single feature row and return one scalar.
pub trait PerformanceModel {
    /// Model identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Predict the performance score for one row.
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;
}

/// A pre-trained binary classifier for burnout.
pub trait BurnoutClassifier {
    /// Model identifier used in logs and errors.
    fn name(&self) -> &str;

    /// Probability of the positive (burnout) class for one row.
    fn predict_proba(&self, row: &FeatureRow) -> Result<f64, ModelError>;
}
