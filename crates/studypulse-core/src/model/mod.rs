pub mod artifact;
pub mod traits;

pub use artifact::{LinearRegressor, LogisticClassifier, ModelArtifact, ModelBundle, ModelKind};
pub use traits::{BurnoutClassifier, PerformanceModel};
