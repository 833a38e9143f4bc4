//! Core error types for studypulse-core.
//!
//! This module defines the error hierarchy using thiserror. Input values are
//! clamped rather than rejected, so errors only come from configuration and
//! model artifacts.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studypulse-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Model artifact or prediction errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dot-path key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not resolve the data directory
    #[error("Could not resolve data directory: {0}")]
    DataDir(String),
}

/// Model artifact and invocation errors.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Artifact file could not be read
    #[error("Model artifact not found at {path}: {source}")]
    ArtifactMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file is not valid JSON for the artifact schema
    #[error("Malformed model artifact at {path}: {message}")]
    MalformedArtifact { path: PathBuf, message: String },

    /// Artifact was loaded into the wrong slot
    #[error("Model '{name}' is a {found} model, expected {expected}")]
    WrongKind {
        name: String,
        expected: String,
        found: String,
    },

    /// Artifact references columns the feature row does not have
    #[error("Schema mismatch for model '{model}': {message}")]
    SchemaMismatch { model: String, message: String },

    /// Model produced NaN or infinity
    #[error("Model '{model}' produced a non-finite output")]
    NonFiniteOutput { model: String },
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Weight outside the allowed range
    #[error("Weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: String, value: f64 },

    /// Thresholds not strictly descending
    #[error(
        "Burnout thresholds must be strictly descending: \
         very_high={very_high}, high={high}, moderate={moderate}"
    )]
    ThresholdOrder {
        very_high: f64,
        high: f64,
        moderate: f64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
