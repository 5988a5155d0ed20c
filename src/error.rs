//! Error types

use thiserror::Error;

/// The external hand detector could not be brought up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),
    #[error("hand model failed to load: {0}")]
    ModelLoad(String),
}

impl AcquisitionError {
    /// Message shown to the player when a round can't start
    pub fn user_message(&self) -> &'static str {
        match self {
            AcquisitionError::CameraUnavailable(_) => "Camera access required to play!",
            AcquisitionError::ModelLoad(_) => "Hand tracking failed to load!",
        }
    }
}

/// Configuration loading/validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
