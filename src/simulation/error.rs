//! Error types and handling
//!
//! This module contains the error type for running a simulation end to end.

use crate::award::ConstructionError;
use crate::types::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur while setting up or running a simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An award could not be built
    #[error(transparent)]
    ConstructionError(#[from] ConstructionError),

    /// Report output failed
    #[error("Output error: {0}")]
    OutputError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl SimulationError {
    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Create an output error
    pub fn output_error(msg: impl Into<String>) -> Self {
        Self::OutputError(msg.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::ConstructionError(_) => "Award Construction",
            SimulationError::OutputError(_) => "Output",
            SimulationError::IoError(_) => "IO",
            SimulationError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;
