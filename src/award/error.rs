//! Validation and construction errors for awards
//!
//! Awards can only fail at construction time. Once an award exists, every daily
//! update is a total function.

use thiserror::Error;

/// A rule an award's inputs broke
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Name was empty or whitespace
    #[error("Name cannot be empty")]
    BlankName,

    /// Quality outside the ranged bounds
    #[error("Quality must be between {min} and {max}, got {quality}")]
    QualityOutOfRange {
        /// The rejected quality
        quality: i32,
        /// Lowest accepted quality
        min: i32,
        /// Highest accepted quality
        max: i32,
    },

    /// Quality differs from a fixed-quality variant's pinned value
    #[error("Quality must be == {expected}, got {quality}")]
    QualityNotFixed {
        /// The rejected quality
        quality: i32,
        /// The only accepted quality
        expected: i32,
    },

    /// Expiry counter below the lowest accepted value
    #[error("ExpiresIn must be >= {min}, got {expires_in}")]
    ExpiresInOutOfRange {
        /// The rejected expiry counter
        expires_in: i32,
        /// Lowest accepted expiry counter
        min: i32,
    },
}

/// Failure to build an award, carrying the attempted inputs for diagnosis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to create Award - Name: {name}, ExpiresIn: {expires_in}, Quality: {quality}")]
pub struct ConstructionError {
    /// The requested award name
    pub name: String,
    /// The requested expiry counter
    pub expires_in: i32,
    /// The requested quality
    pub quality: i32,
    /// The rule that was broken
    #[source]
    pub source: ValidationError,
}

impl ConstructionError {
    /// Wrap a validation failure with the inputs that caused it
    pub fn new(name: impl Into<String>, expires_in: i32, quality: i32, source: ValidationError) -> Self {
        Self { name: name.into(), expires_in, quality, source }
    }

    /// The underlying validation failure
    pub fn validation_error(&self) -> &ValidationError {
        &self.source
    }
}

/// Result type for award construction
pub type AwardResult<T> = Result<T, ConstructionError>;
