//! Core types and configuration for the award quality simulator
//!
//! This module contains the award rule variants, quality bounds, and the
//! configuration structures used by the simulation and the command line tool.
//!
//! # Overview
//!
//! - **Enums**: rule variants, quality rates and output formats
//! - **Constants**: quality bounds, the pinned Blue Distinction Plus quality,
//!   and the name lookup table
//! - **Configuration**: simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use provider_quality::types::*;
//!
//! assert_eq!(AwardKind::from_name("gov quality plus"), Some(AwardKind::Generic));
//!
//! let config = SimulationConfig {
//!     days: 7,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
