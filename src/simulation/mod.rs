//! Simulation orchestration and control
//!
//! This module contains the batch update driver, the day-by-day runner,
//! statistics, logging setup, and error handling.
//!
//! # Overview
//!
//! - **AwardCatalog**: ordered awards advanced together, one day per call
//! - **QualitySimulation**: builds a catalog from configuration and runs it
//! - **CatalogStatistics**: expiry and quality summary of a catalog
//! - **LoggingConfig**: tracing subscriber setup
//! - **SimulationError**: errors surfaced while setting up or running
//!
//! # Usage Example
//!
//! ```rust
//! use provider_quality::simulation::*;
//! use provider_quality::types::*;
//!
//! let config = SimulationConfig {
//!     days: 3,
//!     ..Default::default()
//! };
//!
//! let mut simulation = QualitySimulation::new(config).unwrap();
//! let days = simulation.run().unwrap();
//! assert_eq!(days.len(), 4);
//! assert_eq!(simulation.catalog().statistics().days_simulated, 3);
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod runner;
pub mod statistics;

// Re-export all public types for convenience
pub use catalog::*;
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use statistics::*;
