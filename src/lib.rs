//! Provider Quality
//!
//! A rule engine for provider-quality awards whose quality score and expiry
//! countdown change once per simulated day.
//!
//! # Overview
//!
//! Each award belongs to one rule variant. Generic awards lose quality every
//! day and twice as fast once expired; Blue Compare awards gain quality faster
//! as expiry approaches and drop to zero once expired; Blue First awards only
//! ever gain; Blue Star awards decay at double the generic rate; and Blue
//! Distinction Plus awards never change.
//!
//! ## Key Features
//!
//! - **Validated Construction**: awards are built by name through a factory
//!   that rejects blank names and out-of-range values
//! - **Pure Daily Rules**: one function per variant, dispatched by pattern match
//! - **Batch Updates**: a catalog advances every award one day per call
//! - **Reports**: per-day snapshots in text or JSON, plus summary statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use provider_quality::*;
//!
//! let mut catalog = AwardCatalog::from_seeds(&[
//!     AwardSeed::new("Top Connected Providers", 3, 6),
//!     AwardSeed::new("Blue First", 0, 47),
//! ])?;
//!
//! catalog.update_quality();
//!
//! let qualities: Vec<i32> = catalog.iter().map(|a| a.quality()).collect();
//! assert_eq!(qualities, vec![5, 49]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Rule variants, quality bounds, and configuration
//! - [`award`]: Award records, daily rules, and the factory
//! - [`simulation`]: Batch driver, runner, statistics, and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │    Award    │    │ Simulation  │
//! │             │    │             │    │             │
//! │ AwardKind   │◄───┤ Factory     │◄───┤ Catalog     │
//! │ Bounds      │    │ Rules       │    │ Runner      │
//! │ Config      │    │ Errors      │    │ Statistics  │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod award;
pub mod simulation;
pub mod types;

// Core types and configuration
pub use types::{
    AwardKind, ConfigValidationError, OutputFormat, QualityRate, SimulationConfig,
    BLUE_DISTINCTION_PLUS_QUALITY, MAX_QUALITY, MIN_QUALITY,
};

// Awards and construction
pub use award::{Award, AwardFactory, AwardSeed, AwardState, ConstructionError, ValidationError};

// Simulation types and functionality
pub use simulation::{
    AwardCatalog, CatalogStatistics, DaySnapshot, LoggingConfig, QualitySimulation,
    SimulationError, SimulationResult,
};
