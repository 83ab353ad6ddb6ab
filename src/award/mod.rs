//! Award records, daily rules and construction
//!
//! This module contains the award record, the per-variant daily quality rules,
//! the factory that builds validated awards, and their error types.
//!
//! # Overview
//!
//! - **Award**: name, rule variant, current state and creation snapshot
//! - **Rules**: one pure function per variant mapping a day's state to the next
//! - **AwardFactory**: case-insensitive name lookup with an "Unknown" fallback
//! - **Errors**: validation failures wrapped with the inputs that caused them
//!
//! # Usage Example
//!
//! ```rust
//! use provider_quality::award::*;
//!
//! let mut award = AwardFactory::get("Blue Compare", 1, 20).unwrap();
//! award.update_quality();
//! assert_eq!(award.quality(), 23);
//! award.update_quality();
//! assert_eq!(award.quality(), 0);
//! assert!(award.is_expired());
//! ```

#[allow(clippy::module_inception)]
pub mod award;
pub mod error;
pub mod factory;
pub mod rules;

// Re-export all public types for convenience
pub use award::*;
pub use error::*;
pub use factory::*;
pub use rules::*;
