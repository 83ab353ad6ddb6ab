//! Enumeration types for the award rule engine
//!
//! This module contains the award rule variants, the quality rates used by the
//! rules, and the report output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest quality any ranged award may hold
pub const MIN_QUALITY: i32 = 0;

/// Highest quality any ranged award may hold
pub const MAX_QUALITY: i32 = 50;

/// The pinned quality of a Blue Distinction Plus award
pub const BLUE_DISTINCTION_PLUS_QUALITY: i32 = 80;

/// Lowest `expires_in` accepted at construction
pub const MIN_EXPIRES_IN: i32 = -1;

/// Name given to awards whose requested name matches no known variant
pub const UNKNOWN_AWARD_NAME: &str = "Unknown";

/// Canonical lowercase award names and the rule variant each one selects
pub const AWARD_NAME_TABLE: &[(&str, AwardKind)] = &[
    ("acme partner facility", AwardKind::Generic),
    ("gov quality plus", AwardKind::Generic),
    ("top connected providers", AwardKind::Generic),
    ("blue compare", AwardKind::BlueCompare),
    ("blue distinction plus", AwardKind::BlueDistinctionPlus),
    ("blue first", AwardKind::BlueFirst),
    ("blue star", AwardKind::BlueStar),
];

/// Rule variants that decide how an award evolves each day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AwardKind {
    /// Loses 1 quality per day, 2 once expired
    Generic,
    /// Appreciates faster as expiry approaches, drops to 0 once expired
    BlueCompare,
    /// Never changes; quality is pinned to 80
    BlueDistinctionPlus,
    /// Gains 1 quality per day, 2 on the day it expires
    BlueFirst,
    /// Generic rule at double rate
    BlueStar,
}

impl AwardKind {
    /// All variants in declaration order
    pub const ALL: [AwardKind; 5] = [
        AwardKind::Generic,
        AwardKind::BlueCompare,
        AwardKind::BlueDistinctionPlus,
        AwardKind::BlueFirst,
        AwardKind::BlueStar,
    ];

    /// Resolve a variant from an award name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        AWARD_NAME_TABLE
            .iter()
            .find(|(canonical, _)| *canonical == key)
            .map(|(_, kind)| *kind)
    }

    /// Whether this variant holds a fixed quality instead of a ranged one
    pub fn has_fixed_quality(&self) -> bool {
        matches!(self, AwardKind::BlueDistinctionPlus)
    }
}

impl fmt::Display for AwardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardKind::Generic => write!(f, "Generic"),
            AwardKind::BlueCompare => write!(f, "Blue Compare"),
            AwardKind::BlueDistinctionPlus => write!(f, "Blue Distinction Plus"),
            AwardKind::BlueFirst => write!(f, "Blue First"),
            AwardKind::BlueStar => write!(f, "Blue Star"),
        }
    }
}

impl FromStr for AwardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "generic" => Ok(AwardKind::Generic),
            "bluecompare" => Ok(AwardKind::BlueCompare),
            "bluedistinctionplus" => Ok(AwardKind::BlueDistinctionPlus),
            "bluefirst" => Ok(AwardKind::BlueFirst),
            "bluestar" => Ok(AwardKind::BlueStar),
            _ => AwardKind::from_name(s).ok_or_else(|| format!("Unknown award kind: {}", s)),
        }
    }
}

/// Multiplier applied to a single day's quality change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityRate {
    /// One point per day
    Single = 1,
    /// Two points per day
    Double = 2,
    /// Three points per day
    Triple = 3,
}

impl QualityRate {
    /// The number of quality points this rate represents
    pub fn points(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for QualityRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualityRate::Single => write!(f, "x1"),
            QualityRate::Double => write!(f, "x2"),
            QualityRate::Triple => write!(f, "x3"),
        }
    }
}

/// Output formats for daily reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable table lines
    Text,
    /// One JSON document per simulated day
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" | "jsonl" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
