//! Day-by-day simulation runner
//!
//! [`QualitySimulation`] builds a catalog from a [`SimulationConfig`], applies
//! one daily update per simulated day, and hands each day's state to a sink as
//! a serializable [`DaySnapshot`].

use crate::award::Award;
use crate::simulation::{AwardCatalog, CatalogStatistics, SimulationError, SimulationResult};
use crate::types::{AwardKind, OutputFormat, SimulationConfig};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::{debug, info, instrument};

/// One award's state on a given day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardSnapshot {
    /// Award name
    pub name: String,
    /// Rule variant
    pub kind: AwardKind,
    /// Quality on this day
    pub quality: i32,
    /// Remaining days on this day
    pub expires_in: i32,
    /// Whether the award had expired on this day
    pub expired: bool,
}

impl From<&Award> for AwardSnapshot {
    fn from(award: &Award) -> Self {
        Self {
            name: award.name().to_string(),
            kind: award.kind(),
            quality: award.quality(),
            expires_in: award.expires_in(),
            expired: award.is_expired(),
        }
    }
}

/// Every award's state at the end of one simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    /// Days elapsed; 0 is the state before any update
    pub day: usize,
    /// Calendar date of this day
    pub date: NaiveDate,
    /// Award states in catalog order
    pub awards: Vec<AwardSnapshot>,
}

impl DaySnapshot {
    /// Capture a catalog's current state
    ///
    /// # Errors
    /// Fails when the day's date falls past the last representable date.
    pub fn capture(catalog: &AwardCatalog, start_date: NaiveDate) -> SimulationResult<Self> {
        let day = catalog.days_elapsed();
        let date = start_date.checked_add_days(Days::new(day as u64)).ok_or_else(|| {
            SimulationError::configuration_error(format!(
                "day {} after {} is past the last supported date",
                day, start_date
            ))
        })?;

        Ok(Self {
            day,
            date,
            awards: catalog.iter().map(AwardSnapshot::from).collect(),
        })
    }

    /// Write this snapshot in the requested format
    pub fn write_to<W: Write>(&self, writer: &mut W, format: OutputFormat) -> SimulationResult<()> {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, self)?;
                writeln!(writer)?;
            }
            OutputFormat::Text => {
                writeln!(writer, "-------- day {} ({}) --------", self.day, self.date)?;
                writeln!(writer, "name, expiresIn, quality")?;
                for award in &self.awards {
                    writeln!(writer, "{}, {}, {}", award.name, award.expires_in, award.quality)?;
                }
                writeln!(writer)?;
            }
        }
        Ok(())
    }
}

/// Runs a configured catalog for a number of simulated days
#[derive(Debug, Clone)]
pub struct QualitySimulation {
    /// Configuration for the run
    config: SimulationConfig,
    /// Date of day 0
    start_date: NaiveDate,
    /// Awards being simulated
    catalog: AwardCatalog,
}

impl QualitySimulation {
    /// Validate `config` and build its awards
    ///
    /// # Errors
    /// Fails on invalid configuration or on the first award that cannot be built.
    #[instrument(skip(config), fields(days = config.days, award_count = config.awards.len()))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let catalog = AwardCatalog::from_seeds(&config.awards)?;
        let start_date = config.effective_start_date();

        info!(
            "Initialized simulation of {} awards for {} days starting {}",
            catalog.len(),
            config.days,
            start_date
        );

        Ok(Self { config, start_date, catalog })
    }

    /// The awards being simulated
    pub fn catalog(&self) -> &AwardCatalog {
        &self.catalog
    }

    /// The run's configuration
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Date of day 0
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// The catalog's current state
    pub fn snapshot(&self) -> SimulationResult<DaySnapshot> {
        DaySnapshot::capture(&self.catalog, self.start_date)
    }

    /// Apply one daily update and return the resulting state
    pub fn step(&mut self) -> SimulationResult<DaySnapshot> {
        self.catalog.update_quality();
        self.snapshot()
    }

    /// Run the remaining configured days, passing day 0 and every following day to `sink`
    ///
    /// # Errors
    /// Stops at the first error returned by `sink`.
    #[instrument(skip(self, sink), fields(days = self.config.days))]
    pub fn run_with<F>(&mut self, mut sink: F) -> SimulationResult<CatalogStatistics>
    where
        F: FnMut(&DaySnapshot) -> SimulationResult<()>,
    {
        if self.catalog.days_elapsed() == 0 {
            sink(&self.snapshot()?)?;
        }

        while self.catalog.days_elapsed() < self.config.days {
            let snapshot = self.step()?;
            debug!("Simulated day {} ({})", snapshot.day, snapshot.date);
            sink(&snapshot)?;
        }

        let statistics = self.catalog.statistics();
        info!("Simulation finished: {}", statistics);
        Ok(statistics)
    }

    /// Run the remaining configured days, collecting every snapshot
    pub fn run(&mut self) -> SimulationResult<Vec<DaySnapshot>> {
        let mut snapshots = Vec::with_capacity(self.config.days + 1);
        self.run_with(|snapshot| {
            snapshots.push(snapshot.clone());
            Ok(())
        })?;
        Ok(snapshots)
    }

    /// Run the remaining configured days, writing each day to `writer`
    pub fn run_to_writer<W: Write>(&mut self, writer: &mut W) -> SimulationResult<CatalogStatistics> {
        let format = self
            .config
            .get_output_format()
            .map_err(SimulationError::ConfigurationError)?;
        self.run_with(|snapshot| snapshot.write_to(&mut *writer, format))
    }
}
