//! Tests for the batch update driver and the simulation runner
//!
//! These tests verify that a catalog advances every award together, keeps its
//! order, and that full runs report the expected days and statistics.

use chrono::NaiveDate;
use provider_quality::types::config::default_award_seeds;
use provider_quality::*;

fn states(catalog: &AwardCatalog) -> Vec<(i32, i32)> {
    catalog.iter().map(|a| (a.expires_in(), a.quality())).collect()
}

/// Test the default catalog after one day
#[test]
fn test_default_catalog_one_day() {
    let mut catalog = AwardCatalog::from_seeds(&default_award_seeds()).unwrap();
    catalog.update_quality();

    assert_eq!(
        states(&catalog),
        vec![(4, 6), (14, 21), (0, 80), (1, 1), (9, 19), (2, 5)]
    );
    assert_eq!(catalog.days_elapsed(), 1);
}

/// Test every award advances by exactly one day per update
#[test]
fn test_update_fans_out_to_every_award() {
    let mut catalog = AwardCatalog::from_seeds(&[
        AwardSeed::new("Blue Compare", 1, 20),
        AwardSeed::new("Blue First", 0, 47),
        AwardSeed::new("Blue Star", 1, 6),
        AwardSeed::new("Top Connected Providers", 3, 6),
    ])
    .unwrap();

    catalog.update_quality();
    assert_eq!(states(&catalog), vec![(0, 23), (-1, 49), (0, 4), (2, 5)]);

    catalog.update_quality();
    assert_eq!(states(&catalog), vec![(-1, 0), (-2, 50), (-1, 0), (1, 4)]);
}

/// Test a catalog matches updating each award on its own
#[test]
fn test_catalog_matches_individual_updates() {
    let seeds = default_award_seeds();
    let mut catalog = AwardCatalog::from_seeds(&seeds).unwrap();
    let mut individual = AwardFactory::from_seeds(&seeds).unwrap();

    for _ in 0..20 {
        catalog.update_quality();
        for award in &mut individual {
            award.update_quality();
        }
        assert_eq!(catalog.awards(), individual.as_slice());
    }
}

/// Test advancing several days at once
#[test]
fn test_advance_days() {
    let mut stepped = AwardCatalog::from_seeds(&default_award_seeds()).unwrap();
    let mut jumped = stepped.clone();

    for _ in 0..7 {
        stepped.update_quality();
    }
    jumped.advance_days(7);

    assert_eq!(stepped, jumped);
    assert_eq!(jumped.days_elapsed(), 7);
}

/// Test an empty catalog updates without effect beyond the day count
#[test]
fn test_empty_catalog() {
    let mut catalog = AwardCatalog::new();
    assert!(catalog.is_empty());

    catalog.update_quality();
    assert!(catalog.is_empty());
    assert_eq!(catalog.days_elapsed(), 1);

    let stats = catalog.statistics();
    assert_eq!(stats.total_awards, 0);
    assert_eq!(stats.average_quality(), 0.0);
}

/// Test a failing seed prevents the catalog from being built
#[test]
fn test_catalog_construction_failure() {
    let err = AwardCatalog::from_seeds(&[
        AwardSeed::new("Blue First", 2, 0),
        AwardSeed::new("Blue Distinction Plus", 0, 40),
    ])
    .unwrap_err();

    assert_eq!(err.name, "Blue Distinction Plus");
    assert_eq!(err.quality, 40);
}

/// Test statistics after the default catalog has run for a while
#[test]
fn test_catalog_statistics() {
    let mut catalog = AwardCatalog::from_seeds(&default_award_seeds()).unwrap();
    catalog.advance_days(4);

    // ACME (1,3), Blue Compare (11,24), BDP (0,80), Blue First (-2,5), Gov (6,16), Top (-1,1)
    let stats = catalog.statistics();
    assert_eq!(stats.total_awards, 6);
    assert_eq!(stats.expired_awards, 2);
    assert_eq!(stats.active_awards(), 4);
    assert_eq!(stats.count_of(AwardKind::Generic), 3);
    assert_eq!(stats.count_of(AwardKind::BlueStar), 0);
    assert_eq!(stats.min_quality, 1);
    assert_eq!(stats.max_quality, 80);
    assert_eq!(stats.total_quality, 129);
    assert_eq!(stats.days_simulated, 4);
    assert!(stats.summary_output().contains("Expired Awards: 2 (33.3%)"));
}

/// Test a full run reports day 0 and every simulated day
#[test]
fn test_simulation_run_reports_each_day() {
    let config = SimulationConfig {
        days: 3,
        start_date: NaiveDate::from_ymd_opt(2024, 2, 28),
        ..Default::default()
    };

    let mut simulation = QualitySimulation::new(config).unwrap();
    let days = simulation.run().unwrap();

    assert_eq!(days.len(), 4);
    let dates: Vec<String> = days.iter().map(|d| d.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]);
    assert_eq!(days[0].awards[3].quality, 0);
    assert_eq!(days[3].awards[3].quality, 4);
    assert!(days[3].awards[3].expired);
}

/// Test a full run writes JSON lines that parse back into snapshots
#[test]
fn test_simulation_json_output() {
    let config = SimulationConfig {
        days: 2,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
        output_format: "json".to_string(),
        awards: vec![AwardSeed::new("Blue Compare", 1, 20)],
    };

    let mut simulation = QualitySimulation::new(config).unwrap();
    let mut output = Vec::new();
    let stats = simulation.run_to_writer(&mut output).unwrap();

    let snapshots: Vec<DaySnapshot> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let qualities: Vec<i32> = snapshots.iter().map(|s| s.awards[0].quality).collect();
    assert_eq!(qualities, vec![20, 23, 0]);
    assert_eq!(stats.expired_awards, 1);
}

/// Test invalid configuration is rejected before any award is built
#[test]
fn test_simulation_rejects_empty_award_list() {
    let config = SimulationConfig {
        awards: Vec::new(),
        ..Default::default()
    };

    let err = QualitySimulation::new(config).unwrap_err();
    assert_eq!(err.category(), "Configuration");
    assert!(err.to_string().contains("Award list must not be empty"));
}

/// Test a start date with no room for the requested days is rejected up front
#[test]
fn test_simulation_rejects_start_date_past_last_day() {
    let config = SimulationConfig {
        days: 1,
        start_date: Some(NaiveDate::MAX),
        ..Default::default()
    };

    let err = QualitySimulation::new(config).unwrap_err();
    assert_eq!(err.category(), "Configuration");
    assert!(err.to_string().contains("past the last supported date"));
}
