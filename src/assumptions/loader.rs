//! CSV-based assumption loader
//!
//! Reads named assumption scenarios, one per row:
//! `Scenario,MortalityRate,ExpenseLoad,InterestRate`
//!
//! Loading stops at the first invalid row; scenario names must be unique.

use std::collections::HashSet;
use std::path::Path;

use csv::Reader;
use log::debug;

use super::{AssumptionSet, NamedAssumptions};
use crate::error::{ActuarialError, ActuarialResult};

/// Default path to the sample assumption scenarios
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumption_sets.csv";

/// Raw CSV row matching assumption_sets.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "MortalityRate")]
    mortality_rate: f64,
    #[serde(rename = "ExpenseLoad")]
    expense_load: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
}

impl CsvRow {
    fn into_named(self) -> ActuarialResult<NamedAssumptions> {
        let assumptions = AssumptionSet::new(self.mortality_rate, self.expense_load, self.interest_rate)?;
        Ok(NamedAssumptions {
            name: self.scenario,
            assumptions,
        })
    }
}

/// Load all assumption scenarios from a CSV file
pub fn load_assumption_sets<P: AsRef<Path>>(path: P) -> ActuarialResult<Vec<NamedAssumptions>> {
    let path = path.as_ref();
    debug!("loading assumption sets from {}", path.display());
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load assumption scenarios from any reader (e.g., string buffer)
pub fn load_assumption_sets_from_reader<R: std::io::Read>(reader: R) -> ActuarialResult<Vec<NamedAssumptions>> {
    collect_rows(Reader::from_reader(reader))
}

/// Load the sample scenarios shipped under data/
pub fn load_default_assumption_sets() -> ActuarialResult<Vec<NamedAssumptions>> {
    load_assumption_sets(DEFAULT_ASSUMPTIONS_PATH)
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> ActuarialResult<Vec<NamedAssumptions>> {
    let mut sets = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        if !seen.insert(row.scenario.clone()) {
            return Err(ActuarialError::InvalidInput(format!(
                "duplicate scenario name '{}'",
                row.scenario
            )));
        }
        sets.push(row.into_named()?);
    }

    Ok(sets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_reader() {
        let data = "Scenario,MortalityRate,ExpenseLoad,InterestRate\n\
                    base,0.002,0.10,0.04\n\
                    no_load,0.002,0.0,0.04\n";
        let sets = load_assumption_sets_from_reader(data.as_bytes()).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].name, "base");
        assert_eq!(sets[1].assumptions.expense_load(), 0.0);
    }

    #[test]
    fn test_invalid_row_fails_load() {
        let data = "Scenario,MortalityRate,ExpenseLoad,InterestRate\n\
                    zero_rate,0.002,0.10,0.0\n";
        let err = load_assumption_sets_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ActuarialError::InvalidAssumption { .. }));
    }

    #[test]
    fn test_mixed_file_fails_on_first_bad_row() {
        let data = "Scenario,MortalityRate,ExpenseLoad,InterestRate\n\
                    base,0.002,0.10,0.04\n\
                    negative_load,0.002,-0.10,0.04\n\
                    high_rate,0.002,0.10,0.06\n";
        let err = load_assumption_sets_from_reader(data.as_bytes()).unwrap_err();
        match err {
            ActuarialError::InvalidAssumption { expense_load, .. } => assert_eq!(expense_load, -0.10),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_scenario_rejected() {
        let data = "Scenario,MortalityRate,ExpenseLoad,InterestRate\n\
                    base,0.002,0.10,0.04\n\
                    base,0.003,0.10,0.04\n";
        let err = load_assumption_sets_from_reader(data.as_bytes()).unwrap_err();
        match err {
            ActuarialError::InvalidInput(msg) => assert_eq!(msg, "duplicate scenario name 'base'"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_malformed_number_is_csv_error() {
        let data = "Scenario,MortalityRate,ExpenseLoad,InterestRate\n\
                    bad,abc,0.10,0.04\n";
        let err = load_assumption_sets_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ActuarialError::Csv(_)));
    }

    #[test]
    fn test_load_default_assumption_sets() {
        let sets = load_default_assumption_sets().expect("Failed to load assumption sets");
        assert!(!sets.is_empty());
        assert_eq!(sets[0].name, "base");
        assert!((sets[0].assumptions.interest_rate() - 0.04).abs() < 1e-12);
    }
}
