//! Load policies from a CSV inforce file
//!
//! Loading stops at the first row that fails to parse or validate.

use std::path::Path;

use csv::Reader;
use log::debug;
use serde::Serialize;

use super::{Policy, PolicyType};
use crate::error::ActuarialResult;

/// Default path to the sample inforce file
pub const DEFAULT_POLICIES_PATH: &str = "data/policies.csv";

/// A policy together with its identifier from the inforce file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InforcePolicy {
    pub policy_id: u32,
    pub policy: Policy,
}

/// Raw CSV row matching policies.csv columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PolicyID")]
    policy_id: u32,
    #[serde(rename = "PolicyType")]
    policy_type: String,
    #[serde(rename = "BasePremium")]
    base_premium: f64,
    #[serde(rename = "CoverageAmount")]
    coverage_amount: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
}

impl CsvRow {
    fn to_policy(self) -> ActuarialResult<InforcePolicy> {
        let policy_type: PolicyType = self.policy_type.parse()?;
        let policy = Policy::new(policy_type, self.base_premium, self.coverage_amount, self.term_years)?;

        Ok(InforcePolicy {
            policy_id: self.policy_id,
            policy,
        })
    }
}

/// Load all policies from a CSV file
pub fn load_policies<P: AsRef<Path>>(path: P) -> ActuarialResult<Vec<InforcePolicy>> {
    let path = path.as_ref();
    debug!("loading policies from {}", path.display());
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load policies from any reader (e.g., string buffer, network stream)
pub fn load_policies_from_reader<R: std::io::Read>(reader: R) -> ActuarialResult<Vec<InforcePolicy>> {
    collect_rows(Reader::from_reader(reader))
}

/// Load policies from the default data/policies.csv location
pub fn load_default_inforce() -> ActuarialResult<Vec<InforcePolicy>> {
    load_policies(DEFAULT_POLICIES_PATH)
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> ActuarialResult<Vec<InforcePolicy>> {
    let mut policies = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        policies.push(row.to_policy()?);
    }

    Ok(policies)
}
