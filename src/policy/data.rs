//! Policy data structures and per-variant premium formulas

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assumptions::AssumptionSet;
use crate::error::{ActuarialError, ActuarialResult};

/// Policy variants supported by the pricing engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    /// Level-term life cover
    Life,
}

impl PolicyType {
    /// Discriminator string used in reports and input files
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Life => "Life",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyType {
    type Err = ActuarialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Life" | "life" | "LIFE" => Ok(PolicyType::Life),
            other => Err(ActuarialError::UnknownPolicyType(other.to_string())),
        }
    }
}

/// A single policy to be priced
///
/// Fields are fixed at construction. The calculator reads only the coverage
/// and term accessors, so new variants only need a premium formula here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPolicy")]
pub struct Policy {
    policy_type: PolicyType,

    /// Premium before loading
    base_premium: f64,

    /// Payout on a claim event
    coverage_amount: f64,

    /// Policy term in years
    term_years: u32,
}

impl Policy {
    /// Create a policy of the given variant.
    ///
    /// Rejects a zero term and negative or non-finite amounts.
    pub fn new(
        policy_type: PolicyType,
        base_premium: f64,
        coverage_amount: f64,
        term_years: u32,
    ) -> ActuarialResult<Self> {
        if !base_premium.is_finite() || base_premium < 0.0 {
            return Err(ActuarialError::invalid_policy(format!(
                "base premium must be a non-negative number, got {}",
                base_premium
            )));
        }
        if !coverage_amount.is_finite() || coverage_amount < 0.0 {
            return Err(ActuarialError::invalid_policy(format!(
                "coverage amount must be a non-negative number, got {}",
                coverage_amount
            )));
        }
        if term_years == 0 {
            return Err(ActuarialError::invalid_policy("term must be at least one year"));
        }

        Ok(Self {
            policy_type,
            base_premium,
            coverage_amount,
            term_years,
        })
    }

    /// Create a life policy
    pub fn life(base_premium: f64, coverage_amount: f64, term_years: u32) -> ActuarialResult<Self> {
        Self::new(PolicyType::Life, base_premium, coverage_amount, term_years)
    }

    pub fn policy_type(&self) -> PolicyType {
        self.policy_type
    }

    pub fn base_premium(&self) -> f64 {
        self.base_premium
    }

    pub fn coverage_amount(&self) -> f64 {
        self.coverage_amount
    }

    pub fn term_years(&self) -> u32 {
        self.term_years
    }

    /// Gross (loaded) premium under the given assumptions
    pub fn calculate_premium(&self, assumptions: &AssumptionSet) -> f64 {
        match self.policy_type {
            PolicyType::Life => self.life_premium(assumptions),
        }
    }

    /// Loaded base premium plus a mortality charge on the base premium.
    /// The expected claim on coverage is not part of the result.
    fn life_premium(&self, assumptions: &AssumptionSet) -> f64 {
        let expected_claim = self.coverage_amount * assumptions.mortality_rate();
        let gross_premium = self.base_premium * (1.0 + assumptions.expense_load());
        debug!(
            "life premium: gross={:.6} expected_claim={:.6} (not charged)",
            gross_premium, expected_claim
        );
        gross_premium + self.base_premium * assumptions.mortality_rate()
    }
}

#[derive(Deserialize)]
struct RawPolicy {
    policy_type: PolicyType,
    base_premium: f64,
    coverage_amount: f64,
    term_years: u32,
}

impl TryFrom<RawPolicy> for Policy {
    type Error = ActuarialError;

    fn try_from(raw: RawPolicy) -> Result<Self, Self::Error> {
        Policy::new(raw.policy_type, raw.base_premium, raw.coverage_amount, raw.term_years)
    }
}
