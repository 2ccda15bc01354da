//! Scenario runner for batch and sensitivity pricing
//!
//! Holds a base assumption set and prices single policies, whole inforce
//! blocks, or one policy across many named assumption scenarios.

use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assumptions::{AssumptionSet, NamedAssumptions};
use crate::policy::{InforcePolicy, Policy};
use crate::pricing::{ActuarialCalculator, PremiumQuote};

/// Label given to results priced on the runner's base assumptions
pub const BASE_SCENARIO: &str = "base";

/// Quote for one inforce policy under one named scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedPolicy {
    pub policy_id: u32,
    pub scenario: String,
    pub base_premium: f64,
    pub coverage_amount: f64,
    pub term_years: u32,
    #[serde(flatten)]
    pub quote: PremiumQuote,
}

impl PricedPolicy {
    fn new(inforce: &InforcePolicy, scenario: &str, quote: PremiumQuote) -> Self {
        Self {
            policy_id: inforce.policy_id,
            scenario: scenario.to_string(),
            base_premium: inforce.policy.base_premium(),
            coverage_amount: inforce.policy.coverage_amount(),
            term_years: inforce.policy.term_years(),
            quote,
        }
    }
}

/// Totals across a set of priced policies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub count: usize,
    pub total_coverage: f64,
    pub total_expected_claim: f64,
    pub total_gross_premium: f64,
    pub total_pv_benefits: f64,
    pub total_net_premium: f64,
}

impl BlockSummary {
    pub fn from_priced(priced: &[PricedPolicy]) -> Self {
        priced.iter().fold(Self::default(), |mut acc, p| {
            acc.count += 1;
            acc.total_coverage += p.coverage_amount;
            acc.total_expected_claim += p.quote.expected_claim;
            acc.total_gross_premium += p.quote.gross_premium;
            acc.total_pv_benefits += p.quote.present_value_of_benefits;
            acc.total_net_premium += p.quote.net_premium_per_year;
            acc
        })
    }
}

/// Pre-built pricing runner
///
/// # Example
/// ```
/// use life_premium::{AssumptionSet, Policy, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(AssumptionSet::new(0.002, 0.10, 0.04)?);
/// let quote = runner.run(&Policy::life(100.0, 100_000.0, 20)?);
/// assert!((quote.expected_claim - 200.0).abs() < 1e-9);
/// # Ok::<(), life_premium::ActuarialError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: AssumptionSet,
    calculator: ActuarialCalculator,
}

impl ScenarioRunner {
    pub fn new(base_assumptions: AssumptionSet) -> Self {
        Self {
            base_assumptions,
            calculator: ActuarialCalculator::new(),
        }
    }

    /// Price a single policy on the base assumptions
    pub fn run(&self, policy: &Policy) -> PremiumQuote {
        self.calculator.quote(policy, &self.base_assumptions)
    }

    /// Price a block of policies on the base assumptions, in input order
    pub fn run_batch(&self, policies: &[InforcePolicy]) -> Vec<PricedPolicy> {
        policies
            .par_iter()
            .map(|p| PricedPolicy::new(p, BASE_SCENARIO, self.run(&p.policy)))
            .collect()
    }

    /// Price one policy under each scenario
    pub fn run_scenarios(&self, policy: &Policy, scenarios: &[NamedAssumptions]) -> Vec<(String, PremiumQuote)> {
        scenarios
            .iter()
            .map(|s| (s.name.clone(), self.calculator.quote(policy, &s.assumptions)))
            .collect()
    }

    pub fn assumptions(&self) -> &AssumptionSet {
        &self.base_assumptions
    }
}

/// Price every policy under every scenario, independent of any base set.
///
/// Returns one group per scenario, in scenario order, each group holding
/// the policies in input order.
pub fn price_grid(policies: &[InforcePolicy], scenarios: &[NamedAssumptions]) -> Vec<Vec<PricedPolicy>> {
    info!("pricing {} policies x {} scenarios", policies.len(), scenarios.len());
    let calculator = ActuarialCalculator::new();
    scenarios
        .iter()
        .map(|s| {
            policies
                .par_iter()
                .map(|p| PricedPolicy::new(p, &s.name, calculator.quote(&p.policy, &s.assumptions)))
                .collect()
        })
        .collect()
}
