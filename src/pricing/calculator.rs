//! Stateless premium math over a policy and an assumption set

use log::debug;

use super::discount;
use super::quote::PremiumQuote;
use crate::assumptions::AssumptionSet;
use crate::policy::Policy;

/// Expected claim, present value of benefits and net premium
///
/// Reads only the coverage amount and term of the policy, so it is
/// independent of the variant's own premium formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActuarialCalculator;

impl ActuarialCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Coverage amount times the mortality rate
    pub fn expected_claim(&self, policy: &Policy, assumptions: &AssumptionSet) -> f64 {
        policy.coverage_amount() * assumptions.mortality_rate()
    }

    /// Annuity-certain factor at the assumption interest rate over the policy term
    pub fn annuity_factor(&self, policy: &Policy, assumptions: &AssumptionSet) -> f64 {
        discount::annuity_factor(assumptions.interest_rate(), policy.term_years())
    }

    /// Expected claim paid each year of the term, discounted to issue
    pub fn present_value_of_benefits(&self, policy: &Policy, assumptions: &AssumptionSet) -> f64 {
        let claim = self.expected_claim(policy, assumptions);
        let pv = discount::pv_level_stream(claim, assumptions.interest_rate(), policy.term_years());
        debug!(
            "pv of benefits: claim={:.6} i={} n={} pv={:.6}",
            claim,
            assumptions.interest_rate(),
            policy.term_years(),
            pv
        );
        pv
    }

    /// Present value of benefits spread evenly over the term.
    ///
    /// Never divides by zero: `Policy::new` rejects a zero term and
    /// `term_years` is unsigned, so the divisor is at least 1.
    pub fn net_premium_per_year(&self, policy: &Policy, assumptions: &AssumptionSet) -> f64 {
        self.present_value_of_benefits(policy, assumptions) / policy.term_years() as f64
    }

    /// All pricing outputs for one policy under one assumption set
    pub fn quote(&self, policy: &Policy, assumptions: &AssumptionSet) -> PremiumQuote {
        PremiumQuote {
            policy_type: policy.policy_type(),
            expected_claim: self.expected_claim(policy, assumptions),
            gross_premium: policy.calculate_premium(assumptions),
            annuity_factor: self.annuity_factor(policy, assumptions),
            present_value_of_benefits: self.present_value_of_benefits(policy, assumptions),
            net_premium_per_year: self.net_premium_per_year(policy, assumptions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyType;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_policy() -> Policy {
        Policy::life(100.0, 100_000.0, 20).unwrap()
    }

    fn reference_assumptions() -> AssumptionSet {
        AssumptionSet::new(0.002, 0.10, 0.04).unwrap()
    }

    #[test]
    fn test_reference_scenario() {
        let calc = ActuarialCalculator::new();
        let policy = reference_policy();
        let a = reference_assumptions();

        assert_abs_diff_eq!(calc.expected_claim(&policy, &a), 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(policy.calculate_premium(&a), 110.2, epsilon = 1e-9);
        assert_abs_diff_eq!(calc.annuity_factor(&policy, &a), 13.5903, epsilon = 1e-4);
        assert_abs_diff_eq!(calc.present_value_of_benefits(&policy, &a), 2718.07, epsilon = 0.02);
        assert_abs_diff_eq!(calc.net_premium_per_year(&policy, &a), 135.90, epsilon = 0.01);
    }

    #[test]
    fn test_pv_is_claim_times_factor() {
        let calc = ActuarialCalculator::new();
        let policy = reference_policy();
        let a = reference_assumptions();

        let expected = calc.expected_claim(&policy, &a) * calc.annuity_factor(&policy, &a);
        assert_relative_eq!(calc.present_value_of_benefits(&policy, &a), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let calc = ActuarialCalculator::new();
        let policy = reference_policy();
        let a = reference_assumptions();

        let first = calc.quote(&policy, &a);
        for _ in 0..10 {
            let again = calc.quote(&policy, &a);
            assert_eq!(first.present_value_of_benefits.to_bits(), again.present_value_of_benefits.to_bits());
            assert_eq!(first.net_premium_per_year.to_bits(), again.net_premium_per_year.to_bits());
            assert_eq!(first.gross_premium.to_bits(), again.gross_premium.to_bits());
            assert_eq!(first.expected_claim.to_bits(), again.expected_claim.to_bits());
        }
    }

    #[test]
    fn test_monotone_in_coverage() {
        let calc = ActuarialCalculator::new();
        let a = reference_assumptions();

        let mut last_claim = f64::NEG_INFINITY;
        let mut last_pv = f64::NEG_INFINITY;
        for coverage in [1_000.0, 50_000.0, 100_000.0, 250_000.0, 1_000_000.0] {
            let policy = Policy::life(100.0, coverage, 20).unwrap();
            let claim = calc.expected_claim(&policy, &a);
            let pv = calc.present_value_of_benefits(&policy, &a);
            assert!(claim > last_claim);
            assert!(pv > last_pv);
            last_claim = claim;
            last_pv = pv;
        }
    }

    #[test]
    fn test_small_interest_factor_approaches_term() {
        let calc = ActuarialCalculator::new();
        let policy = reference_policy();
        let a = AssumptionSet::new(0.002, 0.10, 1e-9).unwrap();

        let factor = calc.annuity_factor(&policy, &a);
        assert!((factor - 20.0).abs() < 1e-3, "got {}", factor);
        // Undiscounted: net premium tends to the expected claim
        assert!((calc.net_premium_per_year(&policy, &a) - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_one_year_term() {
        let calc = ActuarialCalculator::new();
        let policy = Policy::life(100.0, 100_000.0, 1).unwrap();
        let a = reference_assumptions();

        let pv = calc.present_value_of_benefits(&policy, &a);
        assert_relative_eq!(pv, 200.0 / 1.04, max_relative = 1e-12);
        assert_relative_eq!(calc.net_premium_per_year(&policy, &a), pv, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_mortality_gives_zero_benefits() {
        let calc = ActuarialCalculator::new();
        let policy = reference_policy();
        let a = AssumptionSet::new(0.0, 0.10, 0.04).unwrap();

        assert_eq!(calc.expected_claim(&policy, &a), 0.0);
        assert_eq!(calc.present_value_of_benefits(&policy, &a), 0.0);
        assert_eq!(calc.net_premium_per_year(&policy, &a), 0.0);
        assert_abs_diff_eq!(policy.calculate_premium(&a), 110.0, epsilon = 1e-9);
    }

    #[test]
    fn test_quote_fields() {
        let calc = ActuarialCalculator::new();
        let quote = calc.quote(&reference_policy(), &reference_assumptions());
        assert_eq!(quote.policy_type, PolicyType::Life);
        assert_abs_diff_eq!(quote.expected_claim, 200.0, epsilon = 1e-9);
        assert_abs_diff_eq!(quote.gross_premium, 110.2, epsilon = 1e-9);
    }
}
