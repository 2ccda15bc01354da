//! Flat-rate pricing assumptions

use serde::{Deserialize, Serialize};

use crate::error::{ActuarialError, ActuarialResult};

/// Validated mortality, expense and interest assumptions
///
/// Only obtainable through [`AssumptionSet::new`], so every instance satisfies
/// `mortality_rate >= 0`, `expense_load >= 0` and `interest_rate > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAssumptionSet")]
pub struct AssumptionSet {
    /// Probability of the insured event in the period (qx)
    mortality_rate: f64,

    /// Proportional load for administrative cost
    expense_load: f64,

    /// Valuation interest rate per period (i)
    interest_rate: f64,
}

impl AssumptionSet {
    /// Build an assumption set, rejecting negative rates or loads and a
    /// non-positive interest rate. Zero mortality and zero load are allowed.
    pub fn new(mortality_rate: f64, expense_load: f64, interest_rate: f64) -> ActuarialResult<Self> {
        let finite = mortality_rate.is_finite() && expense_load.is_finite() && interest_rate.is_finite();
        if !finite || mortality_rate < 0.0 || expense_load < 0.0 || interest_rate <= 0.0 {
            return Err(ActuarialError::InvalidAssumption {
                mortality_rate,
                expense_load,
                interest_rate,
            });
        }

        Ok(Self {
            mortality_rate,
            expense_load,
            interest_rate,
        })
    }

    pub fn mortality_rate(&self) -> f64 {
        self.mortality_rate
    }

    pub fn expense_load(&self) -> f64 {
        self.expense_load
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }
}

/// Unchecked wire shape; deserialization funnels through `AssumptionSet::new`
#[derive(Deserialize)]
struct RawAssumptionSet {
    mortality_rate: f64,
    expense_load: f64,
    interest_rate: f64,
}

impl TryFrom<RawAssumptionSet> for AssumptionSet {
    type Error = ActuarialError;

    fn try_from(raw: RawAssumptionSet) -> Result<Self, Self::Error> {
        AssumptionSet::new(raw.mortality_rate, raw.expense_load, raw.interest_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_assumptions() {
        let a = AssumptionSet::new(0.002, 0.10, 0.04).unwrap();
        assert_eq!(a.mortality_rate(), 0.002);
        assert_eq!(a.expense_load(), 0.10);
        assert_eq!(a.interest_rate(), 0.04);
    }

    #[test]
    fn test_zero_mortality_and_load_allowed() {
        assert!(AssumptionSet::new(0.0, 0.10, 0.04).is_ok());
        assert!(AssumptionSet::new(0.002, 0.0, 0.04).is_ok());
        assert!(AssumptionSet::new(0.0, 0.0, 0.04).is_ok());
    }

    #[test]
    fn test_zero_interest_rejected() {
        let err = AssumptionSet::new(0.002, 0.10, 0.0).unwrap_err();
        assert!(matches!(err, ActuarialError::InvalidAssumption { .. }));
    }

    #[test]
    fn test_negative_values_rejected() {
        assert!(AssumptionSet::new(-0.001, 0.10, 0.04).is_err());
        assert!(AssumptionSet::new(0.002, -0.10, 0.04).is_err());
        assert!(AssumptionSet::new(0.002, 0.10, -0.04).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(AssumptionSet::new(f64::NAN, 0.10, 0.04).is_err());
        assert!(AssumptionSet::new(0.002, f64::INFINITY, 0.04).is_err());
        assert!(AssumptionSet::new(0.002, 0.10, f64::NAN).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: AssumptionSet = serde_json::from_str(
            r#"{"mortality_rate":0.002,"expense_load":0.1,"interest_rate":0.04}"#,
        )
        .unwrap();
        assert_eq!(ok.interest_rate(), 0.04);

        let bad = serde_json::from_str::<AssumptionSet>(
            r#"{"mortality_rate":0.002,"expense_load":0.1,"interest_rate":0.0}"#,
        );
        assert!(bad.is_err());
    }
}
