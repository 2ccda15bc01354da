//! Pricing assumptions: mortality rate, expense load and interest rate

mod set;
pub mod loader;

pub use set::AssumptionSet;
pub use loader::{load_assumption_sets, load_assumption_sets_from_reader, load_default_assumption_sets};

use serde::{Deserialize, Serialize};

/// An assumption set tagged with a scenario label for sensitivity runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedAssumptions {
    pub name: String,
    pub assumptions: AssumptionSet,
}

impl NamedAssumptions {
    pub fn new(name: impl Into<String>, assumptions: AssumptionSet) -> Self {
        Self {
            name: name.into(),
            assumptions,
        }
    }
}
