//! Life Premium - actuarial premium engine for level-term life policies
//!
//! This library provides:
//! - Validated flat-rate assumptions (mortality, expense load, interest)
//! - Policy variants with their own loaded-premium formulas
//! - Expected claim, present value of benefits and net premium per year
//! - CSV loading of policy blocks and assumption scenarios
//! - Batch and sensitivity pricing
//! - A prompt-driven pricing session behind a pluggable access gate

pub mod error;
pub mod assumptions;
pub mod policy;
pub mod pricing;
pub mod scenario;
pub mod auth;
pub mod shell;

// Re-export commonly used types
pub use error::{ActuarialError, ActuarialResult};
pub use assumptions::{AssumptionSet, NamedAssumptions};
pub use policy::{Policy, PolicyType, InforcePolicy};
pub use pricing::{ActuarialCalculator, PremiumQuote};
pub use scenario::{price_grid, ScenarioRunner, PricedPolicy, BlockSummary};
pub use auth::{Authenticator, StaticTokenAuthenticator};
