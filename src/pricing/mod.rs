//! Premium calculation engine
//!
//! - Present value helpers for level annuities-certain
//! - `ActuarialCalculator`: expected claim, PV of benefits, net premium
//! - `PremiumQuote`: the combined result and its text report

pub mod discount;
mod calculator;
mod quote;

pub use calculator::ActuarialCalculator;
pub use quote::{format_fixed, PremiumQuote, REPORT_DECIMALS};
