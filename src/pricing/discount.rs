//! Discounting helpers for present value calculations
//!
//! All rates are effective per period; terms are whole periods.

/// Present value of 1 due at the end of `periods` periods: (1 + i)^-n
pub fn discount_to_period(interest_rate: f64, periods: u32) -> f64 {
    (1.0 + interest_rate).powf(-(periods as f64))
}

/// Present value of 1 per period paid in arrears for `periods` periods
///
/// `a_n = (1 - (1 + i)^-n) / i`. Callers guarantee `i > 0`.
pub fn annuity_factor(interest_rate: f64, periods: u32) -> f64 {
    (1.0 - discount_to_period(interest_rate, periods)) / interest_rate
}

/// Present value of a level payment stream in arrears
pub fn pv_level_stream(amount: f64, interest_rate: f64, periods: u32) -> f64 {
    amount * annuity_factor(interest_rate, periods)
}
