//! Pricing results for one policy and their text report

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::policy::PolicyType;

/// Decimal places shown in the text report
pub const REPORT_DECIMALS: usize = 2;

/// Every figure produced for a policy under one assumption set
///
/// `Display` renders the labelled report lines, one per figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PremiumQuote {
    pub policy_type: PolicyType,

    /// Coverage amount times mortality rate
    pub expected_claim: f64,

    /// Loaded premium from the policy's own formula
    pub gross_premium: f64,

    /// Annuity-certain factor over the term
    pub annuity_factor: f64,

    pub present_value_of_benefits: f64,

    pub net_premium_per_year: f64,
}

impl fmt::Display for PremiumQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = REPORT_DECIMALS;
        writeln!(f, "Policy Type: {}", self.policy_type)?;
        writeln!(f, "Expected Claim: {}", format_fixed(self.expected_claim, d))?;
        writeln!(f, "Gross/Loaded Premium: {}", format_fixed(self.gross_premium, d))?;
        writeln!(f, "PV of Benefits: {}", format_fixed(self.present_value_of_benefits, d))?;
        writeln!(f, "Net Premium / Year: {}", format_fixed(self.net_premium_per_year, d))
    }
}

/// Fixed-point text with `decimals` places, rounding half-up on the
/// shortest decimal form of `value` (so 1.005 prints as 1.01, not 1.00).
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // f64 Display is the shortest round-trip form and never uses an exponent
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();

    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&b| b >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&String::from_utf8_lossy(&digits[..split]));
    if decimals > 0 {
        out.push('.');
        out.push_str(&String::from_utf8_lossy(&digits[split..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quote() -> PremiumQuote {
        PremiumQuote {
            policy_type: PolicyType::Life,
            expected_claim: 200.0,
            gross_premium: 110.2,
            annuity_factor: 13.590326,
            present_value_of_benefits: 2718.0652,
            net_premium_per_year: 135.90326,
        }
    }

    #[test]
    fn test_report_lines() {
        let report = sample_quote().to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Policy Type: Life",
                "Expected Claim: 200.00",
                "Gross/Loaded Premium: 110.20",
                "PV of Benefits: 2718.07",
                "Net Premium / Year: 135.90",
            ]
        );
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_format_fixed_half_up() {
        // 1.005 is stored slightly below 1.005; rounding follows the decimal form
        assert_eq!(format_fixed(1.005, 2), "1.01");
        assert_eq!(format_fixed(2.675, 2), "2.68");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(1.004, 2), "1.00");
    }

    #[test]
    fn test_format_fixed_padding_and_carry() {
        assert_eq!(format_fixed(200.0, 2), "200.00");
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(9.995, 2), "10.00");
        assert_eq!(format_fixed(99.999, 2), "100.00");
        assert_eq!(format_fixed(1234567.891, 2), "1234567.89");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_format_fixed_sign_and_special() {
        assert_eq!(format_fixed(-1.005, 2), "-1.01");
        assert_eq!(format_fixed(-3.14159, 2), "-3.14");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_quote()).unwrap();
        assert_eq!(json["policy_type"], "Life");
        assert_eq!(json["expected_claim"], 200.0);
    }
}
