/// Display formatting for pool figures
///
/// Percentages follow the en-US percent style: at most two fraction digits,
/// trailing zeros dropped, thousands grouped. Rounding is half away from zero
/// on the shortest decimal form of the value, so `0.00125` renders `"0.13%"`.
use std::str::FromStr;

use bigdecimal::num_bigint::{ BigInt, BigUint, Sign };
use bigdecimal::{ BigDecimal, RoundingMode };

use crate::pools::constants::ABSENT_LABEL;
use crate::pools::types::Commission;

const PERCENT_FRACTION_DIGITS: i64 = 2;

/// Format a ratio as a percentage, `0.0123` → `"1.23%"`
pub fn format_percent(ratio: f64) -> String {
    if ratio.is_nan() {
        return "NaN%".to_string();
    }
    if ratio.is_infinite() {
        return if ratio > 0.0 { "∞%".to_string() } else { "-∞%".to_string() };
    }

    // Rust prints finite f64 without exponent, so this always parses
    let value = match BigDecimal::from_str(&ratio.to_string()) {
        Ok(value) => value,
        Err(_) => {
            return "NaN%".to_string();
        }
    };
    let percent = (value * BigDecimal::from(100)).with_scale_round(
        PERCENT_FRACTION_DIGITS,
        RoundingMode::HalfUp
    );
    format!("{}%", render_decimal(&percent, PERCENT_FRACTION_DIGITS, true))
}

/// Format a base-unit token amount with `decimals` decimals
///
/// Always shows `fraction_digits` digits, e.g. `"1,234.50"`.
pub fn format_token_amount(amount: &BigUint, decimals: u32, fraction_digits: u32) -> String {
    let value = BigDecimal::new(BigInt::from(amount.clone()), decimals as i64);
    let rounded = value.with_scale_round(fraction_digits as i64, RoundingMode::HalfUp);
    render_decimal(&rounded, fraction_digits as i64, false)
}

/// Configured commission label
///
/// | policy | label |
/// |---|---|
/// | flat rate 250 bps | `"2.50 %"` |
/// | gas tax 1000 | `"1000 Gas"` |
/// | none | `""` |
pub fn commission_label(commission: &Commission) -> String {
    commission.display().0
}

/// Help text explaining the configured commission
pub fn commission_tooltip(commission: &Commission) -> Option<&'static str> {
    commission.display().1
}

/// Basis points as a percentage with two decimals
pub fn flat_rate_label(bps: u64) -> String {
    format!("{}.{:02} %", bps / 100, bps % 100)
}

pub fn gas_tax_label(gas: u64) -> String {
    format!("{} Gas", gas)
}

pub fn accrued_commission_label(commission_percentage: Option<f64>) -> String {
    match commission_percentage {
        Some(ratio) => format_percent(ratio),
        None => ABSENT_LABEL.to_string(),
    }
}

/// Period figure followed by its annualized figure, `"1% (68.01%)"`
pub fn performance_label(period_return: Option<f64>, annualized: Option<f64>) -> String {
    match (period_return, annualized) {
        (Some(period), Some(apr)) => format!("{} ({})", format_percent(period), format_percent(apr)),
        (Some(period), None) => format_percent(period),
        (None, _) => ABSENT_LABEL.to_string(),
    }
}

/// Render a decimal already rounded to `scale` fraction digits
fn render_decimal(value: &BigDecimal, scale: i64, trim_zeros: bool) -> String {
    let (digits, _) = value.with_scale(scale).into_bigint_and_exponent();
    let scale = scale.max(0) as usize;

    let mut magnitude = digits.magnitude().to_string();
    if magnitude.len() <= scale {
        magnitude = format!("{}{}", "0".repeat(scale + 1 - magnitude.len()), magnitude);
    }
    let (int_part, frac_part) = magnitude.split_at(magnitude.len() - scale);

    let frac_part = if trim_zeros { frac_part.trim_end_matches('0') } else { frac_part };

    let mut out = String::new();
    // Zero has no sign, so "-0" cannot appear
    if digits.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pools::constants::{ FLAT_RATE_COMMISSION_TOOLTIP, GAS_TAX_COMMISSION_TOOLTIP };

    #[test]
    fn test_format_percent_trims_trailing_zeros() {
        assert_eq!(format_percent(0.0123), "1.23%");
        assert_eq!(format_percent(0.015), "1.5%");
        assert_eq!(format_percent(0.05), "5%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn test_format_percent_rounds_half_away_from_zero() {
        assert_eq!(format_percent(0.00125), "0.13%");
        assert_eq!(format_percent(-0.00125), "-0.13%");
        assert_eq!(format_percent(0.00124), "0.12%");
        assert_eq!(format_percent(0.123456), "12.35%");
    }

    #[test]
    fn test_format_percent_never_negative_zero() {
        assert_eq!(format_percent(-0.00001), "0%");
        assert_eq!(format_percent(-0.0), "0%");
    }

    #[test]
    fn test_format_percent_groups_thousands() {
        assert_eq!(format_percent(12.345), "1,234.5%");
        assert_eq!(format_percent(-123456.0), "-12,345,600%");
    }

    #[test]
    fn test_format_percent_non_finite() {
        assert_eq!(format_percent(f64::INFINITY), "∞%");
        assert_eq!(format_percent(f64::NAN), "NaN%");
    }

    #[test]
    fn test_one_percent_week_annualized_label() {
        let apr = crate::pools::calculator::annualize(0.01, 7).unwrap();
        assert_eq!(format_percent(apr), "68.01%");
        assert_eq!(performance_label(Some(0.01), Some(apr)), "1% (68.01%)");
    }

    #[test]
    fn test_format_token_amount() {
        let one_and_half = BigUint::from(1_500_000_000_000_000_000u128);
        assert_eq!(format_token_amount(&one_and_half, 18, 2), "1.50");

        let big = BigUint::from_str("1234567890000000000000000").unwrap();
        assert_eq!(format_token_amount(&big, 18, 2), "1,234,567.89");

        let dust = BigUint::from(4_999_999_999_999_999u64);
        assert_eq!(format_token_amount(&dust, 18, 2), "0.00");
        let half_cent = BigUint::from(5_000_000_000_000_000u64);
        assert_eq!(format_token_amount(&half_cent, 18, 2), "0.01");

        assert_eq!(format_token_amount(&BigUint::default(), 18, 2), "0.00");
    }

    #[test]
    fn test_commission_label_decision_table() {
        assert_eq!(commission_label(&Commission::FlatRate(250)), "2.50 %");
        assert_eq!(commission_label(&Commission::FlatRate(5)), "0.05 %");
        assert_eq!(commission_label(&Commission::FlatRate(10000)), "100.00 %");
        assert_eq!(commission_label(&Commission::GasTax(1000)), "1000 Gas");
        assert_eq!(commission_label(&Commission::None), "");
    }

    #[test]
    fn test_tooltip_follows_label_branch() {
        for commission in [Commission::FlatRate(250), Commission::GasTax(1000), Commission::None] {
            let (label, tooltip) = commission.display();
            assert_eq!(label.is_empty(), tooltip.is_none());
        }
        assert_eq!(
            commission_tooltip(&Commission::FlatRate(1)),
            Some(FLAT_RATE_COMMISSION_TOOLTIP)
        );
        assert_eq!(commission_tooltip(&Commission::GasTax(1)), Some(GAS_TAX_COMMISSION_TOOLTIP));
    }

    #[test]
    fn test_accrued_commission_label() {
        assert_eq!(accrued_commission_label(None), "-");
        assert_eq!(accrued_commission_label(Some(0.1)), "10%");
        assert_eq!(accrued_commission_label(Some(0.07777)), "7.78%");
    }

    #[test]
    fn test_performance_label_absent() {
        assert_eq!(performance_label(None, None), "-");
        assert_eq!(performance_label(Some(-0.02), None), "-2%");
    }
}
