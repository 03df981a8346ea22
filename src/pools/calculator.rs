/// Performance annualization
///
/// Turns a realized return over a short window into the equivalent rate
/// compounded over a year.
use crate::errors::{ PoolScopeError, Result };
use crate::pools::constants::DAYS_PER_YEAR;

/// Annualize a period return over a 365-day year
///
/// `(1 + period_return)^(365 / period_days) - 1`
pub fn annualize(period_return: f64, period_days: u32) -> Result<f64> {
    annualize_over(period_return, period_days, DAYS_PER_YEAR)
}

/// Annualize a period return over a year of `year_days` days
///
/// A total loss (`-1`) stays a total loss. Losses beyond 100%, non-finite
/// returns and empty periods are rejected.
pub fn annualize_over(period_return: f64, period_days: u32, year_days: u32) -> Result<f64> {
    if !period_return.is_finite() {
        return Err(PoolScopeError::invalid_input(format!("period return {} is not finite", period_return)));
    }
    if period_days == 0 {
        return Err(PoolScopeError::invalid_input("period must span at least one day"));
    }
    if period_return < -1.0 {
        return Err(
            PoolScopeError::invalid_input(format!("period return {} loses more than 100%", period_return))
        );
    }
    if period_return == -1.0 {
        return Ok(-1.0);
    }

    // Base is strictly positive here, so the fractional power is well defined
    let growth = 1.0 + period_return;
    let periods_per_year = (year_days as f64) / (period_days as f64);
    Ok(growth.powf(periods_per_year) - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_return_stays_zero() {
        for days in [1, 7, 30, 365, 1000] {
            assert_eq!(annualize(0.0, days).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_total_loss_is_fixed_point() {
        for days in [1, 7, 30, 365] {
            assert_eq!(annualize(-1.0, days).unwrap(), -1.0);
        }
    }

    #[test]
    fn test_one_percent_week() {
        let apr = annualize(0.01, 7).unwrap();
        let expected = (1.01f64).powf(365.0 / 7.0) - 1.0;
        assert!((apr - expected).abs() < 1e-12);
        assert!((apr - 0.6801).abs() < 1e-4);
    }

    #[test]
    fn test_negative_returns_do_not_fail() {
        let apr = annualize(-0.01, 30).unwrap();
        assert!(apr < 0.0 && apr > -1.0);
        let apr = annualize(-0.999, 7).unwrap();
        assert!(apr > -1.0 - 1e-12 && apr <= 0.0);
    }

    #[test]
    fn test_monotonic_in_period_return() {
        let samples: Vec<f64> = (0..400).map(|i| -0.99 + (i as f64) * 0.01).collect();
        for days in [7, 30] {
            let values: Vec<f64> = samples
                .iter()
                .map(|r| annualize(*r, days).unwrap())
                .collect();
            // Deep losses saturate at -1.0 in f64, so only non-decreasing holds there
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "{:?} decreasing for {} days", pair, days);
            }
            assert!(annualize(-0.5, days).unwrap() < annualize(-0.4, days).unwrap());
            assert!(annualize(0.001, days).unwrap() < annualize(0.002, days).unwrap());
        }
    }

    #[test]
    fn test_period_equal_to_year_is_identity() {
        let apr = annualize_over(0.05, 365, 365).unwrap();
        assert!((apr - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_contract_violations() {
        assert!(annualize(-1.5, 7).is_err());
        assert!(annualize(0.01, 0).is_err());
        assert!(annualize(f64::NAN, 7).is_err());
        assert!(annualize(f64::INFINITY, 7).is_err());
    }
}
