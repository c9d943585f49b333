//! Rate conversions: Fisher real rate and period/annual scaling

use crate::error::{ensure_rate, Result};

/// Number of compounding periods per year (all periods are months)
pub const PERIODS_PER_YEAR: u32 = 12;

/// Real period rate from nominal and inflation period rates
///
/// `(1 + nominal) / (1 + inflation) - 1`. The caller must keep
/// `inflation` away from -1; use [`checked_real_rate`] when the inputs
/// come from configuration.
pub fn real_rate(nominal: f64, inflation: f64) -> f64 {
    (1.0 + nominal) / (1.0 + inflation) - 1.0
}

/// Real period rate with domain checks on both inputs
pub fn checked_real_rate(nominal: f64, inflation: f64) -> Result<f64> {
    ensure_rate("nominal_rate", nominal)?;
    ensure_rate("inflation_rate", inflation)?;
    Ok(real_rate(nominal, inflation))
}

/// Convert an annual rate to a period rate by simple division
pub fn period_rate(annual_rate: f64) -> f64 {
    annual_rate / PERIODS_PER_YEAR as f64
}

/// Annualized percentage of a period rate (`rate * 12 * 100`)
pub fn annualized_pct(period_rate: f64) -> f64 {
    period_rate * PERIODS_PER_YEAR as f64 * 100.0
}
