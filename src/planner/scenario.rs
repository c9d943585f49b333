//! Market scenarios for the retirement planner

use serde::{Deserialize, Serialize};

use crate::annuity::{checked_real_rate, period_rate};
use crate::error::Result;

/// Nominal return and inflation for one period (monthly, fractional)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParameters {
    pub nominal_rate: f64,
    pub inflation_rate: f64,
}

impl RateParameters {
    pub fn new(nominal_rate: f64, inflation_rate: f64) -> Self {
        Self {
            nominal_rate,
            inflation_rate,
        }
    }

    /// Build period rates from annual rates
    pub fn from_annual(nominal_annual: f64, inflation_annual: f64) -> Self {
        Self::new(period_rate(nominal_annual), period_rate(inflation_annual))
    }

    /// Inflation-adjusted period rate
    pub fn real_rate(&self) -> Result<f64> {
        checked_real_rate(self.nominal_rate, self.inflation_rate)
    }
}

/// A labeled rate assumption evaluated by the planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub rates: RateParameters,
}

impl Scenario {
    pub fn new(label: impl Into<String>, rates: RateParameters) -> Self {
        Self {
            label: label.into(),
            rates,
        }
    }

    /// Scenario from annual nominal and inflation rates (e.g. 0.03 for 3%)
    pub fn from_annual(label: impl Into<String>, nominal_annual: f64, inflation_annual: f64) -> Self {
        Self::new(label, RateParameters::from_annual(nominal_annual, inflation_annual))
    }

    pub fn nominal_rate(&self) -> f64 {
        self.rates.nominal_rate
    }

    pub fn inflation_rate(&self) -> f64 {
        self.rates.inflation_rate
    }

    /// Reference scenarios: pessimistic, moderate and optimistic markets
    pub fn reference_set() -> Vec<Scenario> {
        vec![
            Scenario::from_annual("Pessimistic", 0.03, 0.045), // 3% return, 4.5% inflation
            Scenario::from_annual("Moderate", 0.04, 0.043),    // 4% return, 4.3% inflation
            Scenario::from_annual("Optimistic", 0.06, 0.025),  // 6% return, 2.5% inflation
        ]
    }
}
