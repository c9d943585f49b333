//! Run configuration: retirement goal, scenarios, loan terms and display
//!
//! Every field is optional in the JSON file; missing fields fall back to
//! the reference values.

pub mod loader;

pub use loader::{load_config, load_config_from_reader, load_scenarios, load_scenarios_from_reader};

use serde::{Deserialize, Serialize};

use crate::amortization::LoanParameters;
use crate::error::Result;
use crate::planner::{PlannerConfig, Scenario};

/// Top-level run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub retirement: RetirementSection,

    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<ScenarioEntry>,

    #[serde(default)]
    pub loan: LoanSection,

    #[serde(default)]
    pub display: DisplayOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            retirement: RetirementSection::default(),
            scenarios: default_scenarios(),
            loan: LoanSection::default(),
            display: DisplayOptions::default(),
        }
    }
}

impl RunConfig {
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            monthly_payment: self.retirement.monthly_payment,
            payout_periods: self.retirement.payout_periods,
            savings_periods: self.retirement.savings_periods,
        }
    }

    /// Scenarios with annual rates converted to monthly period rates
    pub fn scenarios(&self) -> Vec<Scenario> {
        self.scenarios.iter().map(ScenarioEntry::to_scenario).collect()
    }

    pub fn loan_parameters(&self) -> LoanParameters {
        LoanParameters::from_annual_rate(
            self.loan.principal,
            self.loan.term_periods,
            self.loan.annual_rate,
        )
    }

    /// Check every section before anything is computed
    pub fn validate(&self) -> Result<()> {
        self.planner_config().validate()?;
        for scenario in self.scenarios() {
            scenario.rates.real_rate()?;
        }
        self.loan_parameters().validate()?;
        Ok(())
    }
}

/// Retirement goal as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementSection {
    /// Desired monthly income in retirement (default: 2500)
    #[serde(default = "default_monthly_payment")]
    pub monthly_payment: f64,

    /// Months of payouts (default: 240)
    #[serde(default = "default_payout_periods")]
    pub payout_periods: u32,

    /// Months of saving before retirement (default: 480)
    #[serde(default = "default_savings_periods")]
    pub savings_periods: u32,
}

impl Default for RetirementSection {
    fn default() -> Self {
        Self {
            monthly_payment: default_monthly_payment(),
            payout_periods: default_payout_periods(),
            savings_periods: default_savings_periods(),
        }
    }
}

/// One scenario with annual rates (e.g. 0.03 for 3%)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    pub label: String,
    pub nominal_annual_rate: f64,
    pub inflation_annual_rate: f64,
}

impl ScenarioEntry {
    pub fn to_scenario(&self) -> Scenario {
        Scenario::from_annual(
            self.label.clone(),
            self.nominal_annual_rate,
            self.inflation_annual_rate,
        )
    }
}

/// Loan terms as written in the config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSection {
    /// Amount borrowed (default: 1,000,000)
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Number of monthly payments (default: 240)
    #[serde(default = "default_term_periods")]
    pub term_periods: u32,

    /// Annual nominal rate (default: 4%)
    #[serde(default = "default_annual_rate")]
    pub annual_rate: f64,
}

impl Default for LoanSection {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            term_periods: default_term_periods(),
            annual_rate: default_annual_rate(),
        }
    }
}

/// Decimal places used when rendering reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default = "default_rate_precision")]
    pub rate_precision: usize,

    #[serde(default = "default_amount_precision")]
    pub amount_precision: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            rate_precision: default_rate_precision(),
            amount_precision: default_amount_precision(),
        }
    }
}

fn default_monthly_payment() -> f64 { 2500.0 }
fn default_payout_periods() -> u32 { 240 }
fn default_savings_periods() -> u32 { 480 }
fn default_principal() -> f64 { 1_000_000.0 }
fn default_term_periods() -> u32 { 240 }
fn default_annual_rate() -> f64 { 0.04 }
fn default_rate_precision() -> usize { 3 }
fn default_amount_precision() -> usize { 2 }

fn default_scenarios() -> Vec<ScenarioEntry> {
    [
        ("Pessimistic", 0.03, 0.045),
        ("Moderate", 0.04, 0.043),
        ("Optimistic", 0.06, 0.025),
    ]
    .into_iter()
    .map(|(label, nominal, inflation)| ScenarioEntry {
        label: label.to_string(),
        nominal_annual_rate: nominal,
        inflation_annual_rate: inflation,
    })
    .collect()
}
