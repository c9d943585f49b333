//! Retirement planner: target present value and required monthly savings

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::annuity::{
    annualized_pct, payment_from_future_value, present_value_of_annuity,
};
use crate::error::{ensure_amount, ensure_periods, ensure_rate, Result};
use super::scenario::Scenario;

/// Retirement goal shared by every scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Desired income paid each month during retirement
    pub monthly_payment: f64,

    /// Number of monthly payouts (240 = 20 years)
    pub payout_periods: u32,

    /// Number of monthly contributions before retirement (480 = 40 years)
    pub savings_periods: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            monthly_payment: 2500.0,
            payout_periods: 240,
            savings_periods: 480,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_amount("monthly_payment", self.monthly_payment)?;
        ensure_periods("payout_periods", self.payout_periods)?;
        ensure_periods("savings_periods", self.savings_periods)?;
        Ok(())
    }
}

/// Planner output for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub label: String,

    // Annualized rates in percent
    pub annual_nominal_pct: f64,
    pub annual_inflation_pct: f64,
    pub annual_real_pct: f64,

    /// Real period rate used for discounting and accumulation
    pub real_rate: f64,

    /// Capital needed at retirement to fund the payouts in real terms
    pub present_value: f64,

    /// Level monthly deposit that grows to `present_value`
    pub monthly_contribution: f64,

    /// Capital needed if inflation is ignored (discounted at the nominal rate)
    pub nominal_present_value: f64,

    /// Sum of all contributions over the savings horizon
    pub total_contributions: f64,
}

/// Evaluates scenarios against a fixed retirement goal
#[derive(Debug, Clone)]
pub struct RetirementPlanner {
    config: PlannerConfig,
}

impl RetirementPlanner {
    /// Create a planner, rejecting an invalid retirement goal
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Evaluate a single scenario
    pub fn evaluate(&self, scenario: &Scenario) -> Result<ScenarioReport> {
        let real_rate = scenario.rates.real_rate()?;

        let present_value = present_value_of_annuity(
            self.config.monthly_payment,
            real_rate,
            self.config.payout_periods,
        );
        let monthly_contribution =
            payment_from_future_value(present_value, real_rate, self.config.savings_periods);
        let nominal_present_value = present_value_of_annuity(
            self.config.monthly_payment,
            scenario.nominal_rate(),
            self.config.payout_periods,
        );

        log::debug!(
            "scenario {}: real rate {:.6}, PV {:.2}, contribution {:.2}",
            scenario.label,
            real_rate,
            present_value,
            monthly_contribution
        );

        Ok(ScenarioReport {
            label: scenario.label.clone(),
            annual_nominal_pct: annualized_pct(scenario.nominal_rate()),
            annual_inflation_pct: annualized_pct(scenario.inflation_rate()),
            annual_real_pct: annualized_pct(real_rate),
            real_rate,
            present_value,
            monthly_contribution,
            nominal_present_value,
            total_contributions: monthly_contribution * self.config.savings_periods as f64,
        })
    }

    /// Evaluate every scenario, preserving input order
    ///
    /// All scenarios are validated first so an invalid entry produces no
    /// partial output.
    pub fn evaluate_all(&self, scenarios: &[Scenario]) -> Result<Vec<ScenarioReport>> {
        for scenario in scenarios {
            ensure_rate("nominal_rate", scenario.nominal_rate())?;
            ensure_rate("inflation_rate", scenario.inflation_rate())?;
        }

        log::info!(
            "Evaluating {} scenarios: payment {:.2}, {} payout periods, {} savings periods",
            scenarios.len(),
            self.config.monthly_payment,
            self.config.payout_periods,
            self.config.savings_periods
        );

        scenarios.par_iter().map(|s| self.evaluate(s)).collect()
    }
}
