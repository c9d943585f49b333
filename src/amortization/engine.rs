//! Fixed-rate loan amortization engine

use serde::{Deserialize, Serialize};

use crate::annuity::{amortization_payment, period_rate};
use crate::error::{ensure_amount, ensure_periods, ensure_rate, Result};
use super::schedule::AmortizationSchedule;
use super::state::AmortizationState;

/// Loan terms for schedule generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Number of monthly payments
    pub term_periods: u32,

    /// Interest rate per period (monthly, fractional)
    pub period_rate: f64,
}

impl LoanParameters {
    pub fn new(principal: f64, term_periods: u32, period_rate: f64) -> Self {
        Self {
            principal,
            term_periods,
            period_rate,
        }
    }

    /// Loan terms from an annual nominal rate (e.g. 0.04 for 4%)
    pub fn from_annual_rate(principal: f64, term_periods: u32, annual_rate: f64) -> Self {
        Self::new(principal, term_periods, period_rate(annual_rate))
    }

    pub fn validate(&self) -> Result<()> {
        ensure_amount("principal", self.principal)?;
        ensure_periods("term_periods", self.term_periods)?;
        ensure_rate("period_rate", self.period_rate)?;
        Ok(())
    }

    /// Level payment for these terms
    pub fn payment(&self) -> Result<f64> {
        self.validate()?;
        Ok(amortization_payment(self.principal, self.period_rate, self.term_periods))
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        // 1,000,000 over 20 years at 4% annual
        Self::from_annual_rate(1_000_000.0, 240, 0.04)
    }
}

/// Generates amortization schedules
pub struct AmortizationEngine {
    loan: LoanParameters,
}

impl AmortizationEngine {
    /// Create an engine, rejecting malformed loan terms
    pub fn new(loan: LoanParameters) -> Result<Self> {
        loan.validate()?;
        Ok(Self { loan })
    }

    pub fn loan(&self) -> &LoanParameters {
        &self.loan
    }

    /// Run the balance recurrence for every period of the term
    pub fn generate(&self) -> AmortizationSchedule {
        let payment = amortization_payment(
            self.loan.principal,
            self.loan.period_rate,
            self.loan.term_periods,
        );
        let mut schedule = AmortizationSchedule::new(self.loan.principal, payment);
        let mut state = AmortizationState::new(self.loan.principal);

        for _period in 1..=self.loan.term_periods {
            let row = state.advance(payment, self.loan.period_rate);
            schedule.add_row(row);
        }

        log::debug!(
            "generated {} periods, payment {:.2}, final balance {:.6}",
            schedule.len(),
            payment,
            state.balance
        );

        schedule
    }
}

/// Validate `loan` and generate its full schedule
pub fn generate_schedule(loan: &LoanParameters) -> Result<AmortizationSchedule> {
    Ok(AmortizationEngine::new(*loan)?.generate())
}
