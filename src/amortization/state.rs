//! Running balance state while a schedule is generated

use super::schedule::AmortizationRow;

/// Remaining balances below this are treated as fully repaid
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// State of the loan between periods
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Last completed period (0 before the first payment)
    pub period: u32,

    /// Outstanding balance after the last completed period
    pub balance: f64,
}

impl AmortizationState {
    /// Initialize state at origination
    pub fn new(principal: f64) -> Self {
        Self {
            period: 0,
            balance: principal,
        }
    }

    /// Apply one level payment and return the resulting row
    pub fn advance(&mut self, payment: f64, period_rate: f64) -> AmortizationRow {
        self.period += 1;

        let interest = self.balance * period_rate;
        let principal_paid = payment - interest;
        self.balance -= principal_paid;

        // Absorb floating-point residue so the loan ends at exactly zero
        if self.balance < BALANCE_TOLERANCE {
            self.balance = 0.0;
        }

        AmortizationRow {
            period: self.period,
            total_payment: payment,
            interest_portion: interest,
            principal_portion: principal_paid,
            remaining_balance: self.balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_splits_payment() {
        let mut state = AmortizationState::new(1000.0);
        let row = state.advance(110.0, 0.01);
        assert_eq!(row.period, 1);
        assert_eq!(row.interest_portion, 10.0);
        assert_eq!(row.principal_portion, 100.0);
        assert_eq!(row.remaining_balance, 900.0);
        assert_eq!(state.balance, 900.0);
    }

    #[test]
    fn test_residue_clamped_to_zero() {
        let mut state = AmortizationState::new(100.004);
        let row = state.advance(100.0, 0.0);
        assert_eq!(row.remaining_balance, 0.0);
    }
}
