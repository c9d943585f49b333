//! Schedule output structures for amortized loans

use serde::{Deserialize, Serialize};

/// A single row of the schedule for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub period: u32,
    pub total_payment: f64,
    pub interest_portion: f64,
    pub principal_portion: f64,
    pub remaining_balance: f64,
}

/// Complete schedule, one row per period in increasing period order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Level payment applied every period
    pub payment: f64,

    /// Original principal
    pub principal: f64,

    /// Period rows
    pub rows: Vec<AmortizationRow>,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, payment: f64) -> Self {
        Self {
            payment,
            principal,
            rows: Vec::new(),
        }
    }

    /// Append the next period's row
    pub(crate) fn add_row(&mut self, row: AmortizationRow) {
        debug_assert!(self.rows.last().map_or(true, |last| last.period < row.period));
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AmortizationRow> {
        self.rows.iter()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.total_payment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest_portion).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal_portion).sum();
        let final_balance = self.rows.last().map(|r| r.remaining_balance).unwrap_or(self.principal);

        ScheduleSummary {
            periods: self.rows.len() as u32,
            payment: self.payment,
            total_paid,
            total_interest,
            total_principal,
            final_balance,
        }
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a AmortizationRow;
    type IntoIter = std::slice::Iter<'a, AmortizationRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub periods: u32,
    pub payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub final_balance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_schedule() {
        let schedule = AmortizationSchedule::new(500.0, 0.0);
        let summary = schedule.summary();
        assert_eq!(summary.periods, 0);
        assert_eq!(summary.final_balance, 500.0);
        assert!(schedule.is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let mut schedule = AmortizationSchedule::new(200.0, 105.0);
        schedule.add_row(AmortizationRow {
            period: 1,
            total_payment: 105.0,
            interest_portion: 10.0,
            principal_portion: 95.0,
            remaining_balance: 105.0,
        });
        schedule.add_row(AmortizationRow {
            period: 2,
            total_payment: 105.0,
            interest_portion: 5.0,
            principal_portion: 100.0,
            remaining_balance: 0.0,
        });

        let summary = schedule.summary();
        assert_eq!(summary.periods, 2);
        assert_eq!(summary.total_paid, 210.0);
        assert_eq!(summary.total_interest, 15.0);
        assert_eq!(summary.total_principal, 195.0);
        assert_eq!(summary.final_balance, 0.0);
        assert_eq!((&schedule).into_iter().count(), 2);
    }
}
