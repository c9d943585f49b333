//! Amortization schedule generation for fixed-rate annuity loans

mod state;
mod engine;
mod schedule;

pub use state::{AmortizationState, BALANCE_TOLERANCE};
pub use engine::{generate_schedule, AmortizationEngine, LoanParameters};
pub use schedule::{AmortizationRow, AmortizationSchedule, ScheduleSummary};
