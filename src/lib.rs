//! Annuity Planner - retirement savings targets and loan amortization schedules
//!
//! This library provides:
//! - Annuity-factor arithmetic (present value, sinking fund, capital recovery)
//! - Real-return retirement planning across market scenarios
//! - Fixed-rate loan amortization schedules
//! - JSON/CSV run configuration and report rendering

pub mod error;
pub mod annuity;
pub mod planner;
pub mod amortization;
pub mod config;
pub mod report;

// Re-export commonly used types
pub use error::{PlannerError, Result};
pub use annuity::AnnuityQuery;
pub use planner::{PlannerConfig, RateParameters, RetirementPlanner, Scenario, ScenarioReport};
pub use amortization::{AmortizationRow, AmortizationSchedule, LoanParameters, generate_schedule};
pub use config::RunConfig;
