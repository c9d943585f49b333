//! Real-return retirement planner

mod scenario;
mod engine;

pub use scenario::{RateParameters, Scenario};
pub use engine::{PlannerConfig, RetirementPlanner, ScenarioReport};
