//! Error taxonomy for planner and schedule calculations

#[derive(Debug, thiserror::Error)]
pub enum PlannerError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

/// Longest horizon accepted for any period count (1000 years of months)
pub const MAX_PERIODS: u32 = 12_000;

/// Reject period counts below one or above [`MAX_PERIODS`]
pub fn ensure_periods(name: &'static str, periods: u32) -> Result<()> {
    if periods == 0 {
        return Err(PlannerError::invalid(name, "must be at least 1 period"));
    }
    if periods > MAX_PERIODS {
        return Err(PlannerError::invalid(
            name,
            format!("must be at most {} periods, got {}", MAX_PERIODS, periods),
        ));
    }
    Ok(())
}

/// Reject rates at or below -100% and non-finite rates
pub fn ensure_rate(name: &'static str, rate: f64) -> Result<()> {
    if !rate.is_finite() {
        return Err(PlannerError::invalid(name, format!("rate must be finite, got {}", rate)));
    }
    if rate <= -1.0 {
        return Err(PlannerError::invalid(name, format!("rate must be above -1, got {}", rate)));
    }
    Ok(())
}

/// Reject negative and non-finite monetary amounts
pub fn ensure_amount(name: &'static str, amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(PlannerError::invalid(name, format!("amount must be finite, got {}", amount)));
    }
    if amount < 0.0 {
        return Err(PlannerError::invalid(name, format!("amount must not be negative, got {}", amount)));
    }
    Ok(())
}
