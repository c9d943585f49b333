//! Annuity-factor arithmetic and rate conversions

mod factors;
mod rates;

pub use factors::{
    amortization_payment, discount_factor, future_value_of_annuity, payment_from_future_value,
    present_value_of_annuity, AnnuityQuery, RATE_EPSILON,
};
pub use rates::{
    annualized_pct, checked_real_rate, period_rate, real_rate, PERIODS_PER_YEAR,
};
