//! Annuity-factor arithmetic shared by the planner and the loan schedule
//!
//! All rates are period rates (monthly), all period counts are whole periods.
//! Each formula has a linear branch for rates within [`RATE_EPSILON`] of
//! zero. Above it, `(1+r)^t - 1` is evaluated as `expm1(t * ln1p(r))` so the
//! closed forms stay accurate for rates only a few ulps away from zero.

use crate::error::{ensure_amount, ensure_periods, ensure_rate, Result};

/// Rates with an absolute value below this are treated as exactly zero
pub const RATE_EPSILON: f64 = f64::EPSILON;

fn is_zero_rate(rate: f64) -> bool {
    rate.abs() < RATE_EPSILON
}

/// Present value of an ordinary annuity paying `payment` at the end of each
/// of `periods` periods
pub fn present_value_of_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if is_zero_rate(rate) {
        return payment * periods as f64;
    }
    payment * -discount_minus_one(rate, periods) / rate
}

/// Level deposit that accumulates to `future_value` after `periods` periods
/// (sinking-fund factor)
pub fn payment_from_future_value(future_value: f64, rate: f64, periods: u32) -> f64 {
    if is_zero_rate(rate) {
        return future_value / periods as f64;
    }
    future_value * rate / growth_minus_one(rate, periods)
}

/// Accumulated value of `payment` deposited at the end of each period
pub fn future_value_of_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if is_zero_rate(rate) {
        return payment * periods as f64;
    }
    payment * growth_minus_one(rate, periods) / rate
}

/// Level payment that retires `principal` over `periods` periods
/// (capital recovery factor)
pub fn amortization_payment(principal: f64, rate: f64, periods: u32) -> f64 {
    if is_zero_rate(rate) {
        log::debug!("zero-rate loan, falling back to straight-line payment over {} periods", periods);
        return principal / periods as f64;
    }
    // P*r*(1+r)^n / ((1+r)^n - 1) == P*r / (1 - (1+r)^-n)
    principal * rate / -discount_minus_one(rate, periods)
}

/// `(1 + rate)^-periods`
pub fn discount_factor(rate: f64, periods: u32) -> f64 {
    (-(periods as f64) * rate.ln_1p()).exp()
}

/// `(1 + rate)^periods - 1`
fn growth_minus_one(rate: f64, periods: u32) -> f64 {
    ((periods as f64) * rate.ln_1p()).exp_m1()
}

/// `(1 + rate)^-periods - 1`
fn discount_minus_one(rate: f64, periods: u32) -> f64 {
    (-(periods as f64) * rate.ln_1p()).exp_m1()
}

/// Inputs to one annuity-factor evaluation
///
/// The same shape drives both directions: a periodic payment when solving
/// for a present value, a target amount when solving for a payment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnuityQuery {
    pub payment_or_target: f64,
    pub rate: f64,
    pub periods: u32,
}

impl AnnuityQuery {
    /// Build a query, rejecting out-of-domain inputs
    pub fn new(payment_or_target: f64, rate: f64, periods: u32) -> Result<Self> {
        ensure_amount("payment_or_target", payment_or_target)?;
        ensure_rate("rate", rate)?;
        ensure_periods("periods", periods)?;
        Ok(Self {
            payment_or_target,
            rate,
            periods,
        })
    }

    /// Treat `payment_or_target` as a periodic payment and discount it
    pub fn present_value(&self) -> f64 {
        present_value_of_annuity(self.payment_or_target, self.rate, self.periods)
    }

    /// Treat `payment_or_target` as a future value and solve for the deposit
    pub fn sinking_fund_payment(&self) -> f64 {
        payment_from_future_value(self.payment_or_target, self.rate, self.periods)
    }

    /// Treat `payment_or_target` as a periodic deposit and accumulate it
    pub fn future_value(&self) -> f64 {
        future_value_of_annuity(self.payment_or_target, self.rate, self.periods)
    }

    /// Treat `payment_or_target` as a loan principal and solve for the payment
    pub fn amortization_payment(&self) -> f64 {
        amortization_payment(self.payment_or_target, self.rate, self.periods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::{prop_assert, prop_assume, proptest};

    #[test]
    fn test_pv_annuity() {
        // $100/month for 12 months at 6% annual
        let pv = present_value_of_annuity(100.0, 0.06 / 12.0, 12);

        // Expected: 100 * (1 - 1.005^-12) / 0.005 ≈ 1161.89
        assert_relative_eq!(pv, 1161.89, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_branches() {
        assert_eq!(present_value_of_annuity(2500.0, 0.0, 240), 600_000.0);
        assert_eq!(payment_from_future_value(600_000.0, 0.0, 480), 1250.0);
        assert_eq!(future_value_of_annuity(10.0, 0.0, 7), 70.0);
        assert_eq!(amortization_payment(1200.0, 0.0, 12), 100.0);
    }

    #[test]
    fn test_branches_agree_at_threshold() {
        // Rates a few ulps above the epsilon take the closed form and must
        // land on the linear values
        let linear_pv = present_value_of_annuity(2500.0, 0.0, 240);
        let linear_sf = payment_from_future_value(600_000.0, 0.0, 480);
        for scale in [1.0, 1.5, 2.0] {
            let rate = RATE_EPSILON * scale;
            for r in [rate, -rate] {
                assert_relative_eq!(present_value_of_annuity(2500.0, r, 240), linear_pv, max_relative = 1e-9);
                assert_relative_eq!(payment_from_future_value(600_000.0, r, 480), linear_sf, max_relative = 1e-9);
                assert_relative_eq!(amortization_payment(1200.0, r, 12), 100.0, max_relative = 1e-9);
            }
        }

        let rate = 1e-9;
        let closed = present_value_of_annuity(2500.0, rate, 240);
        assert_relative_eq!(closed, linear_pv, max_relative = 1e-4);
    }

    #[test]
    fn test_near_equal_real_rate_matches_linear() {
        // Nominal and inflation a couple of ulps apart leave a real rate of a few ulps
        let real = crate::annuity::real_rate(3.0 * f64::EPSILON, f64::EPSILON);
        assert!(real >= RATE_EPSILON);
        let pv = present_value_of_annuity(2500.0, real, 240);
        assert_relative_eq!(pv, 600_000.0, max_relative = 1e-9);
        let sf = payment_from_future_value(pv, real, 480);
        assert_relative_eq!(sf, 1250.0, max_relative = 1e-9);
    }

    #[test]
    fn test_period_counts_beyond_i32() {
        let periods = 3_000_000_000;
        assert_relative_eq!(present_value_of_annuity(100.0, 0.01, periods), 10_000.0, max_relative = 1e-9);
        assert_relative_eq!(payment_from_future_value(10_000.0, 0.01, periods), 0.0);
        assert!(discount_factor(0.01, periods) >= 0.0);
    }

    #[test]
    fn test_pv_converges_to_linear_as_rate_shrinks() {
        let linear = 2500.0 * 240.0;
        let mut previous_gap = f64::INFINITY;
        for exp in 2..8 {
            let rate = 10f64.powi(-exp);
            let gap = (present_value_of_annuity(2500.0, rate, 240) - linear).abs();
            assert!(gap < previous_gap, "gap did not shrink at rate {}", rate);
            previous_gap = gap;
        }
    }

    #[test]
    fn test_loan_payment_reference() {
        let payment = amortization_payment(1_000_000.0, 0.04 / 12.0, 240);
        assert_relative_eq!(payment, 6059.80, epsilon = 0.01);
    }

    #[test]
    fn test_negative_rate_sinking_fund() {
        // Deposits must exceed target / t when money shrinks while saved
        let payment = payment_from_future_value(480_000.0, -0.001, 480);
        assert!(payment > 1000.0);
    }

    #[test]
    fn test_query_validation() {
        assert!(AnnuityQuery::new(100.0, 0.01, 0).is_err());
        assert!(AnnuityQuery::new(-100.0, 0.01, 12).is_err());
        assert!(AnnuityQuery::new(100.0, -1.0, 12).is_err());

        let query = AnnuityQuery::new(100.0, 0.005, 12).unwrap();
        assert_relative_eq!(query.present_value(), present_value_of_annuity(100.0, 0.005, 12));
        assert_relative_eq!(query.future_value(), future_value_of_annuity(100.0, 0.005, 12));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_sinking_fund_inverts_future_value(
            payment in 1.0f64..100_000.0,
            rate in -0.02f64..0.05,
            periods in 1u32..600,
        ) {
            prop_assume!(rate.abs() > 1e-6);
            let fv = future_value_of_annuity(payment, rate, periods);
            let back = payment_from_future_value(fv, rate, periods);
            prop_assert!((back - payment).abs() <= payment * 1e-8, "{} vs {}", back, payment);
        }

        #[test]
        fn prop_sinking_fund_of_compounded_pv_is_payment(
            payment in 1.0f64..100_000.0,
            rate in -0.02f64..0.05,
            periods in 1u32..600,
        ) {
            prop_assume!(rate.abs() > 1e-6);
            let pv = present_value_of_annuity(payment, rate, periods);
            let at_horizon = pv / discount_factor(rate, periods);
            let back = payment_from_future_value(at_horizon, rate, periods);
            prop_assert!((back - payment).abs() <= payment * 1e-8, "{} vs {}", back, payment);
        }

        #[test]
        fn prop_capital_recovery_inverts_present_value(
            payment in 1.0f64..100_000.0,
            rate in -0.02f64..0.05,
            periods in 1u32..600,
        ) {
            prop_assume!(rate.abs() > 1e-6);
            let pv = present_value_of_annuity(payment, rate, periods);
            let back = amortization_payment(pv, rate, periods);
            prop_assert!((back - payment).abs() <= payment * 1e-8, "{} vs {}", back, payment);
        }
    }
}
