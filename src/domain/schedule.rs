use super::loan::{AnnualRate, Money, PERIODS_PER_YEAR, PaymentRate, PeriodCount, Principal};
use crate::error::Result;
use serde::Serialize;

/// Applies one compounding period.
///
/// The payment comes off first and interest accrues on what is left:
/// `unpaid = balance - payment`, then `unpaid * (1 + periodic rate)`.
pub fn step(balance: f64, payment: f64, rate: AnnualRate) -> f64 {
    let unpaid = balance - payment;
    unpaid + rate.periodic() * unpaid
}

/// Balance left after paying `payment` every period for `periods` periods.
///
/// Negative when the payment overshoots. Non-increasing in `payment`, which is
/// what makes bisection over the payment valid.
pub fn simulate_periods(principal: Principal, rate: AnnualRate, payment: f64, periods: u32) -> f64 {
    (0..periods).fold(principal.value(), |balance, _| step(balance, payment, rate))
}

/// Balance left after a year of fixed monthly payments.
pub fn simulate_year(principal: Principal, rate: AnnualRate, monthly_payment: f64) -> f64 {
    simulate_periods(principal, rate, monthly_payment, PERIODS_PER_YEAR)
}

/// One line of a minimum-payment statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyStatement {
    pub month: u32,
    pub minimum_payment: Money,
    pub remaining_balance: Money,
}

/// What happens to a balance when only a fixed fraction of it is paid each month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub months: Vec<MonthlyStatement>,
    pub total_paid: Money,
    pub remaining_balance: Money,
}

impl Statement {
    /// Builds the statement for `periods` months.
    ///
    /// Each month the minimum payment is `payment_rate` of the balance at the
    /// start of that month. Running totals stay at full precision; only the
    /// reported values are rounded.
    pub fn build(
        balance: Principal,
        rate: AnnualRate,
        payment_rate: PaymentRate,
        periods: PeriodCount,
    ) -> Result<Self> {
        let mut current = balance.value();
        let mut total_paid = 0.0;
        let mut months = Vec::new();

        for month in 1..=periods.value() {
            let payment = current * payment_rate.value();
            total_paid += payment;
            current = step(current, payment, rate);
            months.push(MonthlyStatement {
                month,
                minimum_payment: Money::from_f64(payment)?,
                remaining_balance: Money::from_f64(current)?,
            });
        }

        Ok(Self {
            months,
            total_paid: Money::from_f64(total_paid)?,
            remaining_balance: Money::from_f64(current)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn principal(value: f64) -> Principal {
        Principal::new(value).unwrap()
    }

    fn rate(value: f64) -> AnnualRate {
        AnnualRate::new(value).unwrap()
    }

    #[test]
    fn test_step_applies_payment_before_interest() {
        // 5000 - 100 = 4900 unpaid, 4900 * 0.18 / 12 = 73.50 interest
        let balance = step(5000.0, 100.0, rate(0.18));
        assert!((balance - 4973.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_rate_is_plain_subtraction() {
        let balance = simulate_year(principal(1200.0), rate(0.0), 100.0);
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn test_zero_payment_compounds() {
        let balance = simulate_year(principal(1000.0), rate(0.12), 0.0);
        let expected = 1000.0 * 1.01_f64.powi(12);
        assert!((balance - expected).abs() < 1e-9);
    }

    #[test]
    fn test_overpayment_goes_negative() {
        let balance = simulate_year(principal(320000.0), rate(0.2), 320000.0);
        assert!(balance < 0.0);
    }

    #[test]
    fn test_simulate_periods_matches_year() {
        let p = principal(4773.0);
        let r = rate(0.2);
        assert_eq!(simulate_periods(p, r, 400.0, 12), simulate_year(p, r, 400.0));
        assert_eq!(simulate_periods(p, r, 400.0, 0), 4773.0);
    }

    #[test]
    fn test_statement_reference_values() {
        let statement = Statement::build(
            principal(4213.0),
            rate(0.2),
            PaymentRate::new(0.04).unwrap(),
            PeriodCount::default(),
        )
        .unwrap();

        assert_eq!(statement.months.len(), 12);
        assert_eq!(statement.months[0].month, 1);
        assert_eq!(statement.months[0].minimum_payment.value(), dec!(168.52));
        assert_eq!(statement.months[0].remaining_balance.value(), dec!(4111.89));
        assert_eq!(statement.months[11].minimum_payment.value(), dec!(129.00));
        assert_eq!(statement.total_paid.value(), dec!(1775.55));
        assert_eq!(statement.remaining_balance.value(), dec!(3147.67));
    }

    #[test]
    fn test_statement_full_payment_clears_balance() {
        let statement = Statement::build(
            principal(500.0),
            rate(0.2),
            PaymentRate::new(1.0).unwrap(),
            PeriodCount::new(3).unwrap(),
        )
        .unwrap();

        assert_eq!(statement.total_paid.value(), dec!(500.00));
        assert_eq!(statement.remaining_balance.value(), dec!(0.00));
    }
}
