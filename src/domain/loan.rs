use crate::error::{PayoffError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

/// Number of compounding periods in a year; the periodic rate is the annual rate over this.
pub const PERIODS_PER_YEAR: u32 = 12;

/// Longest horizon accepted, one hundred years of monthly payments.
pub const MAX_PERIODS: u32 = 1200;

/// How many monthly payments a schedule runs for, in `1..=MAX_PERIODS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodCount(pub(crate) u32);

impl PeriodCount {
    pub fn new(value: u32) -> Result<Self> {
        if (1..=MAX_PERIODS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PayoffError::ValidationError(format!(
                "Period count must be between 1 and {MAX_PERIODS}, got {value}"
            )))
        }
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for PeriodCount {
    fn default() -> Self {
        Self(PERIODS_PER_YEAR)
    }
}

/// The initial balance owed. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Principal(f64);

impl Principal {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(PayoffError::ValidationError(format!(
                "Principal must be a positive number, got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Nominal annual interest rate in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnnualRate(f64);

impl AnnualRate {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PayoffError::ValidationError(format!(
                "Annual interest rate must be in [0, 1), got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Rate applied once per compounding period.
    pub fn periodic(&self) -> f64 {
        self.0 / f64::from(PERIODS_PER_YEAR)
    }
}

/// Convergence threshold on the absolute residual balance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Tolerance(pub(crate) f64);

impl Tolerance {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(PayoffError::ValidationError(format!(
                "Epsilon must be a positive number, got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Fraction of the outstanding balance paid each month, in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PaymentRate(f64);

impl PaymentRate {
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(PayoffError::ValidationError(format!(
                "Monthly payment rate must be in (0, 1], got {value}"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// A monetary value rounded to cents for display.
///
/// Rounding is half away from zero and the scale is always two decimal places,
/// so `100` renders as `100.00`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Money(Decimal);

impl Money {
    pub fn from_f64(value: f64) -> Result<Self> {
        let mut amount = Decimal::from_f64_retain(value)
            .ok_or_else(|| {
                PayoffError::ValidationError(format!("{value} cannot be represented as money"))
            })?
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(2);
        Ok(Self(amount))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
