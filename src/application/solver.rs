use super::config::SolverConfig;
use crate::domain::loan::{AnnualRate, Money, Principal};
use crate::domain::schedule::simulate_periods;
use crate::error::{PayoffError, Result};
use serde::Serialize;
use tracing::{debug, info, trace};

/// A converged payoff search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Solution {
    /// Converged payment at full precision.
    pub payment: f64,
    /// Balance left after the last period when paying `payment`.
    pub residual: f64,
    /// Number of midpoints evaluated.
    pub iterations: usize,
}

impl Solution {
    /// The payment rounded to cents for display.
    pub fn lowest_payment(&self) -> Result<Money> {
        Money::from_f64(self.payment)
    }
}

/// Finds the smallest fixed payment that clears a balance.
///
/// The search brackets the payment between `0` (never pays anything off) and
/// the principal itself (clears everything in the first period) and halves the
/// bracket until the residual balance falls within `epsilon`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayoffSolver {
    config: SolverConfig,
}

impl PayoffSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Validates raw inputs and runs the search with this solver's config.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a non-positive principal or a rate outside
    /// `[0, 1)`, and `NotConverged` when the iteration cap is reached.
    pub fn find_minimum_payment(&self, principal: f64, annual_rate: f64) -> Result<Solution> {
        let principal = Principal::new(principal)?;
        let rate = AnnualRate::new(annual_rate)?;
        self.solve(principal, rate)
    }

    /// Runs the bisection search over already validated inputs.
    pub fn solve(&self, principal: Principal, rate: AnnualRate) -> Result<Solution> {
        let epsilon = self.config.epsilon().value();
        let periods = self.config.periods().value();
        let mut lower = 0.0;
        let mut upper = principal.value();
        let mut candidate = 0.0;
        let mut residual = f64::NAN;

        debug!(
            principal = principal.value(),
            annual_rate = rate.value(),
            epsilon,
            periods,
            "Starting payoff search"
        );

        for iteration in 1..=self.config.max_iterations() {
            candidate = (lower + upper) / 2.0;
            residual = simulate_periods(principal, rate, candidate, periods);
            trace!(iteration, lower, upper, candidate, residual, "Bisection step");

            if residual.abs() < epsilon {
                info!(payment = candidate, iterations = iteration, "Payoff search converged");
                return Ok(Solution {
                    payment: candidate,
                    residual,
                    iterations: iteration,
                });
            }

            if residual > 0.0 {
                lower = candidate;
            } else {
                upper = candidate;
            }
        }

        Err(PayoffError::NotConverged {
            iterations: self.config.max_iterations(),
            candidate,
            residual,
        })
    }
}

/// One-shot search over a year with the default iteration cap.
pub fn find_minimum_payment(principal: f64, annual_rate: f64, epsilon: f64) -> Result<Solution> {
    let config = SolverConfig::default().with_epsilon(epsilon)?;
    PayoffSolver::new(config).find_minimum_payment(principal, annual_rate)
}
