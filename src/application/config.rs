use crate::domain::loan::{PeriodCount, Tolerance};
use crate::error::{PayoffError, Result};

pub const DEFAULT_EPSILON: f64 = 0.08;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Tuning knobs for [`PayoffSolver`](super::solver::PayoffSolver).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    epsilon: Tolerance,
    periods: PeriodCount,
    max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: Tolerance(DEFAULT_EPSILON),
            periods: PeriodCount::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a validated config.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `epsilon` is not a positive finite number,
    /// if `periods` is outside `1..=MAX_PERIODS`, or if `max_iterations` is zero.
    pub fn new(epsilon: f64, periods: u32, max_iterations: usize) -> Result<Self> {
        let epsilon = Tolerance::new(epsilon)?;
        let periods = PeriodCount::new(periods)?;
        if max_iterations == 0 {
            return Err(PayoffError::ValidationError(
                "Iteration cap must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            epsilon,
            periods,
            max_iterations,
        })
    }

    /// Same config with a different tolerance.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Ok(Self {
            epsilon: Tolerance::new(epsilon)?,
            ..self
        })
    }

    pub fn epsilon(&self) -> Tolerance {
        self.epsilon
    }

    pub fn periods(&self) -> PeriodCount {
        self.periods
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.epsilon().value(), 0.08);
        assert_eq!(config.periods().value(), 12);
        assert_eq!(config.max_iterations(), 100);
        assert_eq!(SolverConfig::new(0.08, 12, 100).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        assert!(matches!(
            SolverConfig::new(0.0, 12, 100),
            Err(PayoffError::ValidationError(_))
        ));
        assert!(SolverConfig::new(0.08, 0, 100).is_err());
        assert!(SolverConfig::new(0.08, u32::MAX, 100).is_err());
        assert!(SolverConfig::new(0.08, 12, 0).is_err());
    }

    #[test]
    fn test_with_epsilon_keeps_other_fields() {
        let config = SolverConfig::new(0.08, 24, 50).unwrap().with_epsilon(0.5).unwrap();
        assert_eq!(config.epsilon().value(), 0.5);
        assert_eq!(config.periods().value(), 24);
        assert_eq!(config.max_iterations(), 50);
        assert!(SolverConfig::default().with_epsilon(-1.0).is_err());
    }
}
