use super::solver::PayoffSolver;
use crate::error::Result;
use crate::interfaces::csv::result_writer::{PaymentRecord, ResultWriter};
use crate::interfaces::csv::scenario_reader::Scenario;
use std::io::Write;
use tracing::{info, warn};

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub solved: usize,
    pub skipped: usize,
}

/// Solves a stream of scenarios, one row at a time.
///
/// A row that cannot be read, fails validation or does not converge is logged
/// and skipped; the rest of the batch still runs. Only output errors abort.
pub struct BatchRunner {
    solver: PayoffSolver,
}

impl BatchRunner {
    pub fn new(solver: PayoffSolver) -> Self {
        Self { solver }
    }

    pub fn run<I, W>(&self, scenarios: I, writer: &mut ResultWriter<W>) -> Result<BatchSummary>
    where
        I: IntoIterator<Item = Result<Scenario>>,
        W: Write,
    {
        let mut summary = BatchSummary::default();

        // Row numbers count the header as row 1, matching what a spreadsheet shows.
        for (row, scenario) in (2..).zip(scenarios) {
            match scenario.and_then(|s| self.solve(&s)) {
                Ok(record) => {
                    writer.write_record(&record)?;
                    summary.solved += 1;
                }
                Err(e) => {
                    warn!("Skipping row {row}: {e}");
                    summary.skipped += 1;
                }
            }
        }

        info!(solved = summary.solved, skipped = summary.skipped, "Batch complete");
        Ok(summary)
    }

    fn solve(&self, scenario: &Scenario) -> Result<PaymentRecord> {
        let config = match scenario.epsilon {
            Some(epsilon) => self.solver.config().with_epsilon(epsilon)?,
            None => *self.solver.config(),
        };
        let solution = PayoffSolver::new(config)
            .find_minimum_payment(scenario.principal, scenario.annual_rate)?;

        Ok(PaymentRecord {
            principal: scenario.principal,
            annual_rate: scenario.annual_rate,
            epsilon: config.epsilon().value(),
            lowest_payment: solution.lowest_payment()?,
            iterations: solution.iterations,
        })
    }
}
